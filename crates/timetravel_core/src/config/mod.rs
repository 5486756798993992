//! Engine configuration
//!
//! `EngineConfig` is fixed at construction and contains everything needed to
//! run a simulation: the horizon, which categories each year asks for, how
//! impacts are applied, the housing schedule and the scenario catalog.
//!
//! # Builder DSL
//!
//! ```ignore
//! use timetravel_core::config::{EngineBuilder, ImpactMode};
//!
//! let config = EngineBuilder::new()
//!     .start_year(2024)
//!     .horizon(10)
//!     .impact_mode(ImpactMode::Absolute)
//!     .without_random_events()
//!     .build()?;
//! ```

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Balances, Category, HousingSchedule, HousingVariant};

pub mod builder;
pub mod catalog;

pub use builder::EngineBuilder;
pub use catalog::ScenarioCatalog;

fn default_start_year() -> i32 {
    2024
}

fn default_horizon_years() -> u32 {
    10
}

fn default_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_random_event_sample() -> usize {
    2
}

fn default_catalog() -> ScenarioCatalog {
    ScenarioCatalog::classic()
}

/// How scenario impacts are applied to the running position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactMode {
    /// Each impact value is a percent of the current field
    #[default]
    Percentage,
    /// Each impact value is added to the field directly
    Absolute,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HousingConfig {
    #[serde(default)]
    pub variant: HousingVariant,
    /// Without a schedule, housing options only apply their impact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<HousingSchedule>,
}

/// Starting finances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InitialPosition {
    Fixed(Balances),
    /// Each field is drawn uniformly as `base + floor(u * 2 * variance) - variance`
    Randomized { base: Balances, variance: Balances },
}

impl Default for InitialPosition {
    fn default() -> Self {
        InitialPosition::Randomized {
            base: Balances::new(100_000.0, 50_000.0, 50_000.0, 3_000.0),
            variance: Balances::new(20_000.0, 10_000.0, 10_000.0, 500.0),
        }
    }
}

impl InitialPosition {
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Balances {
        match self {
            InitialPosition::Fixed(balances) => *balances,
            InitialPosition::Randomized { base, variance } => {
                let mut draw = |base: f64, variance: f64| {
                    base + (rng.random::<f64>() * variance * 2.0).floor() - variance
                };
                Balances {
                    net_worth: draw(base.net_worth, variance.net_worth),
                    savings: draw(base.savings, variance.savings),
                    investments: draw(base.investments, variance.investments),
                    expenses: draw(base.expenses, variance.expenses),
                }
            }
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            InitialPosition::Fixed(balances) => balances.is_finite(),
            InitialPosition::Randomized { base, variance } => {
                base.is_finite() && variance.is_finite()
            }
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Number of simulated years
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Categories required every year, in canonical order
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// How many random events are offered each year
    #[serde(default = "default_random_event_sample")]
    pub random_event_sample: usize,

    #[serde(default)]
    pub impact_mode: ImpactMode,

    #[serde(default)]
    pub housing: HousingConfig,

    #[serde(default)]
    pub initial_position: InitialPosition,

    #[serde(default = "default_catalog")]
    pub catalog: ScenarioCatalog,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            horizon_years: default_horizon_years(),
            categories: default_categories(),
            random_event_sample: default_random_event_sample(),
            impact_mode: ImpactMode::default(),
            housing: HousingConfig::default(),
            initial_position: InitialPosition::default(),
            catalog: default_catalog(),
        }
    }
}

impl EngineConfig {
    /// Final year boundary: the simulation completes when the current year
    /// reaches this value
    pub fn end_year(&self) -> Result<i32, ConfigError> {
        i32::try_from(self.horizon_years)
            .ok()
            .and_then(|horizon| self.start_year.checked_add(horizon))
            .ok_or(ConfigError::YearOutOfRange {
                start_year: self.start_year,
                horizon_years: self.horizon_years,
            })
    }

    pub fn requires(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn categories_per_year(&self) -> usize {
        self.categories.len()
    }

    /// Check the configuration before any simulation starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_years == 0 {
            return Err(ConfigError::NonPositiveHorizon);
        }
        self.end_year()?;
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let mut seen = HashSet::new();
        for &category in &self.categories {
            if !seen.insert(category) {
                return Err(ConfigError::DuplicateCategory(category));
            }
        }
        for pair in self.categories.windows(2) {
            if pair[1].index() < pair[0].index() {
                return Err(ConfigError::CategoryOrder {
                    before: pair[0],
                    after: pair[1],
                });
            }
        }

        for &category in &self.categories {
            if self.catalog.options(category).is_empty() {
                return Err(ConfigError::EmptyCatalog(category));
            }
        }

        let mut ids = HashSet::new();
        for (category, option) in self.catalog.iter() {
            let classified_as = option.category();
            if classified_as != category {
                return Err(ConfigError::MisclassifiedOption {
                    option_id: option.id.clone(),
                    listed_under: category,
                    classified_as,
                });
            }
            if !ids.insert(option.id.as_str()) {
                return Err(ConfigError::DuplicateOptionId(option.id.clone()));
            }
            let variability_finite = option.variability.is_none_or(|v| v.is_finite());
            if !option.impact.is_finite() || !variability_finite {
                return Err(ConfigError::NonFiniteValue("catalog"));
            }
        }

        if self.requires(Category::Random) && self.random_event_sample == 0 {
            return Err(ConfigError::ZeroRandomSample);
        }
        if !self.initial_position.is_finite() {
            return Err(ConfigError::NonFiniteValue("initial_position"));
        }
        if let Some(schedule) = &self.housing.schedule
            && !schedule.is_finite()
        {
            return Err(ConfigError::NonFiniteValue("housing.schedule"));
        }

        Ok(())
    }
}
