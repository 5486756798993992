//! Engine Builder
//!
//! Fluent construction of an [`EngineConfig`], validated on `build`.
//!
//! # Example
//!
//! ```ignore
//! use timetravel_core::config::{EngineBuilder, ImpactMode};
//! use timetravel_core::model::{Balances, HousingSchedule, HousingVariant};
//!
//! let config = EngineBuilder::new()
//!     .start_year(2024)
//!     .horizon(10)
//!     .impact_mode(ImpactMode::Percentage)
//!     .initial_position(Balances::new(100_000.0, 50_000.0, 50_000.0, 3_000.0))
//!     .housing_variant(HousingVariant::KeepRent)
//!     .housing_schedule(HousingSchedule::fixed_rate_mortgage(2024, 10, 450_000.0, 5.2, 25, 3.0))
//!     .build()?;
//! ```

use super::{EngineConfig, ImpactMode, InitialPosition, ScenarioCatalog};
use crate::error::ConfigError;
use crate::model::{Balances, Category, HousingSchedule, HousingVariant, ScenarioOption};

/// Builder for [`EngineConfig`], starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn start_year(mut self, year: i32) -> Self {
        self.config.start_year = year;
        self
    }

    /// Number of simulated years
    #[must_use]
    pub fn horizon(mut self, years: u32) -> Self {
        self.config.horizon_years = years;
        self
    }

    #[must_use]
    pub fn impact_mode(mut self, mode: ImpactMode) -> Self {
        self.config.impact_mode = mode;
        self
    }

    /// Replace the required categories
    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.config.categories = categories.into_iter().collect();
        self
    }

    /// Drop the random event step from every year
    #[must_use]
    pub fn without_random_events(mut self) -> Self {
        self.config.categories.retain(|c| *c != Category::Random);
        self
    }

    #[must_use]
    pub fn random_event_sample(mut self, k: usize) -> Self {
        self.config.random_event_sample = k;
        self
    }

    /// Start from fixed balances
    #[must_use]
    pub fn initial_position(mut self, balances: Balances) -> Self {
        self.config.initial_position = InitialPosition::Fixed(balances);
        self
    }

    /// Start from balances drawn around `base`
    #[must_use]
    pub fn randomized_start(mut self, base: Balances, variance: Balances) -> Self {
        self.config.initial_position = InitialPosition::Randomized { base, variance };
        self
    }

    #[must_use]
    pub fn housing_variant(mut self, variant: HousingVariant) -> Self {
        self.config.housing.variant = variant;
        self
    }

    #[must_use]
    pub fn housing_schedule(mut self, schedule: HousingSchedule) -> Self {
        self.config.housing.schedule = Some(schedule);
        self
    }

    /// Replace the whole catalog
    #[must_use]
    pub fn catalog(mut self, catalog: ScenarioCatalog) -> Self {
        self.config.catalog = catalog;
        self
    }

    /// Start from an empty catalog, to be filled with [`option`](Self::option)
    #[must_use]
    pub fn empty_catalog(mut self) -> Self {
        self.config.catalog = ScenarioCatalog::new();
        self
    }

    /// Add an option, filed under the category its id classifies into
    #[must_use]
    pub fn option(mut self, option: ScenarioOption) -> Self {
        self.config.catalog.add(option);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
