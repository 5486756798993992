//! Year-by-year projection engine
//!
//! The engine walks a fixed number of simulated years. Each year requires one
//! decision per configured category, submitted in canonical order. Every
//! accepted decision updates the running position and appends to the
//! history; the last category of a year advances the calendar. Once the
//! horizon is reached the engine is complete and a [`Report`] is available.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::apply::{apply_deltas, apply_housing, impact_deltas};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineWarning, Result};
use crate::model::{
    Category, CategorySet, Decision, FinancialPosition, HousingLabel, Report, ScenarioOption,
    YearSnapshot,
};
use crate::projection_state::ProjectionState;

/// Drives one simulation. Not shared between sessions.
#[derive(Debug)]
pub struct ProjectionEngine<R = SmallRng> {
    config: EngineConfig,
    /// Option id -> category it is filed under
    catalog_index: FxHashMap<String, Category>,
    rng: R,
    /// Year at which the projection completes
    end_year: i32,
    state: ProjectionState,
}

impl ProjectionEngine<SmallRng> {
    /// Create an engine whose randomness is seeded from `seed`
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProjectionEngine<R> {
    /// Create an engine with an explicit random source.
    ///
    /// The configuration is validated and the initial position drawn here.
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let end_year = config.end_year()?;

        let balances = config.initial_position.resolve(&mut rng);
        let initial = FinancialPosition::new(config.start_year, balances);
        let catalog_index = config.catalog.category_index();

        tracing::debug!(
            start_year = config.start_year,
            horizon = config.horizon_years,
            net_worth = initial.net_worth,
            "projection started"
        );

        Ok(Self {
            catalog_index,
            rng,
            end_year,
            state: ProjectionState::new(initial),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current position snapshot
    pub fn position(&self) -> FinancialPosition {
        self.state.position
    }

    pub fn initial_position(&self) -> FinancialPosition {
        self.state.initial
    }

    pub fn year(&self) -> i32 {
        self.state.position.year
    }

    pub fn history(&self) -> &[Decision] {
        &self.state.history
    }

    pub fn warnings(&self) -> &[EngineWarning] {
        &self.state.warnings
    }

    /// End-of-year positions recorded so far
    pub fn year_snapshots(&self) -> &[YearSnapshot] {
        &self.state.year_ends
    }

    /// Categories already submitted this year
    pub fn submitted(&self) -> CategorySet {
        self.state.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    /// The category the next submission must be for
    pub fn next_category(&self) -> Option<Category> {
        if self.state.complete {
            return None;
        }
        self.config
            .categories
            .iter()
            .copied()
            .find(|c| !self.state.cursor.contains(*c))
    }

    /// Options available for `category` this year.
    ///
    /// Random events are sampled without replacement and their impacts
    /// rolled; the offer is kept until the random step is submitted, so
    /// repeated calls return the same options.
    pub fn list_options(&mut self, category: Category) -> Result<Vec<ScenarioOption>> {
        if self.state.complete {
            return Err(EngineError::SimulationComplete);
        }
        if !self.config.requires(category) || self.state.cursor.contains(category) {
            return Err(EngineError::InvalidCategory(category));
        }

        if category != Category::Random {
            return Ok(self.config.catalog.options(category).to_vec());
        }

        if let Some(offered) = &self.state.offered {
            return Ok(offered.clone());
        }

        let offered = self.draw_random_events();
        self.state.offered = Some(offered.clone());
        Ok(offered)
    }

    fn draw_random_events(&mut self) -> Vec<ScenarioOption> {
        let events = self.config.catalog.options(Category::Random);
        let k = self.config.random_event_sample.min(events.len());
        let picks = rand::seq::index::sample(&mut self.rng, events.len(), k);

        picks
            .into_iter()
            .map(|i| events[i].roll(&mut self.rng))
            .collect()
    }

    /// Submit the choice for `category` and fold it into the position.
    ///
    /// Rejected submissions leave the engine untouched.
    pub fn apply_decision(
        &mut self,
        category: Category,
        option_id: &str,
    ) -> Result<FinancialPosition> {
        if self.state.complete {
            return Err(EngineError::SimulationComplete);
        }
        if !self.config.requires(category) {
            return Err(EngineError::InvalidCategory(category));
        }
        match self.next_category() {
            Some(expected) if expected == category => {}
            Some(expected) => {
                return Err(EngineError::OutOfOrderCategory {
                    expected,
                    got: category,
                });
            }
            None => return Err(EngineError::SimulationComplete),
        }

        let option = self.resolve_option(category, option_id)?;
        let year = self.state.position.year;

        let deltas = impact_deltas(&self.state.position, &option.impact, self.config.impact_mode);
        apply_deltas(&mut self.state.position, deltas);

        let housing_choice = (category == Category::Housing)
            .then(|| HousingLabel::for_option(&option.id, self.config.housing.variant));

        if let (Some(label), Some(schedule)) = (housing_choice, &self.config.housing.schedule)
            && let Some(warning) = apply_housing(
                &mut self.state.position,
                &mut self.state.housing,
                schedule,
                label,
                year,
            )
        {
            tracing::warn!(year, "{warning}; housing adjustment skipped");
            self.state.warnings.push(warning);
        }

        self.state.history.push(Decision {
            year,
            category,
            investment_choice: option.id.clone(),
            housing_choice,
            expense_reduction: option.impact.expenses,
            savings_allocation: option.impact.savings,
        });
        self.state.cursor.insert(category);
        if category == Category::Random {
            self.state.offered = None;
        }

        tracing::debug!(
            year,
            %category,
            option = %option.id,
            net_worth = self.state.position.net_worth,
            "decision applied"
        );

        if self.state.cursor.len() == self.config.categories_per_year() {
            let complete = self.state.roll_over_year(self.end_year);
            tracing::debug!(year = self.state.position.year, "year advanced");
            if complete {
                tracing::info!(
                    decisions = self.state.history.len(),
                    net_worth = self.state.position.net_worth,
                    "projection complete"
                );
            }
        }

        Ok(self.state.position)
    }

    /// Find the option to apply for a submission, rolling random events that
    /// were not offered through [`list_options`](Self::list_options)
    fn resolve_option(&mut self, category: Category, option_id: &str) -> Result<ScenarioOption> {
        let offered = if category == Category::Random {
            self.state.offered.as_deref()
        } else {
            None
        };

        let resolved = match offered {
            Some(offered) => offered.iter().find(|o| o.id == option_id).cloned(),
            None => self
                .config
                .catalog
                .find(category, option_id)
                .map(|o| o.roll(&mut self.rng)),
        };

        resolved.ok_or_else(|| EngineError::CategoryMismatch {
            category,
            option_id: option_id.to_string(),
            found: self
                .catalog_index
                .get(option_id)
                .copied()
                .filter(|c| *c != category),
        })
    }

    /// Final report, available once every year has been decided
    pub fn report(&self) -> Result<Report> {
        if !self.state.complete {
            return Err(EngineError::SimulationIncomplete {
                year: self.state.position.year,
            });
        }

        Ok(Report {
            initial_position: self.state.initial,
            final_position: self.state.position,
            trajectory: self.state.year_ends.clone(),
            decisions: self.state.history.clone(),
            warnings: self.state.warnings.clone(),
        })
    }
}
