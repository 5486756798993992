use crate::apply::HousingState;
use crate::error::EngineWarning;
use crate::model::{CategorySet, Decision, FinancialPosition, ScenarioOption, YearSnapshot};

/// Runtime state of one simulation, mutated only by accepted decisions
#[derive(Debug, Clone)]
pub struct ProjectionState {
    pub initial: FinancialPosition,
    pub position: FinancialPosition,
    pub history: Vec<Decision>,

    /// Categories already submitted this year
    pub cursor: CategorySet,
    /// Random events offered this year, kept until the random step is submitted
    pub offered: Option<Vec<ScenarioOption>>,

    pub housing: HousingState,
    /// End-of-year positions, one per completed year
    pub year_ends: Vec<YearSnapshot>,
    pub warnings: Vec<EngineWarning>,
    pub complete: bool,
}

impl ProjectionState {
    pub fn new(initial: FinancialPosition) -> Self {
        Self {
            initial,
            position: initial,
            history: Vec::new(),
            cursor: CategorySet::empty(),
            offered: None,
            housing: HousingState::default(),
            year_ends: Vec::new(),
            warnings: Vec::new(),
            complete: false,
        }
    }

    /// Close the current year: record its snapshot and advance the calendar.
    ///
    /// Returns `true` when the horizon has been reached.
    pub fn roll_over_year(&mut self, end_year: i32) -> bool {
        self.cursor.clear();
        self.offered = None;
        self.year_ends.push(YearSnapshot {
            year: self.position.year,
            position: self.position,
        });

        // Years before the horizon never exceed `end_year - 1`
        self.position.year += 1;
        if self.position.year >= end_year {
            self.complete = true;
        }
        self.complete
    }
}
