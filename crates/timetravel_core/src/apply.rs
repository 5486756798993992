//! Apply a chosen option to the running position
//!
//! Pure arithmetic over a `FinancialPosition`: impact deltas under the
//! configured mode, then the optional housing schedule adjustment.

use serde::{Deserialize, Serialize};

use crate::config::ImpactMode;
use crate::error::EngineWarning;
use crate::model::{FinancialPosition, HousingLabel, HousingSchedule, Impact};

/// Change to each field of a position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deltas {
    pub net_worth: f64,
    pub savings: f64,
    pub investments: f64,
    pub expenses: f64,
}

/// Compute the deltas an impact produces on `position`.
///
/// Net worth moves by the combined investment and savings impact.
pub fn impact_deltas(position: &FinancialPosition, impact: &Impact, mode: ImpactMode) -> Deltas {
    match mode {
        ImpactMode::Percentage => Deltas {
            net_worth: position.net_worth * (impact.investments + impact.savings) / 100.0,
            savings: position.savings * impact.savings / 100.0,
            investments: position.investments * impact.investments / 100.0,
            expenses: position.expenses * impact.expenses / 100.0,
        },
        ImpactMode::Absolute => Deltas {
            net_worth: impact.investments + impact.savings,
            savings: impact.savings,
            investments: impact.investments,
            expenses: impact.expenses,
        },
    }
}

pub fn apply_deltas(position: &mut FinancialPosition, deltas: Deltas) {
    position.net_worth += deltas.net_worth;
    position.savings += deltas.savings;
    position.investments += deltas.investments;
    position.expenses += deltas.expenses;
}

/// Housing costs currently reflected in the position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingState {
    /// Scheduled monthly payment currently included in expenses
    pub carried_payment: f64,
    /// Whether the home value has been added to net worth
    pub equity_recognized: bool,
}

/// Adjust expenses and net worth for a housing choice made in `year`.
///
/// Owning swaps last year's scheduled payment for this year's and adds the
/// home value to net worth the first time. Renting drops the carried payment
/// and subtracts the flat housing cost. A missing schedule entry for an
/// owning year skips the adjustment and returns a warning.
pub fn apply_housing(
    position: &mut FinancialPosition,
    state: &mut HousingState,
    schedule: &HousingSchedule,
    label: HousingLabel,
    year: i32,
) -> Option<EngineWarning> {
    if !label.is_owning() {
        position.expenses -= state.carried_payment + schedule.flat_housing_cost;
        state.carried_payment = 0.0;
        return None;
    }

    let Some(entry) = schedule.get(year) else {
        return Some(EngineWarning::MissingScheduleEntry { year });
    };

    position.expenses += entry.monthly_payment - state.carried_payment;
    state.carried_payment = entry.monthly_payment;

    if !state.equity_recognized {
        position.net_worth += entry.home_value;
        state.equity_recognized = true;
    }

    None
}
