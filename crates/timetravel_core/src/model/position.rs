//! Running financial position

use serde::{Deserialize, Serialize};

/// Snapshot of the simulated household's finances.
///
/// `expenses` is a monthly figure; the other amounts are running totals and
/// may go negative (debt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPosition {
    pub year: i32,
    pub net_worth: f64,
    pub savings: f64,
    pub investments: f64,
    pub expenses: f64,
}

impl FinancialPosition {
    pub fn new(year: i32, balances: Balances) -> Self {
        Self {
            year,
            net_worth: balances.net_worth,
            savings: balances.savings,
            investments: balances.investments,
            expenses: balances.expenses,
        }
    }

    /// The monetary fields without the year
    pub fn balances(&self) -> Balances {
        Balances {
            net_worth: self.net_worth,
            savings: self.savings,
            investments: self.investments,
            expenses: self.expenses,
        }
    }

    /// Percentage change of every field relative to `previous`.
    ///
    /// A field whose previous value was zero has no defined trend.
    pub fn trend_from(&self, previous: &FinancialPosition) -> Trend {
        Trend {
            year: self.year,
            net_worth: percent_change(previous.net_worth, self.net_worth),
            savings: percent_change(previous.savings, self.savings),
            investments: percent_change(previous.investments, self.investments),
            expenses: percent_change(previous.expenses, self.expenses),
        }
    }
}

/// The four monetary quantities, used for starting positions and variances
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    pub net_worth: f64,
    pub savings: f64,
    pub investments: f64,
    pub expenses: f64,
}

impl Balances {
    pub fn new(net_worth: f64, savings: f64, investments: f64, expenses: f64) -> Self {
        Self {
            net_worth,
            savings,
            investments,
            expenses,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        [self.net_worth, self.savings, self.investments, self.expenses]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Year-over-year change, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub year: i32,
    pub net_worth: Option<f64>,
    pub savings: Option<f64>,
    pub investments: Option<f64>,
    pub expenses: Option<f64>,
}

fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from.abs() * 100.0)
    }
}
