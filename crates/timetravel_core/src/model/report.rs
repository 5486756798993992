//! Final simulation report
//!
//! Derived from the engine once the horizon is reached. `ReportExport` is the
//! shape handed to JSON export: `{ finalState, decisions }`.

use serde::{Deserialize, Serialize};

use super::decision::Decision;
use super::position::{FinancialPosition, Trend};
use crate::error::EngineWarning;

/// Position at the end of one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    /// The simulated year the snapshot closes
    pub year: i32,
    pub position: FinancialPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub initial_position: FinancialPosition,
    pub final_position: FinancialPosition,
    /// One entry per simulated year, in order
    pub trajectory: Vec<YearSnapshot>,
    pub decisions: Vec<Decision>,
    #[serde(default)]
    pub warnings: Vec<EngineWarning>,
}

/// Export payload consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    pub final_state: FinancialPosition,
    pub decisions: Vec<Decision>,
}

impl Report {
    pub fn export(&self) -> ReportExport {
        ReportExport {
            final_state: self.final_position,
            decisions: self.decisions.clone(),
        }
    }

    /// Year-over-year changes, starting from the initial position
    pub fn trends(&self) -> Vec<Trend> {
        let mut previous = self.initial_position;
        self.trajectory
            .iter()
            .map(|snap| {
                let trend = snap.position.trend_from(&previous);
                previous = snap.position;
                Trend {
                    year: snap.year,
                    ..trend
                }
            })
            .collect()
    }

    /// Decisions made during the given simulated year
    pub fn decisions_in(&self, year: i32) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(move |d| d.year == year)
    }

    /// Net worth gained over the whole simulation
    pub fn net_worth_change(&self) -> f64 {
        self.final_position.net_worth - self.initial_position.net_worth
    }
}
