//! Scenario options offered to the player each year

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Effect of choosing an option.
///
/// Interpreted as percentages or absolute amounts depending on the
/// configured [`ImpactMode`](crate::config::ImpactMode).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default)]
    pub investments: f64,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub expenses: f64,
}

impl Impact {
    pub const NONE: Impact = Impact {
        investments: 0.0,
        savings: 0.0,
        expenses: 0.0,
    };

    pub fn new(investments: f64, savings: f64, expenses: f64) -> Self {
        Self {
            investments,
            savings,
            expenses,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.investments.is_finite() && self.savings.is_finite() && self.expenses.is_finite()
    }
}

/// A single choice in the scenario catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOption {
    /// Stable identifier; also determines the option's category
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: Impact,
    /// Random spread added on top of `impact` when the option is offered.
    /// Each field becomes `impact + floor(u * variability)` for `u` in `[0, 1)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variability: Option<Impact>,
}

impl ScenarioOption {
    pub fn new(id: impl Into<String>, title: impl Into<String>, impact: Impact) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            impact,
            variability: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn variability(mut self, variability: Impact) -> Self {
        self.variability = Some(variability);
        self
    }

    /// Category derived from the id
    pub fn category(&self) -> Category {
        Category::classify(&self.id)
    }

    /// Resolve the random spread into a concrete option.
    ///
    /// Options without variability are returned unchanged and draw nothing
    /// from `rng`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> ScenarioOption {
        let Some(spread) = self.variability else {
            return self.clone();
        };

        let mut draw = |base: f64, spread: f64| {
            if spread == 0.0 {
                base
            } else {
                base + (rng.random::<f64>() * spread).floor()
            }
        };

        let impact = Impact {
            investments: draw(self.impact.investments, spread.investments),
            savings: draw(self.impact.savings, spread.savings),
            expenses: draw(self.impact.expenses, spread.expenses),
        };

        ScenarioOption {
            impact,
            variability: None,
            ..self.clone()
        }
    }
}
