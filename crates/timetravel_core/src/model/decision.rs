//! Decision history records

use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Which pair of labels housing choices are reported with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousingVariant {
    /// "buy" a home or "rent"
    #[default]
    BuyRent,
    /// "keep" an owned home or "rent" (sell)
    KeepRent,
}

/// Recorded outcome of a housing submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingLabel {
    Buy,
    Keep,
    Rent,
}

impl HousingLabel {
    /// Label for a housing option id under the given variant.
    ///
    /// Ids containing `rent` or `sell` are the renting choice, everything else
    /// is owning.
    pub fn for_option(id: &str, variant: HousingVariant) -> HousingLabel {
        if id.contains("rent") || id.contains("sell") {
            return HousingLabel::Rent;
        }
        match variant {
            HousingVariant::BuyRent => HousingLabel::Buy,
            HousingVariant::KeepRent => HousingLabel::Keep,
        }
    }

    pub fn is_owning(self) -> bool {
        !matches!(self, HousingLabel::Rent)
    }
}

impl fmt::Display for HousingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HousingLabel::Buy => "buy",
            HousingLabel::Keep => "keep",
            HousingLabel::Rent => "rent",
        })
    }
}

/// Immutable history entry, appended once per accepted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub year: i32,
    pub category: Category,
    /// Id of the submitted option
    pub investment_choice: String,
    /// Set on housing submissions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_choice: Option<HousingLabel>,
    /// Expense impact that was applied
    pub expense_reduction: f64,
    /// Savings impact that was applied
    pub savings_allocation: f64,
}
