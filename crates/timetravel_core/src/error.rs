use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Errors found while validating an [`EngineConfig`](crate::config::EngineConfig)
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveHorizon,
    /// `start_year + horizon_years` does not fit in an `i32` year
    YearOutOfRange {
        start_year: i32,
        horizon_years: u32,
    },
    NoCategories,
    DuplicateCategory(Category),
    CategoryOrder {
        before: Category,
        after: Category,
    },
    EmptyCatalog(Category),
    MisclassifiedOption {
        option_id: String,
        listed_under: Category,
        classified_as: Category,
    },
    DuplicateOptionId(String),
    ZeroRandomSample,
    NonFiniteValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveHorizon => write!(f, "horizon must be at least one year"),
            ConfigError::YearOutOfRange {
                start_year,
                horizon_years,
            } => write!(
                f,
                "a {horizon_years}-year horizon starting in {start_year} runs past the last representable year"
            ),
            ConfigError::NoCategories => write!(f, "at least one category is required per year"),
            ConfigError::DuplicateCategory(c) => write!(f, "category {c} is listed twice"),
            ConfigError::CategoryOrder { before, after } => {
                write!(f, "category {after} must not come after {before}")
            }
            ConfigError::EmptyCatalog(c) => write!(f, "no scenario options for category {c}"),
            ConfigError::MisclassifiedOption {
                option_id,
                listed_under,
                classified_as,
            } => write!(
                f,
                "option '{option_id}' is listed under {listed_under} but its id classifies as {classified_as}"
            ),
            ConfigError::DuplicateOptionId(id) => write!(f, "option id '{id}' is not unique"),
            ConfigError::ZeroRandomSample => {
                write!(f, "random event sample size must be at least one")
            }
            ConfigError::NonFiniteValue(field) => write!(f, "{field} contains a non-finite number"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by [`ProjectionEngine`](crate::engine::ProjectionEngine).
///
/// All of them leave the engine unchanged; the caller may retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Category is not required this year or was already submitted
    InvalidCategory(Category),
    OutOfOrderCategory {
        expected: Category,
        got: Category,
    },
    /// Option does not belong to the submitted category
    CategoryMismatch {
        category: Category,
        option_id: String,
        /// Category the option does belong to, if it is in the catalog at all
        found: Option<Category>,
    },
    SimulationComplete,
    SimulationIncomplete {
        year: i32,
    },
    InvalidConfiguration(ConfigError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCategory(c) => {
                write!(f, "category {c} is not open for selection this year")
            }
            EngineError::OutOfOrderCategory { expected, got } => {
                write!(f, "expected a {expected} decision, got {got}")
            }
            EngineError::CategoryMismatch {
                category,
                option_id,
                found: Some(found),
            } => write!(
                f,
                "option '{option_id}' is a {found} option, not a {category} option"
            ),
            EngineError::CategoryMismatch {
                category,
                option_id,
                found: None,
            } => write!(f, "option '{option_id}' is not available for {category}"),
            EngineError::SimulationComplete => write!(f, "simulation is already complete"),
            EngineError::SimulationIncomplete { year } => {
                write!(f, "simulation is still in progress (year {year})")
            }
            EngineError::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidConfiguration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::InvalidConfiguration(err)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Non-fatal conditions recorded while a step still completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EngineWarning {
    /// No housing schedule entry for the year; the housing adjustment was skipped
    MissingScheduleEntry { year: i32 },
}

impl fmt::Display for EngineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineWarning::MissingScheduleEntry { year } => {
                write!(f, "no housing schedule entry for {year}")
            }
        }
    }
}
