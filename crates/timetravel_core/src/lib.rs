//! Financial time-travel projection library
//!
//! This crate provides the engine behind a ten-year financial decision
//! simulator. A player starts from a (possibly randomized) position and, for
//! every simulated year, picks one option per category:
//! - a random life event
//! - an investment strategy
//! - a housing choice (buy/keep or rent)
//! - an expense cut
//! - a savings strategy
//!
//! Each choice moves net worth, savings, investments and monthly expenses,
//! either as percentages of the current values or as flat amounts. Once the
//! horizon is reached the engine produces a [`Report`](model::Report) with the
//! real end-of-year trajectory and the full decision history.
//!
//! # Example
//!
//! ```ignore
//! use timetravel_core::{EngineConfig, ProjectionEngine, model::Category};
//!
//! let mut engine = ProjectionEngine::new(EngineConfig::default(), 42)?;
//! while let Some(category) = engine.next_category() {
//!     let options = engine.list_options(category)?;
//!     engine.apply_decision(category, &options[0].id)?;
//! }
//! let report = engine.report()?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod apply;
pub mod engine;
pub mod error;
pub mod projection_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{EngineBuilder, EngineConfig, ImpactMode, InitialPosition, ScenarioCatalog};
pub use engine::ProjectionEngine;
pub use error::{ConfigError, EngineError, EngineWarning};
