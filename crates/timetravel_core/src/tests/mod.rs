//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `state_machine` - Category order, cursor, completion
//! - `impact` - Percentage and absolute impact arithmetic
//! - `housing` - Housing schedule adjustments
//! - `random_events` - Random event offers and rolls
//! - `report` - Final report, trajectory, export
//! - `builder` - Configuration validation and the builder
//! - `properties` - Property-based invariants over whole simulations

mod builder;
mod housing;

use crate::engine::ProjectionEngine;
use crate::model::FinancialPosition;

/// Play every remaining step with the first listed option
fn play_first_options(engine: &mut ProjectionEngine) -> FinancialPosition {
    while let Some(category) = engine.next_category() {
        let options = engine.list_options(category).unwrap();
        engine.apply_decision(category, &options[0].id).unwrap();
    }
    engine.position()
}
