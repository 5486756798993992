//! Tests for the command-line driver
//!
//! - `logging` - Log file rotation
//! - `session` - Scripted and prompted play
//! - `storage` - Data directory loading and exports
//! - `summary` - Report rendering and number formatting

mod session;

use timetravel_core::model::Balances;
use timetravel_core::{EngineBuilder, EngineConfig};

/// Small fixed-start configuration without random events
fn two_year_config() -> EngineConfig {
    EngineBuilder::new()
        .horizon(2)
        .without_random_events()
        .initial_position(Balances::new(100_000.0, 50_000.0, 50_000.0, 3_000.0))
        .build()
        .unwrap()
}
