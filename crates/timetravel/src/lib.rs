//! Command-line driver for the financial time-travel simulator
//!
//! Wires a [`ProjectionEngine`](timetravel_core::ProjectionEngine) to a
//! terminal prompt or a YAML choice script, and handles the data directory
//! (configuration, log file, report exports).

pub mod logging;
pub mod session;
pub mod storage;
pub mod summary;

#[cfg(test)]
mod tests;

pub use logging::init_logging;
pub use session::{
    ChoiceScript, ChoiceSource, PromptChoices, ScriptedChoice, ScriptedChoices, Session,
};
pub use storage::{DataDirectory, StorageError};
