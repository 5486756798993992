//! Data directory storage
//!
//! Directory structure:
//! ~/.timetravel/
//!   config.yaml          # Engine configuration (optional)
//!   timetravel.log       # Rotated log file
//!   exports/
//!     simulation-data-20240101-120000.json

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Zoned;
use timetravel_core::EngineConfig;
use timetravel_core::model::Report;

use crate::session::ChoiceScript;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {msg}"),
            StorageError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding configuration, logs and exports
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.timetravel/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timetravel")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.root.join("exports")
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.exports_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {e}")))
    }

    /// Load the engine configuration.
    ///
    /// An explicit path must exist. Without one, `config.yaml` in the data
    /// directory is used when present and the classic defaults otherwise.
    pub fn load_config(&self, path: Option<&Path>) -> Result<EngineConfig, StorageError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = self.config_path();
                if !path.exists() {
                    tracing::debug!("no config.yaml, using defaults");
                    return Ok(EngineConfig::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            StorageError::Io(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = serde_saphyr::from_str(&content).map_err(|e| {
            StorageError::Parse(format!("Failed to parse config {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Write `config` to `config.yaml`, creating the directory if needed
    pub fn save_config(&self, config: &EngineConfig) -> Result<PathBuf, StorageError> {
        self.init()?;

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {e}")))?;

        let path = self.config_path();
        fs::write(&path, yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {e}")))?;
        Ok(path)
    }

    pub fn load_script(&self, path: &Path) -> Result<ChoiceScript, StorageError> {
        let content = fs::read_to_string(path).map_err(|e| {
            StorageError::Io(format!("Failed to read script {}: {e}", path.display()))
        })?;

        serde_saphyr::from_str(&content).map_err(|e| {
            StorageError::Parse(format!("Failed to parse script {}: {e}", path.display()))
        })
    }

    /// Write the `{ finalState, decisions }` export of `report` as pretty
    /// JSON. Without an explicit path the file lands in `exports/` with a
    /// timestamped name.
    pub fn export_report(
        &self,
        report: &Report,
        path: Option<&Path>,
    ) -> Result<PathBuf, StorageError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                self.init()?;
                self.exports_dir().join(export_file_name(&Zoned::now()))
            }
        };

        let json = serde_json::to_string_pretty(&report.export())
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize report: {e}")))?;

        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write export: {e}")))?;

        tracing::info!(path = %path.display(), "exported report");
        Ok(path)
    }
}

/// Default export file name, e.g. `simulation-data-20240314-093000.json`
pub fn export_file_name(now: &Zoned) -> String {
    format!("simulation-data-{}.json", now.strftime("%Y%m%d-%H%M%S"))
}
