//! Calculator configuration persisted as YAML in the data directory.
//!
//! Layout:
//! ~/.growthcalc/
//!   config.yaml       # rate assumptions, input bounds, default inputs
//!   growthcalc.log    # rotating log file
//!   projection.csv    # last exported series (written on demand)

use std::fs;
use std::path::{Path, PathBuf};

use growthcalc_core::{CalculatorInput, InputBounds, RateAssumptions};
use serde::{Deserialize, Serialize};

use crate::util::io::atomic_write;

/// Error types for configuration load/save
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the calculator can be configured with.
///
/// All fields default to the documented contract values (1.76% monthly
/// strategy rate, 4% annual baseline, principal [2,500..1,000,000] step 500,
/// duration [6..60] months, starting input $25,000 over 12 months), so a
/// partial or missing file always yields a working setup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub rates: RateAssumptions,
    #[serde(default)]
    pub bounds: InputBounds,
    #[serde(default)]
    pub defaults: CalculatorInput,
}

impl CalculatorConfig {
    /// Path of the config file within a data directory.
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_saphyr::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = serde_saphyr::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        atomic_write(path, &yaml).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Load the config from the data directory, falling back to defaults.
    ///
    /// A missing file is written back so users have something to edit; a
    /// file that fails to parse is left untouched and logged, and the
    /// defaults are used for the session.
    pub fn load_or_init(data_dir: &Path) -> Self {
        let path = Self::config_path(data_dir);

        if path.exists() {
            match Self::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to load {}: {e}; using defaults", path.display());
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            let result = fs::create_dir_all(data_dir)
                .map_err(|e| ConfigError::Io(e.to_string()))
                .and_then(|_| config.save(&path));
            if let Err(e) = result {
                tracing::warn!("failed to write default config to {}: {e}", path.display());
            }
            config
        }
    }

    /// The configured default inputs, clamped through the configured bounds
    /// in case the file put them off-grid.
    pub fn default_input(&self) -> CalculatorInput {
        self.bounds
            .clamp_input(self.defaults.principal, self.defaults.duration_months as f64)
    }
}
