use crate::{MockError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".mock-class.toml";

/// Type used for parameters and returns a manifest leaves untyped
pub const DEFAULT_VALUE_TYPE: &str = "serde_json::Value";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScaffoldConfig {
    /// Overwrite the output file instead of appending
    #[serde(default)]
    pub overwrite: Option<bool>,
    /// Type substituted for untyped parameters and returns
    #[serde(default)]
    pub value_type: Option<String>,
}

impl ScaffoldConfig {
    pub fn value_type(&self) -> &str {
        self.value_type.as_deref().unwrap_or(DEFAULT_VALUE_TYPE)
    }
}

impl Config {
    /// Load configuration from a file in the project root
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MockError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            MockError::FileError(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
        })?;

        Ok(config)
    }

    /// Load default config if file is missing, otherwise return error on parse failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Warning: Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }
}
