//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the display
//! configuration from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::DisplayConfig;

/// Name of the display configuration file inside a config directory.
pub const DISPLAY_CONFIG_FILE: &str = "display.yaml";

/// Loads and provides access to the display configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── display.yaml   # Placeholders and currency
/// ```
///
/// # Example
///
/// ```no_run
/// use ess_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Currency: {}", loader.config().currency.symbol);
/// # Ok::<(), ess_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DisplayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if `display.yaml` is
    /// missing or is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let display_path = path.as_ref().join(DISPLAY_CONFIG_FILE);
        let config = Self::load_yaml::<DisplayConfig>(&display_path)?;

        debug!(path = %display_path.display(), "Loaded display configuration");

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded display configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().placeholders.duration, "—");
        assert_eq!(loader.config().placeholders.date, "--");
        assert_eq!(loader.config().currency.symbol, "₹");
    }

    #[test]
    fn test_shipped_file_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &DisplayConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("display.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("ess-engine-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DISPLAY_CONFIG_FILE), "placeholders: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("display.yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_wraps_value() {
        let mut config = DisplayConfig::default();
        config.currency.symbol = "$".to_string();

        let loader = ConfigLoader::from_config(config.clone());
        assert_eq!(loader.config(), &config);
    }
}
