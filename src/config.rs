//! Configuration management for RAX File Manager
//!
//! All values are optional; an absent config file leaves the stock behavior
//! in place. Loaded once at startup, never reloaded.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Manager configuration loaded from config.toml with environment overrides
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ManagerConfig {
    /// Directory the `-` sentinel resolves to
    /// Environment: RAX_FM_DEFAULT_DIR
    #[serde(default)]
    pub default_dir: Option<String>,
}

impl ManagerConfig {
    /// Load configuration from an optional config.toml plus environment.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("RAX_FM"))
            .build()?;

        let config: ManagerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.default_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::Message(
                    "default_dir cannot be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Resolve the directory the `-` sentinel maps to.
    ///
    /// Falls back to the invoking user's home directory, then to the current
    /// directory when no home is known.
    pub fn default_dir_path(&self) -> PathBuf {
        self.default_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
