//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Host configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub plugins: PluginConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PluginConfig {
    /// Library name without platform prefix/suffix, e.g. `example_plugin`
    pub library_name: String,
    /// Paths to probe in order; empty means the built-in layouts
    pub candidates: Vec<PathBuf>,
    /// Whether a missing plugin is fatal at startup
    pub required: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            library_name: "example_plugin".to_string(),
            candidates: Vec::new(),
            required: true,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Override fields from `PLUGIN_HOST_PLUGIN` and `PLUGIN_HOST_LIBRARY`
    pub fn apply_env(&mut self) {
        if let Some(path) = std::env::var_os("PLUGIN_HOST_PLUGIN") {
            if !path.is_empty() {
                self.plugins.candidates = vec![PathBuf::from(path)];
            }
        }

        if let Ok(name) = std::env::var("PLUGIN_HOST_LIBRARY") {
            if !name.trim().is_empty() {
                self.plugins.library_name = name.trim().to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.plugins.library_name.trim();
        if name.is_empty() {
            return Err(ConfigError::MissingField("plugins.library-name".to_string()));
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue(format!(
                "plugins.library-name must be a bare name, got '{}'",
                name
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }
}
