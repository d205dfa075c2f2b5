//! Application layer errors

use std::path::PathBuf;
use thiserror::Error;

/// General host errors
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),

    #[error("Plugin could not be loaded from any expected location ({tried} candidates tried)")]
    NoPlugin { tried: usize },
}

/// Plugin loading errors
#[derive(Error, Debug)]
pub enum PluginError {
    /// Path empty, missing, or not a dynamic library
    #[error("Cannot load plugin {}: {reason}", .path.display())]
    ModuleOpen { path: PathBuf, reason: String },

    /// Module loaded but the entry point is absent
    #[error("Cannot find {symbol} function in {}: {reason}", .path.display())]
    SymbolResolution {
        path: PathBuf,
        symbol: String,
        reason: String,
    },
}

impl PluginError {
    pub fn module_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PluginError::ModuleOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Status code used across the C ABI
    pub fn code(&self) -> i32 {
        match self {
            PluginError::ModuleOpen { .. } => 1,
            PluginError::SymbolResolution { .. } => 2,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            PluginError::ModuleOpen { path, .. } | PluginError::SymbolResolution { path, .. } => path,
        }
    }
}

pub type PluginResult<T> = Result<T, PluginError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
