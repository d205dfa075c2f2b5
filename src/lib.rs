//! plugin-host: loads dynamic plugin modules and runs their `register_plugin`
//! entry point.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{ConfigError, HostError, PluginError, PluginResult};
pub use domain::entities::Registration;
pub use domain::traits::{DynamicModule, EntryPoint, ModuleOpener, REGISTER_SYMBOL};
pub use infrastructure::config::Config;
pub use infrastructure::plugins::{NativeOpener, PluginLoader, PluginRegistry};
