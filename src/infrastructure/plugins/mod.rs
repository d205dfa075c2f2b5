//! Plugin system for plugin-host
//! 
//! Plugins are dynamically loaded shared libraries exporting a
//! `register_plugin` entry point with the C calling convention.

pub mod loader;
pub mod native;
pub mod registry;

pub use loader::PluginLoader;
pub use native::{NativeModule, NativeOpener};
pub use registry::PluginRegistry;
