//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Plugins: Dynamic module loading and the plugin registry
//! - FFI: C ABI surface for non-Rust hosts

pub mod config;
pub mod ffi;
pub mod plugins;
