//! Application services

pub mod plugin_service;

pub use plugin_service::{default_candidates, run_exit_status, PluginService};
