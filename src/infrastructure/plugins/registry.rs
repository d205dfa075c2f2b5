//! Plugin registry - Records plugin registrations made through the loader

use std::path::Path;
use std::sync::{PoisonError, RwLock};
use crate::domain::entities::Registration;

/// Registry that plugin registrations land in
///
/// Append-only: every successful entry point invocation adds one record, so
/// loading the same module twice shows up twice.
pub struct PluginRegistry {
    registrations: RwLock<Vec<Registration>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            registrations: RwLock::new(Vec::new()),
        }
    }

    /// Record a registration for the module at `path`
    pub fn record(&self, path: impl AsRef<Path>, symbol: &str) -> Registration {
        let registration = Registration::new(path.as_ref(), symbol);

        self.registrations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(registration.clone());

        tracing::debug!("Recorded registration {} for {}", registration.id, registration.module_name());
        registration
    }

    /// Snapshot of all registrations, oldest first
    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of registrations made by the module at `path`
    pub fn count_for(&self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.is_from(path))
            .count()
    }

    /// Get the number of registrations
    pub fn len(&self) -> usize {
        self.registrations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing has registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
