//! Plugin loader - Opens a plugin module, runs its registration entry point, releases it

use std::path::Path;
use std::sync::Arc;
use crate::application::errors::{PluginError, PluginResult};
use crate::domain::entities::Registration;
use crate::domain::traits::{DynamicModule, ModuleOpener, REGISTER_SYMBOL};
use super::native::NativeOpener;
use super::registry::PluginRegistry;

/// Plugin loader
///
/// Each call owns its module reference from open to close; nothing about the
/// module survives the call except the registration it produced.
pub struct PluginLoader<O: ModuleOpener = NativeOpener> {
    opener: O,
    registry: Arc<PluginRegistry>,
}

impl PluginLoader<NativeOpener> {
    /// Loader backed by the platform's dynamic linker
    pub fn native(registry: Arc<PluginRegistry>) -> Self {
        Self::new(NativeOpener::new(), registry)
    }
}

impl<O: ModuleOpener> PluginLoader<O> {
    pub fn new(opener: O, registry: Arc<PluginRegistry>) -> Self {
        Self { opener, registry }
    }

    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// Load the module at `path` and invoke its `register_plugin` entry point
    pub fn load(&self, path: impl AsRef<Path>) -> PluginResult<Registration> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PluginError::module_open(path, "plugin path is empty"));
        }

        let module = self
            .opener
            .open(path)
            .map_err(|reason| PluginError::module_open(path, reason))?;

        let outcome = match module.resolve(REGISTER_SYMBOL) {
            Ok(entry) => {
                tracing::debug!("Invoking {} in {}", REGISTER_SYMBOL, path.display());
                entry.invoke();
                Ok(())
            }
            Err(reason) => Err(PluginError::SymbolResolution {
                path: path.to_path_buf(),
                symbol: REGISTER_SYMBOL.to_string(),
                reason,
            }),
        };

        if let Err(e) = module.close() {
            tracing::warn!("Failed to release plugin {}: {}", path.display(), e);
        }
        outcome?;

        let registration = self.registry.record(path, REGISTER_SYMBOL);
        tracing::info!("Loaded plugin: {}", path.display());
        Ok(registration)
    }

    /// Load the module at `path`, reporting failures instead of returning them
    ///
    /// Returns whether the entry point ran.
    pub fn load_and_report(&self, path: impl AsRef<Path>) -> bool {
        match self.load(path) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("{}", e);
                false
            }
        }
    }
}
