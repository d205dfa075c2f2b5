use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Record of one invocation of a plugin's registration entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: Uuid,
    pub path: PathBuf,
    pub symbol: String,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(path: impl Into<PathBuf>, symbol: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
            symbol: symbol.into(),
            registered_at: Utc::now(),
        }
    }

    /// File name of the plugin module, falling back to the full path
    pub fn module_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn is_from(&self, path: impl AsRef<Path>) -> bool {
        self.path == path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrations_get_distinct_ids() {
        let a = Registration::new("/opt/lib/libexample_plugin.so", "register_plugin");
        let b = Registration::new("/opt/lib/libexample_plugin.so", "register_plugin");
        assert_ne!(a.id, b.id);
        assert!(a.is_from("/opt/lib/libexample_plugin.so"));
        assert_eq!(a.module_name(), "libexample_plugin.so");
    }
}
