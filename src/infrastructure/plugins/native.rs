//! Native dynamic library backend built on libloading

use std::path::{Path, PathBuf};
use libloading::{Library, Symbol};
use crate::domain::traits::{DynamicModule, EntryPoint, ModuleOpener, RegisterFn};

/// Opens shared libraries through the platform loader
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeOpener;

impl NativeOpener {
    pub fn new() -> Self {
        Self
    }
}

impl ModuleOpener for NativeOpener {
    type Module = NativeModule;

    fn open(&self, path: &Path) -> Result<NativeModule, String> {
        // Running library initializers executes plugin code; callers are
        // expected to only point the host at trusted modules.
        let library = unsafe { open_lazy(path) }.map_err(|e| e.to_string())?;
        tracing::debug!("Opened module {}", path.display());

        Ok(NativeModule {
            library,
            path: path.to_path_buf(),
        })
    }
}

/// Unresolved symbols inside the module are tolerated until referenced.
#[cfg(unix)]
unsafe fn open_lazy(path: &Path) -> Result<Library, libloading::Error> {
    use libloading::os::unix::{Library as UnixLibrary, RTLD_LAZY, RTLD_LOCAL};

    UnixLibrary::open(Some(path), RTLD_LAZY | RTLD_LOCAL).map(Library::from)
}

#[cfg(not(unix))]
unsafe fn open_lazy(path: &Path) -> Result<Library, libloading::Error> {
    Library::new(path)
}

/// A loaded shared library
pub struct NativeModule {
    library: Library,
    path: PathBuf,
}

impl DynamicModule for NativeModule {
    fn resolve(&self, symbol: &str) -> Result<EntryPoint<'_>, String> {
        let func: Symbol<RegisterFn> = unsafe { self.library.get(symbol.as_bytes()) }
            .map_err(|e| e.to_string())?;

        // The entry point borrows `self`, so it cannot outlive the library.
        Ok(unsafe { EntryPoint::new(*func) })
    }

    fn close(self) -> Result<(), String> {
        let path = self.path;
        self.library.close().map_err(|e| e.to_string())?;
        tracing::debug!("Closed module {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_module_reports_platform_error() {
        let err = NativeOpener::new()
            .open(Path::new("/nonexistent/path/libmissing_plugin.so"))
            .err()
            .expect("opening a missing module must fail");

        assert!(!err.is_empty());
    }

    #[test]
    fn test_open_non_library_file_fails() {
        let path = std::env::temp_dir().join(format!("plugin-host-{}.so", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"this is not a shared object").unwrap();

        let result = NativeOpener::new().open(&path);
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
    }
}
