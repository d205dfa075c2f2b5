//! Dynamic module abstraction
//!
//! The loader only talks to modules through these traits, which keeps
//! platform calls (and the unsafety around them) inside one implementation.

use std::marker::PhantomData;
use std::path::Path;

/// Name of the registration entry point every plugin module exports
pub const REGISTER_SYMBOL: &str = "register_plugin";

/// C calling convention for the entry point: no arguments, no return value
pub type RegisterFn = extern "C" fn();

/// Opens dynamic modules by path
pub trait ModuleOpener: Send + Sync {
    type Module: DynamicModule;

    /// Open the module at `path`. Errors carry the platform's diagnostic text.
    fn open(&self, path: &Path) -> Result<Self::Module, String>;
}

/// An opened dynamic module
pub trait DynamicModule {
    /// Resolve a no-argument entry point by name
    fn resolve(&self, symbol: &str) -> Result<EntryPoint<'_>, String>;

    /// Release the module
    fn close(self) -> Result<(), String>;
}

/// A resolved entry point, valid only while its module is borrowed
#[derive(Clone, Copy)]
pub struct EntryPoint<'m> {
    func: RegisterFn,
    _module: PhantomData<&'m ()>,
}

impl<'m> EntryPoint<'m> {
    /// # Safety
    /// `func` must remain callable for as long as `'m`, i.e. the module it was
    /// resolved from must stay loaded for that lifetime.
    pub unsafe fn new(func: RegisterFn) -> Self {
        Self {
            func,
            _module: PhantomData,
        }
    }

    pub fn invoke(&self) {
        (self.func)()
    }
}

impl std::fmt::Debug for EntryPoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPoint")
            .field("func", &(self.func as *const ()))
            .finish()
    }
}
