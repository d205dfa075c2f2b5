//! Domain traits - Abstractions for infrastructure implementations

pub mod module;

pub use module::{DynamicModule, EntryPoint, ModuleOpener, RegisterFn, REGISTER_SYMBOL};
