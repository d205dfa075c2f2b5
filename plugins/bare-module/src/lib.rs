//! A valid dynamic library that does not export `register_plugin`.
//! The host must report a symbol resolution failure when loading it.

#[no_mangle]
pub extern "C" fn bare_module_version() -> u32 {
    1
}
