//! C ABI surface for hosts written in other languages.
//! Paths are NUL-terminated UTF-8; status codes match `PluginError::code`.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::application::errors::PluginError;
use super::plugins::{PluginLoader, PluginRegistry};

pub const PLUGIN_HOST_OK: i32 = 0;

// C callers have no way to hand us a registry.
static HOST_REGISTRY: Lazy<Arc<PluginRegistry>> = Lazy::new(|| Arc::new(PluginRegistry::new()));

/// Load a plugin module and invoke its `register_plugin` entry point.
///
/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn plugin_host_load_plugin(path: *const c_char) -> i32 {
    let loader = PluginLoader::native(Arc::clone(&HOST_REGISTRY));

    let result = if path.is_null() {
        Err(PluginError::module_open("", "plugin path is null"))
    } else {
        match CStr::from_ptr(path).to_str() {
            Ok(path) => loader.load(path).map(|_| ()),
            Err(_) => Err(PluginError::module_open(
                CStr::from_ptr(path).to_string_lossy().into_owned(),
                "plugin path is not valid UTF-8",
            )),
        }
    };

    match result {
        Ok(()) => PLUGIN_HOST_OK,
        Err(e) => {
            tracing::error!("{}", e);
            e.code()
        }
    }
}

/// Number of registrations made through `plugin_host_load_plugin`
#[no_mangle]
pub extern "C" fn plugin_host_registration_count() -> usize {
    HOST_REGISTRY.len()
}
