//! Sample plugin module for plugin-host
//!
//! Exports the `register_plugin` entry point the host resolves after loading.
//! When `PLUGIN_HOST_REGISTRATION_LOG` names a file, each registration appends
//! a `registered` line to it so tests can count invocations across loads.

use std::fs::OpenOptions;
use std::io::Write;

/// Environment variable naming the registration log file
pub const REGISTRATION_LOG_ENV: &str = "PLUGIN_HOST_REGISTRATION_LOG";

/// Entry point invoked by the host once per load
#[no_mangle]
pub extern "C" fn register_plugin() {
    // Unwinding across the C boundary aborts, so nothing here may panic.
    let mut stdout = std::io::stdout();
    let _ = writeln!(stdout, "Plugin registered");

    if let Some(path) = std::env::var_os(REGISTRATION_LOG_ENV) {
        if let Ok(mut log) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(log, "registered");
        }
    }
}
