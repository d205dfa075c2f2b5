//! Plugin startup service - Finds the plugin among candidate locations and loads it

use std::path::{Path, PathBuf};
use crate::application::errors::HostError;
use crate::domain::entities::Registration;
use crate::domain::traits::ModuleOpener;
use crate::infrastructure::config::PluginConfig;
use crate::infrastructure::plugins::PluginLoader;

/// Default plugin locations relative to the executable's directory
pub fn default_candidates(exe_dir: &Path, library_name: &str) -> Vec<PathBuf> {
    let file_name = libloading::library_filename(library_name);

    let mut candidates = vec![
        // Installed layout
        exe_dir.join("..").join("lib").join(&file_name),
        // Same dir as the executable, which is where cargo puts workspace cdylibs
        exe_dir.join(&file_name),
    ];
    if let Some(sibling) = sibling_profile_dir(exe_dir) {
        candidates.push(sibling.join(&file_name));
    }
    candidates
}

/// `target/release` for a binary in `target/debug`, and the other way round
fn sibling_profile_dir(exe_dir: &Path) -> Option<PathBuf> {
    let other = match exe_dir.file_name()?.to_str()? {
        "debug" => "release",
        "release" => "debug",
        _ => return None,
    };
    Some(exe_dir.with_file_name(other))
}

/// Exit status of the `run` command for a startup outcome
///
/// Only a missing plugin is fatal, and only when it is required. A plugin that
/// was found but failed to load has already been reported.
pub fn run_exit_status(outcome: &Result<Registration, HostError>, required: bool) -> u8 {
    match outcome {
        Err(HostError::NoPlugin { .. }) if required => 1,
        _ => 0,
    }
}

/// Startup service that loads the first plugin found on disk
pub struct PluginService<'a, O: ModuleOpener> {
    loader: &'a PluginLoader<O>,
    candidates: Vec<PathBuf>,
}

impl<'a, O: ModuleOpener> PluginService<'a, O> {
    pub fn new(loader: &'a PluginLoader<O>, candidates: Vec<PathBuf>) -> Self {
        Self { loader, candidates }
    }

    /// Candidates from config, or the default layouts around `exe_dir`
    pub fn from_config(loader: &'a PluginLoader<O>, config: &PluginConfig, exe_dir: &Path) -> Self {
        let candidates = if config.candidates.is_empty() {
            default_candidates(exe_dir, &config.library_name)
        } else {
            config.candidates.clone()
        };
        Self::new(loader, candidates)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load the first existing candidate
    ///
    /// Only the first candidate present on disk is attempted; a failure there
    /// is returned rather than falling through to later locations.
    pub fn load_first_available(&self) -> Result<Registration, HostError> {
        let found = self.candidates.iter().find(|path| path.exists());

        match found {
            Some(path) => {
                tracing::info!("Loading plugin from: {}", path.display());
                Ok(self.loader.load(path)?)
            }
            None => {
                for path in &self.candidates {
                    tracing::debug!("No plugin at {}", path.display());
                }
                Err(HostError::NoPlugin {
                    tried: self.candidates.len(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::application::errors::PluginError;
    use crate::infrastructure::plugins::PluginRegistry;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plugin-host-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_candidates_layouts() {
        let exe_dir = Path::new("/opt/host/bin");
        let candidates = default_candidates(exe_dir, "example_plugin");
        let file_name = libloading::library_filename("example_plugin");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], exe_dir.join("../lib").join(&file_name));
        assert_eq!(candidates[1], exe_dir.join(&file_name));
    }

    #[test]
    fn test_default_candidates_include_other_cargo_profile() {
        let file_name = libloading::library_filename("example_plugin");

        let debug = default_candidates(Path::new("/work/target/debug"), "example_plugin");
        assert_eq!(debug.len(), 3);
        assert_eq!(debug[1], Path::new("/work/target/debug").join(&file_name));
        assert_eq!(debug[2], Path::new("/work/target/release").join(&file_name));

        let release = default_candidates(Path::new("/work/target/release"), "example_plugin");
        assert_eq!(release[2], Path::new("/work/target/debug").join(&file_name));

        let unique: std::collections::HashSet<_> = debug.iter().collect();
        assert_eq!(unique.len(), debug.len());
    }

    #[test]
    fn test_run_exit_status() {
        let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));
        let missing = PluginService::new(&loader, vec![PathBuf::from("/nonexistent/a/libx.so")])
            .load_first_available();

        assert_eq!(run_exit_status(&missing, true), 1);
        assert_eq!(run_exit_status(&missing, false), 0);

        let registration = Ok(Registration::new("/opt/lib/libx.so", "register_plugin"));
        assert_eq!(run_exit_status(&registration, true), 0);
    }

    #[test]
    fn test_run_exit_status_when_found_plugin_fails_to_load() {
        let dir = temp_dir();
        let bogus = dir.join("libbogus.so");
        std::fs::write(&bogus, b"not a shared object").unwrap();

        let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));
        let outcome = PluginService::new(&loader, vec![bogus]).load_first_available();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(matches!(outcome, Err(HostError::Plugin(_))));
        assert_eq!(run_exit_status(&outcome, true), 0);
    }

    #[test]
    fn test_configured_candidates_replace_defaults() {
        let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));
        let config = PluginConfig {
            candidates: vec![PathBuf::from("/srv/libx.so")],
            ..PluginConfig::default()
        };

        let service = PluginService::from_config(&loader, &config, Path::new("/opt/host/bin"));
        assert_eq!(service.candidates(), &[PathBuf::from("/srv/libx.so")]);
    }

    #[test]
    fn test_no_existing_candidate() {
        let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));
        let service = PluginService::new(
            &loader,
            vec![
                PathBuf::from("/nonexistent/a/libx.so"),
                PathBuf::from("/nonexistent/b/libx.so"),
            ],
        );

        let err = service.load_first_available().unwrap_err();
        assert!(matches!(err, HostError::NoPlugin { tried: 2 }));
        assert!(loader.registry().is_empty());
    }

    #[test]
    fn test_first_existing_candidate_failure_is_returned() {
        let dir = temp_dir();
        let bogus = dir.join("libbogus.so");
        std::fs::write(&bogus, b"not a shared object").unwrap();

        let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));
        let service = PluginService::new(
            &loader,
            vec![dir.join("libmissing.so"), bogus.clone(), dir.join("libother.so")],
        );

        let err = service.load_first_available().unwrap_err();
        let _ = std::fs::remove_dir_all(&dir);

        match err {
            HostError::Plugin(PluginError::ModuleOpen { path, .. }) => assert_eq!(path, bogus),
            other => panic!("unexpected error: {}", other),
        }
    }
}
