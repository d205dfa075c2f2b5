use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use plugin_host::application::services::{run_exit_status, PluginService};
use plugin_host::{Config, HostError, PluginLoader, PluginRegistry};

#[derive(Parser)]
#[command(name = "plugin-host")]
#[command(about = "Loads dynamic plugin modules and runs their registration entry point", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the plugin from the first candidate location that exists
    Run,
    /// Load a single plugin module
    Load {
        /// Path to the plugin module
        path: PathBuf,

        /// Exit with a non-zero status if loading fails
        #[arg(long)]
        strict: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Run => run(&cli.config),
        Commands::Load { path, strict } => load(&path, strict),
        Commands::Version => {
            println!("plugin-host v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn load_config(config_path: &str) -> Config {
    let mut config = if Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env();
    config
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(config_path: &str) -> ExitCode {
    let config = load_config(config_path);
    tracing::info!("Starting plugin-host");

    let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));
    let service = PluginService::from_config(&loader, &config.plugins, &exe_dir());

    let outcome = service.load_first_available();
    match &outcome {
        Ok(registration) => {
            tracing::info!("Plugin {} registered ({})", registration.module_name(), registration.id);
        }
        Err(HostError::NoPlugin { tried }) if config.plugins.required => {
            tracing::error!("Plugin could not be loaded from any expected location ({} tried)", tried);
        }
        Err(HostError::NoPlugin { tried }) => {
            tracing::warn!("No plugin found in {} candidate locations, continuing without one", tried);
        }
        Err(HostError::Plugin(e)) => {
            tracing::error!(path = %e.path().display(), "{}", e);
        }
        Err(e) => tracing::error!("{}", e),
    }

    let status = run_exit_status(&outcome, config.plugins.required);
    if status == 0 {
        for registration in loader.registry().registrations() {
            tracing::info!(
                "Registered {} via {} at {}",
                registration.path.display(),
                registration.symbol,
                registration.registered_at.to_rfc3339()
            );
        }
        tracing::info!("plugin-host finished with {} registration(s)", loader.registry().len());
    }
    ExitCode::from(status)
}

fn load(path: &Path, strict: bool) -> ExitCode {
    let loader = PluginLoader::native(Arc::new(PluginRegistry::new()));

    if loader.load_and_report(path) || !strict {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn init_config() -> ExitCode {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
