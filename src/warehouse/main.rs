use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use warehouse::api::WarehouseApi;
use warehouse::config::WarehouseConfig;
use warehouse::error::{Result, WarehouseError};
use warehouse::store::fs::FileStore;

mod args;
mod cli;
use args::Cli;
use cli::{Controller, Prompter};

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config = WarehouseConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        WarehouseConfig::default()
    });

    let store = FileStore::in_dir(&data_dir, &config.snapshot_file);
    let api = WarehouseApi::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    let mut controller = Controller::new(api, prompter, config);
    controller.startup()?;
    controller.run()
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "warehouse", "warehouse")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WarehouseError::Config("Could not determine data dir".to_string()))
}
