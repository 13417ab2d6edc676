//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading and opening
//! the flight store.

use crate::error::CliError;
use flightbook::config::default_data_dir;
use flightbook::{Config, ConfigBuilder, FlightRegistry, FlightStore};
use std::path::{Path, PathBuf};

/// File name of the default data file inside the data directory.
pub const DATA_FILE_NAME: &str = "flights.txt";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the data file location.
    pub data_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Print a status message to stderr unless `--quiet` was given.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

/// Resolve the data directory: `--data-dir` or `~/.flightbook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project `flightbook.yaml`
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the data file.
///
/// Priority: `--data-file` > configured `data_file` > `{data_dir}/flights.txt`.
pub fn resolve_data_file(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(ref path) = global.data_file {
        return Ok(path.clone());
    }
    if let Some(ref path) = config.data_file {
        return Ok(path.clone());
    }
    Ok(resolve_data_dir(global)?.join(DATA_FILE_NAME))
}

/// Load configuration and open the flight store it points at.
pub fn open_store(global: &GlobalOptions) -> Result<(Config, FlightStore), CliError> {
    let config = load_configuration(global)?;
    let path = resolve_data_file(global, &config)?;
    log::debug!("Using data file {}", path.display());
    Ok((config, FlightStore::new(path)))
}

/// Save the registry unless this is a dry run, reporting the outcome.
pub fn save_registry(
    global: &GlobalOptions,
    store: &FlightStore,
    registry: &FlightRegistry,
    dry_run: bool,
) -> Result<(), CliError> {
    if dry_run {
        global.status("Dry run - changes not saved");
        return Ok(());
    }

    store.save(registry)?;
    global.status(&format!("Data saved to {}", shorten_path(store.path())));
    Ok(())
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
