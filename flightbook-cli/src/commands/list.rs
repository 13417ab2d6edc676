//! List command implementation.
//!
//! This module implements the `list` command, which displays all flights
//! in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{open_store, GlobalOptions};
use clap::Args;
use flightbook::config::OutputFormat;
use std::io::{self, Write};

/// List all flights.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format (default: from configuration, else table)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, store) = open_store(global)?;
        let registry = store.load()?;

        let format = self.format.unwrap_or_else(|| config.output_format());
        let formatter = format.create_formatter();
        let listing = formatter.format(registry.list())?;

        let mut stdout = io::stdout();
        stdout.write_all(listing.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
