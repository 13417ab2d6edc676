//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CancelCommand, CompletionsCommand, CreateCommand, DeleteCommand, ListCommand, ReserveCommand,
    ShellCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing flight seat reservations.
#[derive(Debug, Parser)]
#[command(name = "flightbook")]
#[command(version, about = "Manage flight seat reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "FLIGHTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the data file location
    #[arg(long, value_name = "PATH", global = true, env = "FLIGHTBOOK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a flight
    Create(CreateCommand),

    /// Delete a flight
    Delete(DeleteCommand),

    /// Reserve seats on a flight
    Reserve(ReserveCommand),

    /// Cancel reserved seats on a flight
    Cancel(CancelCommand),

    /// List all flights
    List(ListCommand),

    /// Show the details of one flight
    Show(ShowCommand),

    /// Start an interactive booking session
    Shell(ShellCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
