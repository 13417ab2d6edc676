//! Library exports for flightbook-cli.
//!
//! This module exports the CLI structure and the interactive session so
//! they can be exercised from tests and benchmarks.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
pub use commands::shell::run_session;
