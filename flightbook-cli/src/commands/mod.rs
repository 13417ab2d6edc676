//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `create`: Create a flight
//! - `delete`: Delete a flight
//! - `reserve`: Reserve seats on a flight
//! - `cancel`: Cancel reserved seats
//! - `list`: List all flights
//! - `show`: Show one flight
//! - `shell`: Interactive menu session
//! - `completions`: Generate shell completion scripts

pub mod cancel;
pub mod completions;
pub mod create;
pub mod delete;
pub mod list;
pub mod reserve;
pub mod shell;
pub mod show;

pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use shell::ShellCommand;
pub use show::ShowCommand;
