//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books seats on an
//! existing flight. Requests that would push the flight past 105% of its
//! capacity are rejected and nothing is saved.

use crate::error::CliError;
use crate::utils::{open_store, save_registry, GlobalOptions};
use clap::Args;
use flightbook::FlightId;

/// Reserve seats on a flight.
#[derive(Debug, Args)]
pub struct ReserveCommand {
    /// Flight identifier
    #[arg(allow_negative_numbers = true)]
    pub id: i32,

    /// Number of seats to reserve
    #[arg(allow_negative_numbers = true)]
    pub seats: i32,

    /// Apply the change without saving it
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, store) = open_store(global)?;
        let mut registry = store.load()?;

        let flight = registry.reserve(FlightId::new(self.id), self.seats)?;
        global.status(&format!(
            "Reserved {} seat(s) on flight {} ({}/{} reserved, {} available)",
            self.seats,
            self.id,
            flight.reserved(),
            flight.capacity(),
            flight.available_seats()
        ));

        save_registry(global, &store, &registry, self.dry_run)
    }
}
