//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{open_store, save_registry, GlobalOptions};
use clap::Args;
use flightbook::FlightId;

/// Cancel reserved seats on a flight.
#[derive(Debug, Args)]
pub struct CancelCommand {
    /// Flight identifier
    #[arg(allow_negative_numbers = true)]
    pub id: i32,

    /// Number of seats to cancel
    #[arg(allow_negative_numbers = true)]
    pub seats: i32,

    /// Apply the change without saving it
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, store) = open_store(global)?;
        let mut registry = store.load()?;

        let reserved = registry.cancel(FlightId::new(self.id), self.seats)?.reserved();
        global.status(&format!(
            "Canceled {} seat(s) on flight {} ({reserved} still reserved)",
            self.seats, self.id
        ));

        save_registry(global, &store, &registry, self.dry_run)
    }
}
