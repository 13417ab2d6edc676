//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{open_store, save_registry, GlobalOptions};
use clap::Args;
use flightbook::FlightId;

/// Delete a flight.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Flight identifier
    #[arg(allow_negative_numbers = true)]
    pub id: i32,

    /// Apply the change without saving it
    #[arg(long)]
    pub dry_run: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, store) = open_store(global)?;
        let mut registry = store.load()?;

        let removed = registry.delete(FlightId::new(self.id))?;
        global.status(&format!(
            "Deleted flight {} ({} of {} seats reserved)",
            removed.id(),
            removed.reserved(),
            removed.capacity()
        ));

        save_registry(global, &store, &registry, self.dry_run)
    }
}
