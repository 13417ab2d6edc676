//! Create command implementation.

use crate::error::CliError;
use crate::utils::{open_store, save_registry, GlobalOptions};
use clap::Args;
use flightbook::FlightId;

/// Create a new flight with no seats reserved.
#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Flight identifier
    #[arg(allow_negative_numbers = true)]
    pub id: i32,

    /// Seat capacity (negative values are treated as 0)
    #[arg(allow_negative_numbers = true)]
    pub capacity: i32,

    /// Apply the change without saving it
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, store) = open_store(global)?;
        let mut registry = store.load()?;

        let capacity = registry.create(FlightId::new(self.id), self.capacity)?.capacity();
        global.status(&format!(
            "Created flight {} with capacity {capacity}",
            self.id
        ));

        save_registry(global, &store, &registry, self.dry_run)
    }
}
