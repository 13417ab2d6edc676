//! Show command implementation.

use crate::error::CliError;
use crate::utils::{open_store, GlobalOptions};
use clap::Args;
use flightbook::{FlightId, FlightRecord};

/// Show the details of one flight.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Flight identifier
    #[arg(allow_negative_numbers = true)]
    pub id: i32,

    /// Print the details as a JSON object
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, store) = open_store(global)?;
        let registry = store.load()?;

        let id = FlightId::new(self.id);
        let flight = registry
            .get(id)
            .ok_or(flightbook::Error::NotFound { id })?;

        if self.json {
            let value = serde_json::json!({
                "id": flight.id(),
                "capacity": flight.capacity(),
                "reserved": flight.reserved(),
                "max_seats": flight.max_seats(),
                "available_seats": flight.available_seats(),
                "load_factor": flight.load_factor(),
            });
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| CliError::Io(e.into()))?;
            println!("{text}");
        } else {
            print!("{}", describe(flight));
        }

        Ok(())
    }
}

fn describe(flight: &FlightRecord) -> String {
    format!(
        "Flight:     {}\n\
         Capacity:   {}\n\
         Reserved:   {}\n\
         Max seats:  {}\n\
         Available:  {}\n\
         Load:       {:.1}%\n",
        flight.id(),
        flight.capacity(),
        flight.reserved(),
        flight.max_seats(),
        flight.available_seats(),
        flight.load_factor()
    )
}
