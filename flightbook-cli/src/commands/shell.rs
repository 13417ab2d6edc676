//! Interactive shell command.
//!
//! This module implements the `shell` command, a numbered menu loop over a
//! loaded registry. The loop itself ([`run_session`]) works on any
//! `BufRead`/`Write` pair so it can be driven without a terminal.

use crate::error::CliError;
use crate::utils::{open_store, save_registry, GlobalOptions};
use clap::Args;
use flightbook::output::TableFormatter;
use flightbook::{FlightId, FlightRegistry, ListingFormatter};
use std::io::{self, BufRead, Write};

const MENU: &str = "\
====== Flight Booking System ======
1. Create Flight
2. Delete Flight
3. Reserve Seats
4. Cancel Seats
5. Show All Flights
6. Save and Exit
------------------------------------";

/// Start an interactive booking session.
#[derive(Debug, Args)]
pub struct ShellCommand {
    /// Exit without saving, even when autosave is enabled
    #[arg(long)]
    pub no_save: bool,
}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, store) = open_store(global)?;
        let mut registry = store.load()?;

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(&mut registry, stdin.lock(), &mut stdout)?;

        if self.no_save || !config.autosave() {
            global.status("Exiting without saving");
            return Ok(());
        }
        save_registry(global, &store, &registry, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Create,
    Delete,
    Reserve,
    Cancel,
    Show,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::Delete),
            "3" => Some(Self::Reserve),
            "4" => Some(Self::Cancel),
            "5" => Some(Self::Show),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// End of input is treated like choosing "Save and Exit". Saving is left to
/// the caller.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    registry: &mut FlightRegistry,
    input: R,
    output: &mut W,
) -> Result<(), CliError> {
    let mut lines = input.lines();

    loop {
        writeln!(output, "\n{MENU}")?;
        let Some(line) = prompt(&mut lines, output, "Choose an option: ")? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "Invalid option. Try again.")?;
            continue;
        };

        let outcome = match choice {
            MenuChoice::Create => {
                let Some(args) = prompt(&mut lines, output, "Enter Flight ID and Capacity: ")?
                else {
                    break;
                };
                create(registry, &args)
            }
            MenuChoice::Delete => {
                let Some(args) = prompt(&mut lines, output, "Enter Flight ID to delete: ")? else {
                    break;
                };
                delete(registry, &args)
            }
            MenuChoice::Reserve => {
                let Some(args) = prompt(
                    &mut lines,
                    output,
                    "Enter Flight ID and number of seats to reserve: ",
                )?
                else {
                    break;
                };
                reserve(registry, &args)
            }
            MenuChoice::Cancel => {
                let Some(args) = prompt(
                    &mut lines,
                    output,
                    "Enter Flight ID and number of seats to cancel: ",
                )?
                else {
                    break;
                };
                cancel(registry, &args)
            }
            MenuChoice::Show => TableFormatter.format(registry.list())?,
            MenuChoice::Exit => break,
        };
        write!(output, "{outcome}")?;
    }

    writeln!(output, "Goodbye!")?;
    output.flush()?;
    Ok(())
}

/// Writes `text` and reads one line; `None` at end of input.
fn prompt<I, W>(lines: &mut I, output: &mut W, text: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(output, "{text}")?;
    output.flush()?;

    let line = lines.next().transpose()?;
    if line.is_none() {
        writeln!(output)?;
    }
    Ok(line)
}

fn create(registry: &mut FlightRegistry, args: &str) -> String {
    let Some([id, capacity]) = parse_numbers(args) else {
        return "Invalid input: expected ID and CAPACITY.\n".to_string();
    };
    match registry.create(FlightId::new(id), capacity) {
        Ok(flight) => format!("Flight {id} created with capacity {}.\n", flight.capacity()),
        Err(e) => format!("Cannot create flight: {e}.\n"),
    }
}

fn delete(registry: &mut FlightRegistry, args: &str) -> String {
    let Some([id]) = parse_numbers(args) else {
        return "Invalid input: expected ID.\n".to_string();
    };
    match registry.delete(FlightId::new(id)) {
        Ok(_) => format!("Flight {id} deleted.\n"),
        Err(e) => format!("Cannot delete flight: {e}.\n"),
    }
}

fn reserve(registry: &mut FlightRegistry, args: &str) -> String {
    let Some([id, seats]) = parse_numbers(args) else {
        return "Invalid input: expected ID and SEATS.\n".to_string();
    };
    match registry.reserve(FlightId::new(id), seats) {
        Ok(_) => format!("Reserved {seats} seats for flight {id}.\n"),
        Err(e) => format!("Cannot reserve seats: {e}.\n"),
    }
}

fn cancel(registry: &mut FlightRegistry, args: &str) -> String {
    let Some([id, seats]) = parse_numbers(args) else {
        return "Invalid input: expected ID and SEATS.\n".to_string();
    };
    match registry.cancel(FlightId::new(id), seats) {
        Ok(_) => format!("Canceled {seats} seats for flight {id}.\n"),
        Err(e) => format!("Cannot cancel seats: {e}.\n"),
    }
}

/// Parses exactly `N` whitespace-separated integers.
fn parse_numbers<const N: usize>(line: &str) -> Option<[i32; N]> {
    let mut values = [0i32; N];
    let mut tokens = line.split_whitespace();
    for value in &mut values {
        *value = tokens.next()?.parse().ok()?;
    }
    tokens.next().is_none().then_some(values)
}
