//! Build script for flightbook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("flightbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage flight seat reservations")
        .long_about(
            "Command-line tool for managing seat reservations on a registry of flights, \
             with overbooking allowed up to 105% of capacity",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("FLIGHTBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .help("Override the data file location")
                .value_name("PATH")
                .global(true)
                .env("FLIGHTBOOK_DATA_FILE"),
        )
        .subcommands(vec![
            Command::new("create")
                .about("Create a flight")
                .long_about("Create a flight with the given capacity and no seats reserved"),
            Command::new("delete")
                .about("Delete a flight")
                .long_about("Remove a flight and all of its reservations"),
            Command::new("reserve")
                .about("Reserve seats on a flight")
                .long_about("Reserve seats, up to 105% of the flight's capacity"),
            Command::new("cancel")
                .about("Cancel reserved seats on a flight")
                .long_about("Cancel seats, never more than are currently reserved"),
            Command::new("list")
                .about("List all flights")
                .long_about("Display all flights as a table, JSON, CSV or TSV"),
            Command::new("show")
                .about("Show the details of one flight")
                .long_about("Display capacity, reservations and load factor for one flight"),
            Command::new("shell")
                .about("Start an interactive booking session")
                .long_about("Run the numbered booking menu, saving on exit"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("flightbook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
