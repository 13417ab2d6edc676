//! Configuration schema definitions.
//!
//! This module defines the configuration structure for flightbook: where the
//! flight data lives and how listings are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Complete configuration structure.
///
/// Every field is optional so configurations from several sources can be
/// layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use flightbook::config::{Config, OutputFormat};
///
/// let config = Config {
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(config.autosave());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the flat flight data file.
    pub data_file: Option<PathBuf>,

    /// Default output format for listings.
    pub output_format: Option<OutputFormat>,

    /// Save the registry when an interactive session ends.
    pub autosave: Option<bool>,
}

impl Config {
    /// Returns the configured output format, defaulting to a table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Returns whether interactive sessions save on exit (default `true`).
    #[must_use]
    pub fn autosave(&self) -> bool {
        self.autosave.unwrap_or(true)
    }
}

/// Output format for flight listings.
///
/// # Examples
///
/// ```
/// use flightbook::config::OutputFormat;
///
/// let format: OutputFormat = "csv".parse().unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.to_string(), "csv");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width human-readable table.
    #[default]
    Table,
    /// JSON array of flight objects.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Tab-separated values with a header row.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!(
                "invalid output format '{s}' (expected table, json, csv or tsv)"
            )),
        }
    }
}
