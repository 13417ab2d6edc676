//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FLIGHTBOOK_*` environment variables
//! that override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides [`Config::data_file`].
pub const DATA_FILE_ENV: &str = "FLIGHTBOOK_DATA_FILE";

/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "FLIGHTBOOK_OUTPUT_FORMAT";

/// Overrides [`Config::autosave`].
pub const AUTOSAVE_ENV: &str = "FLIGHTBOOK_AUTOSAVE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use flightbook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown output format, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var(DATA_FILE_ENV) {
            config.data_file = Some(PathBuf::from(path));
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(AUTOSAVE_ENV) {
            config.autosave = Some(Self::parse_bool(AUTOSAVE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
