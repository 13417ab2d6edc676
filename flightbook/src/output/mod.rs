//! Output formatting module for flight listings.
//!
//! This module renders the registry's flights as the fixed-width console
//! table, JSON, CSV or TSV.

mod formatters;

use crate::config::OutputFormat;
use crate::{FlightRecord, Result};

pub use formatters::{DelimitedFormatter, JsonFormatter, TableFormatter, EMPTY_LISTING};

/// Trait for formatting a flight listing into an output format.
pub trait ListingFormatter {
    /// Format the given flights, in order, into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, flights: &[FlightRecord]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightbook::config::OutputFormat;
    /// use flightbook::{FlightId, FlightRecord};
    ///
    /// let flights = vec![FlightRecord::new(FlightId::new(7), 10, 4)];
    /// let csv = OutputFormat::Csv.create_formatter().format(&flights).unwrap();
    /// assert_eq!(csv, "id,capacity,reserved,load_factor\n7,10,4,40.0\n");
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn ListingFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(DelimitedFormatter::new(b',')),
            Self::Tsv => Box::new(DelimitedFormatter::new(b'\t')),
        }
    }
}
