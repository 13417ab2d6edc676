//! Listing formatter implementations.

use crate::{Error, FlightRecord, Result};

use super::ListingFormatter;

/// Printed by the table format when there are no flights.
pub const EMPTY_LISTING: &str = "No flights in the system.";

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["id", "capacity", "reserved", "load_factor"];

const RULE: &str = "--------------------------------------------------";

/// Formatter for the fixed-width console table.
///
/// Columns are right-aligned in widths of 10, 12, 12 and 12 characters and
/// the load factor is shown with one decimal place.
pub struct TableFormatter;

impl ListingFormatter for TableFormatter {
    fn format(&self, flights: &[FlightRecord]) -> Result<String> {
        if flights.is_empty() {
            return Ok(format!("{EMPTY_LISTING}\n"));
        }

        let mut lines = vec![
            RULE.to_string(),
            format!(
                "{:>10}{:>12}{:>12}{:>12}",
                "FlightID", "Capacity", "Reserved", "Load %"
            ),
            RULE.to_string(),
        ];
        lines.extend(flights.iter().map(|flight| {
            format!(
                "{:>10}{:>12}{:>12}{:>12.1}%",
                flight.id(),
                flight.capacity(),
                flight.reserved(),
                flight.load_factor()
            )
        }));
        lines.push(RULE.to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

/// Formatter for JSON output.
///
/// Produces a pretty-printed array of objects with `id`, `capacity`,
/// `reserved` and the unrounded `load_factor`.
pub struct JsonFormatter;

impl ListingFormatter for JsonFormatter {
    fn format(&self, flights: &[FlightRecord]) -> Result<String> {
        let rows: Vec<serde_json::Value> = flights
            .iter()
            .map(|f| {
                serde_json::json!({
                    "id": f.id(),
                    "capacity": f.capacity(),
                    "reserved": f.reserved(),
                    "load_factor": f.load_factor(),
                })
            })
            .collect();

        let mut out = serde_json::to_string_pretty(&rows).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })?;
        out.push('\n');
        Ok(out)
    }
}

/// Formatter for delimited output (CSV or TSV) with a header row.
pub struct DelimitedFormatter {
    delimiter: u8,
}

impl DelimitedFormatter {
    /// Create a formatter separating fields with `delimiter`.
    #[must_use]
    pub const fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

fn csv_error(e: impl std::fmt::Display) -> Error {
    Error::Validation {
        field: "delimited_output".to_string(),
        message: format!("failed to write delimited output: {e}"),
    }
}

impl ListingFormatter for DelimitedFormatter {
    fn format(&self, flights: &[FlightRecord]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
        for flight in flights {
            writer
                .write_record(&[
                    flight.id().to_string(),
                    flight.capacity().to_string(),
                    flight.reserved().to_string(),
                    format!("{:.1}", flight.load_factor()),
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer.into_inner().map_err(csv_error)?;
        String::from_utf8(bytes).map_err(csv_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlightId;

    fn sample() -> Vec<FlightRecord> {
        vec![
            FlightRecord::new(FlightId::new(101), 180, 12),
            FlightRecord::new(FlightId::new(2), 0, 0),
        ]
    }

    #[test]
    fn test_table_empty() {
        let out = TableFormatter.format(&[]).unwrap();
        assert_eq!(out, "No flights in the system.\n");
    }

    #[test]
    fn test_table_layout() {
        let out = TableFormatter.format(&sample()).unwrap();
        let expected = "\
--------------------------------------------------
  FlightID    Capacity    Reserved      Load %
--------------------------------------------------
       101         180          12         6.7%
         2           0           0         0.0%
--------------------------------------------------
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_table_overbooked_load() {
        let flights = vec![FlightRecord::new(FlightId::new(1), 100, 105)];
        let out = TableFormatter.format(&flights).unwrap();
        assert!(out.contains("       105.0%"));
    }

    #[test]
    fn test_json() {
        let out = JsonFormatter.format(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], 101);
        assert_eq!(rows[0]["capacity"], 180);
        assert_eq!(rows[0]["reserved"], 12);
        assert!((rows[0]["load_factor"].as_f64().unwrap() - 6.666_666).abs() < 1e-3);
        assert!(rows[1]["load_factor"].as_f64().unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(JsonFormatter.format(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_csv() {
        let out = DelimitedFormatter::new(b',').format(&sample()).unwrap();
        assert_eq!(
            out,
            "id,capacity,reserved,load_factor\n101,180,12,6.7\n2,0,0,0.0\n"
        );
    }

    #[test]
    fn test_tsv_header_only_when_empty() {
        let out = DelimitedFormatter::new(b'\t').format(&[]).unwrap();
        assert_eq!(out, "id\tcapacity\treserved\tload_factor\n");
    }
}
