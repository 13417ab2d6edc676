//! Flat-file persistence for the flight registry.
//!
//! Each flight is stored as one line of three whitespace-separated integers,
//! `id capacity reserved`, in registry order:
//!
//! ```text
//! 101 180 12
//! 202 0 0
//! ```
//!
//! Loading rebuilds every record through [`FlightRecord::new`], so values
//! edited by hand into an invalid state are normalized rather than rejected.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::flight::{FlightId, FlightRecord};
use crate::registry::FlightRegistry;

/// Number of integers that make up one stored record.
const FIELDS_PER_RECORD: usize = 3;

/// A flight data file on disk.
///
/// # Examples
///
/// ```no_run
/// use flightbook::{FlightId, FlightStore};
///
/// let store = FlightStore::new("flights.txt");
/// let mut registry = store.load().unwrap();
/// registry.create(FlightId::new(101), 180).unwrap();
/// store.save(&registry).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStore {
    path: PathBuf,
}

impl FlightStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the registry from the backing file.
    ///
    /// A missing file is not an error: it yields an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is
    /// malformed (see [`decode`]).
    pub fn load(&self) -> Result<FlightRegistry> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No saved data found at {}, starting empty",
                    self.path.display()
                );
                return Ok(FlightRegistry::new());
            }
            Err(e) => return Err(e.into()),
        };

        let registry = decode(file)?;
        log::info!(
            "Loaded {} flight(s) from {}",
            registry.len(),
            self.path.display()
        );
        Ok(registry)
    }

    /// Saves the registry, replacing the backing file's contents.
    ///
    /// Missing parent directories are created. The write is not atomic.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created or written.
    pub fn save(&self, registry: &FlightRegistry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        encode(registry, &mut writer)?;
        writer.flush()?;

        log::info!(
            "Saved {} flight(s) to {}",
            registry.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Writes every flight as an `id capacity reserved` line.
///
/// # Errors
///
/// Returns an error if writing fails.
///
/// # Examples
///
/// ```
/// use flightbook::{storage, FlightId, FlightRegistry};
///
/// let mut registry = FlightRegistry::new();
/// registry.create(FlightId::new(101), 180).unwrap();
/// registry.reserve(FlightId::new(101), 12).unwrap();
///
/// let mut out = Vec::new();
/// storage::encode(&registry, &mut out).unwrap();
/// assert_eq!(out, b"101 180 12\n");
/// ```
pub fn encode<W: Write>(registry: &FlightRegistry, writer: &mut W) -> Result<()> {
    for flight in registry {
        writeln!(
            writer,
            "{} {} {}",
            flight.id(),
            flight.capacity(),
            flight.reserved()
        )?;
    }
    Ok(())
}

/// Reads a registry from `id capacity reserved` triples.
///
/// Tokens are consumed until the input is exhausted, so a record may span
/// lines. Out-of-range values are normalized by [`FlightRecord::new`]. When
/// an identifier repeats, the first record wins and later ones are skipped
/// with a warning.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the input is not UTF-8, a token is not an
/// integer in the `i32` range, or the input ends partway through a record,
/// and [`Error::Io`] if reading fails.
///
/// # Examples
///
/// ```
/// use flightbook::storage;
///
/// let registry = storage::decode("101 180 12\n7 10 99\n".as_bytes()).unwrap();
/// assert_eq!(registry.len(), 2);
/// // 99 seats exceed 105% of 10 and are clamped to 10
/// assert_eq!(registry.list()[1].reserved(), 10);
/// ```
pub fn decode<R: Read>(mut reader: R) -> Result<FlightRegistry> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let contents = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        Error::Parse {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
            message: "data file is not valid UTF-8".to_string(),
        }
    })?;

    let mut registry = FlightRegistry::new();
    let mut fields = [0i32; FIELDS_PER_RECORD];
    let mut filled = 0;
    let mut record_line = 0;

    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        for token in line.split_whitespace() {
            if filled == 0 {
                record_line = line_number;
            }
            fields[filled] = parse_field(token, line_number)?;
            filled += 1;

            if filled == FIELDS_PER_RECORD {
                add_record(&mut registry, fields, record_line);
                filled = 0;
            }
        }
    }

    if filled != 0 {
        return Err(Error::Parse {
            line: record_line,
            message: format!(
                "incomplete record: expected {FIELDS_PER_RECORD} integers, found {filled}"
            ),
        });
    }

    Ok(registry)
}

fn parse_field(token: &str, line: usize) -> Result<i32> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("expected an integer, found '{token}'"),
    })
}

fn add_record(registry: &mut FlightRegistry, [id, capacity, reserved]: [i32; 3], line: usize) {
    let record = FlightRecord::new(FlightId::new(id), capacity, reserved);

    if i64::from(record.capacity()) != i64::from(capacity)
        || i64::from(record.reserved()) != i64::from(reserved)
    {
        log::debug!(
            "Normalized flight {id} at line {line}: capacity {capacity} -> {}, reserved {reserved} -> {}",
            record.capacity(),
            record.reserved()
        );
    }

    if let Err(e) = registry.insert(record) {
        log::warn!("Skipping record at line {line}: {e}");
    }
}
