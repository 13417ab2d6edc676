#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flightbook
//!
//! A library for managing seat reservations on a small registry of flights.
//!
//! Every flight tracks a seat capacity and a reserved-seat count, and may be
//! overbooked up to 105% of its capacity. The registry persists to a flat
//! text file of `id capacity reserved` lines.
//!
//! ## Core Types
//!
//! - [`FlightRecord`] and [`FlightId`]: One flight and its seat invariant
//! - [`FlightRegistry`]: The ordered, id-unique collection of flights
//! - [`FlightStore`]: Flat-file persistence
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use flightbook::{FlightId, FlightRegistry};
//!
//! let mut registry = FlightRegistry::new();
//! registry.create(FlightId::new(1), 100).unwrap();
//!
//! // Up to 105% of capacity may be reserved
//! registry.reserve(FlightId::new(1), 105).unwrap();
//! let err = registry.reserve(FlightId::new(1), 1).unwrap_err();
//! assert!(err.is_rejected());
//! ```

pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod output;
pub mod registry;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use flight::{FlightId, FlightRecord, OVERBOOKING_PERCENT};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::ListingFormatter;
pub use registry::FlightRegistry;
pub use storage::FlightStore;
