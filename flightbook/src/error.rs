//! Error types for the flightbook library.
//!
//! This module provides the error hierarchy for all operations in the
//! flightbook library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::flight::FlightId;

/// Result type alias for operations that may fail with a flightbook error.
///
/// # Examples
///
/// ```
/// use flightbook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(180)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flightbook library.
///
/// Every registry operation reports its outcome through this type. None of
/// these conditions is fatal to the process.
#[derive(Debug, Error)]
pub enum Error {
    /// A flight with this identifier already exists.
    #[error("flight {id} already exists")]
    DuplicateId {
        /// The identifier that is already taken.
        id: FlightId,
    },

    /// No flight with this identifier exists.
    #[error("flight {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: FlightId,
    },

    /// A reserve or cancel request named a non-positive seat count.
    #[error("invalid seat count {seats}: must be greater than zero")]
    InvalidQuantity {
        /// The rejected seat count.
        seats: i32,
    },

    /// A reservation would push the load factor above the overbooking ceiling.
    #[error(
        "cannot reserve {requested} seat(s) on flight {id}: \
         {reserved} of at most {max_seats} already reserved"
    )]
    CapacityExceeded {
        /// The flight the reservation targeted.
        id: FlightId,
        /// The number of seats requested.
        requested: i32,
        /// The number of seats reserved before the request.
        reserved: u32,
        /// The most seats the flight may ever hold.
        max_seats: u32,
    },

    /// A cancellation named more seats than are currently reserved.
    #[error(
        "cannot cancel {requested} seat(s) on flight {id}: only {reserved} reserved"
    )]
    InsufficientReserved {
        /// The flight the cancellation targeted.
        id: FlightId,
        /// The number of seats requested.
        requested: i32,
        /// The number of seats currently reserved.
        reserved: u32,
    },

    /// The flight data file could not be parsed.
    #[error("malformed flight data at line {line}: {message}")]
    Parse {
        /// The 1-based line where the problem was found.
        line: usize,
        /// A description of the problem.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates the target flight does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightbook::{Error, FlightId};
    ///
    /// let err = Error::NotFound { id: FlightId::new(7) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a rejected seat mutation.
    ///
    /// A rejection means the flight exists but refused the reserve or cancel
    /// request, as opposed to [`Error::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flightbook::Error;
    ///
    /// let err = Error::InvalidQuantity { seats: 0 };
    /// assert!(err.is_rejected());
    /// assert!(!err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity { .. }
                | Self::CapacityExceeded { .. }
                | Self::InsufficientReserved { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_error() {
        let err = Error::DuplicateId {
            id: FlightId::new(101),
        };
        let display = format!("{err}");
        assert!(display.contains("101"));
        assert!(display.contains("already exists"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            id: FlightId::new(42),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("42"));
        assert!(err.is_not_found());
        assert!(!err.is_rejected());
    }

    #[test]
    fn test_invalid_quantity_error() {
        let err = Error::InvalidQuantity { seats: -3 };
        let display = format!("{err}");
        assert!(display.contains("invalid seat count -3"));
        assert!(err.is_rejected());
    }

    #[test]
    fn test_capacity_exceeded_error() {
        let err = Error::CapacityExceeded {
            id: FlightId::new(1),
            requested: 1,
            reserved: 105,
            max_seats: 105,
        };
        let display = format!("{err}");
        assert!(display.contains("cannot reserve 1 seat(s) on flight 1"));
        assert!(display.contains("at most 105"));
        assert!(err.is_rejected());
    }

    #[test]
    fn test_insufficient_reserved_error() {
        let err = Error::InsufficientReserved {
            id: FlightId::new(3),
            requested: 5,
            reserved: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("cannot cancel 5"));
        assert!(display.contains("only 2 reserved"));
        assert!(err.is_rejected());
    }

    #[test]
    fn test_parse_error() {
        let err = Error::Parse {
            line: 4,
            message: "expected an integer, found 'abc'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("line 4"));
        assert!(display.contains("abc"));
        assert!(!err.is_rejected());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "data_file".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("data_file"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NotFound {
                id: FlightId::new(9),
            })
        }

        assert!(returns_result().is_err());
    }
}
