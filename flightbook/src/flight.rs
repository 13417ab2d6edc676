//! Flight record types for tracking seat reservations.
//!
//! This module provides the [`FlightRecord`] entity, which owns one flight's
//! capacity and reserved-seat count and enforces the overbooking ceiling on
//! construction and on every mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Overbooking ceiling, as a percentage of capacity.
///
/// A flight may hold at most `OVERBOOKING_PERCENT` reserved seats per 100
/// seats of capacity.
pub const OVERBOOKING_PERCENT: u64 = 105;

/// A flight identifier.
///
/// Identifiers are unique within a registry and never change once a flight
/// has been created.
///
/// # Examples
///
/// ```
/// use flightbook::FlightId;
///
/// let id = FlightId::from(101);
/// assert_eq!(id.value(), 101);
/// assert_eq!(id.to_string(), "101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(i32);

impl FlightId {
    /// Creates a flight identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for FlightId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward so width and alignment flags apply
        fmt::Display::fmt(&self.0, f)
    }
}

/// One flight's seat state.
///
/// The record maintains `100 * reserved <= 105 * capacity` at all times.
/// Construction silently normalizes out-of-range input, while
/// [`reserve_seats`](Self::reserve_seats) and
/// [`cancel_seats`](Self::cancel_seats) reject any request that would break
/// the invariant and leave the record untouched.
///
/// # Examples
///
/// ```
/// use flightbook::{FlightId, FlightRecord};
///
/// let mut flight = FlightRecord::with_capacity(FlightId::new(1), 100);
/// flight.reserve_seats(105).unwrap();
/// assert!(flight.reserve_seats(1).is_err());
/// assert_eq!(flight.reserved(), 105);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    id: FlightId,
    capacity: u32,
    reserved: u32,
}

impl FlightRecord {
    /// Creates a flight record, normalizing out-of-range values.
    ///
    /// Negative `capacity` and `reserved` clamp to zero. If `reserved` would
    /// exceed the overbooking ceiling it is lowered to
    /// `floor(105 * capacity / 100)`. This never fails, so hand-edited data
    /// files always load.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightbook::{FlightId, FlightRecord};
    ///
    /// let flight = FlightRecord::new(FlightId::new(7), 10, 50);
    /// assert_eq!(flight.capacity(), 10);
    /// assert_eq!(flight.reserved(), 10);
    ///
    /// let flight = FlightRecord::new(FlightId::new(8), -4, -1);
    /// assert_eq!(flight.capacity(), 0);
    /// assert_eq!(flight.reserved(), 0);
    /// ```
    #[must_use]
    pub fn new(id: FlightId, capacity: i32, reserved: i32) -> Self {
        let capacity = clamp_non_negative(capacity);
        let reserved = clamp_non_negative(reserved).min(max_seats_for(capacity));

        Self {
            id,
            capacity,
            reserved,
        }
    }

    /// Creates a flight record with no seats reserved.
    #[must_use]
    pub fn with_capacity(id: FlightId, capacity: i32) -> Self {
        Self::new(id, capacity, 0)
    }

    /// Returns the flight identifier.
    #[must_use]
    pub const fn id(&self) -> FlightId {
        self.id
    }

    /// Returns the seat capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the number of reserved seats.
    #[must_use]
    pub const fn reserved(&self) -> u32 {
        self.reserved
    }

    /// Returns the most seats this flight may ever have reserved.
    ///
    /// This is `floor(105 * capacity / 100)`, capped at `i32::MAX` so that
    /// every record stays representable in the data file.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightbook::{FlightId, FlightRecord};
    ///
    /// assert_eq!(FlightRecord::with_capacity(FlightId::new(1), 100).max_seats(), 105);
    /// assert_eq!(FlightRecord::with_capacity(FlightId::new(2), 19).max_seats(), 19);
    /// ```
    #[must_use]
    pub fn max_seats(&self) -> u32 {
        max_seats_for(self.capacity)
    }

    /// Returns how many more seats can be reserved right now.
    #[must_use]
    pub fn available_seats(&self) -> u32 {
        self.max_seats() - self.reserved
    }

    /// Returns reserved seats as a percentage of capacity.
    ///
    /// Returns `0.0` for a zero-capacity flight. The value is not rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightbook::{FlightId, FlightRecord};
    ///
    /// let flight = FlightRecord::new(FlightId::new(1), 200, 50);
    /// assert!((flight.load_factor() - 25.0).abs() < f64::EPSILON);
    ///
    /// let empty = FlightRecord::with_capacity(FlightId::new(2), 0);
    /// assert!(empty.load_factor().abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            100.0 * f64::from(self.reserved) / f64::from(self.capacity)
        }
    }

    /// Returns `true` if [`reserve_seats`](Self::reserve_seats) would accept `seats`.
    #[must_use]
    pub fn can_reserve(&self, seats: i32) -> bool {
        seats > 0 && u64::from(self.reserved) + seat_count(seats) <= u64::from(self.max_seats())
    }

    /// Reserves `seats` additional seats.
    ///
    /// The request is all-or-nothing: if it would push the load factor past
    /// the ceiling nothing is reserved and the caller must retry with fewer
    /// seats.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidQuantity`] if `seats <= 0`
    /// - [`Error::CapacityExceeded`] if `100 * (reserved + seats) > 105 * capacity`
    pub fn reserve_seats(&mut self, seats: i32) -> Result<()> {
        if seats <= 0 {
            return Err(Error::InvalidQuantity { seats });
        }

        if !self.can_reserve(seats) {
            return Err(Error::CapacityExceeded {
                id: self.id,
                requested: seats,
                reserved: self.reserved,
                max_seats: self.max_seats(),
            });
        }

        // can_reserve bounds the sum by max_seats, which fits in u32
        self.reserved += clamp_non_negative(seats);
        Ok(())
    }

    /// Cancels `seats` reserved seats.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidQuantity`] if `seats <= 0`
    /// - [`Error::InsufficientReserved`] if `seats` exceeds the reserved count
    pub fn cancel_seats(&mut self, seats: i32) -> Result<()> {
        if seats <= 0 {
            return Err(Error::InvalidQuantity { seats });
        }

        let requested = clamp_non_negative(seats);
        if requested > self.reserved {
            return Err(Error::InsufficientReserved {
                id: self.id,
                requested: seats,
                reserved: self.reserved,
            });
        }

        self.reserved -= requested;
        Ok(())
    }
}

fn clamp_non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn seat_count(seats: i32) -> u64 {
    u64::from(clamp_non_negative(seats))
}

/// Largest reserved count the data file can represent.
const MAX_STORED_SEATS: u64 = i32::MAX as u64;

#[allow(clippy::cast_possible_truncation)]
fn max_seats_for(capacity: u32) -> u32 {
    // floor(105% of capacity), capped so saved records always load again
    (OVERBOOKING_PERCENT * u64::from(capacity) / 100).min(MAX_STORED_SEATS) as u32
}


#[cfg(test)]
mod proptests;
