//! The flight registry aggregate.
//!
//! [`FlightRegistry`] owns an ordered collection of [`FlightRecord`]s, unique
//! by identifier, and dispatches create/delete/reserve/cancel operations to
//! the matching record.

use std::path::Path;

use crate::error::{Error, Result};
use crate::flight::{FlightId, FlightRecord};
use crate::storage::FlightStore;

/// An ordered set of flights keyed by identifier.
///
/// Insertion order is iteration and display order. Lookups are linear scans,
/// which is adequate for the handful of flights a registry holds.
///
/// # Examples
///
/// ```
/// use flightbook::{FlightId, FlightRegistry};
///
/// let mut registry = FlightRegistry::new();
/// registry.create(FlightId::new(101), 180).unwrap();
/// registry.reserve(FlightId::new(101), 12).unwrap();
///
/// let flight = registry.get(FlightId::new(101)).unwrap();
/// assert_eq!(flight.reserved(), 12);
///
/// // Identifiers are unique
/// assert!(registry.create(FlightId::new(101), 90).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightRegistry {
    flights: Vec<FlightRecord>,
}

impl FlightRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flights: Vec::new(),
        }
    }

    /// Builds a registry from already-constructed records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if two records share an identifier.
    pub fn from_records(records: impl IntoIterator<Item = FlightRecord>) -> Result<Self> {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record)?;
        }
        Ok(registry)
    }

    /// Returns the number of flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns `true` if the registry holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns `true` if a flight with `id` exists.
    #[must_use]
    pub fn contains(&self, id: FlightId) -> bool {
        self.position(id).is_some()
    }

    /// Looks up a flight by identifier.
    #[must_use]
    pub fn get(&self, id: FlightId) -> Option<&FlightRecord> {
        self.flights.iter().find(|f| f.id() == id)
    }

    /// Returns all flights in insertion order.
    #[must_use]
    pub fn list(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Iterates over flights in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.flights.iter()
    }

    /// Creates a new flight with no seats reserved and appends it.
    ///
    /// A negative `capacity` is clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a flight with `id` already exists.
    /// The registry is left unchanged.
    pub fn create(&mut self, id: FlightId, capacity: i32) -> Result<&FlightRecord> {
        self.push(FlightRecord::with_capacity(id, capacity))
    }

    /// Appends an existing record, enforcing identifier uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a flight with the record's id exists.
    pub fn insert(&mut self, record: FlightRecord) -> Result<()> {
        self.push(record).map(|_| ())
    }

    /// Removes a flight and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no flight has this identifier.
    pub fn delete(&mut self, id: FlightId) -> Result<FlightRecord> {
        let index = self.position(id).ok_or(Error::NotFound { id })?;
        Ok(self.flights.remove(index))
    }

    /// Reserves seats on a flight.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no flight has this identifier
    /// - [`Error::InvalidQuantity`] or [`Error::CapacityExceeded`] if the
    ///   flight rejects the request
    pub fn reserve(&mut self, id: FlightId, seats: i32) -> Result<&FlightRecord> {
        let flight = self.get_mut(id)?;
        flight.reserve_seats(seats)?;
        Ok(flight)
    }

    /// Cancels seats on a flight.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no flight has this identifier
    /// - [`Error::InvalidQuantity`] or [`Error::InsufficientReserved`] if the
    ///   flight rejects the request
    pub fn cancel(&mut self, id: FlightId, seats: i32) -> Result<&FlightRecord> {
        let flight = self.get_mut(id)?;
        flight.cancel_seats(seats)?;
        Ok(flight)
    }

    /// Removes every flight.
    pub fn clear(&mut self) {
        self.flights.clear();
    }

    /// Loads a registry from a data file; see [`FlightStore::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        FlightStore::new(path.as_ref()).load()
    }

    /// Saves the registry to a data file; see [`FlightStore::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        FlightStore::new(path.as_ref()).save(self)
    }

    fn position(&self, id: FlightId) -> Option<usize> {
        self.flights.iter().position(|f| f.id() == id)
    }

    fn get_mut(&mut self, id: FlightId) -> Result<&mut FlightRecord> {
        self.flights
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or(Error::NotFound { id })
    }

    fn push(&mut self, record: FlightRecord) -> Result<&FlightRecord> {
        let id = record.id();
        if self.contains(id) {
            return Err(Error::DuplicateId { id });
        }

        log::debug!("Adding flight {id} with capacity {}", record.capacity());
        self.flights.push(record);
        Ok(&self.flights[self.flights.len() - 1])
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests;
