//! Common test utilities for integration tests.

use std::fs;
use std::path::PathBuf;

use flightbook::{FlightId, FlightRegistry, FlightStore};
use tempfile::TempDir;

/// A store backed by a file in a private temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct StoreFixture {
    pub dir: TempDir,
    pub store: FlightStore,
}

impl StoreFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FlightStore::new(dir.path().join("flights.txt"));
        Self { dir, store }
    }

    /// Creates a fixture whose data file already holds `contents`.
    #[allow(dead_code)]
    pub fn with_contents(contents: &str) -> Self {
        let fixture = Self::new();
        fs::write(fixture.store.path(), contents).expect("failed to seed data file");
        fixture
    }

    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    #[allow(dead_code)]
    pub fn read(&self) -> String {
        fs::read_to_string(self.store.path()).expect("failed to read data file")
    }
}

/// Builds a registry from `(id, capacity, reserved)` triples.
#[allow(dead_code)]
pub fn registry_of(flights: &[(i32, i32, i32)]) -> FlightRegistry {
    let mut registry = FlightRegistry::new();
    for &(id, capacity, reserved) in flights {
        registry
            .create(FlightId::new(id), capacity)
            .expect("failed to create flight");
        if reserved > 0 {
            registry
                .reserve(FlightId::new(id), reserved)
                .expect("failed to reserve seats");
        }
    }
    registry
}
