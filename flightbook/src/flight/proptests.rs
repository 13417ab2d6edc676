//! Property-based tests for `FlightRecord` and `FlightId`.

use super::{FlightId, FlightRecord, OVERBOOKING_PERCENT};
use proptest::prelude::*;

/// A single seat mutation applied to a record.
#[derive(Debug, Clone, Copy)]
enum SeatOp {
    Reserve(i32),
    Cancel(i32),
}

fn seat_op_strategy() -> impl Strategy<Value = SeatOp> {
    prop_oneof![
        (-5i32..200).prop_map(SeatOp::Reserve),
        (-5i32..200).prop_map(SeatOp::Cancel),
    ]
}

fn holds_ceiling(record: &FlightRecord) -> bool {
    100 * u64::from(record.reserved()) <= OVERBOOKING_PERCENT * u64::from(record.capacity())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Construction always yields a record inside the ceiling
    #[test]
    fn construction_respects_ceiling(id in any::<i32>(), capacity in any::<i32>(), reserved in any::<i32>()) {
        let record = FlightRecord::new(FlightId::new(id), capacity, reserved);
        prop_assert!(holds_ceiling(&record));
        prop_assert_eq!(record.id().value(), id);
        prop_assert_eq!(i64::from(record.capacity()), i64::from(capacity.max(0)));
    }

    // In-range input is kept unchanged
    #[test]
    fn construction_preserves_valid_input(capacity in 0i32..10_000, percent in 0u32..=105) {
        let reserved = i32::try_from(u64::from(capacity.unsigned_abs()) * u64::from(percent) / 100).unwrap();
        let record = FlightRecord::new(FlightId::new(1), capacity, reserved);
        prop_assert_eq!(i64::from(record.reserved()), i64::from(reserved));
    }

    // Every reachable state stays inside the ceiling
    #[test]
    fn mutations_respect_ceiling(
        capacity in -10i32..500,
        ops in prop::collection::vec(seat_op_strategy(), 0..50)
    ) {
        let mut record = FlightRecord::with_capacity(FlightId::new(1), capacity);
        for op in ops {
            let before = record.reserved();
            let result = match op {
                SeatOp::Reserve(n) => record.reserve_seats(n),
                SeatOp::Cancel(n) => record.cancel_seats(n),
            };
            if result.is_err() {
                prop_assert_eq!(record.reserved(), before);
            }
            prop_assert!(holds_ceiling(&record));
        }
    }

    // A rejected reservation is exactly one that would cross the ceiling
    #[test]
    fn reserve_accepts_iff_within_ceiling(capacity in 0i32..1000, reserved in 0i32..1100, seats in 1i32..1200) {
        let mut record = FlightRecord::new(FlightId::new(1), capacity, reserved);
        let expected = 100 * (u64::from(record.reserved()) + u64::from(seats.unsigned_abs()))
            <= OVERBOOKING_PERCENT * u64::from(record.capacity());
        prop_assert_eq!(record.can_reserve(seats), expected);
        prop_assert_eq!(record.reserve_seats(seats).is_ok(), expected);
    }

    // Cancel followed by reserve of the same count restores the prior state
    #[test]
    fn cancel_then_reserve_restores(capacity in 1i32..1000, reserved in 0i32..1100, seats in 1i32..1100) {
        let mut record = FlightRecord::new(FlightId::new(1), capacity, reserved);
        let before = record.clone();
        if record.cancel_seats(seats).is_ok() {
            prop_assert!(record.reserve_seats(seats).is_ok());
            prop_assert_eq!(record, before);
        }
    }

    // Load factor never exceeds the ceiling percentage
    #[test]
    fn load_factor_bounded(capacity in 0i32..100_000, reserved in 0i32..200_000) {
        let record = FlightRecord::new(FlightId::new(1), capacity, reserved);
        let factor = record.load_factor();
        prop_assert!(factor >= 0.0);
        #[allow(clippy::cast_precision_loss)]
        let ceiling = OVERBOOKING_PERCENT as f64;
        prop_assert!(factor <= ceiling + 1e-9);
    }
}
