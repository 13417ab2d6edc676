//! Property-based tests for `FlightRegistry`.

use super::FlightRegistry;
use crate::flight::{FlightId, FlightRecord, OVERBOOKING_PERCENT};
use crate::storage::{decode, encode};
use proptest::prelude::*;
use std::collections::HashSet;

/// Registry operations driven by the property tests.
#[derive(Debug, Clone, Copy)]
enum RegistryOp {
    Create(i32, i32),
    Delete(i32),
    Reserve(i32, i32),
    Cancel(i32, i32),
}

// Small id space so operations frequently collide
fn registry_op_strategy() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        (0i32..8, -5i32..300).prop_map(|(id, cap)| RegistryOp::Create(id, cap)),
        (0i32..8).prop_map(RegistryOp::Delete),
        (0i32..8, -5i32..100).prop_map(|(id, n)| RegistryOp::Reserve(id, n)),
        (0i32..8, -5i32..100).prop_map(|(id, n)| RegistryOp::Cancel(id, n)),
    ]
}

fn apply(registry: &mut FlightRegistry, op: RegistryOp) {
    let _ = match op {
        RegistryOp::Create(id, cap) => registry.create(FlightId::new(id), cap).map(|_| ()),
        RegistryOp::Delete(id) => registry.delete(FlightId::new(id)).map(|_| ()),
        RegistryOp::Reserve(id, n) => registry.reserve(FlightId::new(id), n).map(|_| ()),
        RegistryOp::Cancel(id, n) => registry.cancel(FlightId::new(id), n).map(|_| ()),
    };
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Identifiers stay unique after any sequence of creates
    #[test]
    fn create_keeps_ids_unique(creates in prop::collection::vec((0i32..10, 0i32..500), 0..40)) {
        let mut registry = FlightRegistry::new();
        for (id, capacity) in creates {
            let before = registry.clone();
            let existed = registry.contains(FlightId::new(id));
            let result = registry.create(FlightId::new(id), capacity);
            prop_assert_eq!(result.is_err(), existed);
            if existed {
                prop_assert_eq!(&registry, &before);
            }
        }

        let ids: HashSet<_> = registry.iter().map(|f| f.id()).collect();
        prop_assert_eq!(ids.len(), registry.len());
    }

    // Arbitrary operation sequences keep every invariant
    #[test]
    fn operations_preserve_invariants(ops in prop::collection::vec(registry_op_strategy(), 0..80)) {
        let mut registry = FlightRegistry::new();
        for op in ops {
            apply(&mut registry, op);

            let ids: HashSet<_> = registry.iter().map(|f| f.id()).collect();
            prop_assert_eq!(ids.len(), registry.len());
            for flight in &registry {
                prop_assert!(
                    100 * u64::from(flight.reserved())
                        <= OVERBOOKING_PERCENT * u64::from(flight.capacity())
                );
            }
        }
    }

    // Cancel then reserve of the same count restores the registry
    #[test]
    fn cancel_then_reserve_is_identity(capacity in 1i32..500, initial in 0i32..500, seats in 1i32..500) {
        let mut registry = FlightRegistry::new();
        let id = FlightId::new(1);
        registry.create(id, capacity).unwrap();
        let _ = registry.reserve(id, initial);
        let before = registry.clone();

        if registry.cancel(id, seats).is_ok() {
            prop_assert!(registry.reserve(id, seats).is_ok());
            prop_assert_eq!(registry, before);
        }
    }

    // Any registry survives encode then decode unchanged, order included
    #[test]
    fn encode_decode_round_trip(
        triples in prop::collection::vec((any::<i32>(), any::<i32>(), any::<i32>()), 0..50)
    ) {
        let mut registry = FlightRegistry::new();
        for (id, capacity, reserved) in triples {
            // Repeated ids are skipped, as the decoder does
            let _ = registry.insert(FlightRecord::new(FlightId::new(id), capacity, reserved));
        }

        let mut encoded = Vec::new();
        encode(&registry, &mut encoded).unwrap();
        let decoded = decode(encoded.as_slice()).unwrap();
        prop_assert_eq!(decoded, registry);
    }
}
