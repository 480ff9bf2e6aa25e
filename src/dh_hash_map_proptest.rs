#![cfg(test)]

// Property tests for DhHashMap kept inside the crate so they can check
// slot-level invariants (occupancy counts, tombstones, capacity shape)
// alongside the public behavior.

use crate::prime::{is_prime, next_prime};
use crate::DhHashMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, u32),
    Remove(usize),
    Get(usize),
    Contains(String),
}

fn arb_scenario(max_ops: usize) -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{1,6}", 1..=8).prop_flat_map(move |pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<u32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{1,6}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..max_ops).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn value_for(v: u32) -> String {
    format!("v{v}")
}

// Structural invariants that must hold after every single operation.
fn assert_invariants(t: &DhHashMap) -> Result<(), TestCaseError> {
    let size = t.capacity();
    prop_assert!(is_prime(size), "capacity {size} must be prime");
    prop_assert!(size >= 53, "capacity {size} below the floor");
    prop_assert_eq!(size, next_prime(t.base_size()));
    prop_assert_eq!(t.occupied_slots(), t.len());
    prop_assert!(t.occupied_keys_are_unique());
    // Load stays in (10, 70) up to a one-operation transient, except when
    // clamped by the minimum capacity.
    let load = t.len() * 100 / size;
    prop_assert!(load <= 72, "load {load}% above the grow bound");
    prop_assert!(size == 53 || load >= 9, "load {load}% below the shrink bound at size {size}");
    Ok(())
}

// Property: State-machine equivalence against std HashMap plus slot-level
// invariants. Exercised across random operation sequences:
// - insert returns the previous value exactly when the model had the key;
// - get/contains parity with the model after each op;
// - occupied slot count equals len; occupied keys are unique;
// - capacity is prime, floored at 53, and equals next_prime(base_size).
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(60)) {
        let mut sut = DhHashMap::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    let val = value_for(v);
                    let prev = sut.insert(k.as_str(), val.as_str());
                    let model_prev = model.insert(k, val);
                    prop_assert_eq!(prev, model_prev);
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let removed = sut.remove(k);
                    let model_removed = model.remove(k);
                    prop_assert_eq!(removed, model_removed);
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            assert_invariants(&sut)?;
        }
    }
}

// Property: Heavy churn on a tiny key pool accumulates and reuses
// tombstones without ever losing parity with the model. Long sequences of
// remove/reinsert on the same few keys stress the probe-past-tombstone
// path and tombstone reuse on insert.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_churn_small_pool(seq in proptest::collection::vec((0usize..4, any::<bool>()), 1..400)) {
        let keys = ["alpha", "beta", "gamma", "delta"];
        let mut sut = DhHashMap::new();
        let mut model: HashMap<&str, String> = HashMap::new();

        for (round, (i, do_insert)) in seq.into_iter().enumerate() {
            let k = keys[i];
            if do_insert {
                let val = format!("r{round}");
                let prev = sut.insert(k, val.as_str());
                let model_prev = model.insert(k, val);
                prop_assert_eq!(prev, model_prev);
            } else {
                prop_assert_eq!(sut.remove(k), model.remove(k));
            }

            for k in keys {
                prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
            }
            prop_assert_eq!(sut.len(), model.len());
            // Four keys never cross the grow threshold, so the capacity
            // stays clamped at the floor and tombstones only disappear by
            // being reused. A key only ever lands within the first four
            // positions of its probe chain (the other three keys are the
            // only possible blockers), so dirty slots are bounded by 16.
            prop_assert_eq!(sut.capacity(), 53);
            prop_assert_eq!(sut.occupied_slots(), sut.len());
            prop_assert!(sut.tombstone_slots() + sut.occupied_slots() <= 16);
        }
    }
}
