//! Property tests for merge status propagation.

use proptest::prelude::*;
use verdict::{
    merge_array, merge_object_sync, ObjectPair, Outcome, Status, StatusTracker, Strip, PROTO_KEY,
};

fn ok_outcome() -> impl Strategy<Value = Outcome<i32>> {
    any::<i32>().prop_map(Outcome::ok)
}

fn succeeded_outcome() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::ok),
        any::<i32>().prop_map(Outcome::partial),
    ]
}

fn any_outcome() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Outcome::ok),
        2 => any::<i32>().prop_map(Outcome::partial),
        1 => Just(Outcome::Failed),
    ]
}

fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z]{1,6}",
        1 => Just(PROTO_KEY.to_string()),
    ]
}

proptest! {
    #[test]
    fn all_ok_array_is_valid_in_order(items in prop::collection::vec(ok_outcome(), 0..20)) {
        let expected: Vec<i32> = items.iter().filter_map(|o| o.value().copied()).collect();
        let mut tracker = StatusTracker::new();
        let merged = merge_array(&mut tracker, items, None);
        prop_assert_eq!(merged, Outcome::Ok(expected));
        prop_assert_eq!(tracker.status(), Status::Valid);
    }

    #[test]
    fn any_partial_without_failure_is_dirty(
        mut items in prop::collection::vec(succeeded_outcome(), 0..20),
        extra in any::<i32>(),
        at in any::<prop::sample::Index>(),
    ) {
        let position = at.index(items.len() + 1);
        items.insert(position, Outcome::partial(extra));

        let mut tracker = StatusTracker::new();
        let merged = merge_array(&mut tracker, items, None);
        prop_assert!(merged.is_partial());
        prop_assert_eq!(tracker.status(), Status::Dirty);
    }

    #[test]
    fn failure_without_strip_aborts_regardless_of_tail(
        head in prop::collection::vec(succeeded_outcome(), 0..10),
        tail in prop::collection::vec(any_outcome(), 0..10),
    ) {
        let mut items = head;
        items.push(Outcome::Failed);
        items.extend(tail);

        let mut tracker = StatusTracker::new();
        prop_assert_eq!(merge_array(&mut tracker, items, None), Outcome::Failed);
        prop_assert_eq!(tracker.status(), Status::Aborted);
    }

    #[test]
    fn stripping_drops_only_failures_from_index(
        items in prop::collection::vec(any_outcome(), 0..20),
        from in 0usize..20,
        min_length in prop::option::of(0usize..20),
    ) {
        let failed_before = items.iter().take(from).any(Outcome::is_failed);
        let failed_after = items.iter().skip(from).any(Outcome::is_failed);
        let kept: Vec<i32> = items.iter().filter_map(|o| o.value().copied()).collect();
        let any_partial = items.iter().any(Outcome::is_partial);

        let strip = Strip { from, min_length };
        let mut tracker = StatusTracker::new();
        let merged = merge_array(&mut tracker, items, Some(strip));

        if failed_before {
            prop_assert_eq!(merged, Outcome::Failed);
        } else if failed_after && min_length.is_some_and(|m| kept.len() < m) {
            prop_assert_eq!(merged, Outcome::Failed);
        } else if failed_after || any_partial {
            prop_assert_eq!(merged, Outcome::Partial(kept));
        } else {
            prop_assert_eq!(merged, Outcome::Ok(kept));
        }
    }

    #[test]
    fn object_merge_never_writes_proto(
        pairs in prop::collection::vec((key(), succeeded_outcome(), any::<bool>()), 0..12),
    ) {
        let pairs: Vec<ObjectPair<i32>> = pairs
            .into_iter()
            .map(|(k, v, always_set)| ObjectPair {
                key: Outcome::ok(k),
                value: v.map(Some),
                always_set,
            })
            .collect();
        let mut tracker = StatusTracker::new();
        let merged = merge_object_sync(&mut tracker, pairs);
        let entries = merged.into_value().unwrap();
        prop_assert!(!entries.contains_key(PROTO_KEY));
    }

    #[test]
    fn absent_values_written_only_when_always_set(
        pairs in prop::collection::vec(("[a-z]{1,4}", any::<bool>(), any::<bool>()), 0..12),
    ) {
        // Later duplicates overwrite earlier ones, so compute the expectation per key.
        let mut expected = indexmap::IndexMap::new();
        for (k, present, always_set) in &pairs {
            if *present {
                expected.insert(k.clone(), Some(1));
            } else if *always_set {
                expected.insert(k.clone(), None);
            }
        }

        let pairs: Vec<ObjectPair<i32>> = pairs
            .into_iter()
            .map(|(k, present, always_set)| ObjectPair {
                key: Outcome::ok(k),
                value: Outcome::ok(present.then_some(1)),
                always_set,
            })
            .collect();
        let mut tracker = StatusTracker::new();
        let entries = merge_object_sync(&mut tracker, pairs).into_value().unwrap();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn tracker_never_regresses(marks in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut tracker = StatusTracker::new();
        let mut previous = tracker.status();
        for abort in marks {
            if abort {
                tracker.mark_aborted();
            } else {
                tracker.mark_dirty();
            }
            prop_assert!(tracker.status() >= previous);
            previous = tracker.status();
        }
    }
}
