//! Property tests pitting the node containers against the standard
//! library collections as reference models.

use bptree_node::{NodeMap, NodeMultiMap, NodeMultiSet, NodeSet};
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    /// A unique map behaves like a BTreeMap that ignores overwrites, as
    /// long as capacity is never reached.
    #[test]
    fn node_map_matches_btreemap(
        ops in proptest::collection::vec((0..20i32, 0..100i32, any::<bool>()), 0..40)
    ) {
        let mut node: NodeMap<i32, i32, 32> = NodeMap::new();
        let mut model: BTreeMap<i32, i32> = BTreeMap::new();

        for (key, value, is_insert) in ops {
            if is_insert {
                let outcome = node.insert((key, value)).unwrap();
                prop_assert_eq!(outcome.is_inserted(), !model.contains_key(&key));
                model.entry(key).or_insert(value);
            } else {
                let removed = node.remove(&key);
                let model_removed = model.remove(&key).is_some();
                prop_assert_eq!(removed, usize::from(model_removed));
            }
            node.check_invariants().unwrap();
        }

        let entries: Vec<(i32, i32)> = node.iter().cloned().collect();
        let expected: Vec<(i32, i32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(entries, expected);

        for key in 0..20 {
            prop_assert_eq!(node.get(&key), model.get(&key));
            prop_assert_eq!(node.contains_key(&key), model.contains_key(&key));
        }
    }

    /// A multiset holds exactly the sorted multiset of its inputs.
    #[test]
    fn multiset_round_trip(values in proptest::collection::vec(0..10i32, 0..24)) {
        let node = NodeMultiSet::<i32, 32>::try_from_iter(values.iter().copied()).unwrap();
        node.check_invariants().unwrap();

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(node.as_slice(), expected.as_slice());

        for key in 0..10 {
            let expected_count = values.iter().filter(|&&v| v == key).count();
            prop_assert_eq!(node.count(&key), expected_count);
        }
    }

    /// A unique set holds the sorted deduplication of its inputs, keeping
    /// the first arrival of every key.
    #[test]
    fn unique_set_deduplicates(values in proptest::collection::vec(0..10i32, 0..24)) {
        let node = NodeSet::<i32, 32>::try_from_iter(values.iter().copied()).unwrap();
        node.check_invariants().unwrap();

        let mut expected = values.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(node.as_slice(), expected.as_slice());
    }

    /// Inserting through an arbitrary hint gives the same container and
    /// the same reported positions as the hintless path, including
    /// arrival order inside equal-key runs.
    #[test]
    fn hints_are_irrelevant(
        inserts in proptest::collection::vec((0..8i32, 0..40usize), 0..24)
    ) {
        let mut plain: NodeMultiMap<i32, usize, 32> = NodeMultiMap::new();
        let mut hinted: NodeMultiMap<i32, usize, 32> = NodeMultiMap::new();

        for (arrival, &(key, hint)) in inserts.iter().enumerate() {
            let expected = plain.insert((key, arrival)).unwrap();
            let outcome = hinted.insert_with_hint(hint, (key, arrival)).unwrap();
            prop_assert_eq!(outcome, expected);
            hinted.check_invariants().unwrap();
        }

        prop_assert_eq!(plain, hinted);
    }

    /// Lexicographic container comparison agrees with comparing the
    /// underlying sorted sequences.
    #[test]
    fn container_ordering_matches_slices(
        left in proptest::collection::vec(0..6i32, 0..10),
        right in proptest::collection::vec(0..6i32, 0..10),
    ) {
        let a = NodeMultiSet::<i32, 16>::try_from_iter(left).unwrap();
        let b = NodeMultiSet::<i32, 16>::try_from_iter(right).unwrap();
        prop_assert_eq!(a.cmp(&b), a.as_slice().cmp(b.as_slice()));
    }
}
