#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use chaintable::{HashMapExtensions, Int32StringMap, StringInt32Map};
use proptest::prelude::*;
use std::collections::HashMap;

// Model random operation sequences against std's HashMap and assert the
// observable state stays in agreement after every step.
proptest! {
    #[test]
    fn prop_behaves_like_std_hashmap(ops in proptest::collection::vec((0u8..=3u8, 0i32..32i32), 1..200)) {
        let mut map = Int32StringMap::new();
        let mut model: HashMap<i32, String> = HashMap::new();

        for (op, key) in ops {
            match op {
                // Insert, checking the replaced value matches
                0 => {
                    let value = format!("v{key}");
                    prop_assert_eq!(map.insert(key, value.clone()), model.insert(key, value));
                }
                // Remove, present or not
                1 => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
                // Plain lookup
                2 => {
                    prop_assert_eq!(map.get(&key), model.get(&key));
                }
                // Occasionally wipe everything
                3 => {
                    map.clear();
                    model.clear();
                }
                _ => {}
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.contains_key(&key), model.contains_key(&key));
        }

        // Final invariant: identical key sets
        let mut keys = map.keys();
        keys.sort_unstable();
        let mut model_keys: Vec<i32> = model.keys().copied().collect();
        model_keys.sort_unstable();
        prop_assert_eq!(keys, model_keys);
    }

    #[test]
    fn prop_entries_survive_growth(count in 1usize..300) {
        let mut map = StringInt32Map::new();
        for i in 0..count {
            map.insert(format!("key-{i}"), i as i32);
        }

        prop_assert_eq!(map.len(), count);
        for i in 0..count {
            prop_assert_eq!(map.get(format!("key-{i}").as_str()), Some(&(i as i32)));
        }
    }

    #[test]
    fn prop_iteration_covers_every_entry_once(keys in proptest::collection::hash_set(any::<i32>(), 0..64)) {
        let mut map = Int32StringMap::new();
        for &k in &keys {
            map.insert(k, k.to_string());
        }

        let mut seen = Vec::new();
        let mut iter = map.iter();
        while iter.has_next() {
            let (k, v) = iter.next().unwrap();
            prop_assert_eq!(v, &k.to_string());
            seen.push(*k);
        }
        prop_assert!(!iter.has_next());
        prop_assert!(iter.next().is_none());

        seen.sort_unstable();
        let mut expected: Vec<i32> = keys.iter().copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}
