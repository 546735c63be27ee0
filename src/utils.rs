//! Utility functions and traits for `ChainedHashMap`.

use crate::chained_hashmap::ChainedHashMap;
use crate::kinds::{TableKey, TableValue};

/// Extension trait providing snapshot helpers on top of the core map API.
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the map as a Vec.
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec.
    fn values(&self) -> Vec<V>;
}

impl<K, V> HashMapExtensions<K, V> for ChainedHashMap<K, V>
where
    K: TableKey + Clone,
    V: TableValue + Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs.
#[allow(dead_code)]
pub fn from_iter<K, V, I>(iter: I) -> ChainedHashMap<K, V>
where
    K: TableKey,
    V: TableValue,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedHashMap::new();
    map.extend(iter);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = from_iter(data);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort();

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }
}
