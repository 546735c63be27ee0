use std::{borrow::Borrow, marker::PhantomData, mem};

use crate::kinds::{TableKey, TableValue};

/// Number of buckets allocated by `new` and restored by `clear`.
const DEFAULT_CAPACITY: usize = 16;

/// An owned key-value pair stored in a bucket chain.
#[derive(Debug)]
struct Entry<K, V> {
    /// The key of the pair.
    key: K,
    /// The value associated with the key.
    value: V,
}

/// A hash table using separate chaining, typed over a closed set of key
/// and value kinds.
///
/// Colliding keys coexist in one bucket's chain and are disambiguated by
/// equality, so there is no probe-sequence or tombstone bookkeeping. The
/// bucket array length is always a power of two and grows by doubling
/// once the live count crosses the load-factor threshold.
///
/// Note: this implementation is not thread-safe; callers needing shared
/// access must wrap it in their own synchronization.
#[derive(Debug)]
pub struct ChainedHashMap<K, V> {
    /// Bucket array; each bucket chains the entries whose key hashes to
    /// its index.
    buckets: Vec<Vec<Entry<K, V>>>,
    /// Current number of live entries in the table.
    size: usize,
    /// Threshold for load factor before resizing - stored as percentage (0-100).
    load_factor_threshold: usize,
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: TableKey,
    V: TableValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: TableKey,
    V: TableValue,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: TableKey,
    V: TableValue,
{
    /// Creates an empty map with the default number of buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with at least the specified number of buckets.
    ///
    /// The requested capacity is rounded up to a power of two so bucket
    /// indices can be derived by masking.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();

        Self {
            buckets: Self::empty_buckets(capacity),
            size: 0,
            load_factor_threshold: 75,
        }
    }

    /// Allocates `capacity` empty bucket chains.
    fn empty_buckets(capacity: usize) -> Vec<Vec<Entry<K, V>>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        buckets
    }

    /// Derives the bucket index for a key from its hash and the current
    /// capacity mask.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: TableKey + ?Sized,
    {
        (key.hash() as usize) & (self.buckets.len().saturating_sub(1))
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    ///
    /// An overwrite replaces the value in place and leaves the entry
    /// count unchanged. A fresh insertion that pushes the load factor
    /// past the threshold triggers a resize before this method returns.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let previous = self.store_at(index, key, value);

        if previous.is_none() {
            self.size = self.size.saturating_add(1);
            if self.size.saturating_mul(100)
                > self.buckets.len().saturating_mul(self.load_factor_threshold)
            {
                self.resize();
            }
        }

        previous
    }

    /// Inserts or overwrites within the bucket at `index`, returning the
    /// replaced value.
    fn store_at(&mut self, index: usize, key: K, value: V) -> Option<V> {
        #[allow(clippy::question_mark, clippy::manual_let_else)]
        let bucket = match self.buckets.get_mut(index) {
            Some(bucket) => bucket,
            None => return None,
        };

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        None
    }

    /// Retrieves the value for a key, or `None` if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get(index)?
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Retrieves a mutable reference to the value for a key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get_mut(index)?
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the map contains the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op, not an error. Removal may
    /// reorder the remaining entries of the affected bucket chain.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = self.buckets.get_mut(index)?;
        let position = bucket.iter().position(|entry| entry.key.borrow() == key)?;
        let removed = bucket.swap_remove(position);
        self.size = self.size.saturating_sub(1);
        Some(removed.value)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the map, dropping every entry and shrinking the bucket
    /// array back to the default capacity.
    pub fn clear(&mut self) {
        self.buckets = Self::empty_buckets(DEFAULT_CAPACITY);
        self.size = 0;
    }

    /// Returns the number of buckets in the map.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the map.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Configures the load factor threshold, as a percentage.
    pub fn set_load_factor_threshold(&mut self, threshold: usize) {
        self.load_factor_threshold = threshold.clamp(1, 95);
    }

    /// Doubles the bucket array and redistributes every entry.
    ///
    /// Bucket indices depend on capacity, so each key's hash is
    /// recomputed against the new mask; entries are moved, never cloned,
    /// and no key's value changes.
    #[allow(clippy::cast_possible_truncation)]
    fn resize(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        let old_buckets = mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        let mask = new_capacity.saturating_sub(1);

        for entry in old_buckets.into_iter().flatten() {
            let index = (entry.key.hash() as usize) & mask;
            if let Some(bucket) = self.buckets.get_mut(index) {
                bucket.push(entry);
            }
        }
    }

    /// Returns a cursor over the key-value pairs.
    ///
    /// Each call yields an independent cursor reflecting the map's
    /// contents at call time. The cursor borrows the map, so the map
    /// cannot be mutated while any cursor is live.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: &self.buckets, bucket: 0, offset: 0, _marker: PhantomData }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        Iter { buckets: &self.buckets, bucket: 0, offset: 0, _marker: PhantomData }
    }
}

/// Cursor over the key-value pairs of a [`ChainedHashMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Shared view of the map's bucket array.
    buckets: &'a [Vec<Entry<K, V>>],
    /// Index of the bucket currently being scanned.
    bucket: usize,
    /// Position of the next entry within the current bucket.
    offset: usize,
    /// Phantom data to hold the lifetime and type parameters.
    _marker: PhantomData<&'a (K, V)>,
}

impl<K, V> Iter<'_, K, V> {
    /// Reports whether at least one more pair remains.
    ///
    /// Has no side effects, may be called any number of times, and stays
    /// false forever once the last pair has been consumed.
    #[must_use]
    pub fn has_next(&self) -> bool {
        if let Some(bucket) = self.buckets.get(self.bucket) {
            if self.offset < bucket.len() {
                return true;
            }
            return self
                .buckets
                .iter()
                .skip(self.bucket.saturating_add(1))
                .any(|chain| !chain.is_empty());
        }
        false
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.buckets.get(self.bucket) {
            if let Some(entry) = bucket.get(self.offset) {
                self.offset = self.offset.saturating_add(1);
                return Some((&entry.key, &entry.value));
            }
            self.bucket = self.bucket.saturating_add(1);
            self.offset = 0;
        }
        None
    }
}
