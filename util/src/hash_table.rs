use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A fixed-size hash table with linear-chaining buckets. The bucket count is
/// set at construction and never changes; there is no load-factor management.
#[derive(Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    pub fn with_capacity(size: usize) -> Self {
        assert!(size > 0, "bucket count must be > 0");
        Self {
            buckets: (0..size).map(|_| Vec::new()).collect(),
        }
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Insert a new entry or replace the value of an existing one.
    /// Returns true when a new entry was appended to the chain.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];

        for entry in bucket.iter_mut() {
            if entry.0 == key {
                entry.1 = value;
                return false;
            }
        }

        log::trace!("chaining entry into bucket {}", idx);
        bucket.push((key, value));
        true
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket
            .iter()
            .find(|entry| &entry.0 == key)
            .map(|entry| &entry.1)
    }

    /// Remove an entry, returning its value if the key was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];

        let pos = bucket.iter().position(|entry| &entry.0 == key)?;
        Some(bucket.swap_remove(pos).1)
    }
}
