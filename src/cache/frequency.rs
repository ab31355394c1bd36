//! Frequency Table Module
//!
//! Per-key access counters for LFU eviction.

use std::collections::HashMap;
use std::hash::Hash;

// == Frequency Table ==
/// Maps each tracked key to its access count (always >= 1).
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, u64>,
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Starts tracking a key at frequency 1, resetting any previous count.
    pub fn insert(&mut self, key: K) {
        self.counts.insert(key, 1);
    }

    /// Bumps the count of a tracked key, returning the new count.
    pub fn increment(&mut self, key: &K) -> Option<u64> {
        self.counts.get_mut(key).map(|count| {
            *count += 1;
            *count
        })
    }

    pub fn remove(&mut self, key: &K) -> Option<u64> {
        self.counts.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    // == Minimum ==
    /// Returns the lowest count across tracked keys.
    pub fn min(&self) -> Option<u64> {
        self.counts.values().copied().min()
    }

    /// Returns true if `key` is tracked at exactly `count`.
    pub fn is_at(&self, key: &K, count: u64) -> bool {
        self.get(key) == Some(count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }
}

impl<K> Default for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
