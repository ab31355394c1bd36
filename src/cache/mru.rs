//! MRU Cache Module
//!
//! Evicts the most recently touched entry.

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    discard, validate_capacity, CachePolicy, OrderSequence, Policy, Store, MAX_ITEMS,
};
use crate::error::Result;

// == MRU Cache ==
/// Most-Recently-Used cache.
///
/// Bookkeeping matches LRU, but on overflow the key at the back (the one
/// served or written last) is discarded before the new key goes in.
#[derive(Debug, Clone)]
pub struct MruCache<K, V> {
    store: Store<K, V>,
    /// Access order, back = most recently used
    recency: OrderSequence<K>,
    capacity: usize,
}

impl<K, V> MruCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    // == Constructor ==
    /// Creates a cache holding at most [`MAX_ITEMS`] entries.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            recency: OrderSequence::new(),
            capacity: MAX_ITEMS,
        }
    }

    /// Creates a cache with a custom capacity. Zero is rejected.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            capacity: validate_capacity(capacity)?,
            ..Self::new()
        })
    }

    /// Returns the key that would be evicted next.
    pub fn peek_mru(&self) -> Option<&K> {
        self.recency.peek_newest()
    }
}

impl<K, V> Default for MruCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for MruCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn policy(&self) -> Policy {
        Policy::Mru
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn store(&self) -> &Store<K, V> {
        &self.store
    }

    fn insert(&mut self, key: K, value: V) -> Option<K> {
        let mut evicted = None;

        if !self.store.contains(&key) && self.store.len() >= self.capacity {
            if let Some(mru) = self.recency.pop_newest() {
                self.store.remove(&mru);
                discard(&mru);
                evicted = Some(mru);
            }
        }

        self.recency.touch(&key);
        self.store.insert(key, value);
        evicted
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        if self.store.contains(key) {
            self.recency.touch(key);
        }
        self.store.get(key)
    }

    fn check_invariants(&self) -> Result<()> {
        self.recency.check_against(&self.store)
    }
}
