//! LRU Cache Module
//!
//! Implements Least Recently Used eviction.

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    discard, validate_capacity, CachePolicy, OrderSequence, Policy, Store, MAX_ITEMS,
};
use crate::error::Result;

// == LRU Cache ==
/// Least-Recently-Used cache.
///
/// Both `get` hits and `put` move a key to the back of the access order; on
/// overflow the front (longest untouched) key goes.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    store: Store<K, V>,
    /// Access order, front = least recently used
    recency: OrderSequence<K>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
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
    pub fn peek_lru(&self) -> Option<&K> {
        self.recency.peek_oldest()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn store(&self) -> &Store<K, V> {
        &self.store
    }

    fn insert(&mut self, key: K, value: V) -> Option<K> {
        self.recency.touch(&key);
        self.store.insert(key, value);

        // The new key sits at the back, so it is never its own victim.
        if self.store.len() > self.capacity {
            if let Some(lru) = self.recency.pop_oldest() {
                self.store.remove(&lru);
                discard(&lru);
                return Some(lru);
            }
        }
        None
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
