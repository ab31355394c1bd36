//! FIFO Cache Module
//!
//! Evicts the entry that was put longest ago.

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    discard, validate_capacity, CachePolicy, OrderSequence, Policy, Store, MAX_ITEMS,
};
use crate::error::Result;

// == FIFO Cache ==
/// First-In-First-Out cache.
///
/// Overwriting a key moves it to the back of the order, so "first in" means
/// "least recently put" rather than "first ever inserted".
#[derive(Debug, Clone)]
pub struct FifoCache<K, V> {
    store: Store<K, V>,
    order: OrderSequence<K>,
    capacity: usize,
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    // == Constructor ==
    /// Creates a cache holding at most [`MAX_ITEMS`] entries.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            order: OrderSequence::new(),
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
}

impl<K, V> Default for FifoCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for FifoCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn policy(&self) -> Policy {
        Policy::Fifo
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
            if let Some(oldest) = self.order.pop_oldest() {
                self.store.remove(&oldest);
                discard(&oldest);
                evicted = Some(oldest);
            }
        }

        self.order.touch(&key);
        self.store.insert(key, value);
        evicted
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn check_invariants(&self) -> Result<()> {
        self.order.check_against(&self.store)
    }
}
