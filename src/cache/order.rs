//! Order Sequence Module
//!
//! Tracks key order for the insertion- and recency-based eviction policies.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::cache::Store;
use crate::error::{CacheError, Result};

// == Order Sequence ==
/// Ordered keys, each present at most once.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest touch
/// - Back = Newest touch
///
/// FIFO and LIFO touch on `put`; LRU, MRU and LFU also touch on `get`.
///
/// `touch` and `remove` find the key with a linear scan, so they are O(n) in
/// the number of tracked keys. Popping either end is O(1). Sized for small
/// capacities such as the default [`MAX_ITEMS`](crate::cache::MAX_ITEMS).
#[derive(Debug, Clone)]
pub struct OrderSequence<K> {
    /// Keys by touch time
    order: VecDeque<K>,
}

impl<K> OrderSequence<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty sequence.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Moves a key to the back (newest), adding it if it is not tracked.
    ///
    /// O(n): scans for the key before pushing it.
    pub fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_back(key.clone());
    }

    // == Remove ==
    /// Removes a key, returning whether it was tracked. O(n).
    pub fn remove(&mut self, key: &K) -> bool {
        match self.order.iter().position(|k| k == key) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    // == Pop Oldest ==
    /// Returns and removes the key at the front.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Pop Newest ==
    /// Returns and removes the key at the back.
    pub fn pop_newest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    pub fn peek_newest(&self) -> Option<&K> {
        self.order.back()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Invariant Check ==
    /// Verifies the tracked keys are exactly the store's keys.
    pub fn check_against<V>(&self, store: &Store<K, V>) -> Result<()> {
        let distinct: HashSet<&K> = self.order.iter().collect();
        if distinct.len() != self.order.len() {
            return Err(CacheError::Invariant(
                "order sequence holds a key more than once".to_string(),
            ));
        }
        if self.order.len() != store.len() {
            return Err(CacheError::Invariant(format!(
                "order sequence tracks {} keys but store holds {}",
                self.order.len(),
                store.len()
            )));
        }
        if !self.order.iter().all(|k| store.contains(k)) {
            return Err(CacheError::Invariant(
                "order sequence tracks a key missing from the store".to_string(),
            ));
        }
        Ok(())
    }
}

impl<K> Default for OrderSequence<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
