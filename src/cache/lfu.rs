//! LFU Cache Module
//!
//! Implements Least Frequently Used eviction with a least-recently-used
//! tie-break.
//!
//! # Bookkeeping
//! - New key: frequency 1, appended to the recency order
//! - Overwrite or read hit: frequency + 1, moved to the back of the recency order
//! - Overflow: among keys at the minimum frequency, the one nearest the front
//!   of the recency order is evicted

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    discard, validate_capacity, CachePolicy, FrequencyTable, OrderSequence, Policy, Store,
    MAX_ITEMS,
};
use crate::error::{CacheError, Result};

// == LFU Cache ==
/// Least-Frequently-Used cache.
#[derive(Debug, Clone)]
pub struct LfuCache<K, V> {
    store: Store<K, V>,
    /// Touch counts per key
    frequency: FrequencyTable<K>,
    /// Last-touched order, only consulted to break frequency ties
    recency: OrderSequence<K>,
    capacity: usize,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    // == Constructor ==
    /// Creates a cache holding at most [`MAX_ITEMS`] entries.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            frequency: FrequencyTable::new(),
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

    /// Returns how many times `key` has been touched.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.frequency.get(key)
    }

    // == Victim Selection ==
    /// Returns the key the next overflow would evict.
    ///
    /// Walking the recency order front to back and stopping at the first key
    /// at the minimum frequency covers both the single-candidate case and the
    /// tie-break.
    pub fn peek_lfu(&self) -> Option<&K> {
        let min = self.frequency.min()?;
        self.recency.iter().find(|k| self.frequency.is_at(k, min))
    }

    fn touch(&mut self, key: &K) {
        self.frequency.increment(key);
        self.recency.touch(key);
    }

    fn evict(&mut self) -> Option<K> {
        let victim = self.peek_lfu()?.clone();
        self.store.remove(&victim);
        self.frequency.remove(&victim);
        self.recency.remove(&victim);
        discard(&victim);
        Some(victim)
    }
}

impl<K, V> Default for LfuCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn policy(&self) -> Policy {
        Policy::Lfu
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn store(&self) -> &Store<K, V> {
        &self.store
    }

    fn insert(&mut self, key: K, value: V) -> Option<K> {
        if self.store.contains(&key) {
            self.touch(&key);
            self.store.insert(key, value);
            return None;
        }

        let evicted = if self.store.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        self.frequency.insert(key.clone());
        self.recency.touch(&key);
        self.store.insert(key, value);
        evicted
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        if self.store.contains(key) {
            self.touch(key);
        }
        self.store.get(key)
    }

    fn check_invariants(&self) -> Result<()> {
        self.recency.check_against(&self.store)?;
        if self.frequency.len() != self.store.len()
            || !self.frequency.keys().all(|k| self.store.contains(k))
        {
            return Err(CacheError::Invariant(
                "frequency table keys differ from store keys".to_string(),
            ));
        }
        if self.frequency.min().is_some_and(|min| min < 1) {
            return Err(CacheError::Invariant(
                "frequency table holds a zero count".to_string(),
            ));
        }
        Ok(())
    }
}
