//! Basic Cache Module
//!
//! Unbounded cache with no eviction.

use std::hash::Hash;

use crate::cache::{CachePolicy, Policy, Store};
use crate::error::Result;

// == Basic Cache ==
/// Cache without a capacity limit. Entries stay until the cache is dropped.
#[derive(Debug, Clone)]
pub struct BasicCache<K, V> {
    store: Store<K, V>,
}

impl<K, V> BasicCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }
}

impl<K, V> Default for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for BasicCache<K, V>
where
    K: Eq + Hash,
{
    fn policy(&self) -> Policy {
        Policy::Basic
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn store(&self) -> &Store<K, V> {
        &self.store
    }

    fn insert(&mut self, key: K, value: V) -> Option<K> {
        self.store.insert(key, value);
        None
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn check_invariants(&self) -> Result<()> {
        Ok(())
    }
}
