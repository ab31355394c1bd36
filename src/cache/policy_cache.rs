//! Policy Cache Module
//!
//! String cache over a policy chosen at runtime, with statistics.

use tracing::debug;

use crate::cache::{CacheStats, DynCache, Policy};
use crate::error::{CacheError, Result};

// == Policy Cache ==
/// Runtime-selected cache engine plus hit/miss/eviction counters.
pub struct PolicyCache {
    /// The eviction engine
    engine: DynCache<String, String>,
    /// Performance statistics
    stats: CacheStats,
}

impl PolicyCache {
    // == Constructor ==
    /// Creates an empty cache for `policy`.
    ///
    /// # Arguments
    /// * `policy` - Eviction rule to apply on overflow
    /// * `capacity` - Maximum number of entries (ignored by `Policy::Basic`, but must be >= 1)
    pub fn new(policy: Policy, capacity: usize) -> Result<Self> {
        Ok(Self {
            engine: policy.build(capacity)?,
            stats: CacheStats::new(),
        })
    }

    // == Put ==
    /// Stores a key-value pair, returning the key evicted to make room.
    ///
    /// An absent key or value leaves the cache untouched.
    pub fn put(&mut self, key: Option<String>, value: Option<String>) -> Option<String> {
        let (key, value) = match (key, value) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                debug!("put ignored: key or value missing");
                return None;
            }
        };

        let evicted = self.engine.insert(key, value);
        if evicted.is_some() {
            self.stats.record_eviction();
        }
        evicted
    }

    // == Get ==
    /// Retrieves a value by key.
    pub fn get(&mut self, key: &str) -> Result<String> {
        let value = self.engine.lookup(&key.to_string()).cloned();
        self.stats.record_lookup(value.is_some());
        value.ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.engine.len());
        stats
    }

    /// Returns the stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.engine.store().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn policy(&self) -> Policy {
        self.engine.policy()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.engine.capacity()
    }

    pub fn check_invariants(&self) -> Result<()> {
        self.engine.check_invariants()
    }

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }
}

impl std::fmt::Debug for PolicyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyCache")
            .field("policy", &self.policy())
            .field("capacity", &self.capacity())
            .field("stats", &self.stats())
            .finish()
    }
}
