//! Shared Cache Module
//!
//! Thread-safe handle for using one cache from many tasks.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheStats, Policy, PolicyCache};
use crate::config::Config;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to a [`PolicyCache`] behind a single exclusive lock.
///
/// Reads mutate eviction metadata for most policies, so every call takes the
/// lock for its whole duration; store, metadata and stats change as one unit.
#[derive(Clone, Debug)]
pub struct SharedCache {
    inner: Arc<Mutex<PolicyCache>>,
}

impl SharedCache {
    pub fn new(cache: PolicyCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a shared cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(PolicyCache::new(config.policy, config.max_items)?))
    }

    pub async fn put(&self, key: Option<String>, value: Option<String>) -> Option<String> {
        self.inner.lock().await.put(key, value)
    }

    pub async fn get(&self, key: &str) -> Result<String> {
        self.inner.lock().await.get(key)
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.inner.lock().await.keys()
    }

    /// Returns the policy and capacity, which never change after construction.
    pub async fn describe(&self) -> (Policy, Option<usize>) {
        let cache = self.inner.lock().await;
        (cache.policy(), cache.capacity())
    }

    pub async fn check_invariants(&self) -> Result<()> {
        self.inner.lock().await.check_invariants()
    }
}
