//! Policy Module
//!
//! The shared `put`/`get` contract and the runtime policy selector.

use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::{BasicCache, FifoCache, LfuCache, LifoCache, LruCache, MruCache, Store};
use crate::error::{CacheError, Result};

// == Cache Policy Trait ==
/// Contract shared by every cache engine.
///
/// Engines implement the primitives (`insert`, `lookup`); callers normally go
/// through `put` and `get`, which treat an absent key or value as a no-op.
pub trait CachePolicy<K, V>
where
    K: Eq + Hash,
{
    /// The eviction rule this engine applies.
    fn policy(&self) -> Policy;

    /// Maximum number of entries, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Read-only view of the stored entries.
    fn store(&self) -> &Store<K, V>;

    /// Inserts or overwrites an entry, returning the key evicted to make room.
    fn insert(&mut self, key: K, value: V) -> Option<K>;

    /// Looks up a key, refreshing eviction metadata where the policy tracks reads.
    fn lookup(&mut self, key: &K) -> Option<&V>;

    /// Verifies the eviction metadata tracks exactly the stored keys.
    fn check_invariants(&self) -> Result<()>;

    // == Put ==
    /// Stores `value` under `key`. Does nothing if either is absent.
    fn put(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.insert(key, value);
        }
    }

    // == Get ==
    /// Returns the value under `key`, or `None` if the key is absent or unknown.
    fn get(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.lookup(key),
            None => None,
        }
    }

    fn len(&self) -> usize {
        self.store().len()
    }

    fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    fn contains(&self, key: &K) -> bool {
        self.store().contains(key)
    }
}

/// Boxed engine selected at runtime.
pub type DynCache<K, V> = Box<dyn CachePolicy<K, V> + Send + Sync>;

// == Policy ==
/// Eviction rule applied when a bounded cache overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Unbounded, never evicts
    Basic,
    /// Evicts the oldest put
    Fifo,
    /// Evicts the newest put
    Lifo,
    /// Evicts the least recently touched
    Lru,
    /// Evicts the most recently touched
    Mru,
    /// Evicts the least frequently touched, oldest touch first on ties
    Lfu,
}

impl Policy {
    pub const ALL: [Policy; 6] = [
        Policy::Basic,
        Policy::Fifo,
        Policy::Lifo,
        Policy::Lru,
        Policy::Mru,
        Policy::Lfu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Basic => "basic",
            Policy::Fifo => "fifo",
            Policy::Lifo => "lifo",
            Policy::Lru => "lru",
            Policy::Mru => "mru",
            Policy::Lfu => "lfu",
        }
    }

    /// Whether the policy ever evicts.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Policy::Basic)
    }

    // == Build ==
    /// Creates an empty engine for this policy.
    ///
    /// The capacity is validated for every policy, including `Basic`, so a
    /// misconfigured capacity fails the same way regardless of policy.
    pub fn build<K, V>(self, capacity: usize) -> Result<DynCache<K, V>>
    where
        K: Eq + Hash + Clone + Display + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let engine: DynCache<K, V> = match self {
            Policy::Basic => {
                super::validate_capacity(capacity)?;
                Box::new(BasicCache::new())
            }
            Policy::Fifo => Box::new(FifoCache::with_capacity(capacity)?),
            Policy::Lifo => Box::new(LifoCache::with_capacity(capacity)?),
            Policy::Lru => Box::new(LruCache::with_capacity(capacity)?),
            Policy::Mru => Box::new(MruCache::with_capacity(capacity)?),
            Policy::Lfu => Box::new(LfuCache::with_capacity(capacity)?),
        };
        Ok(engine)
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Policy::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| CacheError::UnknownPolicy(s.to_string()))
    }
}
