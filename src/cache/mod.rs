//! Cache Module
//!
//! Bounded in-memory caches with pluggable eviction: FIFO, LIFO, LRU, MRU
//! and LFU, plus an unbounded variant.

mod basic;
mod fifo;
mod frequency;
mod lfu;
mod lifo;
mod lru;
mod mru;
mod order;
mod policy;
mod policy_cache;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::fmt::Display;

use tracing::info;

use crate::error::{CacheError, Result};

// Re-export public types
pub use basic::BasicCache;
pub use fifo::FifoCache;
pub use frequency::FrequencyTable;
pub use lfu::LfuCache;
pub use lifo::LifoCache;
pub use lru::LruCache;
pub use mru::MruCache;
pub use order::OrderSequence;
pub use policy::{CachePolicy, DynCache, Policy};
pub use policy_cache::PolicyCache;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::Store;

// == Public Constants ==
/// Default maximum number of entries for every bounded cache
pub const MAX_ITEMS: usize = 4;

/// Rejects capacities that could never hold an entry.
pub(crate) fn validate_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(CacheError::InvalidCapacity(capacity));
    }
    Ok(capacity)
}

/// Emits the eviction notification for `key`.
pub(crate) fn discard<K: Display>(key: &K) {
    info!("DISCARD: {}", key);
}
