//! Policy Cache - A bounded in-memory key-value cache
//!
//! Provides FIFO, LIFO, LRU, MRU and LFU eviction behind one `put`/`get`
//! contract, plus an unbounded variant.

pub mod cache;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod pagination;

pub use cache::{CachePolicy, Policy, PolicyCache, SharedCache, MAX_ITEMS};
pub use config::Config;
pub use error::{CacheError, Result};
