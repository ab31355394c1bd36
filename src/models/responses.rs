//! Response DTOs for the console
//!
//! Every reply is written as one line of JSON.

use serde::Serialize;

use crate::cache::{CacheStats, Policy};

/// Reply to `GET <key>`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Reply to `PUT <key> <value>`
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    pub message: String,
    /// The key that was put, if one was given
    pub key: Option<String>,
    /// The key discarded to make room
    pub evicted: Option<String>,
}

impl PutResponse {
    pub fn stored(key: impl Into<String>, evicted: Option<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key: Some(key),
            evicted,
        }
    }

    /// A put with a missing key or value, which the cache ignores.
    pub fn ignored(key: Option<String>) -> Self {
        Self {
            message: "ignored".to_string(),
            key,
            evicted: None,
        }
    }
}

/// Reply to `STATS`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub policy: Policy,
    /// None for the unbounded policy
    pub capacity: Option<usize>,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(policy: Policy, capacity: Option<usize>, stats: &CacheStats) -> Self {
        Self {
            policy,
            capacity,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Error reply for any failed command
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
