//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::{Policy, MAX_ITEMS};
use crate::error::Result;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries a bounded cache can hold
    pub max_items: usize,
    /// Eviction policy applied on overflow
    pub policy: Policy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Maximum cache entries (default: 4)
    /// - `CACHE_POLICY` - One of basic, fifo, lifo, lru, mru, lfu (default: lru)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// An unparseable `MAX_ITEMS` falls back to the default; an unknown
    /// policy name is an error. A zero capacity is accepted here and rejected
    /// when the cache is built.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_items = lookup("MAX_ITEMS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.max_items);

        let policy = match lookup("CACHE_POLICY") {
            Some(name) => name.parse()?,
            None => defaults.policy,
        };

        Ok(Self { max_items, policy })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            policy: Policy::Lru,
        }
    }
}
