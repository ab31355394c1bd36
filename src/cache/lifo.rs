//! LIFO Cache Module
//!
//! Evicts the entry that was put most recently.

use std::fmt::Display;
use std::hash::Hash;

use crate::cache::{
    discard, validate_capacity, CachePolicy, OrderSequence, Policy, Store, MAX_ITEMS,
};
use crate::error::Result;

// == LIFO Cache ==
/// Last-In-First-Out cache.
#[derive(Debug, Clone)]
pub struct LifoCache<K, V> {
    store: Store<K, V>,
    order: OrderSequence<K>,
    capacity: usize,
}

impl<K, V> LifoCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    // == Constructor ==
    /// Creates a cache holding at most [`MAX_ITEMS`] entries.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            order: OrderSequence::new(),
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
}

impl<K, V> Default for LifoCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for LifoCache<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    fn policy(&self) -> Policy {
        Policy::Lifo
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn store(&self) -> &Store<K, V> {
        &self.store
    }

    fn insert(&mut self, key: K, value: V) -> Option<K> {
        let mut evicted = None;

        // Victim is chosen before the new key joins the back.
        if !self.store.contains(&key) && self.store.len() >= self.capacity {
            if let Some(newest) = self.order.pop_newest() {
                self.store.remove(&newest);
                discard(&newest);
                evicted = Some(newest);
            }
        }

        self.order.touch(&key);
        self.store.insert(key, value);
        evicted
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn check_invariants(&self) -> Result<()> {
        self.order.check_against(&self.store)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LifoCache<&'static str, &'static str> {
        let mut cache = LifoCache::new();
        cache.put(Some("A"), Some("Hello"));
        cache.put(Some("B"), Some("World"));
        cache.put(Some("C"), Some("Holberton"));
        cache.put(Some("D"), Some("School"));
        cache
    }

    #[test]
    fn test_lifo_evicts_newest() {
        let mut cache = filled();

        assert_eq!(cache.insert("E", "Battery"), Some("D"));

        assert_eq!(cache.get(Some(&"D")), None);
        assert_eq!(cache.get(Some(&"E")), Some(&"Battery"));
        assert_eq!(cache.len(), MAX_ITEMS);
    }

    #[test]
    fn test_lifo_consecutive_inserts_evict_previous_newcomer() {
        let mut cache = filled();

        assert_eq!(cache.insert("E", "Battery"), Some("D"));
        assert_eq!(cache.insert("F", "Mission"), Some("E"));
        assert!(cache.contains(&"A"));
    }

    #[test]
    fn test_lifo_update_moves_key_to_back() {
        let mut cache = filled();

        cache.put(Some("B"), Some("Again"));
        assert_eq!(cache.insert("E", "Battery"), Some("B"));
    }

    #[test]
    fn test_lifo_get_does_not_refresh() {
        let mut cache = filled();

        cache.get(Some(&"A"));
        assert_eq!(cache.insert("E", "Battery"), Some("D"));
        assert!(cache.check_invariants().is_ok());
    }
}
