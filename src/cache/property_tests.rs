//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check every policy against the shared cache invariants.

use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

use crate::cache::{CachePolicy, DynCache, Policy, MAX_ITEMS};

// == Strategies ==
/// Keys from a small alphabet so puts collide and evictions happen often
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-H]".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|s| s)
}

fn policy_strategy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

/// A single call through the shared contract, absent arguments included
#[derive(Debug, Clone)]
enum CacheOp {
    Put {
        key: Option<String>,
        value: Option<String>,
    },
    Get {
        key: Option<String>,
    },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (
            prop::option::weighted(0.9, key_strategy()),
            prop::option::weighted(0.9, value_strategy())
        )
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        3 => prop::option::weighted(0.9, key_strategy()).prop_map(|key| CacheOp::Get { key }),
    ]
}

fn key_set(cache: &DynCache<String, String>) -> BTreeSet<String> {
    cache.store().keys().cloned().collect()
}

// == Reference Model ==
/// Key order (front = oldest touch) and LFU use counts, updated by hand
struct OrderModel {
    policy: Policy,
    order: Vec<String>,
    frequency: HashMap<String, u64>,
}

impl OrderModel {
    fn new(policy: Policy) -> Self {
        Self {
            policy,
            order: Vec::new(),
            frequency: HashMap::new(),
        }
    }

    fn move_to_back(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push(key.to_string());
    }

    fn victim(&self) -> Option<usize> {
        match self.policy {
            Policy::Fifo | Policy::Lru => Some(0),
            Policy::Lifo | Policy::Mru => self.order.len().checked_sub(1),
            Policy::Lfu => {
                let min = self.frequency.values().min()?;
                self.order.iter().position(|k| self.frequency[k] == *min)
            }
            Policy::Basic => None,
        }
    }

    /// Applies a put and returns the key it should evict
    fn put(&mut self, key: &str) -> Option<String> {
        if self.order.iter().any(|k| k == key) {
            if self.policy == Policy::Lfu {
                *self.frequency.entry(key.to_string()).or_insert(0) += 1;
            }
            self.move_to_back(key);
            return None;
        }

        let mut evicted = None;
        if self.order.len() >= MAX_ITEMS {
            if let Some(index) = self.victim() {
                let victim = self.order.remove(index);
                self.frequency.remove(&victim);
                evicted = Some(victim);
            }
        }

        if self.policy == Policy::Lfu {
            self.frequency.insert(key.to_string(), 1);
        }
        self.order.push(key.to_string());
        evicted
    }

    /// Applies a get and returns whether it should hit
    fn get(&mut self, key: &str) -> bool {
        if !self.order.iter().any(|k| k == key) {
            return false;
        }
        match self.policy {
            Policy::Lru | Policy::Mru => self.move_to_back(key),
            Policy::Lfu => {
                *self.frequency.entry(key.to_string()).or_insert(0) += 1;
                self.move_to_back(key);
            }
            _ => {}
        }
        true
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Bounded caches never exceed capacity, and eviction metadata always
    // tracks exactly the stored keys.
    #[test]
    fn prop_capacity_and_metadata_invariants(
        policy in policy_strategy(),
        capacity in 1usize..=MAX_ITEMS,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache: DynCache<String, String> = policy.build(capacity).unwrap();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => cache.put(key, value),
                CacheOp::Get { key } => {
                    let _ = cache.get(key.as_ref());
                }
            }

            if policy.is_bounded() {
                prop_assert!(
                    cache.len() <= capacity,
                    "{} cache holds {} entries, capacity {}",
                    policy,
                    cache.len(),
                    capacity
                );
            }
            prop_assert!(cache.check_invariants().is_ok(), "{:?}", cache.check_invariants());
        }
    }

    // A put evicts at most one key, never the key being put, and only when a
    // new key arrives at a full cache.
    #[test]
    fn prop_single_eviction_per_put(
        policy in policy_strategy(),
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..60)
    ) {
        let mut cache: DynCache<String, String> = policy.build(MAX_ITEMS).unwrap();

        for (key, value) in entries {
            let before = key_set(&cache);
            let was_new = !before.contains(&key);
            let was_full = cache.capacity().is_some_and(|c| before.len() >= c);

            let evicted = cache.insert(key.clone(), value.clone());
            let after = key_set(&cache);

            match &evicted {
                Some(victim) => {
                    prop_assert!(was_new && was_full);
                    prop_assert_ne!(victim, &key);
                    prop_assert!(before.contains(victim));
                    prop_assert!(!after.contains(victim));
                    prop_assert_eq!(before.difference(&after).count(), 1);
                }
                None => {
                    prop_assert!(!(was_new && was_full));
                    prop_assert!(before.is_subset(&after));
                }
            }
            prop_assert_eq!(cache.get(Some(&key)), Some(&value));
        }
    }

    // Calls with an absent key or value change nothing.
    #[test]
    fn prop_absent_arguments_are_noops(
        policy in policy_strategy(),
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..6),
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut cache: DynCache<String, String> = policy.build(MAX_ITEMS).unwrap();
        for (k, v) in entries {
            cache.put(Some(k), Some(v));
        }
        let before = key_set(&cache);

        cache.put(None, Some(value));
        cache.put(Some(key), None);
        cache.put(None, None);
        prop_assert_eq!(cache.get(None), None);

        prop_assert_eq!(key_set(&cache), before);
    }

    // Repeated reads return the same value whatever metadata they refresh.
    #[test]
    fn prop_get_is_idempotent(
        policy in policy_strategy(),
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..10),
        reads in 1usize..10
    ) {
        let mut cache: DynCache<String, String> = policy.build(MAX_ITEMS).unwrap();
        for (k, v) in &entries {
            cache.put(Some(k.clone()), Some(v.clone()));
        }

        for key in key_set(&cache) {
            let first = cache.get(Some(&key)).cloned();
            prop_assert!(first.is_some());
            for _ in 0..reads {
                prop_assert_eq!(cache.get(Some(&key)).cloned(), first.clone());
            }
        }
    }

    // Every bounded policy agrees with a vector model of its key order, plus
    // a frequency map for LFU.
    #[test]
    fn prop_bounded_policies_match_model(
        policy in prop::sample::select(vec![
            Policy::Fifo,
            Policy::Lifo,
            Policy::Lru,
            Policy::Mru,
            Policy::Lfu,
        ]),
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache: DynCache<String, String> = policy.build(MAX_ITEMS).unwrap();
        let mut model = OrderModel::new(policy);

        for op in ops {
            match op {
                CacheOp::Put { key: Some(key), value: Some(value) } => {
                    let expected = model.put(&key);
                    prop_assert_eq!(cache.insert(key, value), expected);
                }
                CacheOp::Put { .. } => {}
                CacheOp::Get { key: Some(key) } => {
                    let hit = cache.get(Some(&key)).is_some();
                    prop_assert_eq!(hit, model.get(&key));
                }
                CacheOp::Get { key: None } => {}
            }
            prop_assert_eq!(
                key_set(&cache),
                model.order.iter().cloned().collect::<BTreeSet<_>>()
            );
        }
    }
}
