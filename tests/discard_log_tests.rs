//! Eviction Notification Tests
//!
//! Captures tracing output to check that each eviction logs exactly one
//! `DISCARD: <key>` line and that no-op calls log nothing.

use std::io;
use std::sync::{Arc, Mutex};

use policy_cache::cache::{CachePolicy, FifoCache, LfuCache, LifoCache, LruCache, MruCache};

// == Log Capture ==

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn discard_lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter_map(|line| line.find("DISCARD: ").map(|at| line[at..].to_string()))
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber writing into a buffer and returns the
/// `DISCARD` lines it produced.
fn capture<F: FnOnce()>(f: F) -> Vec<String> {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.discard_lines()
}

fn fill<C: CachePolicy<&'static str, &'static str>>(cache: &mut C) {
    cache.put(Some("A"), Some("Hello"));
    cache.put(Some("B"), Some("World"));
    cache.put(Some("C"), Some("Holberton"));
    cache.put(Some("D"), Some("School"));
}

// == Tests ==

#[test]
fn test_fifo_discard_line() {
    let lines = capture(|| {
        let mut cache = FifoCache::new();
        fill(&mut cache);
        cache.put(Some("E"), Some("Battery"));
    });
    assert_eq!(lines, vec!["DISCARD: A"]);
}

#[test]
fn test_lifo_discard_line() {
    let lines = capture(|| {
        let mut cache = LifoCache::new();
        fill(&mut cache);
        cache.put(Some("E"), Some("Battery"));
    });
    assert_eq!(lines, vec!["DISCARD: D"]);
}

#[test]
fn test_lru_discard_line() {
    let lines = capture(|| {
        let mut cache = LruCache::new();
        fill(&mut cache);
        cache.get(Some(&"A"));
        cache.put(Some("E"), Some("Battery"));
    });
    assert_eq!(lines, vec!["DISCARD: B"]);
}

#[test]
fn test_mru_discard_line() {
    let lines = capture(|| {
        let mut cache = MruCache::new();
        fill(&mut cache);
        cache.get(Some(&"A"));
        cache.put(Some("E"), Some("Battery"));
    });
    assert_eq!(lines, vec!["DISCARD: A"]);
}

#[test]
fn test_lfu_discard_line() {
    let lines = capture(|| {
        let mut cache = LfuCache::new();
        fill(&mut cache);
        cache.get(Some(&"A"));
        cache.get(Some(&"A"));
        cache.get(Some(&"B"));
        cache.put(Some("E"), Some("Battery"));
    });
    assert_eq!(lines, vec!["DISCARD: C"]);
}

#[test]
fn test_one_line_per_eviction() {
    let lines = capture(|| {
        let mut cache = FifoCache::new();
        fill(&mut cache);
        cache.put(Some("E"), Some("1"));
        cache.put(Some("F"), Some("2"));
        cache.put(Some("E"), Some("3"));
    });
    assert_eq!(lines, vec!["DISCARD: A", "DISCARD: B"]);
}

#[test]
fn test_absent_arguments_log_nothing() {
    let lines = capture(|| {
        let mut cache = LruCache::new();
        fill(&mut cache);
        cache.put(None, Some("x"));
        cache.put(Some("E"), None);
        cache.get(None);
    });
    assert!(lines.is_empty());
}
