//! In-memory TTL cache for weather reports.
//!
//! Keys are lower-cased location strings. Expiry is lazy: a stale entry is
//! only removed when `get` touches it, so `stats` may keep counting it as
//! expired until then.

use crate::models::{CacheStats, WeatherReport};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CacheEntry {
    inserted_at: Instant,
    value: WeatherReport,
}

#[derive(Debug)]
pub struct WeatherCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

fn normalize(key: &str) -> String {
    key.to_lowercase()
}

impl WeatherCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) <= self.ttl
    }

    /// Returns the cached report if it is still within the TTL.
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<WeatherReport> {
        let key = normalize(key);
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let fresh = self.is_fresh(entries.get(&key)?, now);
        if fresh {
            tracing::debug!("Cache hit for '{}'", key);
            entries.get(&key).map(|entry| entry.value.clone())
        } else {
            tracing::debug!("Evicting expired cache entry for '{}'", key);
            entries.remove(&key);
            None
        }
    }

    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn put(&self, key: &str, value: WeatherReport) {
        let key = normalize(key);
        let entry = CacheEntry {
            inserted_at: Instant::now(),
            value,
        };
        tracing::debug!("Caching report for '{}'", key);
        self.entries.lock().insert(key, entry);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        tracing::info!("Clearing {} cache entries", entries.len());
        entries.clear();
    }

    /// Counts entries by freshness without evicting anything.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.entries.lock();
        let active_entries = entries
            .values()
            .filter(|entry| self.is_fresh(entry, now))
            .count();

        CacheStats {
            total_entries: entries.len(),
            active_entries,
            expired_entries: entries.len() - active_entries,
            ttl_seconds: self.ttl.as_secs(),
        }
    }
}
