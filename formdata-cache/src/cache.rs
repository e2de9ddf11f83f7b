//! In-memory TTL store.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use formdata_core::constants::{DEFAULT_CACHE_THRESHOLD, DEFAULT_CACHE_TIMEOUT_SECONDS};
use formdata_core::error::Result;
use formdata_core::traits::CacheStore;
use formdata_core::types::{CacheKey, Entry};

/// Stored entry with TTL.
#[derive(Clone)]
struct StoredEntry {
    entry: Entry,
    inserted_at: Instant,
    ttl: Duration,
}

impl StoredEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }

    fn remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.inserted_at.elapsed())
    }
}

/// Store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Default TTL in seconds, applied on every write
    pub default_ttl_seconds: u64,
    /// Whether to drop expired entries before evicting live ones
    pub auto_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_THRESHOLD,
            default_ttl_seconds: DEFAULT_CACHE_TIMEOUT_SECONDS,
            auto_cleanup: true,
        }
    }
}

/// In-memory store for form data entries.
///
/// Every write restarts the entry's TTL. When the store is full, expired
/// entries are dropped first, then the least recently written entry.
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<CacheKey, StoredEntry>>,
    config: CacheConfig,
}

impl MemoryCacheStore {
    /// Creates a store with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a store with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.max_entries.min(1024))),
            config,
        }
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Stores an entry with a custom TTL.
    ///
    /// Returns false only when the store has no capacity at all.
    pub fn set_with_ttl(&self, key: &CacheKey, entry: Entry, ttl: Duration) -> bool {
        if self.config.max_entries == 0 {
            return false;
        }

        let mut entries = self.entries.write();

        if !entries.contains_key(key) {
            if self.config.auto_cleanup && entries.len() >= self.config.max_entries {
                entries.retain(|_, e| !e.is_expired());
            }
            if entries.len() >= self.config.max_entries {
                if let Some(oldest_key) = entries
                    .iter()
                    .min_by_key(|(_, e)| e.inserted_at)
                    .map(|(k, _)| k.clone())
                {
                    debug!(evicted = %oldest_key, "Store full, evicting oldest entry");
                    entries.remove(&oldest_key);
                }
            }
        }

        entries.insert(key.clone(), StoredEntry {
            entry,
            inserted_at: Instant::now(),
            ttl,
        });
        true
    }

    /// Returns how long a live entry has left, or `None` if absent/expired.
    pub fn ttl_remaining(&self, key: &CacheKey) -> Option<Duration> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|e| !e.is_expired())
            .map(StoredEntry::remaining)
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired());
        before - entries.len()
    }

    /// Returns the number of stored entries (including expired ones not yet cleaned up).
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns store statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired()).count();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            valid_entries: entries.len().saturating_sub(expired),
            capacity: self.config.max_entries,
        }
    }

    fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.config.default_ttl_seconds)
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    #[instrument(skip(self, key), fields(key = %key))]
    async fn get(&self, key: &CacheKey) -> Result<Option<Entry>> {
        let entries = self.entries.read();
        let found = entries
            .get(key)
            .filter(|e| !e.is_expired())
            .map(|e| e.entry.clone());
        debug!(hit = found.is_some(), "Store lookup");
        Ok(found)
    }

    #[instrument(skip(self, key, entry), fields(key = %key, owner = %entry.owner))]
    async fn set(&self, key: &CacheKey, entry: Entry) -> Result<bool> {
        Ok(self.set_with_ttl(key, entry, self.default_ttl()))
    }

    #[instrument(skip(self, key), fields(key = %key))]
    async fn touch(&self, key: &CacheKey) -> Result<bool> {
        let mut entries = self.entries.write();
        match entries.get_mut(key) {
            Some(stored) if !stored.is_expired() => {
                stored.inserted_at = Instant::now();
                stored.ttl = self.default_ttl();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    #[instrument(skip(self, key), fields(key = %key))]
    async fn delete(&self, key: &CacheKey) -> Result<bool> {
        let removed = self.entries.write().remove(key);
        Ok(removed.map_or(false, |e| !e.is_expired()))
    }
}

/// Store statistics.
#[derive(Clone, Debug)]
pub struct CacheStats {
    /// Total entries (including expired)
    pub total_entries: usize,
    /// Expired entries
    pub expired_entries: usize,
    /// Valid (non-expired) entries
    pub valid_entries: usize,
    /// Maximum capacity
    pub capacity: usize,
}
