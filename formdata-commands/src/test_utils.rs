//! Store doubles for command tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use formdata_cache::MemoryCacheStore;
use formdata_core::error::{FormDataError, Result};
use formdata_core::traits::CacheStore;
use formdata_core::types::{CacheKey, Entry};

/// Memory store that counts calls per operation.
#[derive(Default)]
pub(crate) struct CountingStore {
    inner: MemoryCacheStore,
    gets: AtomicUsize,
    sets: AtomicUsize,
    touches: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub(crate) fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub(crate) fn touches(&self) -> usize {
        self.touches.load(Ordering::SeqCst)
    }

    pub(crate) fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for CountingStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<Entry>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &CacheKey, entry: Entry) -> Result<bool> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, entry).await
    }

    async fn touch(&self, key: &CacheKey) -> Result<bool> {
        self.touches.fetch_add(1, Ordering::SeqCst);
        self.inner.touch(key).await
    }

    async fn delete(&self, key: &CacheKey) -> Result<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key).await
    }
}

/// Store whose every call fails.
pub(crate) struct FailingStore;

#[async_trait]
impl CacheStore for FailingStore {
    async fn get(&self, _key: &CacheKey) -> Result<Option<Entry>> {
        Err(FormDataError::CacheBackend("connection refused".into()))
    }

    async fn set(&self, _key: &CacheKey, _entry: Entry) -> Result<bool> {
        Err(FormDataError::CacheBackend("connection refused".into()))
    }

    async fn touch(&self, _key: &CacheKey) -> Result<bool> {
        Err(FormDataError::CacheBackend("connection refused".into()))
    }

    async fn delete(&self, _key: &CacheKey) -> Result<bool> {
        Err(FormDataError::CacheBackend("connection refused".into()))
    }
}

/// Write applied by another client between a lookup and what follows it.
pub(crate) enum ConcurrentWrite {
    Set(Entry),
    Delete,
}

/// Memory store where another client writes right after the next `get`.
///
/// The `get` still returns the entry it read, so the caller acts on a stale
/// snapshot.
#[derive(Default)]
pub(crate) struct InterleavingStore {
    inner: MemoryCacheStore,
    pending: Mutex<Option<ConcurrentWrite>>,
}

impl InterleavingStore {
    pub(crate) fn after_next_get(&self, write: ConcurrentWrite) {
        *self.pending.lock() = Some(write);
    }

    pub(crate) fn inner(&self) -> &MemoryCacheStore {
        &self.inner
    }
}

#[async_trait]
impl CacheStore for InterleavingStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<Entry>> {
        let snapshot = self.inner.get(key).await?;
        let pending = self.pending.lock().take();
        match pending {
            Some(ConcurrentWrite::Set(entry)) => {
                self.inner.set(key, entry).await?;
            }
            Some(ConcurrentWrite::Delete) => {
                self.inner.delete(key).await?;
            }
            None => {}
        }
        Ok(snapshot)
    }

    async fn set(&self, key: &CacheKey, entry: Entry) -> Result<bool> {
        self.inner.set(key, entry).await
    }

    async fn touch(&self, key: &CacheKey) -> Result<bool> {
        self.inner.touch(key).await
    }

    async fn delete(&self, key: &CacheKey) -> Result<bool> {
        self.inner.delete(key).await
    }
}
