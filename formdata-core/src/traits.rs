//! Common traits for FORMDATA.
//!
//! These traits are the seams between the commands and their external
//! collaborators: the backing cache and the authorization policy.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CacheKey, CommandParameters, Entry};

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for the shared key-value store holding entries.
///
/// Implementations might use:
/// - In-memory storage (for testing/development)
/// - Redis or memcached (for multi-process deployments)
///
/// Each operation must be atomic for a single key. Nothing is assumed about
/// atomicity across a `get` followed by a `set`.
///
/// Entry lifetime is owned by the store: every `set` (re)starts the entry's
/// timeout, and `touch` restarts it without rewriting the entry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Looks up an entry. Missing and expired entries both yield `None`.
    async fn get(&self, key: &CacheKey) -> Result<Option<Entry>>;

    /// Stores an entry, replacing any previous one.
    ///
    /// Returns whether the store accepted the write.
    async fn set(&self, key: &CacheKey, entry: Entry) -> Result<bool>;

    /// Restarts the timeout of a live entry in place.
    ///
    /// Never inserts and never changes the stored entry, so it cannot undo a
    /// concurrent write or resurrect a deleted entry. Returns whether a live
    /// entry was found.
    async fn touch(&self, key: &CacheKey) -> Result<bool>;

    /// Removes an entry.
    ///
    /// Returns whether an entry was present.
    async fn delete(&self, key: &CacheKey) -> Result<bool>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// ACCESS CHECKER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Authorization policy consulted before any cache access.
///
/// Returning an error aborts the command before the store is touched; the
/// error is propagated to the caller unchanged.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Permits or denies the operation described by `params`.
    async fn check_access(&self, params: &CommandParameters) -> Result<()>;
}
