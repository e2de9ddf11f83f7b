//! In-memory TTL store for form data entries.
//!
//! Thread-safe [`CacheStore`](formdata_core::CacheStore) implementation with
//! configurable capacity and expiration, suitable for development, testing,
//! and single-process deployments.

mod cache;

pub use cache::{CacheConfig, CacheStats, MemoryCacheStore};
