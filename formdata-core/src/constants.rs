//! Constants for the form data cache.
//!
//! Defaults mirror the chart form data cache configuration shipped with the
//! hosting application, so an unconfigured deployment behaves the same way.

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default entry lifetime in seconds (7 days).
pub const DEFAULT_CACHE_TIMEOUT_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Default maximum number of entries held by an in-memory store.
pub const DEFAULT_CACHE_THRESHOLD: usize = 500;

/// Whether reads extend an entry's lifetime when nothing is configured.
pub const DEFAULT_REFRESH_TIMEOUT_ON_RETRIEVAL: bool = false;

// ═══════════════════════════════════════════════════════════════════════════════
// KEY NAMESPACES
// ═══════════════════════════════════════════════════════════════════════════════
// Each namespace is used as the domain separator when hashing a composite
// cache key, so two resource kinds never share an address even when their
// resource ids and keys coincide.

/// Namespace for chart form data entries.
pub const NAMESPACE_CHART_FORM_DATA: &str = "FORMDATA_CHART_V1";

/// Namespace for explore (unsaved chart) form data entries.
pub const NAMESPACE_EXPLORE_FORM_DATA: &str = "FORMDATA_EXPLORE_V1";

/// Size in bytes of the hashed part of a composite cache key.
pub const CACHE_KEY_HASH_SIZE: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Env var toggling refresh-on-retrieval.
pub const ENV_REFRESH_TIMEOUT_ON_RETRIEVAL: &str = "FORM_DATA_REFRESH_TIMEOUT_ON_RETRIEVAL";

/// Env var holding the entry lifetime in seconds.
pub const ENV_CACHE_DEFAULT_TIMEOUT: &str = "FORM_DATA_CACHE_DEFAULT_TIMEOUT";

/// Env var holding the in-memory store capacity.
pub const ENV_CACHE_THRESHOLD: &str = "FORM_DATA_CACHE_THRESHOLD";
