//! Composite cache key derivation.
//!
//! A composite key is SHAKE256 over the namespace (as domain separator), the
//! resource id, and the key token, each length-prefixed:
//!
//! ```text
//! hex(SHAKE256(len(ns) || ns || len(resource_id) || resource_id || len(key) || key, 32))
//! ```
//!
//! Length prefixes make the encoding unambiguous, so no choice of key token
//! can reproduce the address of another resource's entry.

use sha3::{Shake256, digest::{Update, ExtendableOutput, XofReader}};

use formdata_core::constants::{
    CACHE_KEY_HASH_SIZE, NAMESPACE_CHART_FORM_DATA, NAMESPACE_EXPLORE_FORM_DATA,
};
use formdata_core::types::{CacheKey, Key, ResourceId};

/// Resource kind an entry belongs to. Two namespaces never share addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyNamespace(&'static str);

impl KeyNamespace {
    /// Saved chart form data.
    pub const CHART_FORM_DATA: KeyNamespace = KeyNamespace(NAMESPACE_CHART_FORM_DATA);

    /// Unsaved (explore) form data.
    pub const EXPLORE_FORM_DATA: KeyNamespace = KeyNamespace(NAMESPACE_EXPLORE_FORM_DATA);

    /// Creates a custom namespace.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the namespace's domain separator.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Derives the composite key for `(resource_id, key)` in this namespace.
    pub fn derive(&self, resource_id: &ResourceId, key: &Key) -> CacheKey {
        let mut hasher = Shake256::default();

        hasher.update(&(self.0.len() as u32).to_le_bytes());
        hasher.update(self.0.as_bytes());

        for part in [resource_id.as_str(), key.as_str()] {
            hasher.update(&(part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }

        let mut reader = hasher.finalize_xof();
        let mut output = [0u8; CACHE_KEY_HASH_SIZE];
        reader.read(&mut output);

        CacheKey::from_raw(hex::encode(output))
    }
}

impl Default for KeyNamespace {
    fn default() -> Self {
        Self::CHART_FORM_DATA
    }
}

/// Derives the chart form data key for `(resource_id, key)`.
pub fn derive(resource_id: &ResourceId, key: &Key) -> CacheKey {
    KeyNamespace::CHART_FORM_DATA.derive(resource_id, key)
}
