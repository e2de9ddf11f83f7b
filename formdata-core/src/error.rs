//! Error types for FORMDATA.
//!
//! There is no not-found variant: a missing or expired entry is an empty
//! result, never an error.

use thiserror::Error;

/// Result type alias using `FormDataError`.
pub type Result<T> = std::result::Result<T, FormDataError>;

/// Main error type for all FORMDATA operations.
#[derive(Debug, Error)]
pub enum FormDataError {
    // ═══════════════════════════════════════════════════════════════════════════
    // AUTHORIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The actor may not perform this operation, either because the access
    /// policy rejected it or because the actor does not own the entry.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // STORE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The backing cache failed to serve a request.
    #[error("Cache backend error: {0}")]
    CacheBackend(String),
}

impl FormDataError {
    /// Creates an access-denied error for an actor that does not own an entry.
    pub fn not_owner() -> Self {
        FormDataError::AccessDenied("entry is owned by another user".into())
    }

    /// Returns true if this error is an authorization failure.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, FormDataError::AccessDenied(_))
    }

    /// Returns true if this error is recoverable (can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FormDataError::CacheBackend(_))
    }
}
