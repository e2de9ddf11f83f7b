//! Access checker implementations.
//!
//! The authorization policy is a value handed to each command, so a resource
//! kind picks its policy by construction:
//!
//! - [`AllowAll`]: Permits everything (tests, trusted internal callers)
//! - [`FnAccessChecker`]: Wraps a closure
//! - [`ResourceAccessList`]: Explicit `(user, resource)` grants

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use formdata_core::error::{FormDataError, Result};
use formdata_core::traits::AccessChecker;
use formdata_core::types::{CommandParameters, ResourceId, UserId};

/// Checker that permits every operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

#[async_trait]
impl AccessChecker for AllowAll {
    async fn check_access(&self, _params: &CommandParameters) -> Result<()> {
        Ok(())
    }
}

/// Checker backed by a synchronous closure.
///
/// ```rust
/// use formdata_commands::FnAccessChecker;
/// use formdata_core::{CommandParameters, FormDataError};
///
/// let checker = FnAccessChecker::new(|params: &CommandParameters| {
///     if params.actor.is_anonymous() {
///         return Err(FormDataError::AccessDenied("login required".into()));
///     }
///     Ok(())
/// });
/// # let _ = checker;
/// ```
pub struct FnAccessChecker<F> {
    check: F,
}

impl<F> FnAccessChecker<F>
where
    F: Fn(&CommandParameters) -> Result<()> + Send + Sync,
{
    /// Wraps `check` as an access checker.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> fmt::Debug for FnAccessChecker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnAccessChecker")
    }
}

#[async_trait]
impl<F> AccessChecker for FnAccessChecker<F>
where
    F: Fn(&CommandParameters) -> Result<()> + Send + Sync,
{
    async fn check_access(&self, params: &CommandParameters) -> Result<()> {
        (self.check)(params)
    }
}

/// Checker granting access per `(user, resource)` pair.
///
/// Anonymous actors are always denied. Grants can be added and revoked
/// concurrently with checks.
#[derive(Debug, Default)]
pub struct ResourceAccessList {
    /// Granted resources, indexed by user
    grants: DashMap<UserId, HashSet<ResourceId>>,
}

impl ResourceAccessList {
    /// Creates an empty list (denies everyone).
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `user` access to `resource`.
    pub fn grant(&self, user: UserId, resource: impl Into<ResourceId>) {
        self.grants.entry(user).or_default().insert(resource.into());
    }

    /// Revokes `user`'s access to `resource`. Returns whether a grant existed.
    pub fn revoke(&self, user: UserId, resource: impl Into<ResourceId>) -> bool {
        let resource = resource.into();
        let removed = self
            .grants
            .get_mut(&user)
            .map_or(false, |mut resources| resources.remove(&resource));
        self.grants.remove_if(&user, |_, resources| resources.is_empty());
        removed
    }

    /// Returns true if `user` may access `resource`.
    pub fn is_granted(&self, user: UserId, resource: &ResourceId) -> bool {
        self.grants
            .get(&user)
            .map_or(false, |resources| resources.contains(resource))
    }

    /// Returns the number of grants.
    pub fn len(&self) -> usize {
        self.grants.iter().map(|resources| resources.len()).sum()
    }

    /// Returns true if there are no grants.
    pub fn is_empty(&self) -> bool {
        self.grants.iter().all(|resources| resources.is_empty())
    }
}

#[async_trait]
impl AccessChecker for ResourceAccessList {
    async fn check_access(&self, params: &CommandParameters) -> Result<()> {
        let Some(user) = params.actor.user_id() else {
            debug!(resource_id = %params.resource_id, "Anonymous actor denied");
            return Err(FormDataError::AccessDenied(format!(
                "anonymous access to resource {}",
                params.resource_id
            )));
        };

        if self.is_granted(user, &params.resource_id) {
            Ok(())
        } else {
            debug!(user = %user, resource_id = %params.resource_id, "No grant for resource");
            Err(FormDataError::AccessDenied(format!(
                "user {} may not access resource {}",
                user, params.resource_id
            )))
        }
    }
}
