//! Collaborators shared by every command.

use std::sync::Arc;

use tracing::debug;

use formdata_core::error::Result;
use formdata_core::traits::{AccessChecker, CacheStore};
use formdata_core::types::{CacheKey, CommandParameters, Entry};

use crate::key::KeyNamespace;

/// Store, access policy, and key namespace a command operates over.
///
/// Cloning is cheap; clones share the same store and checker.
#[derive(Clone)]
pub struct CommandContext {
    store: Arc<dyn CacheStore>,
    access: Arc<dyn AccessChecker>,
    namespace: KeyNamespace,
}

impl CommandContext {
    /// Creates a context in the chart form data namespace.
    pub fn new(store: Arc<dyn CacheStore>, access: Arc<dyn AccessChecker>) -> Self {
        Self {
            store,
            access,
            namespace: KeyNamespace::CHART_FORM_DATA,
        }
    }

    /// Switches the key namespace.
    pub fn with_namespace(mut self, namespace: KeyNamespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// Returns the backing store.
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Returns the key namespace.
    pub fn namespace(&self) -> KeyNamespace {
        self.namespace
    }

    /// Derives the composite key for `params`.
    pub fn cache_key(&self, params: &CommandParameters) -> CacheKey {
        self.namespace.derive(&params.resource_id, &params.key)
    }

    /// Runs the access check, then looks up the entry `params` addresses.
    ///
    /// The store is never touched when the check fails.
    pub(crate) async fn authorized_lookup(
        &self,
        params: &CommandParameters,
    ) -> Result<(CacheKey, Option<Entry>)> {
        self.access.check_access(params).await?;

        let cache_key = self.cache_key(params);
        let entry = self.store.get(&cache_key).await?;
        debug!(
            namespace = self.namespace.as_str(),
            found = entry.is_some(),
            "Looked up form data entry"
        );
        Ok((cache_key, entry))
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
