//! Facade bundling the form data commands.

use std::sync::Arc;

use tracing::info;

use formdata_cache::MemoryCacheStore;
use formdata_core::error::Result;
use formdata_core::traits::{AccessChecker, CacheStore};
use formdata_core::types::CommandParameters;

use crate::config::FormDataCacheConfig;
use crate::context::CommandContext;
use crate::delete::DeleteFormDataCommand;
use crate::get::GetFormDataCommand;
use crate::key::KeyNamespace;
use crate::update::UpdateFormDataCommand;

/// Get, update, and delete over one store, policy, and namespace.
///
/// Meant to be held once (behind an `Arc`) by the web layer.
#[derive(Clone, Debug)]
pub struct FormDataService {
    get: GetFormDataCommand,
    update: UpdateFormDataCommand,
    delete: DeleteFormDataCommand,
    context: CommandContext,
}

impl FormDataService {
    /// Creates the service over an existing store.
    pub fn new(
        store: Arc<dyn CacheStore>,
        access: Arc<dyn AccessChecker>,
        config: &FormDataCacheConfig,
    ) -> Self {
        Self::with_context(CommandContext::new(store, access), config)
    }

    /// Creates the service over a prepared context (e.g. another namespace).
    pub fn with_context(context: CommandContext, config: &FormDataCacheConfig) -> Self {
        Self {
            get: GetFormDataCommand::new(context.clone(), config),
            update: UpdateFormDataCommand::new(context.clone()),
            delete: DeleteFormDataCommand::new(context.clone()),
            context,
        }
    }

    /// Creates the service over a fresh in-memory store sized by `config`.
    pub fn in_memory(access: Arc<dyn AccessChecker>, config: &FormDataCacheConfig) -> Self {
        info!(
            threshold = config.threshold,
            timeout_secs = config.default_timeout_seconds,
            refresh_on_retrieval = config.refresh_timeout_on_retrieval,
            "Creating in-memory form data cache"
        );
        let store = Arc::new(MemoryCacheStore::with_config(config.store_config()));
        Self::new(store, access, config)
    }

    /// Returns the key namespace.
    pub fn namespace(&self) -> KeyNamespace {
        self.context.namespace()
    }

    /// Returns the shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// See [`GetFormDataCommand::get`].
    pub async fn get(&self, params: &CommandParameters) -> Result<Option<String>> {
        self.get.get(params).await
    }

    /// See [`UpdateFormDataCommand::update`].
    pub async fn update(&self, params: &CommandParameters) -> Result<bool> {
        self.update.update(params).await
    }

    /// See [`DeleteFormDataCommand::delete`].
    pub async fn delete(&self, params: &CommandParameters) -> Result<bool> {
        self.delete.delete(params).await
    }
}
