//! Form data removal by the entry's owner.

use tracing::{debug, instrument, warn};

use formdata_core::error::{FormDataError, Result};
use formdata_core::types::CommandParameters;

use crate::context::CommandContext;

/// Removes an entry before it expires. Only the owner may do so.
#[derive(Clone, Debug)]
pub struct DeleteFormDataCommand {
    context: CommandContext,
}

impl DeleteFormDataCommand {
    /// Creates the command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Deletes the entry `params` addresses.
    ///
    /// Returns `false` when there is nothing to delete.
    ///
    /// # Errors
    /// - `AccessDenied` if the access checker rejects `params` or the actor
    ///   does not own the entry
    /// - `CacheBackend` if the store fails
    #[instrument(skip(self, params), fields(resource_id = %params.resource_id))]
    pub async fn delete(&self, params: &CommandParameters) -> Result<bool> {
        let (cache_key, existing) = self.context.authorized_lookup(params).await?;

        let Some(existing) = existing else {
            debug!("Nothing to delete");
            return Ok(false);
        };

        if !existing.is_owned_by(params.actor.user_id()) {
            warn!(owner = %existing.owner, actor = ?params.actor.user_id(), "Delete by non-owner rejected");
            return Err(FormDataError::not_owner());
        }

        self.context.store().delete(&cache_key).await
    }
}
