//! Form data retrieval.

use tracing::{debug, instrument, warn};

use formdata_core::error::Result;
use formdata_core::types::CommandParameters;

use crate::config::FormDataCacheConfig;
use crate::context::CommandContext;

/// Reads an entry's value, optionally extending its lifetime.
///
/// Reads are governed by the access checker alone; ownership only matters
/// for writes.
#[derive(Clone, Debug)]
pub struct GetFormDataCommand {
    context: CommandContext,
    refresh_timeout: bool,
}

impl GetFormDataCommand {
    /// Creates the command.
    pub fn new(context: CommandContext, config: &FormDataCacheConfig) -> Self {
        Self {
            context,
            refresh_timeout: config.refresh_timeout_on_retrieval,
        }
    }

    /// Returns the stored value, or `None` if the entry is missing or expired.
    ///
    /// With refresh-on-retrieval enabled, a hit restarts the timeout of
    /// whatever entry is live under the same composite key. The entry is
    /// never written back, so a concurrent update or delete is preserved. A
    /// failed refresh is logged and does not fail the read.
    ///
    /// # Errors
    /// - `AccessDenied` if the access checker rejects `params`
    /// - `CacheBackend` if the lookup fails
    #[instrument(skip(self, params), fields(resource_id = %params.resource_id))]
    pub async fn get(&self, params: &CommandParameters) -> Result<Option<String>> {
        let (cache_key, entry) = self.context.authorized_lookup(params).await?;

        let Some(entry) = entry else {
            return Ok(None);
        };

        if self.refresh_timeout {
            match self.context.store().touch(&cache_key).await {
                Ok(true) => debug!("Refreshed entry timeout"),
                Ok(false) => debug!("Entry gone before timeout refresh"),
                Err(e) => warn!(error = %e, "Timeout refresh failed"),
            }
        }

        Ok(Some(entry.value))
    }
}
