//! Form data replacement by the entry's owner.

use tracing::{debug, instrument, warn};

use formdata_core::error::{FormDataError, Result};
use formdata_core::types::{CommandParameters, Entry};

use crate::context::CommandContext;

/// Replaces an existing entry's value. Only the owner may do so, and the
/// command never creates an entry.
#[derive(Clone, Debug)]
pub struct UpdateFormDataCommand {
    context: CommandContext,
}

impl UpdateFormDataCommand {
    /// Creates the command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Replaces the entry `params` addresses with `params.value`.
    ///
    /// Returns `false` without writing when the entry does not exist or the
    /// value is missing or empty. Otherwise returns the store's write result.
    ///
    /// # Errors
    /// - `AccessDenied` if the access checker rejects `params`, or if the
    ///   actor is not the entry's owner (anonymous actors own nothing)
    /// - `CacheBackend` if the store fails
    #[instrument(skip(self, params), fields(resource_id = %params.resource_id))]
    pub async fn update(&self, params: &CommandParameters) -> Result<bool> {
        let (cache_key, existing) = self.context.authorized_lookup(params).await?;

        let (Some(existing), Some(value)) = (existing, params.non_empty_value()) else {
            debug!("Nothing to update");
            return Ok(false);
        };

        if !existing.is_owned_by(params.actor.user_id()) {
            warn!(owner = %existing.owner, actor = ?params.actor.user_id(), "Update by non-owner rejected");
            return Err(FormDataError::not_owner());
        }

        // Owner and actor are equal here; ownership never changes hands.
        self.context.store().set(&cache_key, Entry::new(existing.owner, value)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use test_case::test_case;

    use formdata_cache::MemoryCacheStore;
    use formdata_core::traits::CacheStore;
    use formdata_core::types::{Actor, UserId};

    use crate::access::{AllowAll, FnAccessChecker};
    use crate::test_utils::CountingStore;

    fn params(resource: u64, key: &str, actor: Actor) -> CommandParameters {
        CommandParameters::new(resource, key, actor)
    }

    async fn seeded(owner: u64, value: &str) -> (Arc<MemoryCacheStore>, UpdateFormDataCommand) {
        let store = Arc::new(MemoryCacheStore::new());
        let cmd = UpdateFormDataCommand::new(CommandContext::new(store.clone(), Arc::new(AllowAll)));
        let key = cmd.context.cache_key(&params(42, "abc", Actor::user(owner)));
        store.set(&key, Entry::new(UserId(owner), value)).await.unwrap();
        (store, cmd)
    }

    async fn stored(store: &MemoryCacheStore, cmd: &UpdateFormDataCommand) -> Option<Entry> {
        let key = cmd.context.cache_key(&params(42, "abc", Actor::anonymous()));
        store.get(&key).await.unwrap()
    }

    #[tokio::test]
    async fn test_owner_update_replaces_value() {
        let (store, cmd) = seeded(7, "state1").await;
        let p = params(42, "abc", Actor::user(7)).with_value("state2");

        assert!(cmd.update(&p).await.unwrap());
        assert_eq!(stored(&store, &cmd).await, Some(Entry::new(UserId(7), "state2")));
    }

    #[tokio::test]
    async fn test_non_owner_is_denied_and_value_kept() {
        let (store, cmd) = seeded(7, "state1").await;
        let p = params(42, "abc", Actor::user(9)).with_value("state3");

        let err = cmd.update(&p).await.unwrap_err();
        assert!(err.is_access_denied());
        assert_eq!(stored(&store, &cmd).await, Some(Entry::new(UserId(7), "state1")));
    }

    #[tokio::test]
    async fn test_anonymous_is_denied() {
        let (store, cmd) = seeded(7, "state1").await;
        let p = params(42, "abc", Actor::anonymous()).with_value("state3");

        assert!(cmd.update(&p).await.unwrap_err().is_access_denied());
        assert_eq!(stored(&store, &cmd).await.unwrap().value, "state1");
    }

    #[tokio::test]
    async fn test_missing_entry_is_noop() {
        let store = Arc::new(MemoryCacheStore::new());
        let cmd = UpdateFormDataCommand::new(CommandContext::new(store.clone(), Arc::new(AllowAll)));
        let p = params(42, "unused", Actor::user(7)).with_value("state");

        assert!(!cmd.update(&p).await.unwrap());
        assert!(store.is_empty());
    }

    #[test_case(None ; "absent value")]
    #[test_case(Some("") ; "empty value")]
    #[tokio::test]
    async fn test_missing_value_is_noop(value: Option<&str>) {
        let (store, cmd) = seeded(7, "state1").await;
        let mut p = params(42, "abc", Actor::user(7));
        p.value = value.map(str::to_owned);

        assert!(!cmd.update(&p).await.unwrap());
        assert_eq!(stored(&store, &cmd).await.unwrap().value, "state1");
    }

    #[tokio::test]
    async fn test_missing_value_skips_owner_check() {
        let (_store, cmd) = seeded(7, "state1").await;
        let p = params(42, "abc", Actor::user(9));
        assert!(!cmd.update(&p).await.unwrap());
    }

    #[tokio::test]
    async fn test_other_resource_is_untouched() {
        let (store, cmd) = seeded(7, "state1").await;
        let p = params(43, "abc", Actor::user(7)).with_value("state2");

        assert!(!cmd.update(&p).await.unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(stored(&store, &cmd).await.unwrap().value, "state1");
    }

    #[tokio::test]
    async fn test_denied_access_skips_store() {
        let store = Arc::new(CountingStore::default());
        let deny = FnAccessChecker::new(|_: &CommandParameters| {
            Err(FormDataError::AccessDenied("chart hidden".into()))
        });
        let cmd = UpdateFormDataCommand::new(CommandContext::new(store.clone(), Arc::new(deny)));

        let p = params(42, "abc", Actor::user(7)).with_value("state");
        assert!(cmd.update(&p).await.unwrap_err().is_access_denied());
        assert_eq!(store.gets(), 0);
        assert_eq!(store.sets(), 0);
    }
}
