//! # FORMDATA Commands
//!
//! Access-controlled commands over the form data cache.
//!
//! Every command runs the same prelude before touching the store:
//!
//! ```text
//! check_access(params) → derive(resource_id, key) → store.get(composite key)
//! ```
//!
//! - **Get**: returns the value, optionally restarting the entry's timeout
//! - **Update**: replaces the value when the actor owns the entry
//! - **Delete**: removes the entry when the actor owns it
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use formdata_commands::{AllowAll, FormDataCacheConfig, FormDataService};
//! use formdata_core::{Actor, CommandParameters};
//!
//! let config = FormDataCacheConfig::from_env();
//! let service = FormDataService::in_memory(Arc::new(AllowAll), &config);
//!
//! let params = CommandParameters::new(42u64, "abc", Actor::user(7)).with_value("state2");
//! let updated = service.update(&params).await?;
//! let value = service.get(&params).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod access;
mod config;
mod context;
mod delete;
mod get;
pub mod key;
mod service;
mod update;

#[cfg(test)]
mod test_utils;

pub use access::{AllowAll, FnAccessChecker, ResourceAccessList};
pub use config::FormDataCacheConfig;
pub use context::CommandContext;
pub use delete::DeleteFormDataCommand;
pub use get::GetFormDataCommand;
pub use key::{derive, KeyNamespace};
pub use service::FormDataService;
pub use update::UpdateFormDataCommand;
