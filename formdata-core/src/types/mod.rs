//! Domain types for FORMDATA.
//!
//! - [`Entry`]: Stored form data payload with its owner
//! - [`Actor`]: Identity performing a command
//! - [`CommandParameters`]: Per-call input to every command
//! - [`CacheKey`]: Resource-scoped address of an entry

mod ids;
mod entry;
mod params;
mod cache_key;

pub use ids::*;
pub use entry::*;
pub use params::*;
pub use cache_key::*;
