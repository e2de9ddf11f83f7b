//! # FORMDATA Core
//!
//! Core types, errors, and traits for the form data cache.
//!
//! This crate provides the foundational building blocks used by the other
//! FORMDATA crates:
//!
//! - **Types**: Entries, actors, command parameters, and composite cache keys
//! - **Errors**: The error hierarchy shared by stores and commands
//! - **Constants**: Namespaces and cache defaults
//! - **Traits**: The [`CacheStore`] and [`AccessChecker`] seams
//!
//! ## Example
//!
//! ```rust
//! use formdata_core::{Actor, CommandParameters, Entry, UserId};
//!
//! let params = CommandParameters::new(42u64, "abc", Actor::user(7))
//!     .with_value("{\"viz_type\":\"table\"}");
//! let entry = Entry::new(UserId(7), "state1");
//! let json = serde_json::to_string(&entry).unwrap();
//! assert_eq!(json, r#"{"owner":7,"value":"state1"}"#);
//! assert_eq!(params.value.as_deref(), Some("{\"viz_type\":\"table\"}"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{FormDataError, Result};
pub use traits::*;
pub use types::*;
