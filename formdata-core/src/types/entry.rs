//! Stored form data entries.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// One stored form data payload.
///
/// Entries are replaced wholesale on update; nothing mutates them in place.
///
/// # Wire Format (JSON)
/// ```text
/// {"owner": <user id>, "value": "<form data>"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// User that created (or last updated) the entry
    pub owner: UserId,
    /// Opaque form data, usually a JSON document
    pub value: String,
}

impl Entry {
    /// Creates an entry.
    pub fn new(owner: UserId, value: impl Into<String>) -> Self {
        Self {
            owner,
            value: value.into(),
        }
    }

    /// Returns true if `user` owns this entry. Anonymous actors own nothing.
    pub fn is_owned_by(&self, user: Option<UserId>) -> bool {
        user == Some(self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_format() {
        let entry = Entry::new(UserId(7), "state1");
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#"{"owner":7,"value":"state1"}"#);
    }

    #[test]
    fn test_entry_from_foreign_json() {
        let entry: Entry = serde_json::from_str(r#"{"value": "{\"a\": 1}", "owner": 3}"#).unwrap();
        assert_eq!(entry.owner, UserId(3));
        assert_eq!(entry.value, r#"{"a": 1}"#);
    }

    #[test]
    fn test_entry_from_malformed_json() {
        assert!(serde_json::from_str::<Entry>(r#"{"owner": null, "value": "x"}"#).is_err());
    }

    #[test]
    fn test_ownership() {
        let entry = Entry::new(UserId(7), "state");
        assert!(entry.is_owned_by(Some(UserId(7))));
        assert!(!entry.is_owned_by(Some(UserId(9))));
        assert!(!entry.is_owned_by(None));
    }
}
