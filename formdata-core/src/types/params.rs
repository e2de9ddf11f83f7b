//! Actors and per-call command parameters.

use serde::{Deserialize, Serialize};

use crate::types::{Key, ResourceId, UserId};

/// The identity performing a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User id, or `None` for an anonymous (guest) actor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Actor {
    /// Creates an authenticated actor.
    pub fn user(id: u64) -> Self {
        Self {
            user_id: Some(UserId(id)),
        }
    }

    /// Creates an anonymous actor.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Returns the actor's user id, if authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns true if the actor carries no user id.
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}

/// Input to every form data command. Built per call, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameters {
    /// Resource the entry is scoped to
    pub resource_id: ResourceId,
    /// Entry token within the resource
    pub key: Key,
    /// Identity performing the command
    pub actor: Actor,
    /// New payload (update only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CommandParameters {
    /// Creates parameters without a value (reads and deletes).
    pub fn new(resource_id: impl Into<ResourceId>, key: impl Into<Key>, actor: Actor) -> Self {
        Self {
            resource_id: resource_id.into(),
            key: key.into(),
            actor,
            value: None,
        }
    }

    /// Attaches a payload (updates).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the payload if present and non-empty.
    pub fn non_empty_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}
