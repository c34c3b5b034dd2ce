//! Session state published by the authentication provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a signed-in user; cloud documents belong to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random owner ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    /// Display label shown in the user controls (the account e-mail)
    pub label: String,
}

impl Owner {
    pub fn new(id: OwnerId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Whether a user is signed in, and who.
///
/// Replaced wholesale on every sign-in/sign-out notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(Owner),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    pub fn owner(&self) -> Option<&Owner> {
        match self {
            SessionState::SignedIn(owner) => Some(owner),
            SessionState::SignedOut => None,
        }
    }

    pub fn owner_id(&self) -> Option<&OwnerId> {
        self.owner().map(|owner| &owner.id)
    }

    pub fn owner_label(&self) -> Option<&str> {
        self.owner().map(|owner| owner.label.as_str())
    }
}

impl From<Option<Owner>> for SessionState {
    fn from(owner: Option<Owner>) -> Self {
        match owner {
            Some(owner) => SessionState::SignedIn(owner),
            None => SessionState::SignedOut,
        }
    }
}
