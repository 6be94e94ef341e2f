//! Session identity domain model
//!
//! The session identifier correlates one installation's requests across app
//! restarts. It is an opaque client-generated token, not an authentication
//! credential.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Per-install session identifier
///
/// Immutable once created. The session store is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a fresh identifier with UUID v4 semantics.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Resolution state of the persisted session identifier.
///
/// Distinguishes "storage not read yet" from "read, but no identifier was
/// ever created" so dependents can defer content fetches until resolution
/// completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Durable storage has not been read yet.
    Unresolved,
    /// Storage was read; the identifier may still be absent (first run).
    Resolved(Option<SessionId>),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub fn session(&self) -> Option<&SessionId> {
        match self {
            Self::Resolved(Some(id)) => Some(id),
            _ => None,
        }
    }
}
