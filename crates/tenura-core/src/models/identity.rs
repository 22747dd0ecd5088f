//! Identity domain model.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// The authenticated user: profile fields plus the opaque session token
/// issued by the external authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user identifier. Upstream sources use both integer and
    /// string ids; they are carried verbatim as strings.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Opaque session token. `None` (or empty) means the identity is
    /// unauthenticated for gating purposes even when the profile fields
    /// are populated.
    pub token: Option<String>,
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
