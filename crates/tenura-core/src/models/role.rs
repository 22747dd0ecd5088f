//! Role domain model.
//!
//! The role set is closed. Anything arriving from outside the closed set
//! (a stored record written by an older client, a hand-edited value) must
//! fail to parse, and every consumer treats an unparseable role as "no
//! access" — never as wildcard access.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Landlord,
    Manager,
    Tenant,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Landlord, Role::Manager, Role::Tenant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Landlord => "landlord",
            Role::Manager => "manager",
            Role::Tenant => "tenant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landlord" => Ok(Role::Landlord),
            "manager" => Ok(Role::Manager),
            "tenant" => Ok(Role::Tenant),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
