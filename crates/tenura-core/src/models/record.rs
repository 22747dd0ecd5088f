//! Persisted session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::role::Role;

/// The durable form of an [`Identity`].
///
/// Token and profile are persisted together inside one serialized record
/// under a single storage key, so a partial write can never leave a
/// token behind without its profile or vice versa. Older clients wrote
/// the two halves under separate keys; that layout is read once for
/// migration and never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn from_identity(identity: &Identity, created_at: DateTime<Utc>) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            token: identity.token.clone(),
            created_at,
        }
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            token: self.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_identity() {
        let identity = Identity {
            id: "42".into(),
            name: "Maya".into(),
            email: "maya@example.com".into(),
            role: Role::Manager,
            token: Some("tok-xyz".into()),
        };
        let record = SessionRecord::from_identity(&identity, Utc::now());
        assert_eq!(record.clone().into_identity(), identity);

        // And through JSON, the persisted representation.
        let raw = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.into_identity(), identity);
    }
}
