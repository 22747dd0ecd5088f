//! Selected-landlord domain model.

use serde::{Deserialize, Serialize};

/// The landlord account a manager is currently operating on behalf of.
///
/// Persisted under its own storage key so the selection survives a
/// reload; cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedLandlord {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}
