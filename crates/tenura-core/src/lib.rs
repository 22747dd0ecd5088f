//! Tenura Core — domain models and access resolution for the
//! property-management client.
//!
//! This crate holds:
//! - Domain models ([`models`]): [`Identity`](models::identity::Identity),
//!   [`Role`](models::role::Role), the persisted
//!   [`SessionRecord`](models::record::SessionRecord), and the manager's
//!   [`SelectedLandlord`](models::landlord::SelectedLandlord).
//! - The durable client storage seam ([`storage`]): a synchronous
//!   string-keyed key-value trait implemented by `tenura-store`.
//! - Role-access resolution ([`access`]) and the role-scoped navigation
//!   catalogs ([`navigation`]).
//!
//! Session lifecycle (load, persist, inactivity timeout) lives in
//! `tenura-session`.

pub mod access;
pub mod error;
pub mod models;
pub mod navigation;
pub mod storage;

pub use error::{TenuraError, TenuraResult};
pub use models::identity::Identity;
pub use models::role::Role;
pub use navigation::NavItem;
pub use storage::{Storage, StorageError};
