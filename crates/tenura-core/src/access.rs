//! Role-access resolution over the current identity.
//!
//! All predicates are total: absent identity, missing token, or a role
//! outside the allowed set all resolve to `false`. Nothing here can
//! fail.

use crate::models::identity::Identity;
use crate::models::role::Role;

/// True iff an identity is present, authenticated, and its role is a
/// member of `roles`.
pub fn has_role(identity: Option<&Identity>, roles: &[Role]) -> bool {
    match identity {
        Some(identity) if identity.is_authenticated() => roles.contains(&identity.role),
        _ => false,
    }
}

pub fn is_landlord(identity: Option<&Identity>) -> bool {
    has_role(identity, &[Role::Landlord])
}

pub fn is_manager(identity: Option<&Identity>) -> bool {
    has_role(identity, &[Role::Manager])
}

pub fn is_tenant(identity: Option<&Identity>) -> bool {
    has_role(identity, &[Role::Tenant])
}

/// Alias of [`has_role`] for route and navigation gating call sites,
/// where the question is "may this identity access the view" rather
/// than "what kind of identity is this".
pub fn can_access(identity: Option<&Identity>, allowed: &[Role]) -> bool {
    has_role(identity, allowed)
}
