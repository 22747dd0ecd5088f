//! Role-scoped navigation catalogs.
//!
//! Each role has a fixed, hand-authored entry list in a stable order;
//! nothing is sorted or reordered at runtime. An absent or unrecognized
//! role resolves to the base list (`Dashboard` only) and an empty
//! secondary menu — the resolver fails closed rather than erroring.

use crate::models::role::Role;

/// Navigation target routes, treated as opaque identifiers here.
pub mod routes {
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROPERTIES: &str = "/dashboard/properties";
    pub const RENT: &str = "/dashboard/rent";
    pub const MAINTENANCE: &str = "/dashboard/maintenance";
    pub const MESSAGES: &str = "/dashboard/messages";
    pub const MANAGERS: &str = "/dashboard/managers";
    pub const UNITS: &str = "/dashboard/units";
    pub const REPORTS: &str = "/dashboard/reports";
    pub const SETTINGS: &str = "/dashboard/settings";
    /// Entry screen, navigated to on logout or failed gating.
    pub const ENTRY: &str = "/auth/login";
}

/// One navigation entry: label plus target route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
}

const DASHBOARD: NavItem = NavItem {
    label: "Dashboard",
    route: routes::DASHBOARD,
};
const SETTINGS: NavItem = NavItem {
    label: "Settings",
    route: routes::SETTINGS,
};

const LANDLORD_NAV: &[NavItem] = &[
    DASHBOARD,
    NavItem { label: "Properties", route: routes::PROPERTIES },
    NavItem { label: "Rent", route: routes::RENT },
    NavItem { label: "Maintenance", route: routes::MAINTENANCE },
    NavItem { label: "Messages", route: routes::MESSAGES },
    NavItem { label: "Managers", route: routes::MANAGERS },
    NavItem { label: "Reports", route: routes::REPORTS },
];

const MANAGER_NAV: &[NavItem] = &[
    DASHBOARD,
    NavItem { label: "Properties", route: routes::PROPERTIES },
    NavItem { label: "Units", route: routes::UNITS },
    NavItem { label: "Rent", route: routes::RENT },
    NavItem { label: "Maintenance", route: routes::MAINTENANCE },
    NavItem { label: "Messages", route: routes::MESSAGES },
    NavItem { label: "Reports", route: routes::REPORTS },
];

const TENANT_NAV: &[NavItem] = &[
    DASHBOARD,
    NavItem { label: "My Unit", route: routes::UNITS },
    NavItem { label: "Rent", route: routes::RENT },
    NavItem { label: "Maintenance", route: routes::MAINTENANCE },
    NavItem { label: "Messages", route: routes::MESSAGES },
];

const BASE_NAV: &[NavItem] = &[DASHBOARD];

/// The mobile view keeps this many leading entries in the bar; the rest
/// spill into the "more" sheet. A fixed arithmetic split, not
/// content-aware.
pub const MOBILE_PRIMARY_COUNT: usize = 4;

/// Full ordered navigation list for a role. `None` (absent or
/// unrecognized role) yields the base list.
pub fn navigation_items(role: Option<Role>) -> &'static [NavItem] {
    match role {
        Some(Role::Landlord) => LANDLORD_NAV,
        Some(Role::Manager) => MANAGER_NAV,
        Some(Role::Tenant) => TENANT_NAV,
        None => BASE_NAV,
    }
}

/// Leading entries shown in the mobile navigation bar.
pub fn mobile_primary_items(role: Option<Role>) -> &'static [NavItem] {
    let full = navigation_items(role);
    &full[..full.len().min(MOBILE_PRIMARY_COUNT)]
}

/// Secondary "more" menu: everything past the mobile split, followed by
/// the constant trailing `Settings` entry. Empty for an absent or
/// unrecognized role.
pub fn more_menu_items(role: Option<Role>) -> Vec<NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    let full = navigation_items(Some(role));
    let overflow = &full[full.len().min(MOBILE_PRIMARY_COUNT)..];
    overflow.iter().copied().chain([SETTINGS]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_at_dashboard() {
        for role in Role::ALL {
            let items = navigation_items(Some(role));
            assert!(!items.is_empty());
            assert_eq!(items[0], DASHBOARD);
        }
    }

    #[test]
    fn absent_role_gets_base_list_only() {
        assert_eq!(navigation_items(None), &[DASHBOARD]);
        assert!(more_menu_items(None).is_empty());
    }

    #[test]
    fn landlord_order_is_stable() {
        let labels: Vec<&str> = navigation_items(Some(Role::Landlord))
            .iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(
            &labels[..5],
            &["Dashboard", "Properties", "Rent", "Maintenance", "Messages"]
        );
    }

    #[test]
    fn mobile_split_is_first_four() {
        for role in Role::ALL {
            let full = navigation_items(Some(role));
            let primary = mobile_primary_items(Some(role));
            assert_eq!(primary, &full[..MOBILE_PRIMARY_COUNT.min(full.len())]);
        }
    }

    #[test]
    fn more_menu_is_overflow_plus_settings() {
        let more = more_menu_items(Some(Role::Tenant));
        // Tenant list is five entries: one overflows, then Settings.
        assert_eq!(more.len(), 2);
        assert_eq!(more[0].label, "Messages");
        assert_eq!(more[1], SETTINGS);

        let more = more_menu_items(Some(Role::Landlord));
        assert_eq!(more.last(), Some(&SETTINGS));
        assert_eq!(more[0].label, "Messages");
    }

    #[test]
    fn routes_are_within_the_dashboard_prefix() {
        for role in Role::ALL {
            for item in navigation_items(Some(role)) {
                assert!(item.route.starts_with("/dashboard"));
            }
        }
    }
}
