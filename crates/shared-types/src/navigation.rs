//! Role-to-navigation resolution for the dashboard rail.
//!
//! The rail always starts with a `Dashboard` entry for the role root and then
//! lists the role's pages in a fixed order. The table is a `match` over the
//! closed [`Role`] enum so adding a role forces its menu to be defined.

use serde::{Deserialize, Serialize};

use crate::guard::ENTRY_PATH;
use crate::role::{dashboard_root_for_key, Role};

/// Path of the settings page, shared by every role.
pub const SETTINGS_PATH: &str = "/dashboard/settings";

/// Symbolic icon for a navigation entry. The UI layer maps these to glyphs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IconRef {
    LayoutDashboard,
    Users,
    Smartphone,
    Cloud,
    BarChart,
    CreditCard,
    FileText,
    Settings,
    LogOut,
}

/// A single rail item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: String,
    pub path: String,
    pub icon: IconRef,
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: IconRef) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
        }
    }

    /// Exact-path match used to highlight the active entry.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path.trim_end_matches('/') || self.path == current_path
    }
}

/// Per-role pages as (label, path segment, icon), in rail order.
fn role_pages(role: Role) -> &'static [(&'static str, &'static str, IconRef)] {
    match role {
        Role::Admin => &[
            ("User Management", "users", IconRef::Users),
            ("NFC Cards", "nfc", IconRef::Smartphone),
            ("Cloud Sync", "sync", IconRef::Cloud),
            ("Analytics", "analytics", IconRef::BarChart),
            ("Payments", "payments", IconRef::CreditCard),
        ],
        Role::Doctor => &[
            ("Patients", "patients", IconRef::Users),
            ("NFC Cards", "nfc", IconRef::Smartphone),
            ("Cloud Sync", "sync", IconRef::Cloud),
            ("Prescriptions", "prescriptions", IconRef::FileText),
        ],
        Role::Nurse => &[
            ("Patients", "patients", IconRef::Users),
            ("NFC Cards", "nfc", IconRef::Smartphone),
            ("Reports", "reports", IconRef::FileText),
        ],
        Role::Patient => &[
            ("Medical Records", "records", IconRef::FileText),
            ("Billing", "billing", IconRef::CreditCard),
            ("My Card", "card", IconRef::Smartphone),
            ("Checkout", "checkout", IconRef::CreditCard),
        ],
    }
}

fn base_entry(root: String) -> NavigationEntry {
    NavigationEntry::new("Dashboard", root, IconRef::LayoutDashboard)
}

/// Ordered rail entries for a role: `Dashboard` first, then the role's pages.
pub fn resolve_navigation(role: Role) -> Vec<NavigationEntry> {
    let mut entries = vec![base_entry(role.dashboard_root())];
    entries.extend(
        role_pages(role)
            .iter()
            .map(|(label, segment, icon)| {
                NavigationEntry::new(*label, role.dashboard_path(segment), *icon)
            }),
    );
    entries
}

/// Rail entries for a raw role key. Unrecognised keys get only the
/// `Dashboard` entry pointing at `/dashboard/{key}`.
pub fn resolve_navigation_for_key(key: &str) -> Vec<NavigationEntry> {
    match Role::parse(key) {
        Some(role) => resolve_navigation(role),
        None => vec![base_entry(dashboard_root_for_key(key))],
    }
}

/// Entry rendered in the rail footer for every role.
pub fn settings_entry() -> NavigationEntry {
    NavigationEntry::new("Settings", SETTINGS_PATH, IconRef::Settings)
}

/// Logout action. Its path is where the shell lands after clearing the session.
pub fn logout_entry() -> NavigationEntry {
    NavigationEntry::new("Logout", ENTRY_PATH, IconRef::LogOut)
}

/// Rail footer, identical for every role: Settings then Logout.
pub fn footer_entries() -> Vec<NavigationEntry> {
    vec![settings_entry(), logout_entry()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(entries: &[NavigationEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn admin_menu_order() {
        let nav = resolve_navigation(Role::Admin);
        assert_eq!(
            labels(&nav),
            vec!["Dashboard", "User Management", "NFC Cards", "Cloud Sync", "Analytics", "Payments"]
        );
        assert_eq!(nav[0].path, "/dashboard/admin");
        assert_eq!(nav[1].path, "/dashboard/admin/users");
        assert_eq!(nav[5].icon, IconRef::CreditCard);
    }

    #[test]
    fn doctor_menu_order() {
        let nav = resolve_navigation(Role::Doctor);
        assert_eq!(
            labels(&nav),
            vec!["Dashboard", "Patients", "NFC Cards", "Cloud Sync", "Prescriptions"]
        );
        assert_eq!(nav[4].path, "/dashboard/doctor/prescriptions");
    }

    #[test]
    fn nurse_menu_matches_table() {
        let nav = resolve_navigation(Role::Nurse);
        assert_eq!(
            nav,
            vec![
                NavigationEntry::new("Dashboard", "/dashboard/nurse", IconRef::LayoutDashboard),
                NavigationEntry::new("Patients", "/dashboard/nurse/patients", IconRef::Users),
                NavigationEntry::new("NFC Cards", "/dashboard/nurse/nfc", IconRef::Smartphone),
                NavigationEntry::new("Reports", "/dashboard/nurse/reports", IconRef::FileText),
            ]
        );
    }

    #[test]
    fn patient_menu_order() {
        let nav = resolve_navigation(Role::Patient);
        assert_eq!(
            labels(&nav),
            vec!["Dashboard", "Medical Records", "Billing", "My Card", "Checkout"]
        );
        assert_eq!(nav[3].path, "/dashboard/patient/card");
    }

    #[test]
    fn every_menu_starts_with_role_root() {
        for role in crate::role::ALL_ROLES {
            let nav = resolve_navigation(*role);
            assert_eq!(nav[0].label, "Dashboard");
            assert_eq!(nav[0].path, role.dashboard_root());
            assert!(nav[1..].iter().all(|e| e.path.starts_with(&nav[0].path)));
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(resolve_navigation(Role::Doctor), resolve_navigation(Role::Doctor));
    }

    #[test]
    fn unknown_key_yields_base_entry_only() {
        let nav = resolve_navigation_for_key("janitor");
        assert_eq!(
            nav,
            vec![NavigationEntry::new("Dashboard", "/dashboard/janitor", IconRef::LayoutDashboard)]
        );
    }

    #[test]
    fn known_key_matches_enum_resolution() {
        assert_eq!(resolve_navigation_for_key("nurse"), resolve_navigation(Role::Nurse));
    }

    #[test]
    fn footer_is_settings_then_logout() {
        let footer = footer_entries();
        assert_eq!(labels(&footer), vec!["Settings", "Logout"]);
        assert_eq!(footer[0].path, "/dashboard/settings");
        assert_eq!(footer[1].icon, IconRef::LogOut);
        assert_eq!(footer[1].path, "/");
    }

    #[test]
    fn active_match_is_exact() {
        let entry = NavigationEntry::new("Patients", "/dashboard/doctor/patients", IconRef::Users);
        assert!(entry.is_active("/dashboard/doctor/patients"));
        assert!(entry.is_active("/dashboard/doctor/patients/"));
        assert!(!entry.is_active("/dashboard/doctor"));
        assert!(!entry.is_active("/dashboard/doctor/patients/P001"));
    }
}
