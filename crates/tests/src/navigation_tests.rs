use pretty_assertions::assert_eq;
use shared_types::{footer_entries, resolve_navigation, resolve_navigation_for_key, Role, ALL_ROLES};

fn labels(role: Role) -> Vec<String> {
    resolve_navigation(role).into_iter().map(|e| e.label).collect()
}

#[test]
fn every_role_gets_its_menu() {
    assert_eq!(
        labels(Role::Admin),
        vec!["Dashboard", "User Management", "NFC Cards", "Cloud Sync", "Analytics", "Payments"]
    );
    assert_eq!(
        labels(Role::Doctor),
        vec!["Dashboard", "Patients", "NFC Cards", "Cloud Sync", "Prescriptions"]
    );
    assert_eq!(labels(Role::Nurse), vec!["Dashboard", "Patients", "NFC Cards", "Reports"]);
    assert_eq!(
        labels(Role::Patient),
        vec!["Dashboard", "Medical Records", "Billing", "My Card", "Checkout"]
    );
}

#[test]
fn paths_are_unique_within_a_menu() {
    for role in ALL_ROLES {
        let mut paths: Vec<String> = resolve_navigation(*role).into_iter().map(|e| e.path).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total, "duplicate path in {role} menu");
    }
}

#[test]
fn parsed_key_and_enum_agree() {
    for role in ALL_ROLES {
        assert_eq!(resolve_navigation_for_key(role.as_str()), resolve_navigation(*role));
    }
}

#[test]
fn footer_is_the_same_for_everyone() {
    let labels: Vec<String> = footer_entries().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Settings", "Logout"]);
}
