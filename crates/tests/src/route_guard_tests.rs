use pretty_assertions::assert_eq;
use services::SessionStore;
use shared_types::{
    resolve_navigation_for_key, GuardDecision, GuardState, IconRef, Identity, NavigationEntry, Role,
    RoleKey, Session,
};

use crate::common;

#[test]
fn visiting_admin_users_without_session_redirects_to_entry() {
    let store = common::store();

    let mut guard = GuardState::default();
    assert_eq!(guard.check(store.get_session()), GuardDecision::Redirect("/"));
    assert!(!guard.is_verified());
}

#[test]
fn nurse_session_admits_and_drives_nurse_menu() {
    let store = common::store();
    let nurse = Session::new(Role::Nurse, Identity::email("nurse@hospital.com", "Nurse Priya"));
    store.set_session(&nurse);

    let mut guard = GuardState::default();
    assert_eq!(guard.check(store.get_session()), GuardDecision::Admit(nurse));

    let role = guard.role().unwrap();
    let paths: Vec<String> = resolve_navigation_for_key(role.as_str())
        .into_iter()
        .map(|e| e.path)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/dashboard/nurse",
            "/dashboard/nurse/patients",
            "/dashboard/nurse/nfc",
            "/dashboard/nurse/reports",
        ]
    );
}

#[test]
fn unrecognised_role_gets_only_the_base_entry() {
    let store = services::MemorySessionStore::with_entries(
        shared_types::StorageKeys::default(),
        [("userRole", "superuser")],
    );
    let mut guard = GuardState::default();
    assert!(matches!(guard.check(store.get_session()), GuardDecision::Admit(_)));

    let role = guard.role().unwrap();
    assert_eq!(role, RoleKey::Unknown("superuser".to_string()));
    assert_eq!(
        resolve_navigation_for_key(role.as_str()),
        vec![NavigationEntry::new("Dashboard", "/dashboard/superuser", IconRef::LayoutDashboard)]
    );
}

#[test]
fn logout_after_verification_does_not_flip_the_guard() {
    let store = common::store();
    store.set_session(&Session::new(Role::Admin, Identity::email("admin@hospital.com", "Admin")));

    let mut guard = GuardState::default();
    guard.check(store.get_session());
    store.clear_session();

    assert_eq!(guard.role(), Some(RoleKey::Known(Role::Admin)));
    let mut fresh = GuardState::default();
    assert_eq!(fresh.check(store.get_session()), GuardDecision::Redirect("/"));
}
