use pretty_assertions::assert_eq;
use services::SessionStore;
use shared_types::{AuthMethod, Contact, Role};

use crate::common;

#[tokio::test]
async fn login_stores_session_and_lands_on_role_root() {
    let store = common::store();
    let session = common::instant_api()
        .login(common::demo_login("doctor@hospital.com", Role::Doctor))
        .await
        .unwrap();
    store.set_session(&session);

    let stored = store.get_session().unwrap();
    assert_eq!(stored.role, Role::Doctor);
    assert_eq!(stored.identity.label(), "Dr. Sharma");
    assert_eq!(stored.landing_path(), "/dashboard/doctor");
    assert_eq!(store.raw("userRole").as_deref(), Some("doctor"));
}

#[tokio::test]
async fn logout_clears_everything() {
    let store = common::store();
    let session = common::instant_api()
        .login(common::demo_login("admin@hospital.com", Role::Admin))
        .await
        .unwrap();
    store.set_session(&session);
    store.clear_session();

    assert_eq!(store.get_session(), None);
    assert!(store.is_empty());
}

#[test]
fn logout_twice_is_harmless() {
    let store = common::store();
    store.clear_session();
    store.clear_session();
    assert_eq!(store.get_session(), None);
}

#[tokio::test]
async fn second_login_replaces_the_first() {
    let api = common::instant_api();
    let store = common::store();
    store.set_session(&api.login(common::demo_login("nurse@hospital.com", Role::Nurse)).await.unwrap());
    store.set_session(&api.login(common::demo_login("patient@hospital.com", Role::Patient)).await.unwrap());

    let stored = store.get_session().unwrap();
    assert_eq!(stored.role, Role::Patient);
    assert_eq!(
        stored.identity.contact,
        Some(Contact::Email("patient@hospital.com".to_string()))
    );
}

#[tokio::test]
async fn phone_signup_survives_a_reload() {
    let store = common::store();
    let session = common::instant_api()
        .signup(shared_types::SignupRequest {
            method: shared_types::SignupMethod::Phone,
            name: "Ravi Menon".into(),
            phone: "9876543210".into(),
            country_code: "+91".into(),
            role: Role::Patient,
            ..Default::default()
        })
        .await
        .unwrap();
    store.set_session(&session);

    let reloaded = store.get_session().unwrap();
    assert_eq!(reloaded.identity.auth_method, AuthMethod::Phone);
    assert_eq!(reloaded.identity.label(), "Ravi Menon");
    assert_eq!(store.raw("userEmail"), None);
}
