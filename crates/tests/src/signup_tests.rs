use std::rc::Rc;

use pretty_assertions::assert_eq;
use services::RecordingLatency;
use shared_types::{AppErrorKind, LatencyConfig, Role, SignupMethod, SignupRequest};

use crate::common;

fn email_signup() -> SignupRequest {
    SignupRequest {
        method: SignupMethod::Email,
        name: "Anita Das".into(),
        email: "anita@clinic.org".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        role: Role::Nurse,
        ..Default::default()
    }
}

#[tokio::test]
async fn valid_email_signup_creates_session() {
    let session = common::instant_api().signup(email_signup()).await.unwrap();
    assert_eq!(session.role, Role::Nurse);
    assert_eq!(session.identity.label(), "Anita Das");
    assert_eq!(session.landing_path(), "/dashboard/nurse");
}

#[tokio::test]
async fn short_password_is_rejected_before_any_wait() {
    let latency = Rc::new(RecordingLatency::new());
    let api = services::PortalApi::new(latency.clone(), LatencyConfig::default());
    let err = api
        .signup(SignupRequest {
            password: "abc".into(),
            confirm_password: "abc".into(),
            ..email_signup()
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("password"), Some("Password must be at least 6 characters"));
    assert!(latency.requested().is_empty());
}

#[tokio::test]
async fn mismatched_confirmation_is_rejected() {
    let err = common::instant_api()
        .signup(SignupRequest {
            confirm_password: "secret2".into(),
            ..email_signup()
        })
        .await
        .unwrap_err();
    assert_eq!(err.toast_message(), "Passwords do not match");
}

#[tokio::test]
async fn short_phone_is_rejected() {
    let err = common::instant_api()
        .signup(SignupRequest {
            method: SignupMethod::Phone,
            name: "Ravi".into(),
            phone: "12345".into(),
            role: Role::Patient,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.field_error("phone"), Some("Please enter a valid phone number"));
}

#[tokio::test]
async fn google_signup_ignores_empty_fields() {
    let session = common::instant_api()
        .signup(SignupRequest {
            method: SignupMethod::Google,
            role: Role::Admin,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.identity.label(), "Google User");
}
