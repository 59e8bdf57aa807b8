use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use services::{PortalApi, RecordingLatency};
use shared_types::{LatencyConfig, Role};

use crate::common::{self, GateLatency};

#[tokio::test]
async fn login_does_not_finish_until_the_delay_elapses() {
    let gate = Rc::new(GateLatency::default());
    let api = PortalApi::new(gate.clone(), LatencyConfig::default());

    let login = api.login(common::demo_login("doctor@hospital.com", Role::Doctor));
    tokio::pin!(login);

    let early = tokio::time::timeout(Duration::from_millis(50), &mut login).await;
    assert!(early.is_err());

    gate.release();
    let session = login.await.unwrap();
    assert_eq!(session.role, Role::Doctor);
}

#[tokio::test]
async fn each_call_requests_its_configured_delay() {
    let latency = Rc::new(RecordingLatency::new());
    let api = PortalApi::new(latency.clone(), LatencyConfig::default());

    api.login(common::demo_login("nurse@hospital.com", Role::Nurse)).await.unwrap();
    api.page_load().await;
    api.sync_card(services::fixtures::nfc_cards().remove(0)).await;
    api.download("lab_results_P001.pdf").await;

    assert_eq!(
        latency.requested(),
        vec![
            Duration::from_millis(500),
            Duration::from_millis(1500),
            Duration::from_millis(1500),
            Duration::from_millis(1500),
        ]
    );
}

#[tokio::test]
async fn configured_delays_replace_the_defaults() {
    let latency = Rc::new(RecordingLatency::new());
    let delays = LatencyConfig {
        bulk_sync_ms: 25,
        ..LatencyConfig::default()
    };
    let api = PortalApi::new(latency.clone(), delays);

    api.sync_all(services::fixtures::sync_operations()).await;
    assert_eq!(latency.requested(), vec![Duration::from_millis(25)]);
}
