use std::rc::Rc;

use services::fixtures::DEMO_PASSWORD;
use services::latency::Delay;
use services::{InstantLatency, Latency, MemorySessionStore, PortalApi};
use shared_types::{LatencyConfig, LoginRequest, Role, StorageKeys};
use tokio::sync::Notify;

/// API whose calls resolve immediately.
pub fn instant_api() -> PortalApi {
    PortalApi::new(Rc::new(InstantLatency), LatencyConfig::default())
}

/// Fresh session store with the stock key names.
pub fn store() -> MemorySessionStore {
    MemorySessionStore::new(StorageKeys::default())
}

pub fn demo_login(email: &str, role: Role) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        role,
    }
}

/// Latency that holds every call until the test releases it.
#[derive(Default)]
pub struct GateLatency {
    gate: Rc<Notify>,
}

impl GateLatency {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

impl Latency for GateLatency {
    fn wait(&self, _duration: std::time::Duration) -> Delay {
        let gate = self.gate.clone();
        Box::pin(async move { gate.notified().await })
    }
}
