pub mod api;
pub mod config;
pub mod fixtures;
pub mod latency;
pub mod session;
pub mod telemetry;

pub use api::PortalApi;
pub use latency::{InstantLatency, Latency, RecordingLatency, TimerLatency};
pub use session::{default_store, MemorySessionStore, SessionStore};
