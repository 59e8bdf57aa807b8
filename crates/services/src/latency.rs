//! Injectable delay used by the simulated API.
//!
//! Production code waits on a real timer; tests inject [`InstantLatency`] or
//! [`RecordingLatency`], or their own gate, so nothing depends on wall-clock
//! time.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Future returned by [`Latency::wait`].
pub type Delay = Pin<Box<dyn Future<Output = ()>>>;

pub trait Latency {
    /// Resolve after (roughly) `duration`.
    fn wait(&self, duration: Duration) -> Delay;
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantLatency;

impl Latency for InstantLatency {
    fn wait(&self, _duration: Duration) -> Delay {
        Box::pin(std::future::ready(()))
    }
}

/// Real timer: `setTimeout` in the browser, tokio elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerLatency;

#[cfg(target_arch = "wasm32")]
impl Latency for TimerLatency {
    fn wait(&self, duration: Duration) -> Delay {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        Box::pin(async move {
            let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                let scheduled = web_sys::window().map(|window| {
                    window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                });
                if !matches!(scheduled, Some(Ok(_))) {
                    if let Err(e) = resolve.call0(&wasm_bindgen::JsValue::NULL) {
                        tracing::warn!(error = ?e, "could not resolve unscheduled timer");
                    }
                }
            });
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::warn!(error = ?e, "timer promise rejected");
            }
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Latency for TimerLatency {
    fn wait(&self, duration: Duration) -> Delay {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Resolves immediately and remembers every requested duration.
#[derive(Debug, Default)]
pub struct RecordingLatency {
    requested: RefCell<Vec<Duration>>,
}

impl RecordingLatency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

impl Latency for RecordingLatency {
    fn wait(&self, duration: Duration) -> Delay {
        self.requested.borrow_mut().push(duration);
        Box::pin(std::future::ready(()))
    }
}
