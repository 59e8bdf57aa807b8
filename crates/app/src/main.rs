use std::rc::Rc;

use dioxus::prelude::*;
use services::config::portal_config;
use services::{default_store, PortalApi};

mod auth;
mod format_helpers;
mod hooks;
mod routes;
use auth::SessionState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    services::telemetry::init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = portal_config();
    let store = use_hook(|| default_store(config.storage.clone()));
    use_context_provider(|| SessionState::new(Rc::clone(&store)));
    use_context_provider(|| PortalApi::with_timer(config.latency.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "HealthHub" }
        shared_ui::ToastProvider {
            StorageNotice {}
            Router::<Route> {}
        }
    }
}

/// One-time warning when the session cannot be persisted.
#[component]
fn StorageNotice() -> Element {
    let session = auth::use_session();
    let toasts = shared_ui::use_toast();

    use_effect(move || {
        if let Some(err) = session.storage_problem() {
            shared_ui::notify(&toasts, shared_ui::ToastType::Warning, "Storage Unavailable", err.toast_message());
        }
    });

    rsx! {}
}
