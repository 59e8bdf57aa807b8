use dioxus::logger::tracing::Level;

use crate::config::{config_error, portal_config};

/// Map a configured level name to a tracing level. Unknown names mean `info`.
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the Dioxus logger at the configured level.
///
/// Dioxus owns the tracing subscriber; this only picks its level and reports
/// a rejected config file once logging is available.
pub fn init_logging() {
    let config = portal_config();
    let level = parse_level(&config.logging.level);

    if let Err(e) = dioxus::logger::init(level) {
        // A subscriber is already installed (hot reload, tests).
        tracing::debug!(error = %e, "logger already initialised");
    }

    if let Some(err) = config_error() {
        tracing::warn!(error = %err, "config.toml rejected; using default settings");
    }

    tracing::info!(
        level = %level,
        login_ms = config.latency.login_ms,
        page_load_ms = config.latency.page_load_ms,
        "portal configuration loaded"
    );
}
