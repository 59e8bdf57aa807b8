use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<LoadedConfig> = OnceLock::new();

/// `config.toml` from the workspace root. Embedded because the web build has
/// no filesystem to read it from at runtime.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

struct LoadedConfig {
    config: PortalConfig,
    /// Parse failure, kept so it can be logged once the logger is up.
    error: Option<String>,
}

/// Parse a config document. Missing tables and keys fall back to defaults.
pub fn parse_config(contents: &str) -> Result<PortalConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn load() -> LoadedConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => LoadedConfig {
            config,
            error: None,
        },
        Err(e) => LoadedConfig {
            config: PortalConfig::default(),
            error: Some(e.to_string()),
        },
    }
}

/// The portal configuration. Parsed on first call; an unparseable file
/// yields the defaults.
pub fn portal_config() -> &'static PortalConfig {
    &CONFIG.get_or_init(load).config
}

/// Why the embedded config was rejected, if it was.
pub fn config_error() -> Option<&'static str> {
    CONFIG.get_or_init(load).error.as_deref()
}
