use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated backend delays, in milliseconds.
///
/// Every field has a default so a missing or partial `[latency]` table
/// keeps the stock timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatencyConfig {
    #[serde(default = "default_auth_ms")]
    pub login_ms: u64,
    #[serde(default = "default_auth_ms")]
    pub signup_ms: u64,
    #[serde(default = "default_page_ms")]
    pub page_load_ms: u64,
    #[serde(default = "default_page_ms")]
    pub card_sync_ms: u64,
    #[serde(default = "default_bulk_ms")]
    pub bulk_sync_ms: u64,
    #[serde(default = "default_page_ms")]
    pub download_ms: u64,
    #[serde(default = "default_bulk_ms")]
    pub record_download_ms: u64,
    #[serde(default = "default_page_ms")]
    pub payment_ms: u64,
}

fn default_auth_ms() -> u64 {
    500
}

fn default_page_ms() -> u64 {
    1500
}

fn default_bulk_ms() -> u64 {
    2000
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_auth_ms(),
            signup_ms: default_auth_ms(),
            page_load_ms: default_page_ms(),
            card_sync_ms: default_page_ms(),
            bulk_sync_ms: default_bulk_ms(),
            download_ms: default_page_ms(),
            record_download_ms: default_bulk_ms(),
            payment_ms: default_page_ms(),
        }
    }
}

impl LatencyConfig {
    /// All delays zeroed; used by tests and previews.
    pub fn instant() -> Self {
        Self {
            login_ms: 0,
            signup_ms: 0,
            page_load_ms: 0,
            card_sync_ms: 0,
            bulk_sync_ms: 0,
            download_ms: 0,
            record_download_ms: 0,
            payment_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn signup(&self) -> Duration {
        Duration::from_millis(self.signup_ms)
    }

    pub fn page_load(&self) -> Duration {
        Duration::from_millis(self.page_load_ms)
    }

    pub fn card_sync(&self) -> Duration {
        Duration::from_millis(self.card_sync_ms)
    }

    pub fn bulk_sync(&self) -> Duration {
        Duration::from_millis(self.bulk_sync_ms)
    }

    pub fn download(&self) -> Duration {
        Duration::from_millis(self.download_ms)
    }

    pub fn record_download(&self) -> Duration {
        Duration::from_millis(self.record_download_ms)
    }

    pub fn payment(&self) -> Duration {
        Duration::from_millis(self.payment_ms)
    }
}

/// Browser storage keys for the session record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageKeys {
    #[serde(default = "default_role_key")]
    pub role: String,
    #[serde(default = "default_name_key")]
    pub name: String,
    #[serde(default = "default_email_key")]
    pub email: String,
    #[serde(default = "default_phone_key")]
    pub phone: String,
    #[serde(default = "default_method_key")]
    pub auth_method: String,
}

fn default_role_key() -> String {
    "userRole".to_string()
}

fn default_name_key() -> String {
    "userName".to_string()
}

fn default_email_key() -> String {
    "userEmail".to_string()
}

fn default_phone_key() -> String {
    "userPhone".to_string()
}

fn default_method_key() -> String {
    "authMethod".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            role: default_role_key(),
            name: default_name_key(),
            email: default_email_key(),
            phone: default_phone_key(),
            auth_method: default_method_key(),
        }
    }
}

impl StorageKeys {
    /// Every key the session record may occupy.
    pub fn all(&self) -> [&str; 5] {
        [
            &self.role,
            &self.name,
            &self.email,
            &self.phone,
            &self.auth_method,
        ]
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PortalConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub storage: StorageKeys,
    #[serde(default)]
    pub logging: LoggingConfig,
}
