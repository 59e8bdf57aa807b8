use shared_types::{AppError, Session, StorageKeys};
use web_sys::Storage;

use super::{decode_session, encode_session, MemorySessionStore, SessionStore};

/// Session entries in `window.localStorage`.
///
/// When storage is unreachable (private mode, sandboxed iframe) the store
/// keeps the session in memory for the life of the page instead.
pub struct BrowserSessionStore {
    keys: StorageKeys,
    storage: Option<Storage>,
    fallback: MemorySessionStore,
}

impl BrowserSessionStore {
    pub fn new(keys: StorageKeys) -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; session will last for this page only");
        }
        Self {
            fallback: MemorySessionStore::new(keys.clone()),
            keys,
            storage,
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn set_session(&self, session: &Session) {
        let Some(storage) = &self.storage else {
            return self.fallback.set_session(session);
        };
        for (key, value) in encode_session(&self.keys, session) {
            let result = match value {
                Some(value) => storage.set_item(&key, &value),
                None => storage.remove_item(&key),
            };
            if let Err(e) = result {
                tracing::warn!(key = %key, error = ?e, "localStorage write failed");
            }
        }
        tracing::info!(role = %session.role, "session stored");
    }

    fn get_session(&self) -> Option<Session> {
        let Some(storage) = &self.storage else {
            return self.fallback.get_session();
        };
        decode_session(&self.keys, |key| storage.get_item(key).ok().flatten())
    }

    fn clear_session(&self) {
        let Some(storage) = &self.storage else {
            return self.fallback.clear_session();
        };
        for key in self.keys.all() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key = %key, error = ?e, "localStorage remove failed");
            }
        }
        tracing::info!("session cleared");
    }

    fn unavailable(&self) -> Option<AppError> {
        self.storage.is_none().then(|| {
            AppError::storage_unavailable("Browser storage is blocked; you will be signed out when this page closes")
        })
    }
}
