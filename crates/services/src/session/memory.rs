use std::cell::RefCell;
use std::collections::HashMap;

use shared_types::{Session, StorageKeys};

use super::{decode_session, encode_session, SessionStore};

/// Session entries held in memory for the life of the store.
///
/// Used natively, in tests, and by the browser backend when `localStorage`
/// cannot be reached.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    keys: StorageKeys,
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new(keys: StorageKeys) -> Self {
        Self {
            keys,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Start from raw entries, as if a previous page load had written them.
    pub fn with_entries<K, V>(keys: StorageKeys, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            keys,
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn set_session(&self, session: &Session) {
        let mut entries = self.entries.borrow_mut();
        for (key, value) in encode_session(&self.keys, session) {
            match value {
                Some(value) => {
                    entries.insert(key, value);
                }
                None => {
                    entries.remove(&key);
                }
            }
        }
        tracing::info!(role = %session.role, "session stored");
    }

    fn get_session(&self) -> Option<Session> {
        let entries = self.entries.borrow();
        decode_session(&self.keys, |key| entries.get(key).cloned())
    }

    fn clear_session(&self) {
        let mut entries = self.entries.borrow_mut();
        for key in self.keys.all() {
            entries.remove(key);
        }
        tracing::info!("session cleared");
    }
}
