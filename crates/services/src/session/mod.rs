//! Session persistence.
//!
//! A session is kept as a handful of flat string entries (role, name,
//! contact, auth method) so the browser backend can put them straight into
//! `localStorage`. Both backends share the encoding below.

mod memory;
pub use memory::MemorySessionStore;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSessionStore;

use std::rc::Rc;

use shared_types::{AppError, AuthMethod, Contact, Identity, RoleKey, Session, StorageKeys};

/// Where the signed-in session lives between page loads.
///
/// Unset is a normal state, so none of these can fail.
pub trait SessionStore {
    /// Persist `session`, replacing whatever was there.
    fn set_session(&self, session: &Session);
    /// The stored session, or `None` when absent or unreadable.
    fn get_session(&self) -> Option<Session>;
    /// Remove every session entry. Clearing an empty store is a no-op.
    fn clear_session(&self);
    /// Why sessions will not outlive this page, when that is the case.
    fn unavailable(&self) -> Option<AppError> {
        None
    }
}

/// Storage writes for `session`: `Some` sets the key, `None` removes it.
pub(crate) fn encode_session(keys: &StorageKeys, session: &Session) -> Vec<(String, Option<String>)> {
    let identity = &session.identity;
    let (email, phone) = match &identity.contact {
        Some(Contact::Email(email)) => (Some(email.clone()), None),
        Some(Contact::Phone(phone)) => (None, Some(phone.clone())),
        None => (None, None),
    };
    let name = Some(identity.display_name.clone()).filter(|n| !n.is_empty());

    vec![
        (keys.role.clone(), Some(session.role.as_str().to_string())),
        (keys.name.clone(), name),
        (keys.email.clone(), email),
        (keys.phone.clone(), phone),
        (
            keys.auth_method.clone(),
            Some(identity.auth_method.as_str().to_string()),
        ),
    ]
}

/// Rebuild a session from stored entries.
///
/// No role (or a blank one) means no session. A role outside the known set is
/// kept as-is; the shell gives it the base navigation only.
pub(crate) fn decode_session(
    keys: &StorageKeys,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<Session> {
    let role = RoleKey::parse(&lookup(&keys.role)?)?;
    if let RoleKey::Unknown(key) = &role {
        tracing::warn!(stored = %key, "stored role not recognised; using base navigation");
    }

    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let contact = non_empty(&keys.email)
        .map(Contact::Email)
        .or_else(|| non_empty(&keys.phone).map(Contact::Phone));
    let auth_method = lookup(&keys.auth_method)
        .map(|m| AuthMethod::from_str_or_default(&m))
        .unwrap_or_default();

    Some(Session::new(
        role,
        Identity {
            contact,
            display_name: lookup(&keys.name).unwrap_or_default(),
            auth_method,
        },
    ))
}

/// The store the app should use on this target: browser storage on wasm32,
/// memory elsewhere.
pub fn default_store(keys: StorageKeys) -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserSessionStore::new(keys))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemorySessionStore::new(keys))
    }
}
