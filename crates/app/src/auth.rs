use std::rc::Rc;

use dioxus::prelude::*;
use services::SessionStore;
use shared_types::{AppError, Session};

/// Signed-in session shared by every route.
///
/// `current` mirrors the store so components re-render on sign in and out;
/// the store is the source of truth on page load.
#[derive(Clone)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
    store: Rc<dyn SessionStore>,
}

impl SessionState {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            current: Signal::new(None),
            store,
        }
    }

    /// Read whatever the store holds right now.
    pub fn load(&self) -> Option<Session> {
        self.store.get_session()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.store.set_session(&session);
        self.current.set(Some(session));
    }

    /// Clear the stored session. Safe to call when already signed out.
    pub fn sign_out(&mut self) {
        self.store.clear_session();
        self.current.set(None);
    }
}

impl SessionState {
    /// Set when the store falls back to page-lifetime memory.
    pub fn storage_problem(&self) -> Option<AppError> {
        self.store.unavailable()
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::MemorySessionStore;
    use shared_types::{AppErrorKind, Identity, Role, StorageKeys};

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Store with no backing storage at all.
    struct BlockedStore;

    impl SessionStore for BlockedStore {
        fn set_session(&self, _session: &Session) {}
        fn get_session(&self) -> Option<Session> {
            None
        }
        fn clear_session(&self) {}
        fn unavailable(&self) -> Option<AppError> {
            Some(AppError::storage_unavailable("blocked"))
        }
    }

    fn sign_out_twice() -> Element {
        let store = use_hook(|| Rc::new(MemorySessionStore::new(StorageKeys::default())));
        let outcome = use_hook(|| {
            let mut state = SessionState::new(store.clone());
            state.sign_in(Session::new(
                Role::Nurse,
                Identity::email("nurse@hospital.com", "Nurse Priya"),
            ));
            let signed_in = state.load().is_some();
            state.sign_out();
            state.sign_out();
            let cleared = state.load().is_none() && state.current.peek().is_none();
            (signed_in, cleared, store.is_empty())
        });
        rsx! { "{outcome:?}" }
    }

    fn storage_report() -> Element {
        let memory = use_hook(|| {
            SessionState::new(Rc::new(MemorySessionStore::new(StorageKeys::default())))
        });
        let blocked = use_hook(|| SessionState::new(Rc::new(BlockedStore)));
        let memory_kind = memory.storage_problem().map(|e| e.kind);
        let blocked_kind = blocked.storage_problem().map(|e| e.kind);
        let reported = memory_kind.is_none() && blocked_kind == Some(AppErrorKind::StorageUnavailable);
        rsx! { "{reported}" }
    }

    #[test]
    fn sign_out_is_idempotent() {
        assert_eq!(render(sign_out_twice), "(true, true, true)");
    }

    #[test]
    fn blocked_storage_is_reported() {
        assert_eq!(render(storage_report), "true");
    }
}
