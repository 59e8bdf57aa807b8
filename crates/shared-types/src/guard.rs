//! Session gate for protected routes.
//!
//! A guard starts `Unverified` on every page load. The first check against
//! the session store either verifies it (terminal) or asks the caller to
//! redirect to the entry page. Nothing protected may render before the guard
//! is `Verified`.

use crate::role::RoleKey;
use crate::session::Session;

/// Path of the login page that unauthenticated visitors are sent to.
pub const ENTRY_PATH: &str = "/";

/// Guard state for one page load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unverified,
    Verified(Session),
}

/// What the caller should do after a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render protected content for this session.
    Admit(Session),
    /// Navigate to the given path and render nothing protected.
    Redirect(&'static str),
}

impl GuardState {
    pub fn is_verified(&self) -> bool {
        matches!(self, GuardState::Verified(_))
    }

    /// Role bound by a verified guard, recognised or not.
    pub fn role(&self) -> Option<RoleKey> {
        match self {
            GuardState::Verified(session) => Some(session.role.clone()),
            GuardState::Unverified => None,
        }
    }

    /// Apply a session-store read.
    ///
    /// `Verified` is terminal: later reads do not change it, so a logout
    /// takes effect by navigating away rather than by re-checking.
    pub fn check(&mut self, stored: Option<Session>) -> GuardDecision {
        match self {
            GuardState::Verified(session) => GuardDecision::Admit(session.clone()),
            GuardState::Unverified => match stored {
                Some(session) => {
                    *self = GuardState::Verified(session.clone());
                    GuardDecision::Admit(session)
                }
                None => GuardDecision::Redirect(ENTRY_PATH),
            },
        }
    }
}
