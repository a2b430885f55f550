//! In-memory authentication session for the running UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` component creates a single `RwSignal<Session>` and provides
//! it as context. The login page applies `login`, the dashboard applies
//! `logout`, and the route guard reads `is_authenticated` on every navigation.
//! Nothing is persisted; a reload starts unauthenticated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Authenticated/unauthenticated flag for the current browser tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Mark the session authenticated. Idempotent.
    pub fn login(&mut self) {
        if !self.authenticated {
            log::info!("session: authenticated");
        }
        self.authenticated = true;
    }

    /// Mark the session unauthenticated. Idempotent.
    pub fn logout(&mut self) {
        if self.authenticated {
            log::info!("session: signed out");
        }
        self.authenticated = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
