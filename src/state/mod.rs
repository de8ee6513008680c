//! Application-level state
//!
//! The only piece of cross-cutting state is the session flag. The root
//! component owns a [`Session`] and hands pages a read-only view plus
//! `login`/`logout` callbacks; nothing here is global or implicit.

use leptos::prelude::*;

/// Session state: a single logged-in flag behind a reactive signal.
///
/// Starts logged out. `login` and `logout` are idempotent, side-effect-only
/// and infallible; there is no identity, token or expiry.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    logged_in: RwSignal<bool>,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self {
            logged_in: RwSignal::new(false),
        }
    }

    /// Read-only view of the flag for passing down to pages.
    pub fn logged_in(&self) -> ReadSignal<bool> {
        self.logged_in.read_only()
    }

    /// Marks the session as logged in.
    pub fn login(&self) {
        self.logged_in.set(true);
    }

    /// Marks the session as logged out.
    pub fn logout(&self) {
        self.logged_in.set(false);
    }

    /// Current flag value without reactive tracking.
    pub fn is_logged_in_untracked(&self) -> bool {
        self.logged_in.get_untracked()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in_untracked());
    }

    #[test]
    fn test_login_sets_flag() {
        let session = Session::new();
        session.login();
        assert!(session.is_logged_in_untracked());
    }

    #[test]
    fn test_logout_clears_flag() {
        let session = Session::new();
        session.login();
        session.logout();
        assert!(!session.is_logged_in_untracked());
    }

    #[test]
    fn test_logout_when_logged_out_is_noop() {
        let session = Session::new();
        session.logout();
        assert!(!session.is_logged_in_untracked());
    }

    #[test]
    fn test_login_is_idempotent() {
        let session = Session::new();
        session.login();
        session.login();
        assert!(session.is_logged_in_untracked());
    }
}
