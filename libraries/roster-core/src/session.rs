//! Session token context.
//!
//! A single bearer-token slot shared by the route guard and the HTTP client's
//! authorization step. Written on login, cleared on logout.

use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle to the session token slot.
///
/// All clones observe the same slot, so a token stored by the login flow is
/// immediately visible to the HTTP client and the route guard.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    /// Create an empty (logged out) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session seeded with an existing token.
    ///
    /// Empty tokens are treated as no token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set(token);
        session
    }

    /// Store a token. Empty tokens clear the slot instead.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = if token.is_empty() { None } else { Some(token) };
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drop the token (logout).
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let session = SessionContext::new();
        assert!(!session.is_authenticated());

        session.set("QpwL5tke4Pnpja7X4");
        assert_eq!(session.token().as_deref(), Some("QpwL5tke4Pnpja7X4"));

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let session = SessionContext::new();
        let guard_view = session.clone();

        session.set("abc");
        assert!(guard_view.is_authenticated());

        guard_view.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let session = SessionContext::with_token("");
        assert!(!session.is_authenticated());

        session.set("abc");
        session.set("");
        assert!(!session.is_authenticated());
    }
}
