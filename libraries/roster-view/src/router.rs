//! Session-guarded navigation

use roster_core::{Navigator, Route, SessionContext};
use std::sync::Arc;
use tracing::debug;

/// Route actually shown for `requested` given the session
///
/// Session-only routes without a token become the login route. This is a
/// redirect, not an error.
pub fn guard(requested: Route, session: &SessionContext) -> Route {
    if requested.requires_session() && !session.is_authenticated() {
        debug!(requested = %requested, "No session, redirecting to login");
        Route::Login
    } else {
        requested
    }
}

/// Navigator that applies [`guard`] before delegating
pub struct GuardedNavigator {
    inner: Arc<dyn Navigator>,
    session: SessionContext,
}

impl GuardedNavigator {
    pub fn new(inner: Arc<dyn Navigator>, session: SessionContext) -> Self {
        Self { inner, session }
    }
}

impl Navigator for GuardedNavigator {
    fn navigate(&self, route: Route) {
        self.inner.navigate(guard(route, &self.session));
    }
}
