//! Login form and submission

use crate::messages;
use roster_core::{
    Authenticator, Credentials, Navigator, Notification, Notifier, RosterError, Route,
    SessionContext,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Default pause between the success notification and the redirect
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Login form input
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,

    /// Inline error shown above the form
    error: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trim(), self.password.as_str())
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .field("error", &self.error)
            .finish()
    }
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored, list view requested
    LoggedIn,

    /// No token stored, inline error set
    Rejected(RosterError),
}

/// Submits the login form and owns the session write on success
pub struct LoginController {
    auth: Arc<dyn Authenticator>,
    session: SessionContext,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
}

impl LoginController {
    pub fn new(
        auth: Arc<dyn Authenticator>,
        session: SessionContext,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            session,
            notifier,
            navigator,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    /// Override the pause before redirecting to the list view
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Exchange the form's credentials for a session token
    ///
    /// On success the token is stored, a notification is shown and, after the
    /// redirect delay, the list view is requested. On failure nothing is
    /// stored and the form carries an inline error.
    pub async fn submit(&self, form: &mut LoginForm) -> LoginOutcome {
        form.error = None;

        let result = match self.auth.login(&form.credentials()).await {
            Ok(token) if token.is_empty() => Err(RosterError::auth("Empty token")),
            other => other,
        };

        match result {
            Ok(token) => {
                self.session.set(token);
                info!(email = %form.email, "Logged in");
                self.notifier
                    .notify(Notification::success(messages::LOGIN_SUCCEEDED));

                if !self.redirect_delay.is_zero() {
                    tokio::time::sleep(self.redirect_delay).await;
                }
                self.navigator.navigate(Route::Users);
                LoginOutcome::LoggedIn
            }
            Err(e) => {
                warn!(email = %form.email, error = %e, "Login rejected");
                self.notifier.notify(Notification::error(messages::LOGIN_FAILED));
                form.error = Some(messages::LOGIN_FAILED_INLINE.to_string());
                LoginOutcome::Rejected(e)
            }
        }
    }
}
