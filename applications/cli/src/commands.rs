//! One-shot commands
//!
//! Each command wires the view engine to the HTTP client for a single action
//! and reports the outcome. Notifications go to the context's notifier.

use crate::config::RosterConfig;
use crate::error::{CliError, Result};
use crate::render::{render_pager, render_users};
use crate::terminal::ChannelNavigator;
use roster_client::{read_avatar_data_uri, RosterClient};
use roster_core::{ConfirmationGate, Navigator, Notifier, Route, SessionContext, User, UserId};
use roster_view::{
    EditForm, GuardedNavigator, LoginController, LoginForm, LoginOutcome, MutationOutcome,
    PageOutcome, UsersDirectory,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Shared wiring for commands and the interactive shell
pub struct Context {
    pub config: RosterConfig,
    pub session: SessionContext,
    pub client: Arc<RosterClient>,
    pub notifier: Arc<dyn Notifier>,
}

impl Context {
    /// Build a context; a non-empty `token` starts an authenticated session
    pub fn new(
        config: RosterConfig,
        token: Option<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let session = token.map_or_else(SessionContext::new, SessionContext::with_token);
        let client = RosterClient::new(config.api_config(), session.clone())?;

        Ok(Self {
            config,
            session,
            client: Arc::new(client),
            notifier,
        })
    }

    /// Navigator that applies the session guard before `inner`
    pub fn guarded(&self, inner: Arc<dyn Navigator>) -> Arc<dyn Navigator> {
        Arc::new(GuardedNavigator::new(inner, self.session.clone()))
    }

    pub fn directory(
        &self,
        navigator: Arc<dyn Navigator>,
        confirm: Arc<dyn ConfirmationGate>,
    ) -> UsersDirectory {
        UsersDirectory::new(
            self.client.clone(),
            self.session.clone(),
            Arc::clone(&self.notifier),
            navigator,
            confirm,
        )
    }

    pub fn login_controller(&self, navigator: Arc<dyn Navigator>) -> LoginController {
        LoginController::new(
            self.client.clone(),
            self.session.clone(),
            Arc::clone(&self.notifier),
            navigator,
        )
    }

    fn require_session(&self) -> Result<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(CliError::NotLoggedIn)
        }
    }

    /// Navigator for one-shot commands; nobody follows the routes
    fn detached_navigator(&self) -> Arc<dyn Navigator> {
        let (navigator, _routes) = ChannelNavigator::new(Route::Login);
        self.guarded(Arc::new(navigator))
    }
}

/// Log in and return the session token
pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<String> {
    let controller = ctx
        .login_controller(ctx.detached_navigator())
        .with_redirect_delay(std::time::Duration::ZERO);

    let mut form = LoginForm::new(email, password);
    match controller.submit(&mut form).await {
        LoginOutcome::LoggedIn => ctx.session.token().ok_or(CliError::NotLoggedIn),
        LoginOutcome::Rejected(e) => Err(e.into()),
    }
}

/// Render one page of users, optionally narrowed by a search term
pub async fn list(ctx: &Context, page: u32, search: Option<&str>) -> Result<String> {
    ctx.require_session()?;

    let mut directory = ctx.directory(ctx.detached_navigator(), Arc::new(roster_core::AssumeYes));

    match directory.go_to_page(page).await {
        PageOutcome::Loaded { .. } => {}
        PageOutcome::Rejected { page } => {
            return Err(CliError::InvalidArgument(format!(
                "page {page} is out of range"
            )))
        }
        PageOutcome::Failed(e) => return Err(e.into()),
    }

    if let Some(term) = search {
        directory.set_search_term(term);
    }

    let visible = directory.visible().await;
    let mut out = render_users(&visible);
    out.push_str(&render_pager(&directory.page_buttons().await));
    out.push('\n');
    Ok(out)
}

/// Replace a user's fields, optionally uploading a new avatar
pub async fn edit(
    ctx: &Context,
    id: UserId,
    first_name: &str,
    last_name: &str,
    email: &str,
    avatar: Option<&Path>,
) -> Result<()> {
    ctx.require_session()?;

    let mut form = EditForm::from_user(&User::new(id, first_name, last_name, email));
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(CliError::MissingFields(missing.join(", ")));
    }

    if let Some(path) = avatar {
        form.set_avatar_data_uri(read_avatar_data_uri(path).await?);
    }

    let directory = ctx.directory(ctx.detached_navigator(), Arc::new(roster_core::AssumeYes));
    match directory.update(&mut form).await {
        MutationOutcome::Committed => {
            info!(user_id = %id, "Edit command committed");
            Ok(())
        }
        MutationOutcome::Failed(e) => Err(e.into()),
        MutationOutcome::Declined | MutationOutcome::AlreadyPending => Ok(()),
    }
}

/// Delete a user after asking `confirm`
///
/// Returns `false` when the confirmation was declined.
pub async fn delete(ctx: &Context, id: UserId, confirm: Arc<dyn ConfirmationGate>) -> Result<bool> {
    ctx.require_session()?;

    let directory = ctx.directory(ctx.detached_navigator(), confirm);
    match directory.delete(id).await {
        MutationOutcome::Committed => Ok(true),
        MutationOutcome::Failed(e) => Err(e.into()),
        MutationOutcome::Declined | MutationOutcome::AlreadyPending => Ok(false),
    }
}
