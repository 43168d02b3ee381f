//! Interactive shell
//!
//! Follows the route published by the navigator and runs one screen per
//! route: login, the user list and the edit form.

use crate::commands::Context;
use crate::error::{CliError, Result};
use crate::render::{render_pager, render_users};
use crate::terminal::{read_line, read_line_or, ChannelNavigator, StdinConfirm};
use roster_client::read_avatar_data_uri;
use roster_core::{Navigator, Route, User, UserId};
use roster_view::{
    EditForm, LoginController, LoginForm, MountOutcome, MutationOutcome, PageOutcome,
    UsersDirectory,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

pub const HELP: &str = "\
Commands:
  page N        show page N
  next | prev   step through pages
  search TERM   narrow the current page
  clear         reset the search
  edit ID       edit a user
  delete ID     delete a user
  refresh       reload the current page
  logout        end the session
  help          show this help
  quit          leave the shell";

/// A command typed on the list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Page(u32),
    Next,
    Previous,
    Search(String),
    Clear,
    Edit(UserId),
    Delete(UserId),
    Refresh,
    Logout,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; `None` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "page" | "p" => ShellCommand::Page(
                rest.parse()
                    .map_err(|_| CliError::InvalidArgument(format!("not a page number: {rest:?}")))?,
            ),
            "next" | "n" => ShellCommand::Next,
            "prev" | "previous" => ShellCommand::Previous,
            "search" | "s" => ShellCommand::Search(rest.to_string()),
            "clear" => ShellCommand::Clear,
            "edit" | "e" => ShellCommand::Edit(parse_id(rest)?),
            "delete" | "d" => ShellCommand::Delete(parse_id(rest)?),
            "refresh" | "r" => ShellCommand::Refresh,
            "logout" => ShellCommand::Logout,
            "help" | "?" => ShellCommand::Help,
            "quit" | "q" | "exit" => ShellCommand::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<UserId> {
    raw.parse()
        .map_err(|_| CliError::InvalidArgument(format!("not a user id: {raw:?}")))
}

enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    ctx: Context,
    navigator: Arc<dyn Navigator>,
    routes: watch::Receiver<Route>,
    login: LoginController,
    directory: UsersDirectory,

    /// Form kept across a failed submission
    pending_edit: Option<EditForm>,
}

impl Shell {
    pub fn new(ctx: Context) -> Self {
        let (channel, routes) = ChannelNavigator::new(Route::Login);
        let navigator = ctx.guarded(Arc::new(channel));

        let login = ctx
            .login_controller(Arc::clone(&navigator))
            .with_redirect_delay(ctx.config.redirect_delay());
        let directory = ctx.directory(Arc::clone(&navigator), Arc::new(StdinConfirm));

        Self {
            ctx,
            navigator,
            routes,
            login,
            directory,
            pending_edit: None,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        self.navigator.navigate(Route::Users);

        let mut previous: Option<Route> = None;
        loop {
            let route = self.routes.borrow_and_update().clone();
            let entered = previous.as_ref() != Some(&route);

            let flow = match &route {
                Route::Login => self.login_screen().await?,
                Route::Users => {
                    let fresh = entered && !matches!(previous, Some(Route::EditUser(_)));
                    self.users_screen(fresh).await?
                }
                Route::EditUser(user) => self.edit_screen(user).await?,
            };

            if let Flow::Quit = flow {
                debug!("Leaving shell");
                return Ok(());
            }
            previous = Some(route);
        }
    }

    async fn login_screen(&mut self) -> Result<Flow> {
        println!("\nLog in");

        let defaults = &self.ctx.config.login;
        let Some(email) = read_line_or("Email", &defaults.default_email).await? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = read_line_or("Password", &defaults.default_password).await? else {
            return Ok(Flow::Quit);
        };

        let mut form = LoginForm::new(email, password);
        self.login.submit(&mut form).await;
        if let Some(error) = form.error() {
            println!("{error}");
        }
        Ok(Flow::Continue)
    }

    /// List screen; `fresh` starts a new directory and loads it
    async fn users_screen(&mut self, fresh: bool) -> Result<Flow> {
        if fresh {
            self.directory = self
                .ctx
                .directory(Arc::clone(&self.navigator), Arc::new(StdinConfirm));
            if let MountOutcome::RedirectedToLogin = self.directory.mount().await {
                return Ok(Flow::Continue);
            }
        }

        println!();
        if !self.directory.search().is_empty() {
            println!("Search: {}", self.directory.search().term);
        }
        print!("{}", render_users(&self.directory.visible().await));
        println!("{}", render_pager(&self.directory.page_buttons().await));

        let Some(line) = read_line("roster> ").await? else {
            return Ok(Flow::Quit);
        };

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                println!("{e}");
                return Ok(Flow::Continue);
            }
        };

        match command {
            ShellCommand::Page(page) => report_page(self.directory.go_to_page(page).await),
            ShellCommand::Next => report_page(self.directory.pagination().next_page().await),
            ShellCommand::Previous => {
                report_page(self.directory.pagination().previous_page().await);
            }
            ShellCommand::Search(term) => self.directory.set_search_term(term),
            ShellCommand::Clear => self.directory.clear_search(),
            ShellCommand::Edit(id) => {
                if !self.directory.edit(id).await {
                    println!("No user {id} on this page");
                }
            }
            ShellCommand::Delete(id) => {
                if let MutationOutcome::AlreadyPending = self.directory.delete(id).await {
                    println!("Delete of user {id} already in progress");
                }
            }
            ShellCommand::Refresh => report_page(self.directory.pagination().reload().await),
            ShellCommand::Logout => self.directory.logout(),
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn edit_screen(&mut self, user: &User) -> Result<Flow> {
        let mut form = self
            .pending_edit
            .take()
            .filter(|form| form.id() == user.id)
            .unwrap_or_else(|| EditForm::from_user(user));

        println!("\nEdit {} (user {})", user.full_name(), user.id);
        if let Some(error) = form.error() {
            println!("{error}");
        }

        let Some(first_name) = read_line_or("First name", &form.first_name).await? else {
            return Ok(Flow::Quit);
        };
        let Some(last_name) = read_line_or("Last name", &form.last_name).await? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = read_line_or("Email", &form.email).await? else {
            return Ok(Flow::Quit);
        };
        form.first_name = first_name;
        form.last_name = last_name;
        form.email = email;

        let Some(avatar) = read_line("Avatar image (blank keeps current): ").await? else {
            return Ok(Flow::Quit);
        };
        if !avatar.trim().is_empty() {
            match read_avatar_data_uri(Path::new(avatar.trim())).await {
                Ok(data_uri) => form.set_avatar_data_uri(data_uri),
                Err(e) => println!("{e}"),
            }
        }

        let missing = form.missing_fields();
        if !missing.is_empty() {
            println!("Required: {}", missing.join(", "));
            self.pending_edit = Some(form);
            return Ok(Flow::Continue);
        }

        let Some(answer) = read_line("Save changes? [y/N] ").await? else {
            return Ok(Flow::Quit);
        };
        if !crate::terminal::is_yes(&answer) {
            self.directory.cancel_edit();
            return Ok(Flow::Continue);
        }

        if let MutationOutcome::Failed(_) = self.directory.update(&mut form).await {
            self.pending_edit = Some(form);
        }
        Ok(Flow::Continue)
    }
}

fn report_page(outcome: PageOutcome) {
    if let PageOutcome::Rejected { page } = outcome {
        println!("Page {page} is out of range");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(ShellCommand::parse("page 2").unwrap(), Some(ShellCommand::Page(2)));
        assert_eq!(ShellCommand::parse("  NEXT ").unwrap(), Some(ShellCommand::Next));
        assert_eq!(
            ShellCommand::parse("delete 7").unwrap(),
            Some(ShellCommand::Delete(UserId::new(7)))
        );
        assert_eq!(ShellCommand::parse("q").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            ShellCommand::parse("search george bluth").unwrap(),
            Some(ShellCommand::Search("george bluth".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("search").unwrap(),
            Some(ShellCommand::Search(String::new()))
        );
    }

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            ShellCommand::parse("page two"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            ShellCommand::parse("edit"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            ShellCommand::parse("dance"),
            Err(CliError::UnknownCommand(_))
        ));
    }
}
