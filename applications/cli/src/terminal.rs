//! Terminal implementations of the view collaborators
//!
//! Notifications become printed lines, navigation goes through a watch
//! channel the shell follows, and the confirmation gate asks on stdin.

use async_trait::async_trait;
use roster_core::{ConfirmationGate, Navigator, Notification, NotificationKind, Notifier, Route};
use std::io::{self, BufRead, Write};
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Prints notifications as single lines
///
/// A terminal has nothing to dismiss; `dismiss_all` only clears the
/// count of lines shown since the last dismissal.
pub struct TerminalNotifier<W: Write + Send> {
    out: Mutex<W>,
    shown: Mutex<usize>,
}

impl TerminalNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            shown: Mutex::new(0),
        }
    }

    /// Notifications printed since the last `dismiss_all`
    pub fn shown(&self) -> usize {
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One printed notification line
pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "[ok]",
        NotificationKind::Error => "[error]",
    };
    format!("{marker} {}", notification.message)
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn notify(&self, notification: Notification) {
        let line = format_notification(&notification);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to print notification");
            return;
        }
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }

    fn dismiss_all(&self) {
        debug!("Dismissing notifications");
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner) = 0;
    }
}

/// Publishes the requested route on a watch channel
pub struct ChannelNavigator {
    routes: watch::Sender<Route>,
}

impl ChannelNavigator {
    /// Navigator starting at `initial`, plus the receiving end
    pub fn new(initial: Route) -> (Self, watch::Receiver<Route>) {
        let (routes, rx) = watch::channel(initial);
        (Self { routes }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        debug!(path = %route.path(), "Navigating");
        self.routes.send_replace(route);
    }
}

/// Parse a yes/no answer; anything but an explicit yes is a no
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks the question on stdout and reads the answer from stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

#[async_trait]
impl ConfirmationGate for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        match read_line(&format!("{prompt} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

/// Print `prompt` and read one line from stdin without blocking the runtime
///
/// Returns `None` at end of input. The trailing newline is stripped.
pub async fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let prompt = prompt.to_string();
    tokio::task::spawn_blocking(move || {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    })
    .await
    .map_err(io::Error::other)?
}

/// Like [`read_line`], falling back to `default` on an empty answer
pub async fn read_line_or(prompt: &str, default: &str) -> io::Result<Option<String>> {
    let answer = read_line(&format!("{prompt} [{default}]: ")).await?;
    Ok(answer.map(|answer| {
        if answer.trim().is_empty() {
            default.to_string()
        } else {
            answer.trim().to_string()
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_print_one_line_each() {
        let notifier = TerminalNotifier::new(Vec::new());
        notifier.notify(Notification::success("User deleted successfully"));
        notifier.notify(Notification::error("Failed to delete user"));
        assert_eq!(notifier.shown(), 2);

        notifier.dismiss_all();
        assert_eq!(notifier.shown(), 0);

        let printed = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            printed,
            "[ok] User deleted successfully\n[error] Failed to delete user\n"
        );
    }

    #[test]
    fn navigator_publishes_latest_route() {
        let (navigator, mut routes) = ChannelNavigator::new(Route::Login);
        assert_eq!(*routes.borrow(), Route::Login);

        navigator.navigate(Route::Users);
        assert!(routes.has_changed().unwrap());
        assert_eq!(*routes.borrow_and_update(), Route::Users);
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("sure"));
    }
}
