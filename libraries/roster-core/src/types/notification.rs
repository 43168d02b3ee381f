/// User-visible notifications
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default display duration for success notifications
pub const SUCCESS_DURATION: Duration = Duration::from_millis(2000);

/// Default display duration for error notifications
pub const ERROR_DURATION: Duration = Duration::from_millis(3000);

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Fire-and-forget message with a display duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    /// Success notification shown for two seconds
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            duration: SUCCESS_DURATION,
        }
    }

    /// Error notification shown for three seconds
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            duration: ERROR_DURATION,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
