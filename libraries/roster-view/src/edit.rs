//! Edit form state

use roster_core::{User, UserFields, UserId};

/// In-progress edit of one user
///
/// Seeded from the record carried by the edit route. Input is never reverted
/// by a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// New avatar as a data URI; `None` keeps the current avatar
    avatar: Option<String>,

    /// Inline error shown above the form
    error: Option<String>,
}

impl EditForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            avatar: None,
            error: None,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    /// Fields to submit
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Use an encoded image as the new avatar (also its preview)
    pub fn set_avatar_data_uri(&mut self, data_uri: impl Into<String>) {
        self.avatar = Some(data_uri.into());
    }

    pub fn avatar_preview(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Required-field check mirroring the form's `required` inputs
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }
}
