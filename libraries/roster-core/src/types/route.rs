/// Navigation targets
use std::fmt;

use super::User;

/// A view the navigator can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Login form (`/`)
    Login,

    /// Paginated user list (`/users`)
    Users,

    /// Edit form for the carried user (`/edit/{id}`)
    ///
    /// The selected record travels with the route so the edit view can seed
    /// its form without another fetch.
    EditUser(Box<User>),
}

impl Route {
    /// Path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Users => "/users".to_string(),
            Route::EditUser(user) => format!("/edit/{}", user.id),
        }
    }

    /// Whether the route is only reachable with a session token
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
