//! Shared fakes for roster-view integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use roster_core::{
    Authenticator, ConfirmationGate, Credentials, Navigator, Notification, Notifier, Page,
    RemoteCollection, Route, User, UserFields, UserId,
};
use std::sync::Mutex;

mock! {
    pub Collection {}

    #[async_trait]
    impl RemoteCollection for Collection {
        async fn fetch_page(&self, page: u32) -> roster_core::Result<Page>;
        async fn update_record(&self, id: UserId, fields: &UserFields) -> roster_core::Result<UserFields>;
        async fn delete_record(&self, id: UserId) -> roster_core::Result<()>;
    }
}

mock! {
    pub Gate {}

    #[async_trait]
    impl ConfirmationGate for Gate {
        async fn confirm(&self, prompt: &str) -> bool;
    }
}

mock! {
    pub Auth {}

    #[async_trait]
    impl Authenticator for Auth {
        async fn login(&self, credentials: &Credentials) -> roster_core::Result<String>;
    }
}

/// Notifier that remembers everything it was asked to show
#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
    dismissals: Mutex<usize>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.is_error())
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn dismissals(&self) -> usize {
        *self.dismissals.lock().unwrap()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }

    fn dismiss_all(&self) {
        *self.dismissals.lock().unwrap() += 1;
    }
}

/// Navigator that remembers every route requested
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub fn george() -> User {
    User::new(UserId::new(1), "George", "Bluth", "george.bluth@reqres.in")
}

pub fn janet() -> User {
    User::new(UserId::new(2), "Janet", "Weaver", "janet.weaver@reqres.in")
}

pub fn lucille() -> User {
    User::new(UserId::new(3), "Lucille", "Bluth", "lucille@reqres.in")
}

pub fn first_page() -> Page {
    Page::new(vec![george(), janet(), lucille()], 2)
}

pub fn second_page() -> Page {
    Page::new(
        vec![User::new(
            UserId::new(7),
            "Michael",
            "Lawson",
            "michael.lawson@reqres.in",
        )],
        2,
    )
}

pub fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id.as_i64()).collect()
}
