//! Login flow and route guard tests

mod common;

use common::{MockAuth, RecordingNavigator, RecordingNotifier};
use roster_core::{Navigator, Route, RosterError, SessionContext};
use roster_view::{
    messages, GuardedNavigator, LoginController, LoginForm, LoginOutcome, DEFAULT_REDIRECT_DELAY,
};
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    controller: LoginController,
    session: SessionContext,
    notifier: Arc<RecordingNotifier>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(auth: MockAuth) -> Harness {
    let session = SessionContext::new();
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());

    let controller = LoginController::new(
        Arc::new(auth),
        session.clone(),
        notifier.clone(),
        navigator.clone(),
    )
    .with_redirect_delay(Duration::ZERO);

    Harness {
        controller,
        session,
        notifier,
        navigator,
    }
}

#[tokio::test]
async fn successful_login_stores_token_and_redirects() {
    let mut auth = MockAuth::new();
    auth.expect_login()
        .withf(|c| c.email == "eve.holt@reqres.in" && c.password == "cityslicka")
        .times(1)
        .returning(|_| Ok("QpwL5tke4Pnpja7X4".to_string()));
    let h = harness(auth);

    let mut form = LoginForm::new("  eve.holt@reqres.in ", "cityslicka");
    let outcome = h.controller.submit(&mut form).await;

    assert_eq!(outcome, LoginOutcome::LoggedIn);
    assert_eq!(h.session.token().as_deref(), Some("QpwL5tke4Pnpja7X4"));
    assert_eq!(h.navigator.routes(), vec![Route::Users]);
    assert_eq!(h.notifier.messages(), vec![messages::LOGIN_SUCCEEDED.to_string()]);
    assert!(form.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn redirect_waits_for_default_delay() {
    let mut auth = MockAuth::new();
    auth.expect_login().returning(|_| Ok("QpwL5tke4Pnpja7X4".to_string()));

    let session = SessionContext::new();
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = LoginController::new(
        Arc::new(auth),
        session.clone(),
        notifier.clone(),
        navigator.clone(),
    );

    let started = tokio::time::Instant::now();
    let mut form = LoginForm::new("eve.holt@reqres.in", "cityslicka");

    let before_redirect = async {
        tokio::time::sleep(Duration::from_millis(1900)).await;
        (session.token(), navigator.routes(), notifier.messages())
    };
    let (outcome, (token, routes, shown)) =
        tokio::join!(controller.submit(&mut form), before_redirect);

    assert_eq!(token.as_deref(), Some("QpwL5tke4Pnpja7X4"));
    assert!(routes.is_empty());
    assert_eq!(shown, vec![messages::LOGIN_SUCCEEDED.to_string()]);

    assert_eq!(outcome, LoginOutcome::LoggedIn);
    assert!(started.elapsed() >= DEFAULT_REDIRECT_DELAY);
    assert_eq!(navigator.routes(), vec![Route::Users]);
}

#[tokio::test]
async fn rejected_login_sets_inline_error() {
    let mut auth = MockAuth::new();
    auth.expect_login()
        .returning(|_| Err(RosterError::auth("user not found")));
    let h = harness(auth);

    let mut form = LoginForm::new("peter@klaven", "wrong");
    let outcome = h.controller.submit(&mut form).await;

    assert_eq!(outcome, LoginOutcome::Rejected(RosterError::auth("user not found")));
    assert!(!h.session.is_authenticated());
    assert!(h.navigator.routes().is_empty());
    assert_eq!(form.error(), Some(messages::LOGIN_FAILED_INLINE));
    assert_eq!(form.email, "peter@klaven");
    assert_eq!(h.notifier.errors(), vec![messages::LOGIN_FAILED.to_string()]);
}

#[tokio::test]
async fn empty_token_is_a_failed_login() {
    let mut auth = MockAuth::new();
    auth.expect_login().returning(|_| Ok(String::new()));
    let h = harness(auth);

    let mut form = LoginForm::new("eve.holt@reqres.in", "cityslicka");
    let outcome = h.controller.submit(&mut form).await;

    assert!(matches!(outcome, LoginOutcome::Rejected(RosterError::Auth(_))));
    assert!(!h.session.is_authenticated());
}

#[tokio::test]
async fn network_failure_is_reported_like_bad_credentials() {
    let mut auth = MockAuth::new();
    auth.expect_login()
        .returning(|_| Err(RosterError::network("connection refused")));
    let h = harness(auth);

    let mut form = LoginForm::new("eve.holt@reqres.in", "cityslicka");
    h.controller.submit(&mut form).await;

    assert_eq!(form.error(), Some(messages::LOGIN_FAILED_INLINE));
    assert!(!h.session.is_authenticated());
}

#[tokio::test]
async fn resubmit_clears_previous_error() {
    let mut auth = MockAuth::new();
    let mut attempts = 0;
    auth.expect_login().times(2).returning(move |_| {
        attempts += 1;
        if attempts == 1 {
            Err(RosterError::auth("Missing password"))
        } else {
            Ok("token".to_string())
        }
    });
    let h = harness(auth);

    let mut form = LoginForm::new("eve.holt@reqres.in", "");
    h.controller.submit(&mut form).await;
    assert!(form.error().is_some());

    form.password = "cityslicka".to_string();
    assert_eq!(h.controller.submit(&mut form).await, LoginOutcome::LoggedIn);
    assert!(form.error().is_none());
}

#[test]
fn login_form_debug_hides_password() {
    let form = LoginForm::new("eve.holt@reqres.in", "cityslicka");
    assert!(!format!("{form:?}").contains("cityslicka"));
}

#[test]
fn guarded_navigator_follows_session() {
    let session = SessionContext::new();
    let recorder = Arc::new(RecordingNavigator::default());
    let navigator = GuardedNavigator::new(recorder.clone(), session.clone());

    navigator.navigate(Route::Users);
    session.set("token");
    navigator.navigate(Route::Users);
    session.clear();
    navigator.navigate(Route::Login);

    assert_eq!(recorder.routes(), vec![Route::Login, Route::Users, Route::Login]);
}
