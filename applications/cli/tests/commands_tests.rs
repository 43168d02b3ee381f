//! One-shot command tests against a mock directory API

use roster_cli::terminal::TerminalNotifier;
use roster_cli::{commands, CliError, Context, RosterConfig};
use roster_core::{AssumeYes, ConfirmationGate, RosterError, UserId};
use roster_view::ViewError;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "QpwL5tke4Pnpja7X4";

struct Decline;

#[async_trait::async_trait]
impl ConfirmationGate for Decline {
    async fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

fn context(server: &MockServer, token: Option<&str>) -> (Context, Arc<TerminalNotifier<Vec<u8>>>) {
    let mut config = RosterConfig::default();
    config.api.base_url = format!("{}/api", server.uri());

    let notifier = Arc::new(TerminalNotifier::new(Vec::new()));
    let ctx = Context::new(config, token.map(str::to_string), notifier.clone()).unwrap();
    (ctx, notifier)
}

fn users_page(page: u32, total_pages: u32, users: serde_json::Value) -> serde_json::Value {
    json!({
        "page": page,
        "per_page": 6,
        "total": 12,
        "total_pages": total_pages,
        "data": users
    })
}

mod login {
    use super::*;

    #[tokio::test]
    async fn prints_token_and_starts_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_partial_json(json!({"email": "eve.holt@reqres.in"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
            .expect(1)
            .mount(&server)
            .await;

        let (ctx, notifier) = context(&server, None);
        let token = commands::login(&ctx, "eve.holt@reqres.in", "cityslicka")
            .await
            .unwrap();

        assert_eq!(token, TOKEN);
        assert!(ctx.session.is_authenticated());
        assert_eq!(notifier.shown(), 1);
    }

    #[tokio::test]
    async fn rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "user not found"})),
            )
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, None);
        let result = commands::login(&ctx, "peter@klaven", "x").await;

        assert!(matches!(result, Err(CliError::Remote(RosterError::Auth(_)))));
        assert!(!ctx.session.is_authenticated());
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn requires_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, None);
        let result = commands::list(&ctx, 1, None).await;

        assert!(matches!(result, Err(CliError::NotLoggedIn)));
    }

    #[tokio::test]
    async fn renders_searched_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("page", "2"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_page(
                2,
                2,
                json!([
                    {"id": 7, "email": "michael.lawson@reqres.in", "first_name": "Michael", "last_name": "Lawson", "avatar": "https://reqres.in/img/faces/7-image.jpg"},
                    {"id": 8, "email": "lindsay.ferguson@reqres.in", "first_name": "Lindsay", "last_name": "Ferguson", "avatar": "https://reqres.in/img/faces/8-image.jpg"}
                ]),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, Some(TOKEN));
        let out = commands::list(&ctx, 2, Some("LAWSON")).await.unwrap();

        assert!(out.contains("Michael Lawson"));
        assert!(!out.contains("Lindsay"));
        assert!(out.ends_with("Pages: 1 [2]\n"));
    }

    #[tokio::test]
    async fn page_beyond_server_total() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_page(3, 2, json!([]))))
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, Some(TOKEN));
        let result = commands::list(&ctx, 3, None).await;

        assert!(matches!(
            result,
            Err(CliError::View(ViewError::PageOutOfRange {
                page: 3,
                total_pages: 2
            }))
        ));
    }

    #[tokio::test]
    async fn server_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (ctx, notifier) = context(&server, Some(TOKEN));
        let result = commands::list(&ctx, 1, None).await;

        assert!(matches!(
            result,
            Err(CliError::View(ViewError::Remote(RosterError::Server { status: 500, .. })))
        ));
        assert_eq!(notifier.shown(), 1);
    }
}

mod edit {
    use super::*;

    #[tokio::test]
    async fn uploads_avatar_as_data_uri() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/7"))
            .and(body_partial_json(json!({
                "first_name": "Michael",
                "last_name": "Lawson-Bluth",
                "avatar": "data:image/png;base64,aGVsbG8="
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "first_name": "Michael",
                "last_name": "Lawson-Bluth",
                "email": "michael.lawson@reqres.in",
                "updatedAt": "2024-01-01T00:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut avatar = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        avatar.write_all(b"hello").unwrap();

        let (ctx, _) = context(&server, Some(TOKEN));
        commands::edit(
            &ctx,
            UserId::new(7),
            "Michael",
            "Lawson-Bluth",
            "michael.lawson@reqres.in",
            Some(avatar.path()),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn blank_fields_never_sent() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, Some(TOKEN));
        let result = commands::edit(&ctx, UserId::new(7), "Michael", " ", "", None).await;

        match result {
            Err(CliError::MissingFields(fields)) => assert_eq!(fields, "last name, email"),
            other => panic!("expected missing fields, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_user() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, Some(TOKEN));
        let result = commands::edit(&ctx, UserId::new(999), "A", "B", "c@d.e", None).await;

        assert!(matches!(
            result,
            Err(CliError::Remote(RosterError::NotFound(id))) if id == UserId::new(999)
        ));
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn confirmed_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, Some(TOKEN));
        assert!(commands::delete(&ctx, UserId::new(2), Arc::new(AssumeYes))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let (ctx, _) = context(&server, Some(TOKEN));
        assert!(!commands::delete(&ctx, UserId::new(2), Arc::new(Decline))
            .await
            .unwrap());
    }
}
