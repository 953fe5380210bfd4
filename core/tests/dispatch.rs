//! Dispatcher behavior against a scripted in-process transport.
//!
//! # Design
//! `ScriptedTransport` replays canned replies in order and records every
//! request it receives together with the session headers it was sent with.
//! Tests assert both on the client's return values and on what reached the
//! wire, including that fail-fast paths never reach it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use taiga_core::types::{CreateProjectParams, ProjectFilter};
use taiga_core::{ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, Session, TaigaClient, Transport};

enum Reply {
    Status(u16, String),
    NetworkDown,
}

struct Sent {
    request: HttpRequest,
    url: String,
    headers: Vec<(String, String)>,
}

impl Sent {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    sent: Mutex<Vec<Sent>>,
}

impl ScriptedTransport {
    fn with(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::default(),
        })
    }

    fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn last<R>(&self, inspect: impl FnOnce(&Sent) -> R) -> R {
        inspect(self.sent.lock().unwrap().last().expect("no request sent"))
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, session: &Session, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(Sent {
            request: request.clone(),
            url: session.url(&request.path),
            headers: session.headers().to_vec(),
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Status(status, body)) => Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body,
            }),
            Some(Reply::NetworkDown) | None => Err(ApiError::Transport("connection refused".to_string())),
        }
    }
}

fn ok(body: serde_json::Value) -> Reply {
    Reply::Status(200, body.to_string())
}

fn auth_reply(token: &str) -> Reply {
    ok(json!({ "id": 1, "username": "admin", "auth_token": token }))
}

fn client(transport: &Arc<ScriptedTransport>) -> TaigaClient {
    TaigaClient::with_transport(ClientConfig::new("http://taiga.test"), transport.clone())
}

fn new_project() -> CreateProjectParams {
    CreateProjectParams {
        name: "Roadmap".to_string(),
        description: "Next quarter".to_string(),
        creation_template: 1,
        is_backlog_activated: true,
        is_issues_activated: true,
        is_kanban_activated: false,
        is_private: false,
        is_wiki_activated: true,
        videoconferences: None,
        videoconferences_extra_data: None,
        total_milestones: None,
        total_story_points: None,
    }
}

// --- authentication precondition ---

#[tokio::test]
async fn authenticated_ops_fail_fast_without_login() {
    let transport = ScriptedTransport::with(vec![]);
    let client = client(&transport);

    assert!(client.get_me().await.is_none());
    assert!(!client.like_project(42).await);
    assert!(client.create_project(&new_project()).await.is_none());
    assert!(client.list_application_tokens().await.is_none());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn execute_reports_not_authenticated() {
    let transport = ScriptedTransport::with(vec![]);
    let client = client(&transport);

    let err = client
        .execute::<serde_json::Value>(HttpRequest::get("/users/me").authenticated())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn get_with_body_is_rejected_before_sending() {
    let transport = ScriptedTransport::with(vec![]);
    let client = client(&transport);

    let request = HttpRequest::get("/projects").json(&json!({ "x": 1 })).unwrap();
    let err = client.execute_unit(request).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
    assert_eq!(transport.calls(), 0);
}

// --- login and session ---

#[tokio::test]
async fn login_authorizes_following_requests() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("tok-1"),
        ok(json!({ "id": 1, "username": "admin" })),
    ]);
    let client = client(&transport);

    let detail = client.normal_login("admin", "123123").await.unwrap();
    assert_eq!(detail.auth_token, "tok-1");
    assert_eq!(detail.user.username, "admin");
    transport.last(|sent| {
        assert_eq!(sent.request.method, HttpMethod::Post);
        assert_eq!(sent.url, "http://taiga.test/api/v1/auth");
        assert_eq!(
            sent.request.body,
            Some(json!({ "type": "normal", "username": "admin", "password": "123123" }))
        );
        assert_eq!(sent.header("authorization"), None);
    });

    let me = client.get_me().await.unwrap();
    assert_eq!(me.id, 1);
    transport.last(|sent| assert_eq!(sent.header("authorization"), Some("Bearer tok-1")));
}

#[tokio::test]
async fn second_login_supersedes_first() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("first"),
        auth_reply("second"),
        ok(json!([])),
    ]);
    let client = client(&transport);

    client.normal_login("admin", "123123").await.unwrap();
    client.github_login("code").await.unwrap();
    assert_eq!(client.session().credential(), Some("second"));

    client.list_projects(&ProjectFilter::default()).await.unwrap();
    transport.last(|sent| assert_eq!(sent.header("authorization"), Some("Bearer second")));
}

#[tokio::test]
async fn failed_relogin_keeps_existing_credential() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("keep-me"),
        Reply::Status(400, r#"{"_error_message":"bad credentials"}"#.to_string()),
        Reply::NetworkDown,
    ]);
    let client = client(&transport);

    client.normal_login("admin", "123123").await.unwrap();
    assert!(client.normal_login("admin", "wrong").await.is_none());
    assert!(client.github_login("code").await.is_none());
    assert_eq!(client.session().credential(), Some("keep-me"));
}

#[tokio::test]
async fn blank_token_login_keeps_existing_credential() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("good"),
        ok(json!({ "id": 1, "auth_token": "" })),
        auth_reply("   "),
        ok(json!({ "id": 1 })),
    ]);
    let client = client(&transport);

    client.normal_login("admin", "123123").await.unwrap();
    assert!(client.normal_login("admin", "123123").await.is_none());
    assert!(client.github_login("code").await.is_none());
    assert_eq!(client.session().credential(), Some("good"));

    client.get_me().await.unwrap();
    transport.last(|sent| assert_eq!(sent.header("authorization"), Some("Bearer good")));
}

#[tokio::test]
async fn blank_token_login_leaves_anonymous_client_anonymous() {
    let transport = ScriptedTransport::with(vec![ok(json!({ "id": 1, "auth_token": "" }))]);
    let client = client(&transport);

    assert!(client.normal_login("admin", "123123").await.is_none());
    assert!(!client.is_authenticated());
    assert!(client.get_me().await.is_none());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn registration_does_not_log_in() {
    let transport = ScriptedTransport::with(vec![Reply::Status(
        201,
        json!({ "id": 9, "username": "bob", "auth_token": "fresh" }).to_string(),
    )]);
    let client = client(&transport);

    let params = taiga_core::types::PublicRegistryParams {
        username: "bob".to_string(),
        password: "pw".to_string(),
        email: "bob@example.com".to_string(),
        full_name: "Bob".to_string(),
        accepted_terms: true,
    };
    let detail = client.public_registry(&params).await.unwrap();
    assert_eq!(detail.auth_token, "fresh");
    assert!(!client.is_authenticated());
    transport.last(|sent| {
        assert_eq!(sent.request.path, "/auth/register");
        assert_eq!(sent.request.body.as_ref().unwrap()["type"], "public");
    });
}

// --- failure sentinels ---

#[tokio::test]
async fn every_failure_becomes_none() {
    let transport = ScriptedTransport::with(vec![
        Reply::NetworkDown,
        Reply::Status(404, String::new()),
        Reply::Status(500, "boom".to_string()),
        ok(json!("not a project")),
    ]);
    let client = client(&transport);

    for _ in 0..4 {
        assert!(client.get_project(42).await.is_none());
    }
    assert_eq!(transport.calls(), 4);
}

#[tokio::test]
async fn execute_surfaces_failure_cause() {
    let transport = ScriptedTransport::with(vec![
        Reply::Status(404, String::new()),
        Reply::Status(503, "maintenance".to_string()),
        ok(json!({ "id": "nope" })),
        Reply::NetworkDown,
    ]);
    let client = client(&transport);
    let request = || taiga_core::resources::projects::get(42);

    assert!(matches!(
        client.execute::<taiga_core::types::ProjectDetail>(request()).await,
        Err(ApiError::NotFound)
    ));
    match client.execute::<taiga_core::types::ProjectDetail>(request()).await {
        Err(ApiError::HttpError { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        client.execute::<taiga_core::types::ProjectDetail>(request()).await,
        Err(ApiError::DeserializationError(_))
    ));
    assert!(matches!(
        client.execute::<taiga_core::types::ProjectDetail>(request()).await,
        Err(ApiError::Transport(_))
    ));
}

#[tokio::test]
async fn like_project_reports_success_as_bool() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("t"),
        Reply::Status(200, String::new()),
        Reply::Status(404, String::new()),
    ]);
    let client = client(&transport);
    client.normal_login("admin", "123123").await.unwrap();

    assert!(client.like_project(42).await);
    transport.last(|sent| {
        assert_eq!(sent.request.method, HttpMethod::Post);
        assert_eq!(sent.url, "http://taiga.test/api/v1/projects/42/like");
        assert_eq!(sent.request.body, None);
    });
    assert!(!client.like_project(999).await);
}

#[tokio::test]
async fn every_failure_becomes_false() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("t"),
        Reply::NetworkDown,
        Reply::Status(404, String::new()),
        Reply::Status(500, "boom".to_string()),
        Reply::Status(200, "<html>not json</html>".to_string()),
    ]);
    let client = client(&transport);
    client.normal_login("admin", "123123").await.unwrap();

    assert!(!client.delete_project(42).await);
    assert!(!client.delete_project(42).await);
    assert!(!client.delete_project(42).await);
    // Any 2xx is success, whatever the payload.
    assert!(client.delete_project(42).await);
    assert_eq!(transport.calls(), 5);
}

#[tokio::test]
async fn create_project_returns_detail_or_none() {
    let transport = ScriptedTransport::with(vec![
        auth_reply("t"),
        Reply::Status(201, json!({ "id": 77, "name": "Roadmap", "slug": "admin-roadmap" }).to_string()),
        Reply::Status(400, r#"{"name":["required"]}"#.to_string()),
    ]);
    let client = client(&transport);
    client.normal_login("admin", "123123").await.unwrap();

    let created = client.create_project(&new_project()).await.unwrap();
    assert_eq!(created.id, 77);
    assert_eq!(created.slug, "admin-roadmap");
    transport.last(|sent| {
        let body = sent.request.body.as_ref().unwrap();
        assert_eq!(body["name"], "Roadmap");
        assert!(body.get("videoconferences").is_none());
    });

    assert!(client.create_project(&new_project()).await.is_none());
}

// --- request shape ---

#[tokio::test]
async fn default_headers_follow_config() {
    let transport = ScriptedTransport::with(vec![ok(json!([])), ok(json!([]))]);
    let client = client(&transport);

    client.get_all_wiki_pages().await.unwrap();
    transport.last(|sent| {
        assert_eq!(sent.url, "http://taiga.test/api/v1/wiki");
        assert_eq!(sent.header("x-disable-pagination"), Some("True"));
        assert_eq!(sent.header("accept-language"), Some("en"));
        assert_eq!(sent.header("content-type"), Some("application/json;charset=utf-8"));
    });

    let paginated = TaigaClient::with_transport(
        ClientConfig::new("http://taiga.test/")
            .with_pagination_disabled(false)
            .with_language("de"),
        transport.clone(),
    );
    paginated.get_all_wiki_pages().await.unwrap();
    transport.last(|sent| {
        assert_eq!(sent.url, "http://taiga.test/api/v1/wiki");
        assert_eq!(sent.header("x-disable-pagination"), Some("False"));
        assert_eq!(sent.header("accept-language"), Some("de"));
    });
}

#[tokio::test]
async fn resolve_user_story_sends_both_parameters() {
    let transport = ScriptedTransport::with(vec![ok(json!({ "project": 42, "us": 1234 }))]);
    let client = client(&transport);

    let resolved = client.resolve_user_story("demo", "us-3").await.unwrap();
    assert_eq!(resolved.project, 42);
    assert_eq!(resolved.us, 1234);
    transport.last(|sent| {
        assert_eq!(sent.request.path, "/resolver");
        assert_eq!(
            sent.request.query_pairs(),
            vec![
                ("project".to_string(), "demo".to_string()),
                ("us".to_string(), "us-3".to_string()),
            ]
        );
    });
}

#[tokio::test]
async fn configured_token_authenticates_from_start() {
    let transport = ScriptedTransport::with(vec![ok(json!({ "id": 5 }))]);
    let client = TaigaClient::with_transport(ClientConfig::new("http://taiga.test").with_token("preset"), transport.clone());

    assert_eq!(client.get_me().await.unwrap().id, 5);
    transport.last(|sent| assert_eq!(sent.header("authorization"), Some("Bearer preset")));
}
