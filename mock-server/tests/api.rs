use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, WIKI_PAGE_SIZE};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str, token: Option<&str>) -> Request<String> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body.to_string()).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = format!(r#"{{"type":"normal","username":"{username}","password":"{password}"}}"#);
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/auth", &body, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await["auth_token"].as_str().unwrap().to_string()
}

// --- auth ---

#[tokio::test]
async fn normal_login_returns_user_and_token() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth",
            r#"{"type":"normal","username":"admin","password":"123123"}"#,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user = body_json(resp).await;
    assert_eq!(user["username"], "admin");
    assert!(!user["auth_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_password_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth",
            r#"{"type":"normal","username":"admin","password":"nope"}"#,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn github_login_accepts_known_code() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/auth", r#"{"type":"github","code":"github-code"}"#, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["username"], "alice");

    let resp = app
        .oneshot(json_request("POST", "/api/v1/auth", r#"{"type":"github","code":"stale"}"#, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_creates_account_once() {
    let app = app();
    let body = r#"{"type":"public","username":"bob","password":"pw","email":"bob@example.com","full_name":"Bob","accepted_terms":true}"#;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/auth/register", body, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["full_name"], "Bob");

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/auth/register", body, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let token = login(&app, "bob", "pw").await;
    assert!(!token.is_empty());
}

// --- users/me ---

#[tokio::test]
async fn me_requires_bearer_token() {
    let app = app();
    let resp = app.clone().oneshot(get("/api/v1/users/me")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app, "alice", "secret").await;
    let resp = app
        .oneshot(json_request("GET", "/api/v1/users/me", "", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["username"], "alice");
}

// --- projects ---

#[tokio::test]
async fn seeded_project_by_id_and_slug() {
    let app = app();
    let resp = app.clone().oneshot(get("/api/v1/projects/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["slug"], "demo");

    let resp = app.clone().oneshot(get("/api/v1/projects/by_slug?slug=demo")).await.unwrap();
    assert_eq!(body_json(resp).await["id"], 42);

    let resp = app.oneshot(get("/api/v1/projects/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_project_needs_auth_and_name() {
    let app = app();
    let body = r#"{"name":"New Thing","description":"d","creation_template":1}"#;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/projects", body, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app, "admin", "123123").await;
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/projects", body, Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let project = body_json(resp).await;
    assert_eq!(project["slug"], "new-thing");
    assert_eq!(project["owner"]["username"], "admin");

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/projects",
            r#"{"name":"  ","description":"d","creation_template":1}"#,
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn only_owner_edits_and_deletes() {
    let app = app();
    let alice = login(&app, "alice", "secret").await;
    let admin = login(&app, "admin", "123123").await;

    let resp = app
        .clone()
        .oneshot(json_request("PATCH", "/api/v1/projects/42", r#"{"name":"Hijack"}"#, Some(&alice)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .clone()
        .oneshot(json_request("PATCH", "/api/v1/projects/42", r#"{"name":"Renamed"}"#, Some(&admin)))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["name"], "Renamed");

    let resp = app
        .clone()
        .oneshot(json_request("DELETE", "/api/v1/projects/42", "", Some(&admin)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app.oneshot(get("/api/v1/projects/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn like_and_unlike_track_fans() {
    let app = app();
    let token = login(&app, "alice", "secret").await;

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/projects/42/like", "", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let resp = app.clone().oneshot(get("/api/v1/projects/42")).await.unwrap();
    assert_eq!(body_json(resp).await["total_fans"], 1);

    app.clone()
        .oneshot(json_request("POST", "/api/v1/projects/42/unlike", "", Some(&token)))
        .await
        .unwrap();
    let resp = app.clone().oneshot(get("/api/v1/projects/42")).await.unwrap();
    assert_eq!(body_json(resp).await["total_fans"], 0);

    let resp = app
        .oneshot(json_request("POST", "/api/v1/projects/42/like", "", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- wiki ---

#[tokio::test]
async fn wiki_is_paginated_unless_disabled() {
    let app = app();
    let resp = app.clone().oneshot(get("/api/v1/wiki")).await.unwrap();
    assert_eq!(resp.headers()["x-paginated"], "true");
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), WIKI_PAGE_SIZE);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/wiki")
                .header("x-disable-pagination", "True")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.headers().get("x-paginated").is_none());
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn wiki_page_by_id() {
    let app = app();
    let resp = app.clone().oneshot(get("/api/v1/wiki/2")).await.unwrap();
    assert_eq!(body_json(resp).await["slug"], "setup");

    let resp = app.oneshot(get("/api/v1/wiki/77")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- resolver ---

#[tokio::test]
async fn resolver_maps_slugs_and_refs() {
    let app = app();
    let resp = app.clone().oneshot(get("/api/v1/resolver?project=demo&us=us-3")).await.unwrap();
    let resolved = body_json(resp).await;
    assert_eq!(resolved["project"], 42);
    assert_eq!(resolved["us"], 3);

    let resp = app.clone().oneshot(get("/api/v1/resolver?project=demo&wikipage=faq")).await.unwrap();
    assert_eq!(body_json(resp).await["wikipage"], 3);

    let resp = app.oneshot(get("/api/v1/resolver?project=nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
