//! End-to-end test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port in its own thread, then drives a
//! real `TaigaClient` over HTTP with the `reqwest` transport. Validates that
//! URLs, default headers, bearer credentials and response decoding all line
//! up with an actual server.

use std::net::SocketAddr;

use taiga_core::types::{CreateProjectParams, EditProjectParams, ProjectFilter, PublicRegistryParams};
use taiga_core::{ClientConfig, TaigaClient};

fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[tokio::test]
async fn session_lifecycle() {
    let addr = spawn_server();
    let client = TaigaClient::new(&format!("http://{addr}"));

    // Anonymous reads work; authenticated ones fail without a request.
    let project = client.get_project_by_slug("demo").await.expect("seeded project");
    assert_eq!(project.id, 42);
    assert!(client.get_me().await.is_none());

    // Bad credentials leave the client anonymous.
    assert!(client.normal_login("admin", "wrong").await.is_none());
    assert!(!client.is_authenticated());

    // Step: log in and read back the current user.
    let detail = client.normal_login("admin", "123123").await.expect("login");
    assert!(!detail.auth_token.is_empty());
    let me = client.get_me().await.expect("me");
    assert_eq!(me.username, "admin");

    // Step: create, edit, like, delete.
    let created = client
        .create_project(&CreateProjectParams {
            name: "Integration Test".to_string(),
            description: "created over http".to_string(),
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
        })
        .await
        .expect("create");
    assert_eq!(created.slug, "integration-test");
    assert_eq!(created.owner.username, "admin");

    let edited = client
        .edit_project(
            created.id,
            &EditProjectParams {
                description: Some("edited".to_string()),
                ..EditProjectParams::default()
            },
        )
        .await
        .expect("edit");
    assert_eq!(edited.description, "edited");
    assert_eq!(edited.name, "Integration Test");

    assert!(client.like_project(created.id).await);
    assert_eq!(client.get_project(created.id).await.unwrap().total_fans, 1);
    assert!(client.unlike_project(created.id).await);

    let all = client.list_projects(&ProjectFilter::default()).await.expect("list");
    assert_eq!(all.len(), 2);

    assert!(client.delete_project(created.id).await);
    assert!(client.get_project(created.id).await.is_none());
    assert!(!client.delete_project(created.id).await);
}

#[tokio::test]
async fn second_login_switches_identity() {
    let addr = spawn_server();
    let client = TaigaClient::new(&format!("http://{addr}"));

    client.normal_login("admin", "123123").await.unwrap();
    client.github_login("github-code").await.unwrap();
    assert_eq!(client.get_me().await.unwrap().username, "alice");

    // alice does not own project 42.
    assert!(!client.delete_project(42).await);

    // A failed code exchange keeps alice logged in.
    assert!(client.github_login("expired").await.is_none());
    assert_eq!(client.get_me().await.unwrap().username, "alice");
}

#[tokio::test]
async fn registration_returns_user_without_logging_in() {
    let addr = spawn_server();
    let client = TaigaClient::new(&format!("http://{addr}"));
    let params = PublicRegistryParams {
        username: "carol".to_string(),
        password: "pw".to_string(),
        email: "carol@example.com".to_string(),
        full_name: "Carol".to_string(),
        accepted_terms: true,
    };

    let registered = client.public_registry(&params).await.expect("register");
    assert_eq!(registered.user.username, "carol");
    assert!(!client.is_authenticated());
    assert!(client.public_registry(&params).await.is_none());

    client.normal_login("carol", "pw").await.expect("login as new user");
    assert_eq!(client.get_me().await.unwrap().full_name, "Carol");
}

#[tokio::test]
async fn pagination_header_controls_wiki_listing() {
    let addr = spawn_server();
    let base = format!("http://{addr}");

    let unpaginated = TaigaClient::new(&base);
    assert_eq!(unpaginated.get_all_wiki_pages().await.unwrap().len(), 3);

    let paginated = TaigaClient::with_config(ClientConfig::new(&base).with_pagination_disabled(false));
    assert_eq!(
        paginated.get_all_wiki_pages().await.unwrap().len(),
        mock_server::WIKI_PAGE_SIZE
    );

    let page = unpaginated.get_wiki_page(1).await.unwrap();
    assert_eq!(page.slug, "home");
    assert_eq!(page.project_extra_info.slug, "demo");
}

#[tokio::test]
async fn resolver_round_trip() {
    let addr = spawn_server();
    let client = TaigaClient::new(&format!("http://{addr}"));

    assert_eq!(client.resolve_project("demo").await.unwrap().project, 42);

    let story = client.resolve_user_story("demo", "us-3").await.unwrap();
    assert_eq!((story.project, story.us), (42, 3));

    let wiki = client.resolve_wiki_page("demo", "faq").await.unwrap();
    assert_eq!(wiki.wikipage, 3);

    assert!(client.resolve_project("missing").await.is_none());
}
