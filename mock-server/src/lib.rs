//! In-memory stand-in for the parts of the Taiga API the client tests use.
//!
//! Serves `/api/v1` with auth, registration, `users/me`, projects (CRUD, by
//! slug, like/unlike), wiki pages and the resolver. Bearer tokens are issued
//! on login and checked on every write. Wiki listing honors the
//! `x-disable-pagination` header.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const WIKI_PAGE_SIZE: usize = 2;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub owner: u64,
    pub creation_template: u64,
    pub is_private: bool,
    pub total_fans: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WikiPage {
    pub id: u64,
    pub project: u64,
    pub slug: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub creation_template: u64,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Deserialize)]
pub struct EditProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_private: Option<bool>,
}

#[derive(Debug, Default)]
pub struct Store {
    accounts: Vec<Account>,
    tokens: HashMap<String, u64>,
    projects: BTreeMap<u64, Project>,
    next_project_id: u64,
    wiki_pages: Vec<WikiPage>,
    likes: HashSet<(u64, u64)>,
}

impl Store {
    /// Two accounts (`admin`/`123123`, `alice`/`secret`), project 42 `demo`
    /// owned by admin, and three wiki pages in it.
    pub fn seeded() -> Self {
        let account = |id: u64, username: &str, password: &str| Account {
            id,
            username: username.to_string(),
            password: password.to_string(),
            email: format!("{username}@example.com"),
            full_name: username.to_string(),
        };
        let mut projects = BTreeMap::new();
        projects.insert(
            42,
            Project {
                id: 42,
                name: "Demo".to_string(),
                slug: "demo".to_string(),
                description: "Seeded project".to_string(),
                owner: 1,
                creation_template: 1,
                is_private: false,
                total_fans: 0,
            },
        );
        let wiki_pages = ["home", "setup", "faq"]
            .iter()
            .enumerate()
            .map(|(i, slug)| WikiPage {
                id: i as u64 + 1,
                project: 42,
                slug: slug.to_string(),
                content: format!("# {slug}"),
            })
            .collect();
        Self {
            accounts: vec![account(1, "admin", "123123"), account(2, "alice", "secret")],
            tokens: HashMap::new(),
            projects,
            next_project_id: 43,
            wiki_pages,
            likes: HashSet::new(),
        }
    }

    fn issue_token(&mut self, user: u64) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), user);
        token
    }

    fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    fn caller(&self, headers: &HeaderMap) -> Option<u64> {
        let value = headers.get("authorization")?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?;
        self.tokens.get(token).copied()
    }

    fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.values().find(|p| p.slug == slug)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/auth", post(login))
        .route("/auth/register", post(register))
        .route("/users/me", get(me))
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/by_slug", get(project_by_slug))
        .route(
            "/projects/{id}",
            get(get_project).patch(edit_project).delete(delete_project),
        )
        .route("/projects/{id}/like", post(like_project))
        .route("/projects/{id}/unlike", post(unlike_project))
        .route("/wiki", get(list_wiki))
        .route("/wiki/{id}", get(get_wiki))
        .route("/resolver", get(resolve));
    Router::new().nest("/api/v1", api).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock taiga listening");
    }
    axum::serve(listener, app()).await
}

fn user_json(account: &Account) -> Value {
    json!({
        "id": account.id,
        "username": account.username,
        "full_name": account.full_name,
        "full_name_display": account.full_name,
        "email": account.email,
        "uuid": Uuid::nil().simple().to_string(),
        "color": "#FC8EAC",
        "bio": "",
        "lang": "en",
        "theme": "taiga",
        "timezone": "",
        "is_active": true,
        "photo": null,
        "big_photo": null,
        "gravatar_id": "",
        "roles": ["Back"],
        "date_joined": "2024-01-01T00:00:00Z",
        "accepted_terms": true,
        "read_new_terms": true,
        "verified_email": true,
        "total_private_projects": 0,
        "total_public_projects": 1,
        "max_private_projects": null,
        "max_public_projects": null,
        "max_memberships_private_projects": null,
        "max_memberships_public_projects": null
    })
}

fn auth_json(account: &Account, token: &str) -> Value {
    let mut value = user_json(account);
    value["auth_token"] = json!(token);
    value
}

fn project_json(store: &Store, project: &Project) -> Value {
    let owner = store.account(project.owner);
    json!({
        "id": project.id,
        "name": project.name,
        "slug": project.slug,
        "description": project.description,
        "created_date": "2024-01-01T00:00:00Z",
        "modified_date": "2024-01-01T00:00:00Z",
        "owner": {
            "id": project.owner,
            "username": owner.map(|a| a.username.clone()).unwrap_or_default(),
            "full_name_display": owner.map(|a| a.full_name.clone()).unwrap_or_default(),
            "photo": null,
            "big_photo": null,
            "gravatar_id": "",
            "is_active": true
        },
        "members": [],
        "creation_template": project.creation_template,
        "is_private": project.is_private,
        "is_backlog_activated": true,
        "is_kanban_activated": false,
        "is_wiki_activated": true,
        "is_issues_activated": true,
        "total_fans": project.total_fans,
        "tags": [],
        "tags_colors": {},
        "anon_permissions": [],
        "public_permissions": [],
        "my_permissions": []
    })
}

fn wiki_json(page: &WikiPage) -> Value {
    json!({
        "id": page.id,
        "project": page.project,
        "project_extra_info": {"id": page.project, "name": "Demo", "slug": "demo", "logo_small_url": null},
        "slug": page.slug,
        "content": page.content,
        "html": format!("<h1>{}</h1>", page.slug),
        "owner": 1,
        "last_modifier": 1,
        "created_date": "2024-01-01T00:00:00Z",
        "modified_date": "2024-01-01T00:00:00Z",
        "editions": 1,
        "version": 1,
        "is_watcher": false,
        "total_watchers": 0
    })
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "_error_message": detail }))).into_response()
}

async fn login(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let mut store = db.write().await;
    let account = match body["type"].as_str() {
        Some("normal") => {
            let username = body["username"].as_str().unwrap_or_default();
            let password = body["password"].as_str().unwrap_or_default();
            store
                .accounts
                .iter()
                .find(|a| (a.username == username || a.email == username) && a.password == password)
                .cloned()
        }
        Some("github") if body["code"] == "github-code" => store.account(2).cloned(),
        _ => None,
    };
    match account {
        Some(account) => {
            let token = store.issue_token(account.id);
            Json(auth_json(&account, &token)).into_response()
        }
        None => error(StatusCode::BAD_REQUEST, "Username or password does not match"),
    }
}

async fn register(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let field = |name: &str| body[name].as_str().unwrap_or_default().to_string();
    let (username, password, email) = (field("username"), field("password"), field("email"));
    if !matches!(body["type"].as_str(), Some("public" | "private")) || username.is_empty() || password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "invalid registration");
    }

    let mut store = db.write().await;
    if store.accounts.iter().any(|a| a.username == username) {
        return error(StatusCode::BAD_REQUEST, "username already in use");
    }
    let account = Account {
        id: store.accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1,
        username,
        password,
        email,
        full_name: field("full_name"),
    };
    store.accounts.push(account.clone());
    let token = store.issue_token(account.id);
    (StatusCode::CREATED, Json(auth_json(&account, &token))).into_response()
}

async fn me(State(db): State<Db>, headers: HeaderMap) -> Response {
    let store = db.read().await;
    match store.caller(&headers).and_then(|id| store.account(id)) {
        Some(account) => Json(user_json(account)).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn list_projects(State(db): State<Db>) -> Json<Vec<Value>> {
    let store = db.read().await;
    Json(store.projects.values().map(|p| project_json(&store, p)).collect())
}

async fn create_project(State(db): State<Db>, headers: HeaderMap, Json(input): Json<CreateProject>) -> Response {
    let mut store = db.write().await;
    let Some(owner) = store.caller(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let mut slug = slugify(&input.name);
    if slug.is_empty() {
        return error(StatusCode::BAD_REQUEST, "name is required");
    }
    let id = store.next_project_id;
    store.next_project_id += 1;
    if store.project_by_slug(&slug).is_some() {
        slug = format!("{slug}-{id}");
    }
    let project = Project {
        id,
        name: input.name,
        slug,
        description: input.description,
        owner,
        creation_template: input.creation_template,
        is_private: input.is_private,
        total_fans: 0,
    };
    let body = project_json(&store, &project);
    store.projects.insert(id, project);
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn get_project(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    let project = store.projects.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(project_json(&store, project)))
}

async fn project_by_slug(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    let slug = params.get("slug").ok_or(StatusCode::BAD_REQUEST)?;
    let project = store.project_by_slug(slug).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(project_json(&store, project)))
}

async fn edit_project(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(input): Json<EditProject>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let caller = store.caller(&headers).ok_or(StatusCode::UNAUTHORIZED)?;
    let project = store.projects.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if project.owner != caller {
        return Err(StatusCode::FORBIDDEN);
    }
    if let Some(name) = input.name {
        project.name = name;
    }
    if let Some(description) = input.description {
        project.description = description;
    }
    if let Some(is_private) = input.is_private {
        project.is_private = is_private;
    }
    let project = project.clone();
    Ok(Json(project_json(&store, &project)))
}

async fn delete_project(State(db): State<Db>, headers: HeaderMap, Path(id): Path<u64>) -> StatusCode {
    let mut store = db.write().await;
    let Some(caller) = store.caller(&headers) else {
        return StatusCode::UNAUTHORIZED;
    };
    match store.projects.get(&id) {
        None => StatusCode::NOT_FOUND,
        Some(project) if project.owner != caller => StatusCode::FORBIDDEN,
        Some(_) => {
            store.projects.remove(&id);
            StatusCode::NO_CONTENT
        }
    }
}

async fn like_project(State(db): State<Db>, headers: HeaderMap, Path(id): Path<u64>) -> StatusCode {
    set_like(&db, &headers, id, true).await
}

async fn unlike_project(State(db): State<Db>, headers: HeaderMap, Path(id): Path<u64>) -> StatusCode {
    set_like(&db, &headers, id, false).await
}

async fn set_like(db: &Db, headers: &HeaderMap, id: u64, liked: bool) -> StatusCode {
    let mut store = db.write().await;
    let Some(caller) = store.caller(headers) else {
        return StatusCode::UNAUTHORIZED;
    };
    if !store.projects.contains_key(&id) {
        return StatusCode::NOT_FOUND;
    }
    let changed = if liked {
        store.likes.insert((id, caller))
    } else {
        store.likes.remove(&(id, caller))
    };
    if changed {
        if let Some(project) = store.projects.get_mut(&id) {
            project.total_fans = if liked {
                project.total_fans + 1
            } else {
                project.total_fans.saturating_sub(1)
            };
        }
    }
    StatusCode::OK
}

async fn list_wiki(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let store = db.read().await;
    let project = params.get("project").and_then(|p| p.parse::<u64>().ok());
    let pages: Vec<Value> = store
        .wiki_pages
        .iter()
        .filter(|page| project.map_or(true, |p| page.project == p))
        .map(wiki_json)
        .collect();

    let unpaginated = headers
        .get("x-disable-pagination")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "True");
    if unpaginated {
        return Json(pages).into_response();
    }

    let total = pages.len();
    let first_page: Vec<Value> = pages.into_iter().take(WIKI_PAGE_SIZE).collect();
    (
        [
            ("x-paginated", "true".to_string()),
            ("x-pagination-count", total.to_string()),
        ],
        Json(first_page),
    )
        .into_response()
}

async fn get_wiki(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    let page = store.wiki_pages.iter().find(|p| p.id == id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(wiki_json(page)))
}

/// Resolves against the store for projects and wiki pages. Story, issue,
/// task, milestone and ref lookups map the reference's trailing number to
/// an id, which is all the tests need.
async fn resolve(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    let slug = params.get("project").ok_or(StatusCode::BAD_REQUEST)?;
    let project = store.project_by_slug(slug).ok_or(StatusCode::NOT_FOUND)?;
    let mut result = json!({ "project": project.id });

    if let Some(wiki_slug) = params.get("wikipage") {
        let page = store
            .wiki_pages
            .iter()
            .find(|p| p.project == project.id && &p.slug == wiki_slug)
            .ok_or(StatusCode::NOT_FOUND)?;
        result["wikipage"] = json!(page.id);
    }
    for key in ["us", "issue", "task", "milestone"] {
        if let Some(reference) = params.get(key) {
            result[key] = json!(trailing_number(reference).ok_or(StatusCode::NOT_FOUND)?);
        }
    }
    if let Some(reference) = params.get("ref") {
        result["us"] = json!(trailing_number(reference).ok_or(StatusCode::NOT_FOUND)?);
    }
    Ok(Json(result))
}

fn trailing_number(reference: &str) -> Option<u64> {
    let digits: String = reference
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}
