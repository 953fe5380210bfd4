//! Project endpoints.

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{
    CreateProjectParams, CreateTagParams, EditProjectParams, EditTagParams, MixTagsParams, Project,
    ProjectDetail, ProjectFilter, ProjectIssueStats, ProjectModules, ProjectOrder, ProjectStats,
    ProjectTagColors, TemplateFromProjectParams, Voter, WatchParams, Watcher,
};

pub fn list(filter: &ProjectFilter) -> HttpRequest {
    HttpRequest::get("/projects")
        .query_opt("member", filter.member.as_ref())
        .query_opt("members", filter.members.as_ref())
        .query_opt("is_looking_for_people", filter.is_looking_for_people.as_ref())
        .query_opt("is_featured", filter.is_featured.as_ref())
        .query_opt("is_backlog_activated", filter.is_backlog_activated.as_ref())
        .query_opt("is_kanban_activated", filter.is_kanban_activated.as_ref())
        .query_opt("order_by", filter.order_by.map(|order| order.as_str()).as_ref())
}

pub fn create(params: &CreateProjectParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/projects").authenticated().json(params)
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}"))
}

pub fn get_by_slug(slug: &str) -> HttpRequest {
    HttpRequest::get("/projects/by_slug").query("slug", slug)
}

pub fn edit(id: u64, params: &EditProjectParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/projects/{id}")).authenticated().json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/projects/{id}")).authenticated()
}

pub fn bulk_update_order(order: &[ProjectOrder]) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/projects/bulk_update_order").authenticated().json(order)
}

pub fn modules(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}/modules")).authenticated()
}

pub fn edit_modules(id: u64, modules: &serde_json::Value) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/projects/{id}/modules")).authenticated().json(modules)
}

pub fn stats(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}/stats"))
}

pub fn issue_stats(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}/issues_stats"))
}

pub fn tag_colors(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}/tags_colors"))
}

pub fn create_tag(id: u64, params: &CreateTagParams) -> Result<HttpRequest, ApiError> {
    action(id, "create_tag").json(params)
}

pub fn edit_tag(id: u64, params: &EditTagParams) -> Result<HttpRequest, ApiError> {
    action(id, "edit_tag").json(params)
}

pub fn delete_tag(id: u64, tag: &str) -> Result<HttpRequest, ApiError> {
    action(id, "delete_tag").json(&serde_json::json!({ "tag": tag }))
}

pub fn mix_tags(id: u64, params: &MixTagsParams) -> Result<HttpRequest, ApiError> {
    action(id, "mix_tags").json(params)
}

pub fn like(id: u64) -> HttpRequest {
    action(id, "like")
}

pub fn unlike(id: u64) -> HttpRequest {
    action(id, "unlike")
}

pub fn fans(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}/fans"))
}

pub fn watch(id: u64, notify_level: Option<u8>) -> Result<HttpRequest, ApiError> {
    let request = action(id, "watch");
    match notify_level {
        Some(notify_level) => request.json(&WatchParams { notify_level: Some(notify_level) }),
        None => Ok(request),
    }
}

pub fn unwatch(id: u64) -> HttpRequest {
    action(id, "unwatch")
}

pub fn watchers(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/projects/{id}/watchers"))
}

pub fn create_template(id: u64, params: &TemplateFromProjectParams) -> Result<HttpRequest, ApiError> {
    action(id, "create_template").json(params)
}

pub fn leave(id: u64) -> HttpRequest {
    action(id, "leave")
}

fn action(id: u64, name: &str) -> HttpRequest {
    HttpRequest::post(format!("/projects/{id}/{name}")).authenticated()
}

impl TaigaClient {
    pub async fn list_projects(&self, filter: &ProjectFilter) -> Option<Vec<Project>> {
        self.value(list(filter)).await
    }

    pub async fn create_project(&self, params: &CreateProjectParams) -> Option<ProjectDetail> {
        self.value(create(params)).await
    }

    pub async fn get_project(&self, id: u64) -> Option<ProjectDetail> {
        self.value(get(id)).await
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Option<ProjectDetail> {
        self.value(get_by_slug(slug)).await
    }

    /// Partial update: only the fields set in `params` change.
    pub async fn edit_project(&self, id: u64, params: &EditProjectParams) -> Option<ProjectDetail> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_project(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }

    /// Reorder the current user's project list.
    pub async fn bulk_update_projects_order(&self, order: &[ProjectOrder]) -> bool {
        self.flag(bulk_update_order(order)).await
    }

    pub async fn get_project_modules(&self, id: u64) -> Option<ProjectModules> {
        self.value(modules(id)).await
    }

    pub async fn edit_project_modules(&self, id: u64, modules: &serde_json::Value) -> bool {
        self.flag(edit_modules(id, modules)).await
    }

    pub async fn get_project_stats(&self, id: u64) -> Option<ProjectStats> {
        self.value(stats(id)).await
    }

    pub async fn get_project_issue_stats(&self, id: u64) -> Option<ProjectIssueStats> {
        self.value(issue_stats(id)).await
    }

    pub async fn get_project_tag_colors(&self, id: u64) -> Option<ProjectTagColors> {
        self.value(tag_colors(id)).await
    }

    pub async fn create_project_tag(&self, id: u64, params: &CreateTagParams) -> bool {
        self.flag(create_tag(id, params)).await
    }

    pub async fn edit_project_tag(&self, id: u64, params: &EditTagParams) -> bool {
        self.flag(edit_tag(id, params)).await
    }

    pub async fn delete_project_tag(&self, id: u64, tag: &str) -> bool {
        self.flag(delete_tag(id, tag)).await
    }

    pub async fn mix_project_tags(&self, id: u64, params: &MixTagsParams) -> bool {
        self.flag(mix_tags(id, params)).await
    }

    pub async fn like_project(&self, id: u64) -> bool {
        self.flag(like(id)).await
    }

    pub async fn unlike_project(&self, id: u64) -> bool {
        self.flag(unlike(id)).await
    }

    pub async fn get_project_fans(&self, id: u64) -> Option<Vec<Voter>> {
        self.value(fans(id)).await
    }

    pub async fn watch_project(&self, id: u64, notify_level: Option<u8>) -> bool {
        self.flag(watch(id, notify_level)).await
    }

    pub async fn unwatch_project(&self, id: u64) -> bool {
        self.flag(unwatch(id)).await
    }

    pub async fn get_project_watchers(&self, id: u64) -> Option<Vec<Watcher>> {
        self.value(watchers(id)).await
    }

    /// Save the project's configuration as a new project template.
    pub async fn create_template_from_project(&self, id: u64, params: &TemplateFromProjectParams) -> bool {
        self.flag(create_template(id, params)).await
    }

    pub async fn leave_project(&self, id: u64) -> bool {
        self.flag(leave(id)).await
    }
}
