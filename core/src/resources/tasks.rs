//! Task endpoints, including the per-task custom attribute values.

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{
    CreateTaskParams, EditTaskCustomAttributeValues, EditTaskParams, Task, TaskCustomAttributeValues,
    TaskFilter, TaskFiltersData, Voter, Watcher,
};

pub fn list(filter: &TaskFilter) -> HttpRequest {
    HttpRequest::get("/tasks")
        .query_opt("project", filter.project.as_ref())
        .query_opt("status", filter.status.as_ref())
        .query_opt("tags", filter.tags.as_ref())
        .query_opt("user_story", filter.user_story.as_ref())
        .query_opt("role", filter.role.as_ref())
        .query_opt("owner", filter.owner.as_ref())
        .query_opt("milestone", filter.milestone.as_ref())
        .query_opt("watchers", filter.watchers.as_ref())
        .query_opt("assigned_to", filter.assigned_to.as_ref())
        .query_opt("status__is_closed", filter.status_is_closed.as_ref())
        .query_opt("exclude_status", filter.exclude_status.as_ref())
        .query_opt("exclude_tags", filter.exclude_tags.as_ref())
        .query_opt("exclude_role", filter.exclude_role.as_ref())
        .query_opt("exclude_owner", filter.exclude_owner.as_ref())
        .query_opt("exclude_assigned_to", filter.exclude_assigned_to.as_ref())
}

pub fn create(params: &CreateTaskParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/tasks").authenticated().json(params)
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/tasks/{id}"))
}

pub fn get_by_ref(project: u64, reference: u64) -> HttpRequest {
    HttpRequest::get("/tasks/by_ref")
        .query("ref", &reference)
        .query("project", &project)
}

pub fn edit(id: u64, params: &EditTaskParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/tasks/{id}")).authenticated().json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/tasks/{id}")).authenticated()
}

pub fn filters_data(project: u64) -> HttpRequest {
    HttpRequest::get("/tasks/filters_data").query("project", &project)
}

pub fn upvote(id: u64) -> HttpRequest {
    action(id, "upvote")
}

pub fn downvote(id: u64) -> HttpRequest {
    action(id, "downvote")
}

pub fn voters(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/tasks/{id}/voters"))
}

pub fn watch(id: u64) -> HttpRequest {
    action(id, "watch")
}

pub fn unwatch(id: u64) -> HttpRequest {
    action(id, "unwatch")
}

pub fn watchers(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/tasks/{id}/watchers"))
}

pub fn custom_attribute_values(task: u64) -> HttpRequest {
    HttpRequest::get(format!("/tasks/custom-attributes-values/{task}"))
}

pub fn edit_custom_attribute_values(
    task: u64,
    values: &EditTaskCustomAttributeValues,
) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/tasks/custom-attributes-values/{task}"))
        .authenticated()
        .json(values)
}

fn action(id: u64, name: &str) -> HttpRequest {
    HttpRequest::post(format!("/tasks/{id}/{name}")).authenticated()
}

impl TaigaClient {
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Option<Vec<Task>> {
        self.value(list(filter)).await
    }

    pub async fn create_task(&self, params: &CreateTaskParams) -> Option<Task> {
        self.value(create(params)).await
    }

    pub async fn get_task(&self, id: u64) -> Option<Task> {
        self.value(get(id)).await
    }

    /// Look a task up by its per-project reference number.
    pub async fn get_task_by_ref(&self, project: u64, reference: u64) -> Option<Task> {
        self.value(get_by_ref(project, reference)).await
    }

    pub async fn edit_task(&self, id: u64, params: &EditTaskParams) -> Option<Task> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_task(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }

    pub async fn get_task_filters_data(&self, project: u64) -> Option<TaskFiltersData> {
        self.value(filters_data(project)).await
    }

    pub async fn upvote_task(&self, id: u64) -> bool {
        self.flag(upvote(id)).await
    }

    pub async fn downvote_task(&self, id: u64) -> bool {
        self.flag(downvote(id)).await
    }

    pub async fn get_task_voters(&self, id: u64) -> Option<Vec<Voter>> {
        self.value(voters(id)).await
    }

    pub async fn watch_task(&self, id: u64) -> bool {
        self.flag(watch(id)).await
    }

    pub async fn unwatch_task(&self, id: u64) -> bool {
        self.flag(unwatch(id)).await
    }

    pub async fn get_task_watchers(&self, id: u64) -> Option<Vec<Watcher>> {
        self.value(watchers(id)).await
    }

    pub async fn get_task_custom_attribute_values(&self, task: u64) -> Option<TaskCustomAttributeValues> {
        self.value(custom_attribute_values(task)).await
    }

    pub async fn edit_task_custom_attribute_values(
        &self,
        task: u64,
        values: &EditTaskCustomAttributeValues,
    ) -> Option<TaskCustomAttributeValues> {
        self.value(edit_custom_attribute_values(task, values)).await
    }
}
