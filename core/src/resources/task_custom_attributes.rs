use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{CreateTaskCustomAttributeParams, EditTaskCustomAttributeParams, TaskCustomAttribute};

pub fn list(project: u64) -> HttpRequest {
    HttpRequest::get("/task-custom-attributes").query("project", &project)
}

pub fn create(params: &CreateTaskCustomAttributeParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/task-custom-attributes").authenticated().json(params)
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/task-custom-attributes/{id}"))
}

pub fn edit(id: u64, params: &EditTaskCustomAttributeParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/task-custom-attributes/{id}"))
        .authenticated()
        .json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/task-custom-attributes/{id}")).authenticated()
}

impl TaigaClient {
    pub async fn list_task_custom_attributes(&self, project: u64) -> Option<Vec<TaskCustomAttribute>> {
        self.value(list(project)).await
    }

    pub async fn create_task_custom_attribute(
        &self,
        params: &CreateTaskCustomAttributeParams,
    ) -> Option<TaskCustomAttribute> {
        self.value(create(params)).await
    }

    pub async fn get_task_custom_attribute(&self, id: u64) -> Option<TaskCustomAttribute> {
        self.value(get(id)).await
    }

    pub async fn edit_task_custom_attribute(
        &self,
        id: u64,
        params: &EditTaskCustomAttributeParams,
    ) -> Option<TaskCustomAttribute> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_task_custom_attribute(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }
}
