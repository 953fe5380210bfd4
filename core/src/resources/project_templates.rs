//! Project templates. Edits replace the whole template, hence PUT.

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{ProjectTemplate, ProjectTemplateParams};

pub fn list() -> HttpRequest {
    HttpRequest::get("/project-templates")
}

pub fn create(params: &ProjectTemplateParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/project-templates").authenticated().json(params)
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/project-templates/{id}"))
}

pub fn edit(id: u64, params: &ProjectTemplateParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::put(format!("/project-templates/{id}")).authenticated().json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/project-templates/{id}")).authenticated()
}

impl TaigaClient {
    pub async fn list_project_templates(&self) -> Option<Vec<ProjectTemplate>> {
        self.value(list()).await
    }

    pub async fn create_project_template(&self, params: &ProjectTemplateParams) -> Option<ProjectTemplate> {
        self.value(create(params)).await
    }

    pub async fn get_project_template(&self, id: u64) -> Option<ProjectTemplate> {
        self.value(get(id)).await
    }

    pub async fn edit_project_template(&self, id: u64, params: &ProjectTemplateParams) -> Option<ProjectTemplate> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_project_template(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }
}
