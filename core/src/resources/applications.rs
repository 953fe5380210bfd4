//! External applications and the tokens users grant them.

use uuid::Uuid;

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{
    Application, ApplicationToken, AuthorizationCode, AuthorizeApplicationParams, CypheredToken,
    ValidateApplicationParams,
};

pub fn get(id: Uuid) -> HttpRequest {
    HttpRequest::get(format!("/applications/{id}")).authenticated()
}

pub fn get_token(id: Uuid) -> HttpRequest {
    HttpRequest::get(format!("/applications/{id}/token")).authenticated()
}

pub fn list_tokens() -> HttpRequest {
    HttpRequest::get("/application-tokens").authenticated()
}

pub fn get_token_by_id(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/application-tokens/{id}")).authenticated()
}

pub fn delete_token(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/application-tokens/{id}")).authenticated()
}

pub fn authorize(params: &AuthorizeApplicationParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/application-tokens/authorize").authenticated().json(params)
}

pub fn validate(params: &ValidateApplicationParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/application-tokens/validate").authenticated().json(params)
}

impl TaigaClient {
    pub async fn get_application(&self, id: Uuid) -> Option<Application> {
        self.value(get(id)).await
    }

    /// The current user's token for an application.
    pub async fn get_application_token(&self, id: Uuid) -> Option<ApplicationToken> {
        self.value(get_token(id)).await
    }

    pub async fn list_application_tokens(&self) -> Option<Vec<ApplicationToken>> {
        self.value(list_tokens()).await
    }

    pub async fn get_application_token_by_id(&self, id: u64) -> Option<ApplicationToken> {
        self.value(get_token_by_id(id)).await
    }

    pub async fn delete_application_token(&self, id: u64) -> bool {
        self.flag(delete_token(id)).await
    }

    pub async fn authorize_application(&self, params: &AuthorizeApplicationParams) -> Option<AuthorizationCode> {
        self.value(authorize(params)).await
    }

    pub async fn validate_application(&self, params: &ValidateApplicationParams) -> Option<CypheredToken> {
        self.value(validate(params)).await
    }
}
