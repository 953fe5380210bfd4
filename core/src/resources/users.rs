//! User endpoints.

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{ChangePasswordParams, EditUserParams, UserContact, UserDetail, UserStats};

/// Users, optionally restricted to the members of `project`.
pub fn list(project: Option<u64>) -> HttpRequest {
    HttpRequest::get("/users").query_opt("project", project.as_ref())
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/users/{id}"))
}

pub fn me() -> HttpRequest {
    HttpRequest::get("/users/me").authenticated()
}

pub fn stats(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/users/{id}/stats"))
}

pub fn contacts(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/users/{id}/contacts"))
}

pub fn edit(id: u64, params: &EditUserParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/users/{id}")).authenticated().json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/users/{id}")).authenticated()
}

pub fn change_password(params: &ChangePasswordParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/users/change_password").authenticated().json(params)
}

impl TaigaClient {
    pub async fn list_users(&self, project: Option<u64>) -> Option<Vec<UserContact>> {
        self.value(list(project)).await
    }

    pub async fn get_user(&self, id: u64) -> Option<UserContact> {
        self.value(get(id)).await
    }

    /// The user the session is authenticated as.
    pub async fn get_me(&self) -> Option<UserDetail> {
        self.value(me()).await
    }

    pub async fn get_user_stats(&self, id: u64) -> Option<UserStats> {
        self.value(stats(id)).await
    }

    pub async fn get_user_contacts(&self, id: u64) -> Option<Vec<UserContact>> {
        self.value(contacts(id)).await
    }

    pub async fn edit_user(&self, id: u64, params: &EditUserParams) -> Option<UserDetail> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_user(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }

    pub async fn change_password(&self, params: &ChangePasswordParams) -> bool {
        self.flag(change_password(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Access, HttpMethod};

    #[test]
    fn me_requires_login() {
        let req = me();
        assert_eq!(req.path, "/users/me");
        assert_eq!(req.access, Access::Authenticated);
    }

    #[test]
    fn list_project_filter_is_optional() {
        assert!(list(None).query.is_empty());
        assert_eq!(list(Some(3)).query_pairs(), vec![("project".to_string(), "3".to_string())]);
    }

    #[test]
    fn change_password_posts_both_passwords() {
        let params = ChangePasswordParams {
            current_password: "old".to_string(),
            password: "new".to_string(),
        };
        let req = change_password(&params).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/users/change_password");
        assert_eq!(
            req.body,
            Some(serde_json::json!({"current_password": "old", "password": "new"}))
        );
    }
}
