//! Wiki pages and wiki links.

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{
    CreateWikiLinkParams, CreateWikiPageParams, EditWikiLinkParams, EditWikiPageParams, Watcher, WikiLink,
    WikiPage,
};

pub fn list(project: Option<u64>) -> HttpRequest {
    HttpRequest::get("/wiki").query_opt("project", project.as_ref())
}

pub fn create(params: &CreateWikiPageParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/wiki").authenticated().json(params)
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/wiki/{id}"))
}

pub fn get_by_slug(project: u64, slug: &str) -> HttpRequest {
    HttpRequest::get("/wiki/by_slug")
        .query("slug", slug)
        .query("project", &project)
}

pub fn edit(id: u64, params: &EditWikiPageParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/wiki/{id}")).authenticated().json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/wiki/{id}")).authenticated()
}

pub fn watch(id: u64) -> HttpRequest {
    HttpRequest::post(format!("/wiki/{id}/watch")).authenticated()
}

pub fn unwatch(id: u64) -> HttpRequest {
    HttpRequest::post(format!("/wiki/{id}/unwatch")).authenticated()
}

pub fn watchers(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/wiki/{id}/watchers"))
}

pub fn list_links(project: Option<u64>) -> HttpRequest {
    HttpRequest::get("/wiki-links").query_opt("project", project.as_ref())
}

pub fn create_link(params: &CreateWikiLinkParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/wiki-links").authenticated().json(params)
}

pub fn get_link(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/wiki-links/{id}"))
}

pub fn edit_link(id: u64, params: &EditWikiLinkParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/wiki-links/{id}")).authenticated().json(params)
}

pub fn delete_link(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/wiki-links/{id}")).authenticated()
}

impl TaigaClient {
    /// Every wiki page visible to the session, across projects.
    pub async fn get_all_wiki_pages(&self) -> Option<Vec<WikiPage>> {
        self.value(list(None)).await
    }

    pub async fn list_wiki_pages(&self, project: Option<u64>) -> Option<Vec<WikiPage>> {
        self.value(list(project)).await
    }

    pub async fn create_wiki_page(&self, params: &CreateWikiPageParams) -> Option<WikiPage> {
        self.value(create(params)).await
    }

    pub async fn get_wiki_page(&self, id: u64) -> Option<WikiPage> {
        self.value(get(id)).await
    }

    pub async fn get_wiki_page_by_slug(&self, project: u64, slug: &str) -> Option<WikiPage> {
        self.value(get_by_slug(project, slug)).await
    }

    pub async fn edit_wiki_page(&self, id: u64, params: &EditWikiPageParams) -> Option<WikiPage> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_wiki_page(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }

    pub async fn watch_wiki_page(&self, id: u64) -> bool {
        self.flag(watch(id)).await
    }

    pub async fn unwatch_wiki_page(&self, id: u64) -> bool {
        self.flag(unwatch(id)).await
    }

    pub async fn get_wiki_page_watchers(&self, id: u64) -> Option<Vec<Watcher>> {
        self.value(watchers(id)).await
    }

    pub async fn list_wiki_links(&self, project: Option<u64>) -> Option<Vec<WikiLink>> {
        self.value(list_links(project)).await
    }

    pub async fn create_wiki_link(&self, params: &CreateWikiLinkParams) -> Option<WikiLink> {
        self.value(create_link(params)).await
    }

    pub async fn get_wiki_link(&self, id: u64) -> Option<WikiLink> {
        self.value(get_link(id)).await
    }

    pub async fn edit_wiki_link(&self, id: u64, params: &EditWikiLinkParams) -> Option<WikiLink> {
        self.value(edit_link(id, params)).await
    }

    pub async fn delete_wiki_link(&self, id: u64) -> bool {
        self.flag(delete_link(id)).await
    }
}
