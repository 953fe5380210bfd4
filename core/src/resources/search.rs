use crate::client::TaigaClient;
use crate::http::HttpRequest;
use crate::types::SearchResults;

pub fn search(project: u64, text: &str) -> HttpRequest {
    HttpRequest::get("/search")
        .query("project", &project)
        .query("text", text)
}

impl TaigaClient {
    /// Full-text search across one project's epics, stories, tasks, issues and wiki.
    pub async fn search(&self, project: u64, text: &str) -> Option<SearchResults> {
        self.value(search(project, text)).await
    }
}
