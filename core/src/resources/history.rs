use crate::client::TaigaClient;
use crate::http::HttpRequest;
use crate::types::{HistoryEntry, HistoryKind};

pub fn get(kind: HistoryKind, id: u64) -> HttpRequest {
    HttpRequest::get(format!("/history/{}/{id}", kind.as_str()))
}

impl TaigaClient {
    pub async fn get_history(&self, kind: HistoryKind, id: u64) -> Option<Vec<HistoryEntry>> {
        self.value(get(kind, id)).await
    }
}
