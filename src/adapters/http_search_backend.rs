use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::{SearchQuery, SearchResponse};

/// Talks to a remote retrieval service over `GET {origin}/search/{query}/`.
///
/// Transport errors, non-2xx statuses, and malformed payloads all surface
/// as plain errors here; the orchestrator collapses them into one banner.
pub struct HttpSearchBackend {
    client: reqwest::Client,
    backend_origin: String,
}

impl HttpSearchBackend {
    pub fn new(backend_origin: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_origin: backend_origin.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search/{}/", self.backend_origin, query.encoded())
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let url = self.search_url(query);
        log::debug!("[HTTP] GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("backend returned status {}", status);
        }

        let body = response.text().await?;
        log::debug!("[HTTP] Response body: {} bytes", body.len());

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
