use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{SearchQuery, SearchResponse};

/// The retrieval backend, treated as an opaque collaborator. Implementations
/// decide whether the query travels over HTTP or runs in-process.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;
}
