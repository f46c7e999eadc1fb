use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::{Document, SearchQuery, SearchResponse, SearchResult};
use crate::retrieval::inverted_index::InvertedIndex;
use crate::retrieval::search_engine;

/// Runs the retrieval engine in-process instead of going over the wire.
/// Used by the CLI when pointed straight at a corpus file, and by the
/// server handlers.
pub struct EmbeddedSearchBackend {
    index: Arc<InvertedIndex>,
    documents: Arc<HashMap<String, Document>>,
    top_k: usize,
}

impl EmbeddedSearchBackend {
    pub fn new(
        index: Arc<InvertedIndex>,
        documents: Arc<HashMap<String, Document>>,
        top_k: usize,
    ) -> Self {
        Self {
            index,
            documents,
            top_k,
        }
    }

    /// Decorate ranked URLs with document fields and index terms. Hits
    /// whose document is missing from the corpus map still render, just
    /// with empty display fields.
    pub fn results_for(&self, query: &SearchQuery) -> Vec<SearchResult> {
        search_engine::ranked_query(query.text(), &self.index, self.top_k)
            .into_iter()
            .map(|hit| {
                let document = self.documents.get(&hit.url);
                SearchResult {
                    title: document.map(|d| d.title.clone()).unwrap_or_default(),
                    url: hit.url.clone(),
                    date: document.map(|d| d.date.clone()).unwrap_or_default(),
                    description: document.map(|d| d.description.clone()).unwrap_or_default(),
                    index_terms: self.index.index_terms_for(&hit.url).to_vec(),
                    score: Some(hit.score),
                }
            })
            .collect()
    }
}

#[async_trait]
impl SearchBackend for EmbeddedSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        Ok(SearchResponse {
            results: self.results_for(query),
        })
    }
}
