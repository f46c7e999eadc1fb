//! HTTP surface for the retrieval engine: the same `/search/{query}/`
//! contract the client consumes, plus `/stats/` for the landing page.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::adapters::EmbeddedSearchBackend;
use crate::core::models::{CorpusStats, SearchQuery, SearchResponse};

#[derive(Clone)]
pub struct ServerState {
    backend: Arc<EmbeddedSearchBackend>,
    stats: Arc<CorpusStats>,
}

impl ServerState {
    pub fn new(backend: Arc<EmbeddedSearchBackend>, stats: Arc<CorpusStats>) -> Self {
        Self { backend, stats }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/search/:query", get(search_handler))
        .route("/search/:query/", get(search_handler))
        .route("/stats/", get(stats_handler))
        .with_state(state)
}

async fn search_handler(
    Path(query): Path<String>,
    State(state): State<ServerState>,
) -> Json<SearchResponse> {
    let query = SearchQuery::new(&query);
    log::info!("[SERVER] Search request for {:?}", query.text());

    if query.is_empty() {
        return Json(SearchResponse::default());
    }

    Json(SearchResponse {
        results: state.backend.results_for(&query),
    })
}

async fn stats_handler(State(state): State<ServerState>) -> Json<CorpusStats> {
    Json(CorpusStats::clone(&state.stats))
}

pub async fn serve(state: ServerState, bind: &str) -> Result<()> {
    let addr: SocketAddr = bind.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("[SERVER] Listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Document;
    use crate::retrieval::corpus;
    use crate::retrieval::inverted_index::InvertedIndex;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    // Two clusters so the query terms discriminate: df = 4 out of 8
    // documents keeps them past the Luhn bounds with a non-zero idf.
    fn test_state() -> ServerState {
        let documents: Vec<Document> = (1..=4)
            .flat_map(|i| {
                vec![
                    Document {
                        title: format!("ዜና {}", i),
                        description: "ምርጫ ውይይት ፖለቲካ ሀገር ህዝብ".to_string(),
                        url: format!("https://news.example/p{}", i),
                        date: "2024-01-05".to_string(),
                    },
                    Document {
                        title: format!("ስፖርት {}", i),
                        description: "ስፖርት ጨዋታ ቡድን ሀገር ህዝብ".to_string(),
                        url: format!("https://news.example/s{}", i),
                        date: "2024-01-06".to_string(),
                    },
                ]
            })
            .collect();

        let index = Arc::new(InvertedIndex::build(&documents));
        let stats = Arc::new(index.stats.clone());
        let backend = Arc::new(EmbeddedSearchBackend::new(
            index,
            Arc::new(corpus::by_url(documents)),
            10,
        ));
        ServerState::new(backend, stats)
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_search_route_returns_results_envelope() {
        let (status, body) = get_json("/search/%E1%88%9D%E1%88%AD%E1%8C%AB/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["results"].is_array());
        assert!(!body["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_route_without_trailing_slash_also_matches() {
        let (status, body) = get_json("/search/%E1%88%9D%E1%88%AD%E1%8C%AB").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["results"].is_array());
    }

    #[tokio::test]
    async fn test_unknown_terms_return_empty_results() {
        let (status, body) = get_json("/search/zzzz/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_stats_route_reports_corpus_totals() {
        let (status, body) = get_json("/stats/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_documents"], 8);
    }
}
