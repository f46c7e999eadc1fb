use serde::{Deserialize, Serialize};

/// One document surrogate returned by the backend for a query.
///
/// Every field may be absent on the wire; missing fields decode to their
/// empty defaults so rendering never has to special-case a partial payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub index_terms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Wire envelope for `GET /search/{query}/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}
