//! Corpus loading: a JSON array of scraped articles becomes the document
//! set the index is built over.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::models::Document;

/// Shape of one scraped article on disk. `content` is the article body;
/// older dumps used `description` for the same field.
#[derive(Debug, Deserialize)]
struct ScrapedArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    date: String,
}

/// Load and normalize a corpus file. Articles without a URL are dropped
/// since the URL is the document identity.
pub async fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read corpus file {:?}", path))?;

    let articles: Vec<ScrapedArticle> =
        serde_json::from_str(&contents).context("corpus file is not a JSON article array")?;

    let total = articles.len();
    let documents: Vec<Document> = articles
        .into_iter()
        .filter(|article| !article.url.is_empty())
        .map(|article| {
            let description = if article.content.is_empty() {
                article.description
            } else {
                article.content
            };
            let mut document = Document {
                title: article.title,
                description,
                url: article.url,
                date: article.date,
            };
            document.normalize_date();
            document
        })
        .collect();

    log::info!(
        "[INDEX] Loaded {} documents from {:?} ({} skipped without url)",
        documents.len(),
        path,
        total - documents.len()
    );

    Ok(documents)
}

/// Index documents by URL for result decoration.
pub fn by_url(documents: Vec<Document>) -> HashMap<String, Document> {
    documents
        .into_iter()
        .map(|document| (document.url.clone(), document))
        .collect()
}
