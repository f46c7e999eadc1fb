//! Ranked retrieval: the query goes through the same preprocessing as the
//! corpus, gets a tf-idf vector, and is scored against candidate documents
//! by cosine similarity.

use std::collections::{HashMap, HashSet};

use crate::retrieval::inverted_index::InvertedIndex;
use crate::retrieval::text_operations;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedHit {
    pub url: String,
    pub score: f64,
}

/// Query tf-idf: tf normalized by the maximum term frequency in the query,
/// idf taken from the index. Terms absent from the index carry zero weight.
pub fn query_vector(query: &str, index: &InvertedIndex) -> HashMap<String, f64> {
    let tokens = text_operations::preprocess(query);

    let mut tf: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *tf.entry(token).or_insert(0) += 1;
    }
    let max_tf = tf.values().copied().max().unwrap_or(1);
    let total_docs = index.total_documents.max(1);

    tf.into_iter()
        .map(|(term, count)| {
            let normalized_tf = count as f64 / max_tf as f64;
            let weight = match index.term(&term) {
                Some(entry) if entry.df > 0 => {
                    let idf = (total_docs as f64 / entry.df as f64).log2();
                    normalized_tf * idf
                }
                _ => 0.0,
            };
            (term, weight)
        })
        .collect()
}

pub fn cosine_similarity(query_vec: &HashMap<String, f64>, doc_vec: &HashMap<String, f64>) -> f64 {
    let dot_product: f64 = query_vec
        .iter()
        .map(|(term, weight)| weight * doc_vec.get(term).copied().unwrap_or(0.0))
        .sum();
    let query_norm: f64 = query_vec.values().map(|w| w * w).sum::<f64>().sqrt();
    let doc_norm: f64 = doc_vec.values().map(|w| w * w).sum::<f64>().sqrt();

    if query_norm == 0.0 || doc_norm == 0.0 {
        return 0.0;
    }
    dot_product / (query_norm * doc_norm)
}

/// Rank documents for a query: only documents sharing at least one query
/// term are candidates; results descend by similarity, capped at `top_k`.
pub fn ranked_query(query: &str, index: &InvertedIndex, top_k: usize) -> Vec<RankedHit> {
    let query_vec = query_vector(query, index);

    let mut candidates: HashSet<&str> = HashSet::new();
    for term in query_vec.keys() {
        if let Some(entry) = index.term(term) {
            candidates.extend(entry.postings.keys().map(|url| url.as_str()));
        }
    }

    let mut ranked: Vec<RankedHit> = candidates
        .into_iter()
        .filter_map(|url| {
            let doc_vec: HashMap<String, f64> = query_vec
                .keys()
                .filter_map(|term| {
                    index
                        .term(term)
                        .and_then(|entry| entry.postings.get(url))
                        .map(|weight| (term.clone(), *weight))
                })
                .collect();

            let score = cosine_similarity(&query_vec, &doc_vec);
            (score > 0.0).then(|| RankedHit {
                url: url.to_string(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.url.cmp(&b.url))
    });
    ranked.truncate(top_k);
    ranked
}
