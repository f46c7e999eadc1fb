//! The inverted index: term -> { df, postings: url -> tf_idf }, plus the
//! per-document index-term lists used to decorate results.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::models::{CorpusStats, Document, TermFrequency};
use crate::global_constants;
use crate::retrieval::term_weighting::{
    self, luhn_index_terms, word_frequencies, TokenizedDocument,
};
use crate::retrieval::text_operations;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TermEntry {
    pub df: usize,
    /// Document url -> tf_idf weight for this term.
    pub postings: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvertedIndex {
    pub total_documents: usize,
    pub terms: HashMap<String, TermEntry>,
    /// url -> the index terms present in that document, sorted by weight.
    pub document_terms: HashMap<String, Vec<String>>,
    pub stats: CorpusStats,
}

impl InvertedIndex {
    /// Build the index over a corpus: preprocess every document, apply Luhn
    /// cutoffs to pick the vocabulary, then weight postings with tf-idf.
    pub fn build(documents: &[Document]) -> Self {
        let tokenized: Vec<TokenizedDocument> = documents
            .iter()
            .map(|document| TokenizedDocument {
                url: document.url.clone(),
                tokens: text_operations::preprocess(&format!(
                    "{} {}",
                    document.title, document.description
                )),
            })
            .collect();

        let stats = word_frequencies(&tokenized);
        let outcome = luhn_index_terms(
            &stats,
            global_constants::LUHN_UPPER_PERCENT,
            global_constants::LUHN_LOWER_DF_CUTOFF,
        );
        let allowed: HashSet<String> = outcome
            .index_terms
            .iter()
            .map(|stat| stat.term.clone())
            .collect();

        let total_documents = tokenized.len();
        let idf = term_weighting::compute_idf(&stats, total_documents.max(1), &allowed);

        let mut terms: HashMap<String, TermEntry> = HashMap::new();
        let mut document_terms: HashMap<String, Vec<String>> = HashMap::new();

        for document in &tokenized {
            let weights = term_weighting::document_tf_idf(document, &idf);

            let mut weighted: Vec<(&String, &f64)> = weights.iter().collect();
            weighted.sort_by(|a, b| {
                b.1.partial_cmp(a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(b.0))
            });
            document_terms.insert(
                document.url.clone(),
                weighted.iter().map(|(term, _)| (*term).clone()).collect(),
            );

            for (term, weight) in weights {
                terms
                    .entry(term)
                    .or_default()
                    .postings
                    .insert(document.url.clone(), weight);
            }
        }

        for stat in &outcome.index_terms {
            if let Some(entry) = terms.get_mut(&stat.term) {
                entry.df = stat.df;
            }
        }

        let total_tokens: usize = tokenized.iter().map(|d| d.tokens.len()).sum();
        let corpus_stats = CorpusStats {
            total_documents,
            unique_terms: stats.len(),
            avg_doc_length: if total_documents > 0 {
                total_tokens / total_documents
            } else {
                0
            },
            top_terms: term_weighting::rank_frequencies(&stats)
                .into_iter()
                .take(10)
                .collect::<Vec<TermFrequency>>(),
            upper_cutoff_removed: outcome.upper_cutoff_removed,
            lower_cutoff_removed: outcome.lower_cutoff_removed,
            remaining_index_terms: outcome.index_terms.len(),
        };

        log::info!(
            "[INDEX] Built index: {} documents, {} index terms",
            total_documents,
            terms.len()
        );

        Self {
            total_documents,
            terms,
            document_terms,
            stats: corpus_stats,
        }
    }

    pub fn term(&self, term: &str) -> Option<&TermEntry> {
        self.terms.get(term)
    }

    pub fn index_terms_for(&self, url: &str) -> &[String] {
        self.document_terms
            .get(url)
            .map(|terms| terms.as_slice())
            .unwrap_or(&[])
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
