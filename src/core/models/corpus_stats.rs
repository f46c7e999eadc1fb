use serde::{Deserialize, Serialize};

/// A term and how often it occurs across the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermFrequency {
    pub term: String,
    pub frequency: usize,
}

/// Corpus-wide statistics surfaced on the landing page and at `/stats/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorpusStats {
    pub total_documents: usize,
    pub unique_terms: usize,
    pub avg_doc_length: usize,
    #[serde(default)]
    pub top_terms: Vec<TermFrequency>,
    pub upper_cutoff_removed: usize,
    pub lower_cutoff_removed: usize,
    pub remaining_index_terms: usize,
}
