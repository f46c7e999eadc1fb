//! Corpus statistics and term weighting: collection/document frequencies,
//! Zipf rank tables, Luhn cutoffs, and tf-idf.

use std::collections::{HashMap, HashSet};

use crate::core::models::TermFrequency;

/// A fully preprocessed document, ready for counting.
#[derive(Debug, Clone)]
pub struct TokenizedDocument {
    pub url: String,
    pub tokens: Vec<String>,
}

/// Collection frequency and document frequency for one term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermStat {
    pub term: String,
    pub cf: usize,
    pub df: usize,
}

/// Count cf and df across the corpus.
pub fn word_frequencies(documents: &[TokenizedDocument]) -> Vec<TermStat> {
    let mut cf: HashMap<String, usize> = HashMap::new();
    let mut df: HashMap<String, usize> = HashMap::new();

    for document in documents {
        for token in &document.tokens {
            *cf.entry(token.clone()).or_insert(0) += 1;
        }
        let unique: HashSet<&String> = document.tokens.iter().collect();
        for token in unique {
            *df.entry(token.clone()).or_insert(0) += 1;
        }
    }

    let mut stats: Vec<TermStat> = cf
        .into_iter()
        .map(|(term, cf)| {
            let df = df.get(&term).copied().unwrap_or(0);
            TermStat { term, cf, df }
        })
        .collect();
    // Deterministic output ordering.
    stats.sort_by(|a, b| b.cf.cmp(&a.cf).then_with(|| a.term.cmp(&b.term)));
    stats
}

/// Raw term counts for one document.
pub fn term_frequencies(document: &TokenizedDocument) -> HashMap<String, usize> {
    let mut tf: HashMap<String, usize> = HashMap::new();
    for token in &document.tokens {
        *tf.entry(token.clone()).or_insert(0) += 1;
    }
    tf
}

/// Zipf rank/frequency table, descending by collection frequency.
pub fn rank_frequencies(stats: &[TermStat]) -> Vec<TermFrequency> {
    let mut sorted: Vec<&TermStat> = stats.iter().collect();
    sorted.sort_by(|a, b| b.cf.cmp(&a.cf).then_with(|| a.term.cmp(&b.term)));
    sorted
        .into_iter()
        .map(|stat| TermFrequency {
            term: stat.term.clone(),
            frequency: stat.cf,
        })
        .collect()
}

/// Luhn cutoff outcome: the surviving index terms plus what was removed.
#[derive(Debug, Clone)]
pub struct LuhnOutcome {
    pub index_terms: Vec<TermStat>,
    pub upper_cutoff_removed: usize,
    pub lower_cutoff_removed: usize,
}

/// Apply Luhn's method: drop the top `upper_percent` of unique terms by df
/// (too common to discriminate) and every term with df <= `lower_df`
/// (too rare to matter).
pub fn luhn_index_terms(stats: &[TermStat], upper_percent: f64, lower_df: usize) -> LuhnOutcome {
    let mut by_df: Vec<&TermStat> = stats.iter().collect();
    by_df.sort_by(|a, b| b.df.cmp(&a.df).then_with(|| a.term.cmp(&b.term)));

    let upper_count = (by_df.len() as f64 * upper_percent) as usize;
    let upper_cutoff: HashSet<&str> = by_df
        .iter()
        .take(upper_count)
        .map(|stat| stat.term.as_str())
        .collect();
    let lower_cutoff: HashSet<&str> = by_df
        .iter()
        .filter(|stat| stat.df <= lower_df)
        .map(|stat| stat.term.as_str())
        .collect();

    let index_terms: Vec<TermStat> = by_df
        .iter()
        .filter(|stat| {
            !upper_cutoff.contains(stat.term.as_str()) && !lower_cutoff.contains(stat.term.as_str())
        })
        .map(|stat| (*stat).clone())
        .collect();

    log::info!(
        "[INDEX] Luhn cutoffs: {} unique terms, removed {} common + {} rare, {} index terms remain",
        by_df.len(),
        upper_cutoff.len(),
        lower_cutoff.len(),
        index_terms.len()
    );

    LuhnOutcome {
        index_terms,
        upper_cutoff_removed: upper_cutoff.len(),
        lower_cutoff_removed: lower_cutoff.len(),
    }
}

/// idf(t) = log2(N / df(t)), only for terms with df > 0 in `allowed`.
pub fn compute_idf(
    stats: &[TermStat],
    total_docs: usize,
    allowed: &HashSet<String>,
) -> HashMap<String, f64> {
    let mut idf: HashMap<String, f64> = HashMap::new();
    for stat in stats {
        if stat.df == 0 || !allowed.contains(&stat.term) {
            continue;
        }
        idf.insert(stat.term.clone(), (total_docs as f64 / stat.df as f64).log2());
    }
    idf
}

/// tf-idf for one document over the allowed vocabulary, with tf normalized
/// by total tokens in the document.
pub fn document_tf_idf(
    document: &TokenizedDocument,
    idf: &HashMap<String, f64>,
) -> HashMap<String, f64> {
    let tf = term_frequencies(document);
    let total_tokens: usize = tf.values().sum();
    if total_tokens == 0 {
        return HashMap::new();
    }

    tf.into_iter()
        .filter_map(|(term, count)| {
            let idf_value = idf.get(&term)?;
            let tf_norm = count as f64 / total_tokens as f64;
            Some((term, tf_norm * idf_value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(url: &str, tokens: &[&str]) -> TokenizedDocument {
        TokenizedDocument {
            url: url.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn stat(term: &str, cf: usize, df: usize) -> TermStat {
        TermStat {
            term: term.to_string(),
            cf,
            df,
        }
    }

    #[test]
    fn test_word_frequencies_count_cf_and_df() {
        let docs = vec![doc("a", &["ዜና", "ዜና", "ሀገር"]), doc("b", &["ዜና"])];

        let stats = word_frequencies(&docs);
        let news = stats.iter().find(|s| s.term == "ዜና").unwrap();
        let country = stats.iter().find(|s| s.term == "ሀገር").unwrap();

        assert_eq!(news.cf, 3);
        assert_eq!(news.df, 2);
        assert_eq!(country.cf, 1);
        assert_eq!(country.df, 1);
    }

    #[test]
    fn test_rank_frequencies_descend_by_cf() {
        let stats = vec![stat("a", 2, 1), stat("b", 9, 1), stat("c", 5, 1)];
        let ranked = rank_frequencies(&stats);

        assert_eq!(ranked[0].term, "b");
        assert_eq!(ranked[1].term, "c");
        assert_eq!(ranked[2].term, "a");
    }

    #[test]
    fn test_luhn_removes_rare_terms() {
        let stats = vec![stat("common", 100, 50), stat("mid", 40, 20), stat("rare", 2, 1)];
        let outcome = luhn_index_terms(&stats, 0.0, 3);

        assert_eq!(outcome.lower_cutoff_removed, 1);
        assert!(!outcome.index_terms.iter().any(|s| s.term == "rare"));
        assert!(outcome.index_terms.iter().any(|s| s.term == "mid"));
    }

    #[test]
    fn test_luhn_removes_top_percent_by_df() {
        // 10 terms, 20% upper cutoff removes the 2 highest-df terms.
        let stats: Vec<TermStat> = (0..10)
            .map(|i| stat(&format!("t{}", i), 100, 100 - i * 5))
            .collect();
        let outcome = luhn_index_terms(&stats, 0.2, 0);

        assert_eq!(outcome.upper_cutoff_removed, 2);
        assert!(!outcome.index_terms.iter().any(|s| s.term == "t0"));
        assert!(!outcome.index_terms.iter().any(|s| s.term == "t1"));
        assert!(outcome.index_terms.iter().any(|s| s.term == "t2"));
    }

    #[test]
    fn test_idf_is_log2_of_inverse_document_frequency() {
        let stats = vec![stat("half", 10, 5), stat("all", 20, 10)];
        let allowed: HashSet<String> = ["half".to_string(), "all".to_string()].into();

        let idf = compute_idf(&stats, 10, &allowed);

        assert!((idf["half"] - 1.0).abs() < 1e-9);
        assert!(idf["all"].abs() < 1e-9);
    }

    #[test]
    fn test_idf_skips_disallowed_terms() {
        let stats = vec![stat("kept", 5, 2), stat("cut", 5, 2)];
        let allowed: HashSet<String> = ["kept".to_string()].into();

        let idf = compute_idf(&stats, 4, &allowed);

        assert!(idf.contains_key("kept"));
        assert!(!idf.contains_key("cut"));
    }

    #[test]
    fn test_document_tf_idf_normalizes_by_length() {
        let document = doc("a", &["x", "x", "y", "z"]);
        let mut idf = HashMap::new();
        idf.insert("x".to_string(), 2.0);
        idf.insert("y".to_string(), 1.0);

        let weights = document_tf_idf(&document, &idf);

        assert!((weights["x"] - 0.5 * 2.0).abs() < 1e-9);
        assert!((weights["y"] - 0.25 * 1.0).abs() < 1e-9);
        // z has no idf entry (cut by Luhn), so it carries no weight.
        assert!(!weights.contains_key("z"));
    }
}
