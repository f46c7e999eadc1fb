use crate::core::models::CorpusStats;

/// Plain-text corpus summary for the CLI and for `index` runs.
pub fn render_stats(stats: &CorpusStats) -> String {
    let mut lines = vec![
        format!("Total documents:      {}", stats.total_documents),
        format!("Unique terms:         {}", stats.unique_terms),
        format!("Avg. document length: {} tokens", stats.avg_doc_length),
        format!(
            "Luhn cutoffs:         -{} common, -{} rare, {} index terms remain",
            stats.upper_cutoff_removed, stats.lower_cutoff_removed, stats.remaining_index_terms
        ),
    ];

    if !stats.top_terms.is_empty() {
        lines.push("Top terms:".to_string());
        for (rank, entry) in stats.top_terms.iter().enumerate() {
            lines.push(format!(
                "  {:>2}. {}  ({})",
                rank + 1,
                entry.term,
                entry.frequency
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TermFrequency;

    #[test]
    fn test_render_stats_lists_totals_and_top_terms() {
        let stats = CorpusStats {
            total_documents: 2400,
            unique_terms: 25818,
            avg_doc_length: 312,
            top_terms: vec![TermFrequency {
                term: "ላይ".to_string(),
                frequency: 31984,
            }],
            upper_cutoff_removed: 1290,
            lower_cutoff_removed: 12000,
            remaining_index_terms: 12528,
        };

        let rendered = render_stats(&stats);

        assert!(rendered.contains("2400"));
        assert!(rendered.contains("ላይ"));
        assert!(rendered.contains("12528 index terms remain"));
    }

    #[test]
    fn test_render_stats_without_top_terms_omits_section() {
        let rendered = render_stats(&CorpusStats::default());
        assert!(!rendered.contains("Top terms"));
    }
}
