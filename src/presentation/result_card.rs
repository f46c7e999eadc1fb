//! Textual result cards: description truncation and the index-term
//! preview/expand treatment.

use crate::core::models::{SearchPhase, SearchResult};
use crate::global_constants;

/// Truncate a description to the preview length (in characters, not
/// bytes) with a trailing ellipsis; shorter text renders verbatim.
pub fn truncate_description(description: &str) -> String {
    let char_count = description.chars().count();
    if char_count <= global_constants::DESCRIPTION_PREVIEW_CHARS {
        return description.to_string();
    }

    let truncated: String = description
        .chars()
        .take(global_constants::DESCRIPTION_PREVIEW_CHARS)
        .collect();
    format!("{}{}", truncated, global_constants::DESCRIPTION_ELLIPSIS)
}

/// The index terms to show for one card plus the toggle label, if any.
/// Collapsed cards show at most the preview count; the toggle carries the
/// remaining count. Expanded cards show everything under a collapse label.
pub fn visible_terms<'a>(terms: &'a [String], expanded: bool) -> (&'a [String], Option<String>) {
    let preview = global_constants::TERMS_PREVIEW_COUNT;
    if terms.len() <= preview {
        return (terms, None);
    }

    if expanded {
        (terms, Some(global_constants::LABEL_COLLAPSE_TERMS.to_string()))
    } else {
        (
            &terms[..preview],
            Some(format!(
                "{} ({})",
                global_constants::LABEL_EXPAND_TERMS,
                terms.len() - preview
            )),
        )
    }
}

/// Header line above the result list, mirroring the results page.
pub fn render_header(phase: &SearchPhase) -> String {
    match phase {
        SearchPhase::Idle => global_constants::LABEL_ALL_RESULTS.to_string(),
        SearchPhase::Loading { query } => format!(
            "{}: \"{}\" - {}",
            global_constants::LABEL_RESULTS_HEADER,
            query,
            global_constants::LABEL_LOADING
        ),
        SearchPhase::Success { query, results } => format!(
            "{}: \"{}\" - {} {}",
            global_constants::LABEL_RESULTS_HEADER,
            query,
            results.len(),
            global_constants::LABEL_RESULTS_FOUND
        ),
        SearchPhase::Error { message, .. } => message.clone(),
    }
}

/// One display card: numbered title, url and date line, truncated
/// description, then the term badges and toggle.
pub fn render_card(result: &SearchResult, index: usize, expanded: bool) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{}. {}", index + 1, result.title));
    if !result.url.is_empty() || !result.date.is_empty() {
        lines.push(format!("   {}  {}", result.url, result.date).trim_end().to_string());
    }
    if !result.description.is_empty() {
        lines.push(format!("   {}", truncate_description(&result.description)));
    }

    let (terms, toggle) = visible_terms(&result.index_terms, expanded);
    if !terms.is_empty() {
        let mut badges: Vec<String> = terms.iter().map(|term| format!("[{}]", term)).collect();
        if let Some(label) = toggle {
            badges.push(label);
        }
        lines.push(format!("   {}", badges.join(" ")));
    }

    lines.join("\n")
}
