use std::collections::HashMap;

use crate::core::models::SearchResult;

/// Where one query currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading {
        query: String,
    },
    Success {
        query: String,
        results: Vec<SearchResult>,
    },
    Error {
        query: String,
        message: String,
    },
}

/// UI-scoped state for one page view: the current phase, per-result
/// index-term expansion flags, and the sequencing that keeps "last query
/// wins" true when responses arrive out of order.
///
/// Every issued request gets a ticket from a monotonically increasing
/// counter. A response is applied only when its ticket is still the latest
/// one issued; anything older is discarded.
pub struct SearchSession {
    phase: SearchPhase,
    latest_ticket: u64,
    expanded: HashMap<usize, bool>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            latest_ticket: 0,
            expanded: HashMap::new(),
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Start a new query: bumps the ticket, enters `Loading`, and resets
    /// all expansion state.
    pub fn begin(&mut self, query: &str) -> u64 {
        self.latest_ticket += 1;
        self.expanded.clear();
        self.phase = SearchPhase::Loading {
            query: query.to_string(),
        };
        log::debug!("[SEARCH] Issued request #{} for {:?}", self.latest_ticket, query);
        self.latest_ticket
    }

    /// Clear back to `Idle` with no results. Used for empty queries, which
    /// never reach the backend.
    pub fn clear(&mut self) {
        self.latest_ticket += 1;
        self.expanded.clear();
        self.phase = SearchPhase::Idle;
    }

    /// Apply a successful response. Returns false (and changes nothing)
    /// when the ticket is stale.
    pub fn apply_success(&mut self, ticket: u64, query: &str, results: Vec<SearchResult>) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.phase = SearchPhase::Success {
            query: query.to_string(),
            results,
        };
        true
    }

    /// Apply a failed response. Returns false (and changes nothing) when
    /// the ticket is stale.
    pub fn apply_error(&mut self, ticket: u64, query: &str, message: &str) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.phase = SearchPhase::Error {
            query: query.to_string(),
            message: message.to_string(),
        };
        true
    }

    fn is_latest(&self, ticket: u64) -> bool {
        if ticket != self.latest_ticket {
            log::debug!(
                "[SEARCH] Discarding stale response #{} (latest is #{})",
                ticket,
                self.latest_ticket
            );
            return false;
        }
        true
    }

    pub fn results(&self) -> &[SearchResult] {
        match &self.phase {
            SearchPhase::Success { results, .. } => results,
            _ => &[],
        }
    }

    pub fn is_expanded(&self, result_index: usize) -> bool {
        self.expanded.get(&result_index).copied().unwrap_or(false)
    }

    pub fn toggle_expanded(&mut self, result_index: usize) {
        let entry = self.expanded.entry(result_index).or_insert(false);
        *entry = !*entry;
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
