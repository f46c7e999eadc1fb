use std::sync::{Arc, Mutex};

use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::{SearchPhase, SearchQuery, SearchResult, SearchSession};
use crate::global_constants;

/// Drives one search session against a backend.
///
/// Submitting an empty query clears the session without touching the
/// backend. A non-empty query issues exactly one backend call; its outcome
/// is applied through the session's ticket check, so a slow response for a
/// superseded query can never overwrite a newer one.
pub struct SearchOrchestrator {
    backend: Arc<dyn SearchBackend>,
    session: Arc<Mutex<SearchSession>>,
}

impl SearchOrchestrator {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            session: Arc::new(Mutex::new(SearchSession::new())),
        }
    }

    pub async fn submit(&self, raw_input: &str) -> SearchPhase {
        let query = SearchQuery::new(raw_input);

        if query.is_empty() {
            log::debug!("[SEARCH] Empty query, skipping backend call");
            self.with_session(|session| session.clear());
            return self.phase();
        }

        let ticket = self.with_session(|session| session.begin(query.text()));

        match self.backend.search(&query).await {
            Ok(response) => {
                log::info!(
                    "[SEARCH] Query {:?} returned {} results",
                    query.text(),
                    response.results.len()
                );
                self.with_session(|session| {
                    session.apply_success(ticket, query.text(), response.results)
                });
            }
            Err(error) => {
                // The cause (transport, status, parse) is collapsed into one
                // user-facing message; the detail only goes to the log.
                log::error!("[SEARCH] Query {:?} failed: {:#}", query.text(), error);
                self.with_session(|session| {
                    session.apply_error(
                        ticket,
                        query.text(),
                        global_constants::MESSAGE_FETCH_FAILED,
                    )
                });
            }
        }

        self.phase()
    }

    pub fn phase(&self) -> SearchPhase {
        self.with_session(|session| session.phase().clone())
    }

    pub fn results(&self) -> Vec<SearchResult> {
        self.with_session(|session| session.results().to_vec())
    }

    pub fn is_expanded(&self, result_index: usize) -> bool {
        self.with_session(|session| session.is_expanded(result_index))
    }

    pub fn toggle_expanded(&self, result_index: usize) {
        self.with_session(|session| session.toggle_expanded(result_index));
    }

    fn with_session<T>(&self, f: impl FnOnce(&mut SearchSession) -> T) -> T {
        let mut session = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut session)
    }
}
