// VCScout - app/search.rs
//
// Runs profile searches off the UI thread and delivers the outcome over an
// mpsc channel that the UI drains each frame.
//
// Architecture:
//   - `SearchManager` lives on the UI thread and owns the receiver.
//   - A remote search runs on its own short-lived thread per request.
//   - An in-memory search completes inline but is still delivered through
//     the channel, so the UI sees a single completion path.
//   - Stale completions are filtered by the ticket in app::state, not here.

use crate::app::state::SearchTicket;
use crate::core::model::FirmProfile;
use crate::core::search::ProfileSearch;
use crate::util::error::SearchError;
use std::sync::{mpsc, Arc};

/// Outcome of one search request.
#[derive(Debug)]
pub struct SearchCompletion {
    pub ticket: SearchTicket,
    pub outcome: Result<Vec<FirmProfile>, SearchError>,
}

/// Dispatches searches against one backend.
pub struct SearchManager {
    backend: Arc<dyn ProfileSearch>,
    tx: mpsc::Sender<SearchCompletion>,
    rx: mpsc::Receiver<SearchCompletion>,
    in_flight: usize,
}

impl SearchManager {
    pub fn new(backend: Arc<dyn ProfileSearch>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Whether searches go over the network.
    pub fn is_remote(&self) -> bool {
        self.backend.is_remote()
    }

    /// Start the search described by `ticket`.
    ///
    /// Earlier searches are not cancelled; their completions arrive and are
    /// discarded as stale.
    pub fn start(&mut self, ticket: SearchTicket) {
        self.in_flight += 1;

        if !self.backend.is_remote() {
            let outcome = self.backend.search(&ticket.query);
            // The receiver lives in self, so this cannot fail.
            let _ = self.tx.send(SearchCompletion { ticket, outcome });
            return;
        }

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tracing::debug!(generation = ticket.generation, "Remote search thread spawned");
        std::thread::spawn(move || {
            let outcome = backend.search(&ticket.query);
            // Receiver dropped means the app is closing.
            let _ = tx.send(SearchCompletion { ticket, outcome });
        });
    }

    /// True while at least one dispatched search has not been collected.
    pub fn has_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Collect finished searches without blocking, at most `max` per call.
    pub fn poll(&mut self, max: usize) -> Vec<SearchCompletion> {
        let mut done = Vec::new();
        while done.len() < max {
            match self.rx.try_recv() {
                Ok(c) => done.push(c),
                Err(_) => break,
            }
        }
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::corpus;
    use crate::core::search::InMemorySearch;
    use std::time::{Duration, Instant};

    struct FailingSearch;

    impl ProfileSearch for FailingSearch {
        fn search(&self, _query: &str) -> Result<Vec<FirmProfile>, SearchError> {
            Err(SearchError::Status {
                url: "http://backend.test/api/qa".to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            })
        }

        fn is_remote(&self) -> bool {
            true
        }
    }

    fn ticket(generation: u64, query: &str) -> SearchTicket {
        SearchTicket {
            generation,
            query: query.to_string(),
        }
    }

    fn wait_for(mgr: &mut SearchManager) -> Vec<SearchCompletion> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let done = mgr.poll(16);
            if !done.is_empty() || Instant::now() > deadline {
                return done;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_in_memory_search_is_delivered_on_next_poll() {
        let backend = Arc::new(InMemorySearch::new(corpus::load_builtin_corpus()));
        let mut mgr = SearchManager::new(backend);
        assert!(!mgr.is_remote());

        mgr.start(ticket(1, "Fintech"));
        assert!(mgr.has_pending());

        let done = mgr.poll(16);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].ticket.generation, 1);
        let results = done[0].outcome.as_ref().unwrap();
        assert!(results.iter().any(|p| p.id == "1"));
        assert!(!mgr.has_pending());
    }

    #[test]
    fn test_remote_failure_is_delivered_from_worker_thread() {
        let mut mgr = SearchManager::new(Arc::new(FailingSearch));
        mgr.start(ticket(3, "Fintech"));
        let done = wait_for(&mut mgr);
        assert_eq!(done.len(), 1);
        assert!(matches!(done[0].outcome, Err(SearchError::Status { .. })));
    }

    #[test]
    fn test_poll_respects_max() {
        let backend = Arc::new(InMemorySearch::new(corpus::load_builtin_corpus()));
        let mut mgr = SearchManager::new(backend);
        mgr.start(ticket(1, "a"));
        mgr.start(ticket(2, "b"));
        assert_eq!(mgr.poll(1).len(), 1);
        assert!(mgr.has_pending());
        assert_eq!(mgr.poll(1).len(), 1);
        assert!(!mgr.has_pending());
    }
}
