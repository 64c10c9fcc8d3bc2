// VCScout - core/search.rs
//
// Profile search: case-insensitive substring match over the firm name,
// industry tag, sectors, and description of every record.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Result order always equals corpus order. There is no ranking.

use crate::core::model::FirmProfile;
use crate::util::error::{QueryError, SearchError};

/// A source of profile search results.
///
/// The in-memory variant answers synchronously from the loaded corpus; the
/// network variant (platform::api::RemoteSearch) asks the backend. Callers
/// hold a `dyn ProfileSearch` and never need to know which one they have.
pub trait ProfileSearch: Send + Sync {
    /// Return every matching record, in source order.
    ///
    /// `query` must be non-empty after trimming; see [`normalise_query`].
    fn search(&self, query: &str) -> Result<Vec<FirmProfile>, SearchError>;

    /// True when `search` performs network I/O and must not run on the UI thread.
    fn is_remote(&self) -> bool {
        false
    }
}

/// Trim and lowercase a raw query, rejecting empty or whitespace-only input.
pub fn normalise_query(raw: &str) -> Result<String, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty { field: "search" });
    }
    Ok(trimmed.to_lowercase())
}

/// Filter `corpus` down to the records matching `query`.
///
/// Pure function: no side effects, result order equals corpus order.
/// Callers must not pass an empty query; the UI disables the action for it.
pub fn search(query: &str, corpus: &[FirmProfile]) -> Vec<FirmProfile> {
    let needle = query.trim().to_lowercase();
    debug_assert!(!needle.is_empty(), "search called with an empty query");

    corpus
        .iter()
        .filter(|profile| matches(profile, &needle))
        .cloned()
        .collect()
}

/// Check a single record against an already-normalised needle.
pub fn matches(profile: &FirmProfile, needle_lower: &str) -> bool {
    contains_ci(&profile.industry_focus, needle_lower)
        || profile
            .sectors
            .iter()
            .any(|sector| contains_ci(sector, needle_lower))
        || contains_ci(&profile.description, needle_lower)
        || contains_ci(&profile.firm_name, needle_lower)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// =============================================================================
// In-memory variant
// =============================================================================

/// Searches an immutable corpus held in memory. Never fails.
#[derive(Debug, Clone)]
pub struct InMemorySearch {
    corpus: Vec<FirmProfile>,
}

impl InMemorySearch {
    pub fn new(corpus: Vec<FirmProfile>) -> Self {
        Self { corpus }
    }
}

impl ProfileSearch for InMemorySearch {
    fn search(&self, query: &str) -> Result<Vec<FirmProfile>, SearchError> {
        let results = search(query, &self.corpus);
        tracing::debug!(
            query = %query.trim(),
            results = results.len(),
            corpus = self.corpus.len(),
            "In-memory search complete"
        );
        Ok(results)
    }
}
