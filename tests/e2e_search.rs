// VCScout - tests/e2e_search.rs
//
// End-to-end tests for profile search over the real built-in corpus,
// driven through the session state the GUI uses.

use vcscout::app::corpus_mgr::load_corpus;
use vcscout::app::search::SearchManager;
use vcscout::app::state::{AppState, SearchPhase};
use vcscout::core::corpus::load_builtin_corpus;
use vcscout::core::model::FirmProfile;
use vcscout::core::search::{search, InMemorySearch, ProfileSearch};
use vcscout::ui::text;
use vcscout::util::constants;
use std::sync::Arc;

// =============================================================================
// Helpers
// =============================================================================

fn ids(profiles: &[FirmProfile]) -> Vec<&str> {
    profiles.iter().map(|p| p.id.as_str()).collect()
}

/// Whether `profile` mentions `query` in any of the four searchable fields,
/// checked field by field without going through the search module.
fn mentions(profile: &FirmProfile, query: &str) -> bool {
    let needle = query.to_lowercase();
    let has = |field: &str| field.to_lowercase().contains(&needle);
    has(&profile.industry_focus)
        || profile.sectors.iter().any(|s| has(s))
        || has(&profile.description)
        || has(&profile.firm_name)
}

/// Queries that hit zero, one, and many records of the built-in corpus.
const QUERIES: &[&str] = &[
    "fintech", "FINTECH", "health", "capital", "ai", "e", "blockchain", "zzz-none",
];

// =============================================================================
// Properties
// =============================================================================

/// Every returned record matches; every omitted record does not.
#[test]
fn e2e_search_is_complete_and_sound() {
    let corpus = load_builtin_corpus();
    for q in QUERIES {
        let result = search(q, &corpus);
        let hit: Vec<_> = ids(&result);
        for profile in &corpus {
            assert_eq!(
                hit.contains(&profile.id.as_str()),
                mentions(profile, q),
                "query {q:?}, record {}",
                profile.id
            );
        }
    }
}

/// Each searchable field is enough on its own to produce a hit.
#[test]
fn e2e_each_field_matches_independently() {
    let corpus: Vec<FirmProfile> = serde_json::from_str(
        r#"[
            {"id":"a","firmName":"Alpha","industryFocus":"Quantum","contactPerson":{"name":"n","designation":"d"},"email":"a@a"},
            {"id":"b","firmName":"Beta","industryFocus":"Retail","sectors":["Quantum Sensing"],"contactPerson":{"name":"n","designation":"d"},"email":"b@b"},
            {"id":"c","firmName":"Gamma","industryFocus":"Retail","description":"Backs quantum startups.","contactPerson":{"name":"n","designation":"d"},"email":"c@c"},
            {"id":"d","firmName":"Quantum Partners","industryFocus":"Retail","contactPerson":{"name":"n","designation":"d"},"email":"d@d"},
            {"id":"e","firmName":"Delta","industryFocus":"Retail","contactPerson":{"name":"n","designation":"d"},"email":"e@e"}
        ]"#,
    )
    .unwrap();

    let result = search("QUANTUM", &corpus);
    assert_eq!(ids(&result), vec!["a", "b", "c", "d"]);
}

#[test]
fn e2e_search_preserves_corpus_order() {
    let corpus = load_builtin_corpus();
    let position = |id: &str| corpus.iter().position(|p| p.id == id).unwrap();
    for q in QUERIES {
        let result = search(q, &corpus);
        let positions: Vec<_> = result.iter().map(|p| position(&p.id)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "query {q:?}");
    }
}

#[test]
fn e2e_search_is_idempotent() {
    let corpus = load_builtin_corpus();
    for q in QUERIES {
        let once = search(q, &corpus);
        let twice = search(q, &once);
        assert_eq!(once, twice, "query {q:?}");
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn e2e_fintech_matches_case_insensitively() {
    let corpus = load_builtin_corpus();
    let result = search("fintech", &corpus);
    assert!(
        result.iter().any(|p| p.industry_focus == "Fintech"),
        "expected the Fintech firm in {:?}",
        ids(&result)
    );
}

#[test]
fn e2e_unknown_query_yields_no_results_message() {
    let (corpus, errors) = load_corpus(None);
    assert!(errors.is_empty());

    let mut state = AppState::new(corpus.len(), true, false);
    let mut manager = SearchManager::new(Arc::new(InMemorySearch::new(corpus)));

    let ticket = state.selection.begin_search("nonexistent-xyz").unwrap();
    manager.start(ticket);
    for done in manager.poll(constants::MAX_MESSAGES_PER_FRAME) {
        state.apply_search_result(&done.ticket, done.outcome);
    }

    assert_eq!(state.selection.phase, SearchPhase::Loaded);
    assert!(state.selection.results.is_empty());
    let message = text::no_results(state.selection.query.as_deref().unwrap());
    assert!(message.contains("nonexistent-xyz"), "{message}");
}

#[test]
fn e2e_in_memory_variant_agrees_with_pure_search() {
    let corpus = load_builtin_corpus();
    let backend = InMemorySearch::new(corpus.clone());
    for q in QUERIES {
        assert_eq!(backend.search(q).unwrap(), search(q, &corpus), "query {q:?}");
    }
}

#[test]
fn e2e_chip_then_free_text_replaces_results() {
    let corpus = load_builtin_corpus();
    let mut state = AppState::new(corpus.len(), true, false);
    let mut manager = SearchManager::new(Arc::new(InMemorySearch::new(corpus)));

    for query in ["Fintech", "Healthcare"] {
        state.request_search(query);
        let pending = state.pending_search.take().unwrap();
        let ticket = state.selection.begin_search(&pending).unwrap();
        manager.start(ticket);
    }
    for done in manager.poll(constants::MAX_MESSAGES_PER_FRAME) {
        state.apply_search_result(&done.ticket, done.outcome);
    }

    // Only the latest query's results survive.
    assert_eq!(state.selection.query.as_deref(), Some("Healthcare"));
    assert!(state
        .selection
        .results
        .iter()
        .all(|p| mentions(p, "healthcare")));
    assert!(!state.selection.results.is_empty());
}
