// VCScout - app/state.rs
//
// Session state: the selection state machine (query, results, open
// profile), the chat state (transcript, in-flight request), and the
// overlay flags the presentation layer toggles.
// Owned by the eframe::App implementation; nothing here touches egui, so
// every transition can be tested without rendering.
//
// Every outbound request is described by a ticket. A completion is applied
// only if its ticket matches the latest outstanding request; anything else
// is stale and dropped.

use crate::core::chat::{self, ChatClient, Transcript};
use crate::core::model::{FirmProfile, Sender};
use crate::core::search;
use crate::util::constants;
use crate::util::error::{ChatError, QueryError, SearchError};
use crate::util::logging::preview;
use std::collections::HashSet;

// =============================================================================
// Selection state machine
// =============================================================================

/// Where the current search stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No query submitted yet this session.
    #[default]
    Idle,
    /// A query was submitted and its results have not arrived.
    Loading,
    /// Results for the latest query are available (possibly empty).
    Loaded,
    /// The latest query failed; only reachable with a network-backed search.
    Failed { message: String },
}

/// Identifies one submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    /// Trimmed query as the user entered it (original case).
    pub query: String,
}

/// Query, results, and the profile shown in the detail overlay.
#[derive(Debug, Default)]
pub struct SelectionState {
    /// Latest submitted query (trimmed, original case). `None` until the first search.
    pub query: Option<String>,

    /// Results of the latest completed search, in corpus order.
    pub results: Vec<FirmProfile>,

    /// Profile shown in the detail overlay, if open.
    pub active_profile: Option<FirmProfile>,

    pub phase: SearchPhase,

    generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new query and move to `Loading`.
    ///
    /// Any search still outstanding becomes stale. Rejects blank input
    /// without touching state.
    pub fn begin_search(&mut self, raw: &str) -> Result<SearchTicket, QueryError> {
        search::normalise_query(raw)?;
        let query = raw.trim().to_string();

        self.generation += 1;
        self.query = Some(query.clone());
        self.phase = SearchPhase::Loading;

        tracing::debug!(generation = self.generation, query = %query, "Search submitted");
        Ok(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a finished search. Returns false (and changes nothing) when the
    /// ticket is not the latest outstanding one.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<FirmProfile>, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "Dropping stale search result"
            );
            return false;
        }

        match outcome {
            Ok(results) => {
                tracing::info!(query = %ticket.query, results = results.len(), "Search complete");
                self.results = results;
                self.phase = SearchPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!(query = %ticket.query, error = %e, "Search failed");
                self.results = Vec::new();
                self.phase = SearchPhase::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// Show `profile` in the detail overlay, replacing any profile already shown.
    pub fn open_profile(&mut self, profile: FirmProfile) {
        tracing::debug!(profile = %profile.id, "Profile overlay opened");
        self.active_profile = Some(profile);
    }

    pub fn close_profile(&mut self) {
        self.active_profile = None;
    }
}

// =============================================================================
// Chat state
// =============================================================================

/// Identifies one outstanding chat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    pub conversation: u64,
    pub request_id: u64,
    /// Text exactly as the user typed it.
    pub message: String,
}

/// Transcript plus the bookkeeping for the single outstanding call.
#[derive(Debug)]
pub struct ChatState {
    pub transcript: Transcript,

    /// Text box contents.
    pub input: String,

    /// Banner shown after the most recent call failed.
    pub error: Option<String>,

    pending: Option<ChatTicket>,
    conversation: u64,
    next_request: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_greeting(),
            input: String::new(),
            error: None,
            pending: None,
            conversation: 1,
            next_request: 1,
        }
    }

    /// True while a call is outstanding; input must stay disabled.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Append the user's turn and return the ticket for the outbound call.
    pub fn begin_send(&mut self, raw: &str) -> Result<ChatTicket, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::Empty { field: "chat" });
        }
        if self.pending.is_some() {
            return Err(QueryError::InFlight { field: "chat" });
        }

        self.error = None;
        self.transcript.push(Sender::User, raw);

        let ticket = ChatTicket {
            conversation: self.conversation,
            request_id: self.next_request,
            message: raw.to_string(),
        };
        self.next_request += 1;
        self.pending = Some(ticket.clone());

        tracing::debug!(
            request = ticket.request_id,
            message = %preview(raw),
            "Chat message submitted"
        );
        Ok(ticket)
    }

    /// Append the bot turn for a finished call: the reply verbatim, or the
    /// fixed apology on failure. Returns false for a stale ticket.
    pub fn complete_send(&mut self, ticket: &ChatTicket, outcome: Result<String, ChatError>) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            tracing::debug!(
                request = ticket.request_id,
                conversation = ticket.conversation,
                "Dropping stale chat reply"
            );
            return false;
        }
        self.pending = None;

        if let Err(ref e) = outcome {
            tracing::warn!(error = %e, "Chat call failed");
            self.error = Some(constants::CHAT_APOLOGY.to_string());
        }
        self.transcript.push(Sender::Bot, chat::reply_text(&outcome));
        true
    }

    /// Run one complete exchange on the calling thread.
    ///
    /// Blocks for the duration of the call. The GUI uses the background
    /// path (app::chat::ChatManager) instead.
    pub fn exchange(&mut self, client: &dyn ChatClient, raw: &str) -> Result<(), QueryError> {
        let ticket = self.begin_send(raw)?;
        let outcome = client.send(&ticket.message);
        self.complete_send(&ticket, outcome);
        Ok(())
    }

    /// Start over with a fresh greeting. A reply still in flight for the old
    /// conversation will be dropped when it arrives.
    pub fn new_conversation(&mut self) {
        self.conversation += 1;
        self.transcript = Transcript::with_greeting();
        self.pending = None;
        self.error = None;
        tracing::debug!(conversation = self.conversation, "New conversation started");
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Application state
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    pub selection: SelectionState,
    pub chat: ChatState,

    /// Free-text search box contents.
    pub search_input: String,

    /// Whether the chat overlay is open.
    pub chat_open: bool,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Result cards whose description is shown in full, by profile id.
    pub expanded_cards: HashSet<String>,

    /// Search requested by a panel this frame; consumed by the app loop.
    pub pending_search: Option<String>,

    /// Chat message submitted by a panel this frame; consumed by the app loop.
    pub pending_chat: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Result of the startup health check, once known.
    pub backend_status: Option<String>,

    /// Non-fatal warnings from startup (config, corpus).
    pub warnings: Vec<String>,

    /// Number of records in the loaded corpus.
    pub corpus_size: usize,

    /// Whether the dark theme is active.
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Backend base URL, shown in the About dialog.
    pub backend_url: Option<String>,

    /// Whether searches go to the backend rather than the in-memory directory.
    pub remote_search: bool,
}

impl AppState {
    /// Create initial state for a session over a corpus of `corpus_size` records.
    pub fn new(corpus_size: usize, dark_mode: bool, debug_mode: bool) -> Self {
        Self {
            selection: SelectionState::new(),
            chat: ChatState::new(),
            search_input: String::new(),
            chat_open: false,
            show_about: false,
            expanded_cards: HashSet::new(),
            pending_search: None,
            pending_chat: None,
            status_message: format!(
                "Ready. {corpus_size} firms loaded. Select an industry to begin."
            ),
            backend_status: None,
            warnings: Vec::new(),
            corpus_size,
            dark_mode,
            debug_mode,
            backend_url: None,
            remote_search: false,
        }
    }

    /// Ask the app loop to run a search for `query` on the next frame.
    ///
    /// Blank input is ignored; the controls that call this are disabled for it.
    pub fn request_search(&mut self, query: &str) {
        if !query.trim().is_empty() {
            self.pending_search = Some(query.trim().to_string());
        }
    }

    /// Ask the app loop to send the chat input box contents.
    pub fn request_chat_send(&mut self) {
        if self.chat.input.trim().is_empty() || self.chat.is_waiting() {
            return;
        }
        self.pending_chat = Some(std::mem::take(&mut self.chat.input));
    }

    pub fn toggle_card(&mut self, profile_id: &str) {
        if !self.expanded_cards.remove(profile_id) {
            self.expanded_cards.insert(profile_id.to_string());
        }
    }

    pub fn is_card_expanded(&self, profile_id: &str) -> bool {
        self.expanded_cards.contains(profile_id)
    }

    /// Apply a finished search and refresh the status bar.
    pub fn apply_search_result(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<FirmProfile>, SearchError>,
    ) {
        if !self.selection.complete_search(ticket, outcome) {
            return;
        }
        self.expanded_cards.clear();
        self.status_message = match self.selection.phase {
            SearchPhase::Failed { .. } => format!("Search for \"{}\" failed.", ticket.query),
            _ => format!(
                "{} result(s) for \"{}\".",
                self.selection.results.len(),
                ticket.query
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ContactPerson;

    fn profile(id: &str) -> FirmProfile {
        FirmProfile {
            id: id.to_string(),
            firm_name: format!("Firm {id}"),
            industry_focus: "Fintech".to_string(),
            sectors: vec![],
            contact_person: ContactPerson {
                name: "N".to_string(),
                designation: "D".to_string(),
                bio: None,
            },
            email: "n@firm.vc".to_string(),
            website_url: None,
            linkedin_url: None,
            logo_url: None,
            location: String::new(),
            description: String::new(),
        }
    }

    struct EchoClient;

    impl ChatClient for EchoClient {
        fn send(&self, message: &str) -> Result<String, ChatError> {
            Ok(format!("echo: {message}"))
        }
    }

    #[test]
    fn test_idle_to_loading_to_loaded() {
        let mut sel = SelectionState::new();
        assert_eq!(sel.phase, SearchPhase::Idle);
        assert!(sel.query.is_none());

        let ticket = sel.begin_search("  Fintech ").unwrap();
        assert_eq!(ticket.query, "Fintech");
        assert_eq!(sel.query.as_deref(), Some("Fintech"));
        assert!(sel.is_loading());

        assert!(sel.complete_search(&ticket, Ok(vec![profile("1")])));
        assert_eq!(sel.phase, SearchPhase::Loaded);
        assert_eq!(sel.results.len(), 1);
    }

    #[test]
    fn test_blank_query_leaves_state_untouched() {
        let mut sel = SelectionState::new();
        assert_eq!(
            sel.begin_search(" \t"),
            Err(QueryError::Empty { field: "search" })
        );
        assert_eq!(sel.phase, SearchPhase::Idle);
        assert!(sel.query.is_none());
    }

    #[test]
    fn test_stale_search_result_is_ignored() {
        let mut sel = SelectionState::new();
        let first = sel.begin_search("Fintech").unwrap();
        let second = sel.begin_search("Healthcare").unwrap();

        assert!(!sel.complete_search(&first, Ok(vec![profile("1")])));
        assert!(sel.is_loading());
        assert!(sel.results.is_empty());

        assert!(sel.complete_search(&second, Ok(vec![profile("2")])));
        assert_eq!(sel.results[0].id, "2");

        // A duplicate delivery of the applied ticket is also ignored.
        assert!(!sel.complete_search(&second, Ok(vec![])));
        assert_eq!(sel.results.len(), 1);
    }

    #[test]
    fn test_results_replaced_wholesale() {
        let mut sel = SelectionState::new();
        let t = sel.begin_search("a").unwrap();
        sel.complete_search(&t, Ok(vec![profile("1"), profile("2")]));
        let t = sel.begin_search("b").unwrap();
        sel.complete_search(&t, Ok(vec![profile("3")]));
        let ids: Vec<_> = sel.results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_overlay_open_close() {
        let mut sel = SelectionState::new();
        sel.open_profile(profile("1"));
        sel.open_profile(profile("2"));
        assert_eq!(sel.active_profile.as_ref().map(|p| p.id.as_str()), Some("2"));
        sel.close_profile();
        assert!(sel.active_profile.is_none());
    }

    #[test]
    fn test_chat_success_appends_user_then_bot() {
        let mut chat = ChatState::new();
        let before = chat.transcript.len();
        let ticket = chat.begin_send("hello").unwrap();
        assert!(chat.is_waiting());
        assert!(chat.complete_send(&ticket, Ok("hi there".to_string())));
        assert!(!chat.is_waiting());

        let turns = &chat.transcript.turns()[before..];
        assert_eq!(turns.len(), 2);
        assert_eq!((turns[0].sender, turns[0].text.as_str()), (Sender::User, "hello"));
        assert_eq!((turns[1].sender, turns[1].text.as_str()), (Sender::Bot, "hi there"));
        assert!(chat.error.is_none());
    }

    #[test]
    fn test_chat_rejects_blank_and_concurrent_sends() {
        let mut chat = ChatState::new();
        assert_eq!(
            chat.begin_send("   "),
            Err(QueryError::Empty { field: "chat" })
        );
        let _ticket = chat.begin_send("first").unwrap();
        assert_eq!(
            chat.begin_send("second"),
            Err(QueryError::InFlight { field: "chat" })
        );
        // Only the greeting and the first user turn.
        assert_eq!(chat.transcript.len(), 2);
    }

    #[test]
    fn test_reply_for_old_conversation_is_dropped() {
        let mut chat = ChatState::new();
        let ticket = chat.begin_send("question").unwrap();
        chat.new_conversation();
        assert!(!chat.complete_send(&ticket, Ok("late".to_string())));
        assert_eq!(chat.transcript.len(), 1);
        assert!(!chat.is_waiting());
    }

    #[test]
    fn test_exchange_runs_a_full_round_trip() {
        let mut chat = ChatState::new();
        chat.exchange(&EchoClient, "ping").unwrap();
        let last = chat.transcript.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "echo: ping");
    }

    #[test]
    fn test_request_chat_send_takes_input() {
        let mut state = AppState::new(10, true, false);
        state.chat.input = "hi".to_string();
        state.request_chat_send();
        assert_eq!(state.pending_chat.as_deref(), Some("hi"));
        assert!(state.chat.input.is_empty());

        state.pending_chat = None;
        state.chat.input = "  ".to_string();
        state.request_chat_send();
        assert!(state.pending_chat.is_none());
    }

    #[test]
    fn test_toggle_card() {
        let mut state = AppState::new(10, true, false);
        state.toggle_card("1");
        assert!(state.is_card_expanded("1"));
        state.toggle_card("1");
        assert!(!state.is_card_expanded("1"));
    }

    #[test]
    fn test_apply_search_result_updates_status() {
        let mut state = AppState::new(10, true, false);
        let ticket = state.selection.begin_search("Fintech").unwrap();
        state.toggle_card("1");
        state.apply_search_result(&ticket, Ok(vec![profile("1")]));
        assert_eq!(state.status_message, "1 result(s) for \"Fintech\".");
        assert!(state.expanded_cards.is_empty());
    }
}
