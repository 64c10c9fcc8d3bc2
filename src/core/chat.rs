// VCScout - core/chat.rs
//
// Chat transcript and the chat-client seam.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{ChatTurn, Sender};
use crate::util::constants;
use crate::util::error::ChatError;
use chrono::Utc;

/// Sends one message to the assistant and returns its reply.
///
/// Each call is independent and at-most-once: implementations never retry,
/// queue, or deduplicate. The reply text is returned verbatim.
pub trait ChatClient: Send + Sync {
    fn send(&self, message: &str) -> Result<String, ChatError>;
}

/// Ordered, append-only record of one conversation.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
    next_id: u64,
}

impl Transcript {
    /// An empty transcript. The first appended turn gets id 1.
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            next_id: 1,
        }
    }

    /// A transcript opened by the assistant's greeting.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push(Sender::Bot, constants::CHAT_GREETING);
        transcript
    }

    /// Append a turn stamped with the current time and return it.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatTurn {
        let turn = ChatTurn {
            id: self.next_id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Text of the bot turn that records the outcome of a chat call.
///
/// Success yields the reply unchanged; any failure yields the fixed apology.
pub fn reply_text(outcome: &Result<String, ChatError>) -> &str {
    match outcome {
        Ok(text) => text.as_str(),
        Err(_) => constants::CHAT_APOLOGY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let mut t = Transcript::new();
        t.push(Sender::User, "a");
        t.push(Sender::Bot, "b");
        t.push(Sender::User, "c");
        let ids: Vec<_> = t.turns().iter().map(|turn| turn.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_greeting_is_first_bot_turn() {
        let t = Transcript::with_greeting();
        assert_eq!(t.len(), 1);
        let first = &t.turns()[0];
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, constants::CHAT_GREETING);
        assert_eq!(first.id, 1);
    }

    #[test]
    fn test_push_returns_the_appended_turn() {
        let mut t = Transcript::with_greeting();
        let turn = t.push(Sender::User, "hello").clone();
        assert_eq!(turn.id, 2);
        assert_eq!(t.last(), Some(&turn));
    }

    #[test]
    fn test_reply_text_passes_success_through_verbatim() {
        let ok: Result<String, ChatError> = Ok("  Try Sequoia Capital.\n".to_string());
        assert_eq!(reply_text(&ok), "  Try Sequoia Capital.\n");
    }
}
