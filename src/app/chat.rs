// VCScout - app/chat.rs
//
// Sends chat messages on background threads, one thread per message.
// Completions come back over an mpsc channel drained by the UI each frame;
// app::state decides whether a completion is still current.

use crate::app::state::ChatTicket;
use crate::core::chat::ChatClient;
use crate::util::error::ChatError;
use std::sync::{mpsc, Arc};

/// Outcome of one chat call.
#[derive(Debug)]
pub struct ChatCompletion {
    pub ticket: ChatTicket,
    pub outcome: Result<String, ChatError>,
}

pub struct ChatManager {
    client: Arc<dyn ChatClient>,
    tx: mpsc::Sender<ChatCompletion>,
    rx: mpsc::Receiver<ChatCompletion>,
}

impl ChatManager {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { client, tx, rx }
    }

    /// Send `ticket.message` on a new thread. Never retried.
    pub fn send(&self, ticket: ChatTicket) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tracing::debug!(request = ticket.request_id, "Chat request thread spawned");
        std::thread::spawn(move || {
            let outcome = client.send(&ticket.message);
            let _ = tx.send(ChatCompletion { ticket, outcome });
        });
    }

    /// Collect finished calls without blocking, at most `max` per call.
    pub fn poll(&self, max: usize) -> Vec<ChatCompletion> {
        self.rx.try_iter().take(max).collect()
    }
}
