//! Debate sub-session: the chat handle plus its message log.

use std::sync::Arc;

use marcus_core::agent::DebateChat;
use marcus_core::session::{ChatMessage, DebateSnapshot};

/// Messages exchanged with the persona after an analysis.
///
/// Lives from `start_debate` until the debate ends or the language changes;
/// nothing here is persisted.
pub struct DebateSession {
    chat: Arc<dyn DebateChat>,
    messages: Vec<ChatMessage>,
    next_id: u64,
    is_typing: bool,
}

impl DebateSession {
    /// Opens the log with the persona's greeting as message 0.
    pub fn new(chat: Arc<dyn DebateChat>, greeting: &str) -> Self {
        Self {
            chat,
            messages: vec![ChatMessage::model(0, greeting)],
            next_id: 1,
            is_typing: false,
        }
    }

    pub fn chat(&self) -> Arc<dyn DebateChat> {
        self.chat.clone()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Records the user's message and marks a reply as pending.
    pub fn begin_turn(&mut self, text: &str) {
        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id, text));
        self.is_typing = true;
    }

    /// Records the persona's reply (or its substitute) and clears the
    /// pending flag.
    pub fn finish_turn(&mut self, reply: &str) {
        let id = self.allocate_id();
        self.messages.push(ChatMessage::model(id, reply));
        self.is_typing = false;
    }

    pub fn snapshot(&self) -> DebateSnapshot {
        DebateSnapshot {
            messages: self.messages.clone(),
            is_typing: self.is_typing,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
