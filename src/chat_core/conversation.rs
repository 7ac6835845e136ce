use std::sync::{Arc, PoisonError, RwLock};

use super::types::Message;

/// Append-only history of one session, shared between the session worker
/// (the only writer) and whoever renders it.
#[derive(Clone, Debug, Default)]
pub struct ConversationLog {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl ConversationLog {
    pub fn new() -> ConversationLog {
        ConversationLog::default()
    }

    pub(crate) fn append(&self, message: Message) {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn recent_first(&self) -> Vec<Message> {
        let mut messages = self.snapshot();
        messages.reverse();
        messages
    }

    pub fn len(&self) -> usize {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
