//! Per-conversation message log and composer command parsing

mod command;

pub use command::{parse_composer_input, ComposerInput, Trigger, TRIGGERS};

use crate::types::{ConversationId, Message, MessageId, NewMessage};
use tracing::debug;

/// Ordered message log for one conversation.
///
/// Messages are kept in append order; ids are assigned on append and are
/// always greater than any id already in the thread.
#[derive(Debug, Clone, Default)]
pub struct MessageThread {
    conversation_id: Option<ConversationId>,
    messages: Vec<Message>,
}

impl MessageThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all messages and seed the thread for `conversation_id`
    pub fn reset(&mut self, conversation_id: ConversationId, seed: Vec<NewMessage>) {
        debug!(
            "Resetting thread for conversation {} with {} seed messages",
            conversation_id,
            seed.len()
        );
        self.conversation_id = Some(conversation_id);
        self.messages.clear();
        for message in seed {
            self.append(message);
        }
    }

    /// Discard all messages and detach from any conversation
    pub fn clear(&mut self) {
        self.conversation_id = None;
        self.messages.clear();
    }

    /// Append to the tail, assigning the next id
    pub fn append(&mut self, message: NewMessage) -> &Message {
        let id = self.next_id();
        self.messages.push(message.into_message(id));
        &self.messages[self.messages.len() - 1]
    }

    pub fn next_id(&self) -> MessageId {
        let max = self.messages.iter().map(|m| m.id.as_u64()).max().unwrap_or(0);
        MessageId::new(max + 1)
    }

    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        self.conversation_id
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
