//! Read-only conversation list with search and category filtering

use super::SeedSource;
use crate::error::{InboxError, Result};
use crate::types::{ConversationId, ConversationSummary, InboxFilter};
use tracing::debug;

/// Conversation summaries in seed order
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<ConversationSummary>,
}

impl ConversationStore {
    pub fn new(conversations: Vec<ConversationSummary>) -> Self {
        Self { conversations }
    }

    pub fn from_seed(seed: &dyn SeedSource) -> Self {
        let conversations = seed.conversations();
        debug!("Seeded conversation store with {} conversations", conversations.len());
        Self::new(conversations)
    }

    /// Summaries matching the search term and every filter, in seed order.
    ///
    /// Never fails; an empty result means nothing matched.
    pub fn list(&self, filters: &[InboxFilter], search: &str) -> Vec<&ConversationSummary> {
        self.conversations
            .iter()
            .filter(|c| c.matches_search(search))
            .filter(|c| filters.iter().all(|f| f.matches(c)))
            .collect()
    }

    pub fn get(&self, id: ConversationId) -> Result<&ConversationSummary> {
        self.conversations
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| InboxError::ConversationNotFound(id).into())
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
