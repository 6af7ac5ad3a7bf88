//! Conversation list panel state

use copilot_inbox_core::{ConversationStore, ConversationSummary, InboxFilter};

/// Active category filter and search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPanelState {
    pub filter: InboxFilter,
    pub search: String,
}

impl ListPanelState {
    pub fn set_filter(&mut self, filter: InboxFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Conversations the list should render, in store order
    pub fn visible<'a>(&self, store: &'a ConversationStore) -> Vec<&'a ConversationSummary> {
        store.list(&[self.filter], &self.search)
    }
}
