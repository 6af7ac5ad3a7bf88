//! Copilot panel state

use chrono::{DateTime, Utc};
use copilot_inbox_core::{display_now, ComposerBridge, InboxError, MessageRole};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Prompts offered while the copilot history is empty
pub const QUICK_PROMPTS: [&str; 4] = [
    "Explain quantum computing",
    "Draft a polite decline",
    "Summarize this article URL",
    "Translate 'Hello World' to Japanese",
];

/// One bubble in the copilot history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopilotEntry {
    pub id: Uuid,
    /// `User` for queries, `Ai` for replies
    pub role: MessageRole,
    pub text: String,
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

impl CopilotEntry {
    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: display_now(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CopilotPanelState {
    history: Vec<CopilotEntry>,
    latest_reply: Option<Uuid>,
    notice: Option<String>,
    bridge: ComposerBridge,
}

impl CopilotPanelState {
    pub fn new(bridge: ComposerBridge) -> Self {
        Self {
            bridge,
            ..Self::default()
        }
    }

    /// Record a user query. Returns the query to send to the assistant.
    pub fn submit_query(&mut self, query: &str) -> Result<String, InboxError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(InboxError::EmptySubmission);
        }
        self.history.push(CopilotEntry::new(MessageRole::User, query));
        self.latest_reply = None;
        self.notice = None;
        Ok(query.to_string())
    }

    pub fn quick_prompt(index: usize) -> Option<&'static str> {
        QUICK_PROMPTS.get(index).copied()
    }

    pub fn receive_answer(&mut self, text: impl Into<String>) -> &CopilotEntry {
        let entry = CopilotEntry::new(MessageRole::Ai, text);
        self.latest_reply = Some(entry.id);
        self.history.push(entry);
        &self.history[self.history.len() - 1]
    }

    /// Drop the unconsumed reply marker; history is kept
    pub fn clear_latest_reply(&mut self) {
        self.latest_reply = None;
    }

    /// Hand an AI reply to the chat composer
    pub fn add_to_composer(&mut self, entry_id: Uuid) -> bool {
        let Some(entry) = self
            .history
            .iter()
            .find(|e| e.id == entry_id && e.role == MessageRole::Ai)
        else {
            debug!("No copilot reply {} to hand off", entry_id);
            return false;
        };
        self.bridge.handoff(entry.text.clone());
        self.latest_reply = None;
        true
    }

    pub fn history(&self) -> &[CopilotEntry] {
        &self.history
    }

    pub fn latest_reply(&self) -> Option<&CopilotEntry> {
        let id = self.latest_reply?;
        self.history.iter().find(|e| e.id == id)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
