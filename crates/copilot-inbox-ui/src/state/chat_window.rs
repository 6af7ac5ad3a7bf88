//! Chat window state: active thread, composer and notices

use copilot_inbox_core::{
    parse_composer_input, AssistCommand, ComposerBridge, ComposerInput, ConversationId,
    InboxError, Message, MessageId, MessageThread, NewMessage, Suggestion, SummaryDraft,
};
use tracing::debug;

/// State behind the chat window.
///
/// The composer text lives here rather than in the thread. Text handed off by
/// the copilot panel arrives through the shared [`ComposerBridge`].
#[derive(Debug, Default)]
pub struct ChatWindowState {
    thread: MessageThread,
    composer: String,
    draft_notice: Option<String>,
    notice: Option<String>,
    bridge: ComposerBridge,
}

impl ChatWindowState {
    pub fn new(bridge: ComposerBridge) -> Self {
        Self {
            bridge,
            ..Self::default()
        }
    }

    /// Show `conversation_id`, seeding its thread and clearing the composer
    pub fn open(&mut self, conversation_id: ConversationId, seed: Vec<NewMessage>) {
        self.thread.reset(conversation_id, seed);
        self.reset_composer();
    }

    pub fn close(&mut self) {
        self.thread.clear();
        self.reset_composer();
    }

    fn reset_composer(&mut self) {
        self.composer.clear();
        self.draft_notice = None;
        self.notice = None;
    }

    pub fn active_conversation(&self) -> Option<ConversationId> {
        self.thread.conversation_id()
    }

    pub fn thread(&self) -> &MessageThread {
        &self.thread
    }

    /// Look up a message of the open thread
    pub fn message(&self, id: MessageId) -> Result<&Message, InboxError> {
        self.thread.get(id).ok_or(InboxError::MessageNotFound(id))
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn draft_notice(&self) -> Option<&str> {
        self.draft_notice.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Evaluate a composer change. Returns the assist command when the text
    /// ended in a trigger token; the token itself never reaches the composer.
    pub fn input_changed(&mut self, value: &str) -> Option<AssistCommand> {
        match parse_composer_input(value) {
            ComposerInput::Text(text) => {
                self.composer = text;
                None
            }
            ComposerInput::Command { remaining, command } => {
                debug!("Composer trigger fired: {:?}", command);
                self.composer = remaining;
                Some(command)
            }
        }
    }

    /// Append the composer text as an agent message
    pub fn send(&mut self) -> Result<&Message, InboxError> {
        if self.thread.conversation_id().is_none() {
            return Err(InboxError::NoActiveConversation);
        }
        if self.composer.trim().is_empty() {
            return Err(InboxError::EmptySubmission);
        }
        let body = std::mem::take(&mut self.composer);
        self.draft_notice = None;
        Ok(self.thread.append(NewMessage::agent(body)))
    }

    /// A new suggestion was requested; the previous draft notice no longer applies
    pub fn begin_suggestion(&mut self) {
        self.draft_notice = None;
    }

    pub fn apply_suggestion(&mut self, suggestion: Suggestion) {
        self.draft_notice = Some(suggestion.notice());
        self.composer = suggestion.text;
    }

    pub fn append_summary(&mut self, draft: SummaryDraft) -> &Message {
        self.thread
            .append(NewMessage::summary_note(draft.label, draft.summary))
    }

    /// Move a pending copilot handoff into the composer
    pub fn sync_handoff(&mut self) -> bool {
        match self.bridge.drain() {
            Some(text) => {
                debug!("Composer received {} chars from copilot", text.len());
                self.composer = text;
                true
            }
            None => false,
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
