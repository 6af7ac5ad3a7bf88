//! Serializable view models
//!
//! A [`ViewSnapshot`] holds everything a renderer needs for one frame.

use crate::controller::LayoutController;
use crate::state::{CopilotEntry, LayoutState, QUICK_PROMPTS};
use crate::theme::ThemeMode;
use copilot_inbox_core::{ConversationSummary, InboxFilter, Message};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub layout: LayoutState,
    pub theme: ThemeMode,
    pub list: ListView,
    /// `None` renders the "select a conversation" placeholder
    pub chat: Option<ChatView>,
    pub copilot: CopilotView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub filter: InboxFilter,
    pub search: String,
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub conversation: ConversationSummary,
    pub messages: Vec<Message>,
    pub composer: String,
    pub draft_notice: Option<String>,
    pub typing: bool,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopilotView {
    pub history: Vec<CopilotEntry>,
    pub latest_reply: Option<Uuid>,
    pub typing: bool,
    pub notice: Option<String>,
    /// Offered only before the first query
    pub quick_prompts: Vec<&'static str>,
}

impl ViewSnapshot {
    pub fn capture(controller: &LayoutController) -> Self {
        let layout = controller.layout().clone();
        let list_panel = controller.list_panel();
        let list = ListView {
            filter: list_panel.filter,
            search: list_panel.search.clone(),
            conversations: controller
                .visible_conversations()
                .into_iter()
                .cloned()
                .collect(),
        };

        let chat_state = controller.chat();
        let chat = controller
            .selected_conversation()
            .map(|conversation| ChatView {
                conversation: conversation.clone(),
                messages: chat_state.thread().snapshot().to_vec(),
                composer: chat_state.composer().to_string(),
                draft_notice: chat_state.draft_notice().map(str::to_string),
                typing: controller.chat_typing(),
                notice: chat_state.notice().map(str::to_string),
            });

        let copilot_state = controller.copilot();
        let typing = controller.copilot_typing();
        let copilot = CopilotView {
            history: copilot_state.history().to_vec(),
            latest_reply: copilot_state.latest_reply().map(|entry| entry.id),
            typing,
            notice: copilot_state.notice().map(str::to_string),
            quick_prompts: if copilot_state.history().is_empty() && !typing {
                QUICK_PROMPTS.to_vec()
            } else {
                Vec::new()
            },
        };

        Self {
            theme: layout.theme(),
            layout,
            list,
            chat,
            copilot,
        }
    }
}
