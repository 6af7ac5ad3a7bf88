//! Top-level layout controller
//!
//! Owns the selection, panel visibility, dark mode and every panel's state.
//! Panels request transitions by sending [`UiEvent`]s; assist results come
//! back as completions and are applied through [`LayoutController::apply_completion`].

use crate::state::{Breakpoints, ChatWindowState, CopilotPanelState, LayoutState, ListPanelState};
use crate::views::ViewSnapshot;
use copilot_inbox_core::{
    AssistBackend, AssistCommand, AssistCompletion, AssistEngine, AssistError, AssistOutput,
    AssistTarget, ComposerBridge, CompletionSender, ConversationId, ConversationStore,
    ConversationSummary, InboxFilter, InboxSettings, PreferenceStore, SeedSource,
    SimulatedBackend, SimulatedLatency, SuggestionStyle, SummaryScope,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Panels that can show a dismissible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chat,
    Copilot,
}

/// Everything the user can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectConversation(ConversationId),
    Resize(u32),
    ToggleConversationList,
    ToggleCopilotPanel,
    ToggleDarkMode,
    SetFilter(InboxFilter),
    SetSearch(String),
    ComposerChanged(String),
    SendMessage,
    RequestSuggestion(Option<SuggestionStyle>),
    RequestSummary(SummaryScope),
    CopilotSubmit(String),
    CopilotQuickPrompt(usize),
    AddToComposer(Uuid),
    DismissNotice(Panel),
}

/// Collaborators injected into the controller
pub struct ControllerDeps {
    pub settings: InboxSettings,
    pub seeds: Arc<dyn SeedSource>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub chat_backend: Arc<dyn AssistBackend>,
    pub copilot_backend: Arc<dyn AssistBackend>,
}

impl ControllerDeps {
    /// Fixture seeds and simulated assistants with latencies from `settings`
    pub fn simulated(settings: InboxSettings, preferences: Arc<dyn PreferenceStore>) -> Self {
        let latency = SimulatedLatency::from(&settings);
        Self {
            settings,
            seeds: Arc::new(copilot_inbox_core::FixtureSeeds),
            preferences,
            chat_backend: Arc::new(SimulatedBackend::new(latency)),
            copilot_backend: Arc::new(SimulatedBackend::new(latency)),
        }
    }
}

pub struct LayoutController {
    store: ConversationStore,
    seeds: Arc<dyn SeedSource>,
    preferences: Arc<dyn PreferenceStore>,
    breakpoints: Breakpoints,
    bridge: ComposerBridge,
    chat_assist: AssistEngine,
    copilot_assist: AssistEngine,
    layout: LayoutState,
    list: ListPanelState,
    chat: ChatWindowState,
    copilot: CopilotPanelState,
}

impl LayoutController {
    /// Build the controller for a viewport. The persisted dark-mode flag seeds
    /// the theme; a failed read falls back to light mode.
    pub fn load(deps: ControllerDeps, viewport_width: u32, completion_tx: CompletionSender) -> Self {
        let ControllerDeps {
            settings,
            seeds,
            preferences,
            chat_backend,
            copilot_backend,
        } = deps;

        let dark_mode = match preferences.load_dark_mode() {
            Ok(stored) => stored.unwrap_or(false),
            Err(e) => {
                warn!("Failed to load dark mode preference, using default: {}", e);
                false
            }
        };

        let breakpoints = Breakpoints::from(&settings);
        let bridge = ComposerBridge::new();
        let deadline = settings.request_deadline();

        let controller = Self {
            store: ConversationStore::from_seed(seeds.as_ref()),
            seeds,
            preferences,
            breakpoints,
            chat_assist: AssistEngine::new("chat", chat_backend, deadline, completion_tx.clone()),
            copilot_assist: AssistEngine::new("copilot", copilot_backend, deadline, completion_tx),
            layout: LayoutState::on_load(viewport_width, breakpoints, dark_mode),
            list: ListPanelState::default(),
            chat: ChatWindowState::new(bridge.clone()),
            copilot: CopilotPanelState::new(bridge.clone()),
            bridge,
        };

        info!(
            "Layout controller loaded: {} conversations, viewport {}, dark mode {}",
            controller.store.len(),
            viewport_width,
            dark_mode
        );
        controller
    }

    /// Apply a user event. Events take effect synchronously.
    pub fn handle(&mut self, event: UiEvent) {
        debug!("Handling {:?}", event);
        match event {
            UiEvent::SelectConversation(id) => self.select_conversation(id),
            UiEvent::Resize(width) => self.layout.resize(width, self.breakpoints),
            UiEvent::ToggleConversationList => {
                self.layout.toggle_list();
            }
            UiEvent::ToggleCopilotPanel => {
                self.layout.toggle_copilot();
            }
            UiEvent::ToggleDarkMode => self.toggle_dark_mode(),
            UiEvent::SetFilter(filter) => self.list.set_filter(filter),
            UiEvent::SetSearch(term) => self.list.set_search(term),
            UiEvent::ComposerChanged(text) => {
                if let Some(command) = self.chat.input_changed(&text) {
                    self.request_chat_assist(command);
                }
            }
            UiEvent::SendMessage => {
                if let Err(e) = self.chat.send() {
                    debug!("Send ignored: {}", e);
                }
            }
            UiEvent::RequestSuggestion(style) => {
                self.request_chat_assist(AssistCommand::suggest(style))
            }
            UiEvent::RequestSummary(scope) => {
                self.request_chat_assist(AssistCommand::summarize(scope))
            }
            UiEvent::CopilotSubmit(query) => self.ask_copilot(&query),
            UiEvent::CopilotQuickPrompt(index) => match CopilotPanelState::quick_prompt(index) {
                Some(prompt) => self.ask_copilot(prompt),
                None => debug!("No quick prompt at index {}", index),
            },
            UiEvent::AddToComposer(entry_id) => {
                self.copilot.add_to_composer(entry_id);
            }
            UiEvent::DismissNotice(Panel::Chat) => self.chat.dismiss_notice(),
            UiEvent::DismissNotice(Panel::Copilot) => self.copilot.dismiss_notice(),
        }
        self.chat.sync_handoff();
    }

    fn select_conversation(&mut self, id: ConversationId) {
        let previous = self.layout.selected;

        match self.store.get(id) {
            Ok(_) => {
                if previous != Some(id) {
                    if let Some(previous) = previous {
                        self.chat_assist.cancel(&AssistTarget::Thread(previous));
                    }
                    self.chat.open(id, self.seeds.transcript(id));
                }
                self.layout.select(id, self.breakpoints);
            }
            Err(e) => {
                debug!("Clearing selection: {}", e);
                if let Some(previous) = previous {
                    self.chat_assist.cancel(&AssistTarget::Thread(previous));
                }
                self.chat.close();
                self.layout.clear_selection();
            }
        }

        self.copilot.clear_latest_reply();
        self.bridge.clear();
    }

    fn toggle_dark_mode(&mut self) {
        let enabled = self.layout.toggle_dark_mode();
        if let Err(e) = self.preferences.save_dark_mode(enabled) {
            warn!("Failed to persist dark mode preference: {}", e);
        }
        info!("Dark mode {}", if enabled { "enabled" } else { "disabled" });
    }

    fn request_chat_assist(&mut self, command: AssistCommand) {
        let Some(conversation_id) = self.chat.active_conversation() else {
            debug!("Ignoring {:?}: no conversation is open", command);
            return;
        };

        match &command {
            AssistCommand::Summarize {
                scope: SummaryScope::UpToMessage(message_id),
            } => {
                if let Err(e) = self.chat.message(*message_id) {
                    debug!("Ignoring summary: {}", e);
                    return;
                }
            }
            AssistCommand::Suggest | AssistCommand::SuggestWithStyle { .. } => {
                self.chat.begin_suggestion();
            }
            _ => {}
        }

        self.chat.dismiss_notice();
        let context = self.chat.thread().snapshot().to_vec();
        self.chat_assist
            .submit(AssistTarget::Thread(conversation_id), command, context);
    }

    fn ask_copilot(&mut self, query: &str) {
        match self.copilot.submit_query(query) {
            Ok(query) => {
                self.copilot_assist
                    .submit(AssistTarget::Copilot, AssistCommand::ask(query), Vec::new());
            }
            Err(e) => debug!("Copilot query ignored: {}", e),
        }
    }

    /// Apply a finished assist request. Superseded results are dropped.
    pub fn apply_completion(&mut self, completion: AssistCompletion) {
        match completion.target {
            AssistTarget::Thread(conversation_id) => match self.chat_assist.accept(completion) {
                Ok(output) => self.deliver_to_thread(conversation_id, output),
                Err(AssistError::Stale { .. }) => {}
                Err(AssistError::Backend(e)) => {
                    if self.chat.active_conversation() == Some(conversation_id) {
                        self.chat.set_notice(e.to_string());
                    }
                }
            },
            AssistTarget::Copilot => match self.copilot_assist.accept(completion) {
                Ok(AssistOutput::Answer { text }) => {
                    self.copilot.receive_answer(text);
                }
                Ok(other) => debug!("Unexpected copilot output: {:?}", other),
                Err(AssistError::Stale { .. }) => {}
                Err(AssistError::Backend(e)) => self.copilot.set_notice(e.to_string()),
            },
        }
        self.chat.sync_handoff();
    }

    fn deliver_to_thread(&mut self, conversation_id: ConversationId, output: AssistOutput) {
        if self.chat.active_conversation() != Some(conversation_id) {
            debug!("Dropping result for inactive conversation {}", conversation_id);
            return;
        }
        match output {
            AssistOutput::Suggestion(suggestion) => self.chat.apply_suggestion(suggestion),
            AssistOutput::Summary(draft) => {
                let note = self.chat.append_summary(draft);
                debug!("Appended summary note {}", note.id);
            }
            AssistOutput::Answer { .. } => debug!("Unexpected answer for a thread request"),
        }
    }

    /// Cancel outstanding work. Completions arriving afterwards are stale.
    pub fn shutdown(&mut self) {
        self.chat_assist.cancel_all();
        self.copilot_assist.cancel_all();
        self.bridge.clear();
        info!("Layout controller shut down");
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(self)
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn list_panel(&self) -> &ListPanelState {
        &self.list
    }

    pub fn chat(&self) -> &ChatWindowState {
        &self.chat
    }

    pub fn copilot(&self) -> &CopilotPanelState {
        &self.copilot
    }

    pub fn visible_conversations(&self) -> Vec<&ConversationSummary> {
        self.list.visible(&self.store)
    }

    pub fn selected_conversation(&self) -> Option<&ConversationSummary> {
        self.layout
            .selected
            .and_then(|id| self.store.get(id).ok())
    }

    /// A chat request is in flight for the open conversation
    pub fn chat_typing(&self) -> bool {
        self.chat
            .active_conversation()
            .is_some_and(|id| self.chat_assist.is_pending(&AssistTarget::Thread(id)))
    }

    pub fn copilot_typing(&self) -> bool {
        self.copilot_assist.is_pending(&AssistTarget::Copilot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use async_trait::async_trait;
    use copilot_inbox_core::{
        completion_channel, AssistRequest, AssistTicket, BackendError, CompletionReceiver,
        MessageId, MessageRole, SqlitePreferences, Storage,
    };
    use copilot_inbox_core::assist::{BASE_SUGGESTION, CANNED_SUMMARY};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    /// In-memory preferences that can be told to fail
    #[derive(Default)]
    struct MemoryPreferences {
        value: Mutex<Option<bool>>,
        broken: bool,
    }

    impl PreferenceStore for MemoryPreferences {
        fn load_dark_mode(&self) -> copilot_inbox_core::Result<Option<bool>> {
            if self.broken {
                return Err(copilot_inbox_core::Error::Internal("disk gone".to_string()));
            }
            Ok(*self.value.lock())
        }

        fn save_dark_mode(&self, enabled: bool) -> copilot_inbox_core::Result<()> {
            if self.broken {
                return Err(copilot_inbox_core::Error::Internal("disk gone".to_string()));
            }
            *self.value.lock() = Some(enabled);
            Ok(())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl AssistBackend for FailingBackend {
        async fn run(&self, _request: AssistRequest) -> Result<AssistOutput, BackendError> {
            Err(BackendError::Quota("daily limit reached".to_string()))
        }
    }

    fn load_with(
        preferences: Arc<dyn PreferenceStore>,
        width: u32,
    ) -> (LayoutController, CompletionReceiver) {
        let (tx, rx) = completion_channel();
        let deps = ControllerDeps::simulated(InboxSettings::default(), preferences);
        (LayoutController::load(deps, width, tx), rx)
    }

    fn load(width: u32) -> (LayoutController, CompletionReceiver) {
        load_with(Arc::new(MemoryPreferences::default()), width)
    }

    async fn settle(controller: &mut LayoutController, rx: &mut CompletionReceiver) {
        let completion = rx.recv().await.unwrap();
        controller.apply_completion(completion);
    }

    #[tokio::test]
    async fn test_resize_hides_panels_regardless_of_toggles() {
        let (mut controller, _rx) = load(1200);
        assert!(controller.layout().list_visible);
        assert!(controller.layout().copilot_visible);

        controller.handle(UiEvent::ToggleCopilotPanel);
        controller.handle(UiEvent::ToggleCopilotPanel);
        controller.handle(UiEvent::Resize(500));

        assert!(!controller.layout().list_visible);
        assert!(!controller.layout().copilot_visible);
    }

    #[tokio::test]
    async fn test_dark_mode_survives_reload() {
        let dir = tempdir().unwrap();
        {
            let storage = Arc::new(Storage::new_with_path(dir.path()).unwrap());
            let (mut controller, _rx) = load_with(Arc::new(SqlitePreferences::new(storage)), 1200);
            assert!(!controller.layout().dark_mode);
            controller.handle(UiEvent::ToggleDarkMode);
            assert!(controller.layout().dark_mode);
        }

        let storage = Arc::new(Storage::new_with_path(dir.path()).unwrap());
        let conn = storage.connection().unwrap();
        assert_eq!(
            copilot_inbox_core::storage::get_setting(&conn, "darkMode").unwrap(),
            Some("enabled".to_string())
        );
        drop(conn);

        let (controller, _rx) = load_with(Arc::new(SqlitePreferences::new(storage)), 1200);
        assert!(controller.layout().dark_mode);
        assert_eq!(controller.layout().theme(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_preference_failure_falls_back() {
        let prefs = Arc::new(MemoryPreferences {
            broken: true,
            ..MemoryPreferences::default()
        });
        let (mut controller, _rx) = load_with(prefs, 1200);
        assert!(!controller.layout().dark_mode);

        controller.handle(UiEvent::ToggleDarkMode);
        assert!(controller.layout().dark_mode);
    }

    #[tokio::test(start_paused = true)]
    async fn test_summarize_up_to_message_appends_note() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        assert_eq!(controller.chat().thread().len(), 3);

        controller.handle(UiEvent::RequestSummary(SummaryScope::UpToMessage(
            MessageId::new(2),
        )));
        assert!(controller.chat_typing());
        settle(&mut controller, &mut rx).await;

        let messages = controller.chat().thread().snapshot();
        assert_eq!(messages.len(), 4);
        let note = &messages[3];
        assert_eq!(note.role, MessageRole::SummaryNote);
        assert_eq!(note.body, "Conversation summarized up to message ID 2.");
        assert_eq!(note.summary.as_deref(), Some(CANNED_SUMMARY));
        assert!(!controller.chat_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_summary_of_unknown_message_is_ignored() {
        let (mut controller, _rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        controller.handle(UiEvent::RequestSummary(SummaryScope::UpToMessage(
            MessageId::new(42),
        )));
        assert!(!controller.chat_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_suggest_trigger_fills_composer() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));

        controller.handle(UiEvent::ComposerChanged("/suggest".to_string()));
        assert_eq!(controller.chat().composer(), "");
        assert!(controller.chat_typing());

        settle(&mut controller, &mut rx).await;
        assert_eq!(controller.chat().composer(), BASE_SUGGESTION);
        assert_eq!(controller.chat().draft_notice(), Some(BASE_SUGGESTION));

        controller.handle(UiEvent::SendMessage);
        let last = controller.chat().thread().snapshot().last().unwrap();
        assert_eq!(last.role, MessageRole::Agent);
        assert_eq!(last.body, BASE_SUGGESTION);
        assert_eq!(controller.chat().draft_notice(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_summarize_trigger_appends_global_note() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));

        controller.handle(UiEvent::ComposerChanged("Recap please /summarize".to_string()));
        assert_eq!(controller.chat().composer(), "Recap please ");
        assert!(controller.chat_typing());

        settle(&mut controller, &mut rx).await;
        let messages = controller.chat().thread().snapshot();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[3].role, MessageRole::SummaryNote);
        assert_eq!(messages[3].body, "Conversation summarized globally.");
        assert_eq!(messages[3].summary.as_deref(), Some(CANNED_SUMMARY));
        assert_eq!(controller.chat().composer(), "Recap please ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_suggestion_wins() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));

        controller.handle(UiEvent::RequestSuggestion(Some(SuggestionStyle::Friendlier)));
        controller.handle(UiEvent::RequestSuggestion(Some(SuggestionStyle::FixGrammar)));
        settle(&mut controller, &mut rx).await;

        assert_eq!(
            controller.chat().composer(),
            format!("{} (Checked for grammar)", BASE_SUGGESTION)
        );
        assert_eq!(
            controller.chat().draft_notice(),
            Some("Applied: Fix Grammar & Spelling")
        );
        assert!(!controller.chat_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_conversation_drops_pending_result() {
        let (mut controller, _rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        controller.handle(UiEvent::RequestSuggestion(None));
        controller.handle(UiEvent::SelectConversation(ConversationId::new(2)));
        assert!(!controller.chat_typing());

        // A result for the old thread that was already queued.
        controller.apply_completion(AssistCompletion {
            ticket: AssistTicket(1),
            target: AssistTarget::Thread(ConversationId::new(1)),
            outcome: Ok(AssistOutput::Answer {
                text: "late".to_string(),
            }),
        });
        assert_eq!(controller.chat().composer(), "");
        assert_eq!(controller.chat().active_conversation(), Some(ConversationId::new(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copilot_reply_reaches_composer() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));

        controller.handle(UiEvent::CopilotSubmit("refund policy".to_string()));
        assert!(controller.copilot_typing());
        settle(&mut controller, &mut rx).await;

        let reply = controller.copilot().latest_reply().unwrap().clone();
        assert_eq!(reply.role, MessageRole::Ai);
        controller.handle(UiEvent::AddToComposer(reply.id));

        assert_eq!(controller.chat().composer(), reply.text);
        assert!(controller.copilot().latest_reply().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copilot_query_survives_selection() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::CopilotSubmit("refund policy".to_string()));
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        assert!(controller.copilot_typing());

        settle(&mut controller, &mut rx).await;
        let roles: Vec<MessageRole> = controller
            .copilot()
            .history()
            .iter()
            .map(|entry| entry.role)
            .collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Ai]);
        assert!(!controller.copilot_typing());
        assert!(controller.copilot().latest_reply().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_clears_copilot_reply_and_handoff() {
        let (mut controller, mut rx) = load(1200);
        controller.handle(UiEvent::CopilotQuickPrompt(0));
        settle(&mut controller, &mut rx).await;
        assert!(controller.copilot().latest_reply().is_some());

        controller.handle(UiEvent::SelectConversation(ConversationId::new(3)));
        assert!(controller.copilot().latest_reply().is_none());
        assert_eq!(controller.copilot().history().len(), 2);
        assert_eq!(controller.chat().composer(), "");
    }

    #[tokio::test]
    async fn test_unknown_selection_clears_thread() {
        let (mut controller, _rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        controller.handle(UiEvent::SelectConversation(ConversationId::new(99)));

        assert_eq!(controller.layout().selected, None);
        assert!(controller.chat().thread().is_empty());
        assert!(controller.selected_conversation().is_none());
    }

    #[tokio::test]
    async fn test_drill_in_on_narrow_viewport() {
        let (mut controller, _rx) = load(600);
        controller.handle(UiEvent::ToggleConversationList);
        assert!(controller.layout().list_visible);

        controller.handle(UiEvent::SelectConversation(ConversationId::new(2)));
        assert!(!controller.layout().list_visible);
        assert_eq!(
            controller.selected_conversation().map(|c| c.name.as_str()),
            Some("Marcus Chen")
        );
    }

    #[tokio::test]
    async fn test_reselect_keeps_thread() {
        let (mut controller, _rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        controller.handle(UiEvent::ComposerChanged("draft".to_string()));
        controller.handle(UiEvent::SendMessage);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        assert_eq!(controller.chat().thread().len(), 4);
    }

    #[tokio::test]
    async fn test_request_without_conversation_is_ignored() {
        let (mut controller, _rx) = load(1200);
        controller.handle(UiEvent::RequestSuggestion(None));
        controller.handle(UiEvent::SendMessage);
        assert!(!controller.chat_typing());
        assert!(controller.chat().thread().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_shows_dismissible_notice() {
        let (tx, mut rx) = completion_channel();
        let deps = ControllerDeps {
            chat_backend: Arc::new(FailingBackend),
            copilot_backend: Arc::new(FailingBackend),
            ..ControllerDeps::simulated(
                InboxSettings::default(),
                Arc::new(MemoryPreferences::default()),
            )
        };
        let mut controller = LayoutController::load(deps, 1200, tx);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));

        controller.handle(UiEvent::RequestSuggestion(None));
        settle(&mut controller, &mut rx).await;
        assert_eq!(
            controller.chat().notice(),
            Some("Assist quota exceeded: daily limit reached")
        );
        assert_eq!(controller.chat().thread().len(), 3);
        assert!(!controller.chat_typing());

        controller.handle(UiEvent::DismissNotice(Panel::Chat));
        assert_eq!(controller.chat().notice(), None);

        controller.handle(UiEvent::CopilotSubmit("hello".to_string()));
        settle(&mut controller, &mut rx).await;
        assert!(controller.copilot().notice().is_some());
        assert!(!controller.copilot_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_discards_pending_work() {
        let (mut controller, _rx) = load(1200);
        controller.handle(UiEvent::SelectConversation(ConversationId::new(1)));
        controller.handle(UiEvent::RequestSuggestion(None));
        controller.handle(UiEvent::CopilotSubmit("hi".to_string()));

        controller.shutdown();
        assert!(!controller.chat_typing());
        assert!(!controller.copilot_typing());
    }
}
