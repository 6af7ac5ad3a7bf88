//! Assist request and result types

use super::{ConversationId, Message, MessageId};
use crate::error::BackendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rewrite applied on top of the base suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStyle {
    MyToneOfVoice,
    Friendlier,
    MoreFormal,
    FixGrammar,
    TranslateToSpanish,
}

impl SuggestionStyle {
    pub const ALL: [SuggestionStyle; 5] = [
        Self::MyToneOfVoice,
        Self::Friendlier,
        Self::MoreFormal,
        Self::FixGrammar,
        Self::TranslateToSpanish,
    ];

    /// Label shown in the personalize menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::MyToneOfVoice => "My Tone of Voice",
            Self::Friendlier => "Make it More Friendly",
            Self::MoreFormal => "Make it More Formal",
            Self::FixGrammar => "Fix Grammar & Spelling",
            Self::TranslateToSpanish => "Translate to Spanish",
        }
    }

    /// Compact option key: the label lower-cased with spaces and " & " removed
    pub fn option_key(&self) -> &'static str {
        match self {
            Self::MyToneOfVoice => "mytoneofvoice",
            Self::Friendlier => "makeitmorefriendly",
            Self::MoreFormal => "makeitmoreformal",
            Self::FixGrammar => "fixgrammarspelling",
            Self::TranslateToSpanish => "translatetospanish",
        }
    }
}

impl fmt::Display for SuggestionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SuggestionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "tone" | "mytoneofvoice" => Ok(Self::MyToneOfVoice),
            "friendly" | "makeitmorefriendly" => Ok(Self::Friendlier),
            "formal" | "makeitmoreformal" => Ok(Self::MoreFormal),
            "grammar" | "fixgrammarspelling" => Ok(Self::FixGrammar),
            "spanish" | "translatetospanish" => Ok(Self::TranslateToSpanish),
            _ => Err(format!("unknown suggestion style: {}", s)),
        }
    }
}

/// What part of the thread a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryScope {
    Global,
    UpToMessage(MessageId),
}

impl SummaryScope {
    /// Visible body of the summary note
    pub fn label(&self) -> String {
        match self {
            Self::Global => "Conversation summarized globally.".to_string(),
            Self::UpToMessage(id) => format!("Conversation summarized up to message ID {}.", id),
        }
    }
}

/// Triggering command of an assist request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssistCommand {
    Suggest,
    SuggestWithStyle { style: SuggestionStyle },
    Summarize { scope: SummaryScope },
    /// Free-form copilot question
    Ask { query: String },
}

impl AssistCommand {
    pub fn suggest(style: Option<SuggestionStyle>) -> Self {
        match style {
            Some(style) => Self::SuggestWithStyle { style },
            None => Self::Suggest,
        }
    }

    pub fn summarize(scope: SummaryScope) -> Self {
        Self::Summarize { scope }
    }

    pub fn ask(query: impl Into<String>) -> Self {
        Self::Ask {
            query: query.into(),
        }
    }
}

/// Which single-flight lane a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistTarget {
    Thread(ConversationId),
    Copilot,
}

impl fmt::Display for AssistTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thread(id) => write!(f, "thread {}", id),
            Self::Copilot => f.write_str("copilot"),
        }
    }
}

/// Supersession token; a later ticket on the same target invalidates earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssistTicket(pub u64);

impl fmt::Display for AssistTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted assist request, as handed to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistRequest {
    pub ticket: AssistTicket,
    pub target: AssistTarget,
    pub command: AssistCommand,
    /// Snapshot of the thread at submission time
    pub context: Vec<Message>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Composer suggestion; `applied_style` is reported separately from the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    pub applied_style: Option<SuggestionStyle>,
}

impl Suggestion {
    /// Notice shown above the composer once the suggestion lands
    pub fn notice(&self) -> String {
        match self.applied_style {
            Some(style) => format!("Applied: {}", style.label()),
            None => self.text.clone(),
        }
    }
}

/// Summary ready to be appended as a summary note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDraft {
    pub scope: SummaryScope,
    pub label: String,
    pub summary: String,
}

/// Successful result of an assist request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssistOutput {
    Suggestion(Suggestion),
    Summary(SummaryDraft),
    Answer { text: String },
}

/// Completion posted by a finished (or failed) assist task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistCompletion {
    pub ticket: AssistTicket,
    pub target: AssistTarget,
    pub outcome: Result<AssistOutput, BackendError>,
}

/// Per-target engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistPhase {
    Idle,
    Pending(AssistTicket),
}
