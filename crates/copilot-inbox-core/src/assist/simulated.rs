//! Deterministic, fixed-latency assist backend

use super::AssistBackend;
use crate::error::BackendError;
use crate::types::{
    AssistCommand, AssistOutput, AssistRequest, InboxSettings, Suggestion, SuggestionStyle,
    SummaryDraft,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const BASE_SUGGESTION: &str = "To resolve this quickly, we can offer a full refund or send a \
                                   replacement. Which would you prefer?";

pub const SPANISH_SUGGESTION: &str = "Para resolver esto rápidamente, podemos ofrecer un \
                                      reembolso completo o enviar un reemplazo. ¿Cuál preferiría \
                                      usted?";

pub const CANNED_SUMMARY: &str = "User Elena Rodriguez (Order #12345XYZ) reported a damaged \
                                  product. Agent is assisting with refund/replacement options. \
                                  User will provide a photo.";

/// Rewrite `base` according to `style`. Each style is one fixed transformation.
pub fn apply_style(style: SuggestionStyle, base: &str) -> String {
    match style {
        SuggestionStyle::MyToneOfVoice => base.to_string(),
        SuggestionStyle::Friendlier => {
            format!("Hey there! 😊 So sorry about that! {} Hope that works for you!", base)
        }
        SuggestionStyle::MoreFormal => format!(
            "We understand your concern. {} Please let us know your preference.",
            base
        ),
        SuggestionStyle::FixGrammar => format!("{} (Checked for grammar)", base),
        SuggestionStyle::TranslateToSpanish => SPANISH_SUGGESTION.to_string(),
    }
}

/// Canned copilot reply for a query
pub fn copilot_answer(query: &str) -> String {
    format!(
        "This is a highly accurate AI response regarding \"{}\". It provides detailed insights \
         and actionable steps. For instance, if you asked about improving customer \
         satisfaction, the AI might suggest personalizing communication, proactively \
         addressing issues, and gathering feedback regularly. It could also offer templates \
         for polite and effective responses.",
        query
    )
}

/// Simulated latency per command kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub suggest: Duration,
    pub summarize: Duration,
    pub answer: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from(&InboxSettings::default())
    }
}

impl From<&InboxSettings> for SimulatedLatency {
    fn from(settings: &InboxSettings) -> Self {
        Self {
            suggest: Duration::from_millis(settings.suggest_latency_ms),
            summarize: Duration::from_millis(settings.summarize_latency_ms),
            answer: Duration::from_millis(settings.copilot_latency_ms),
        }
    }
}

impl SimulatedLatency {
    fn for_command(&self, command: &AssistCommand) -> Duration {
        match command {
            AssistCommand::Suggest | AssistCommand::SuggestWithStyle { .. } => self.suggest,
            AssistCommand::Summarize { .. } => self.summarize,
            AssistCommand::Ask { .. } => self.answer,
        }
    }
}

/// Stand-in backend: sleeps, then returns fixed content. Never fails.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    latency: SimulatedLatency,
}

impl SimulatedBackend {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }

    fn respond(command: AssistCommand) -> AssistOutput {
        match command {
            AssistCommand::Suggest => AssistOutput::Suggestion(Suggestion {
                text: BASE_SUGGESTION.to_string(),
                applied_style: None,
            }),
            AssistCommand::SuggestWithStyle { style } => AssistOutput::Suggestion(Suggestion {
                text: apply_style(style, BASE_SUGGESTION),
                applied_style: Some(style),
            }),
            AssistCommand::Summarize { scope } => AssistOutput::Summary(SummaryDraft {
                scope,
                label: scope.label(),
                summary: CANNED_SUMMARY.to_string(),
            }),
            AssistCommand::Ask { query } => AssistOutput::Answer {
                text: copilot_answer(&query),
            },
        }
    }
}

#[async_trait]
impl AssistBackend for SimulatedBackend {
    async fn run(&self, request: AssistRequest) -> Result<AssistOutput, BackendError> {
        let delay = self.latency.for_command(&request.command);
        debug!(
            "Simulating {:?} for {} ({} ms)",
            request.command,
            request.target,
            delay.as_millis()
        );
        tokio::time::sleep(delay).await;
        Ok(Self::respond(request.command))
    }
}
