//! Composer command grammar
//!
//! Composer text is evaluated on every change. Text ending in a trigger token
//! is not literal input: the token is stripped and an assist command is issued.

use crate::types::{AssistCommand, SummaryScope};

/// Trigger tokens recognized at the end of the composer text
pub const TRIGGERS: &[(&str, Trigger)] = &[
    ("/suggest", Trigger::Suggest),
    ("/summarize", Trigger::Summarize),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Suggest,
    Summarize,
}

impl Trigger {
    pub fn command(&self) -> AssistCommand {
        match self {
            Self::Suggest => AssistCommand::Suggest,
            Self::Summarize => AssistCommand::summarize(SummaryScope::Global),
        }
    }
}

/// Result of evaluating composer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerInput {
    /// Plain text, kept as-is
    Text(String),
    /// A trigger fired; `remaining` is the text with the token stripped
    Command {
        remaining: String,
        command: AssistCommand,
    },
}

pub fn parse_composer_input(value: &str) -> ComposerInput {
    for (token, trigger) in TRIGGERS {
        if let Some(remaining) = value.strip_suffix(token) {
            return ComposerInput::Command {
                remaining: remaining.to_string(),
                command: trigger.command(),
            };
        }
    }
    ComposerInput::Text(value.to_string())
}
