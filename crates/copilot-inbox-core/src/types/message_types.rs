//! Thread message types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a message, unique and increasing within its thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// The customer
    User,
    /// The support agent operating the inbox
    Agent,
    /// Assistant-generated text
    Ai,
    /// Assistant-generated conversation summary
    SummaryNote,
}

/// A message in a thread. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub body: String,
    pub role: MessageRole,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A message that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub body: String,
    pub role: MessageRole,
    pub timestamp: String,
    pub summary: Option<String>,
}

impl NewMessage {
    pub fn new(role: MessageRole, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            role,
            timestamp: super::display_now(),
            summary: None,
        }
    }

    pub fn user(body: impl Into<String>) -> Self {
        Self::new(MessageRole::User, body)
    }

    pub fn agent(body: impl Into<String>) -> Self {
        Self::new(MessageRole::Agent, body)
    }

    /// Summary note: `label` is the visible body, `summary` the payload
    pub fn summary_note(label: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::new(MessageRole::SummaryNote, label)
        }
    }

    pub fn at(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub(crate) fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            body: self.body,
            role: self.role,
            timestamp: self.timestamp,
            summary: self.summary,
        }
    }
}
