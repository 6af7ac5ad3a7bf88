//! Error types for Copilot Inbox Core

use crate::types::{AssistTarget, AssistTicket, ConversationId, MessageId};
use thiserror::Error;

/// Main error type for Copilot Inbox operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Inbox error: {0}")]
    Inbox(#[from] InboxError),

    #[error("Assist error: {0}")]
    Assist(#[from] AssistError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Conversation list and thread errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InboxError {
    #[error("Composer is empty")]
    EmptySubmission,

    #[error("No conversation is open")]
    NoActiveConversation,

    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),
}

/// Errors produced while resolving an assist request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("Result for {target} (ticket {ticket}) was superseded")]
    Stale {
        target: AssistTarget,
        ticket: AssistTicket,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failures reported by an assist backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Assist request timed out")]
    Timeout,

    #[error("Cannot reach assist service: {0}")]
    Network(String),

    #[error("Assist quota exceeded: {0}")]
    Quota(String),

    #[error("Assist service unavailable: {0}")]
    Unavailable(String),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Invalid preference value for {key}: {value}")]
    InvalidPreference { key: String, value: String },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Storage(StorageError::Pool(err.to_string()))
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
