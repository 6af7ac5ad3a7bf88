//! Copilot Inbox Core Library
//!
//! This crate provides the state logic behind the support inbox, including:
//! - Conversation list with search and category filters
//! - Per-conversation message threads and the composer command grammar
//! - Simulated, supersession-aware AI assist operations
//! - The composer handoff slot shared by the copilot panel and chat composer
//! - SQLite-based settings and preference persistence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   copilot-inbox-core                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  inbox/        - ConversationStore, seed fixtures           │
//! │  thread/       - MessageThread, composer triggers           │
//! │  assist/       - AssistEngine, backend trait, simulation    │
//! │  bridge.rs     - ComposerBridge handoff slot                │
//! │  storage/      - SQLite settings, dark-mode preference      │
//! │  types/        - Shared type definitions                    │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod assist;
pub mod bridge;
pub mod error;
pub mod inbox;
pub mod storage;
pub mod thread;
pub mod types;

// Re-export commonly used types
pub use error::{AssistError, BackendError, Error, InboxError, Result, StorageError};
pub use types::*;

pub use assist::{
    completion_channel, AssistBackend, AssistEngine, CompletionReceiver, CompletionSender,
    SimulatedBackend, SimulatedLatency,
};
pub use bridge::ComposerBridge;
pub use inbox::{ConversationStore, FixtureSeeds, SeedSource};
pub use storage::{PreferenceStore, SqlitePreferences, Storage};
pub use thread::{parse_composer_input, ComposerInput, MessageThread};
