//! Core type definitions for Copilot Inbox
//!
//! This module contains the shared data model: conversation summaries,
//! thread messages, assist requests/results, and inbox settings.

mod assist_types;
mod conversation_types;
mod message_types;

pub use assist_types::*;
pub use conversation_types::*;
pub use message_types::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Format a wall-clock time the way message bubbles display it (e.g. "09:15 AM")
pub fn display_time(at: chrono::DateTime<chrono::Local>) -> String {
    at.format("%I:%M %p").to_string()
}

/// Display time for "now"
pub fn display_now() -> String {
    display_time(chrono::Local::now())
}

/// Inbox settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InboxSettings {
    /// Viewport width at or above which the conversation list is shown
    pub list_breakpoint: u32,
    /// Viewport width at or above which the copilot panel is shown
    pub copilot_breakpoint: u32,
    pub suggest_latency_ms: u64,
    pub summarize_latency_ms: u64,
    pub copilot_latency_ms: u64,
    /// Upper bound for any single assist request
    pub request_deadline_ms: u64,
}

impl Default for InboxSettings {
    fn default() -> Self {
        Self {
            list_breakpoint: 768,
            copilot_breakpoint: 1024,
            suggest_latency_ms: 1500,
            summarize_latency_ms: 2000,
            copilot_latency_ms: 2000,
            request_deadline_ms: 10_000,
        }
    }
}

impl InboxSettings {
    pub fn request_deadline(&self) -> Duration {
        Duration::from_millis(self.request_deadline_ms)
    }
}
