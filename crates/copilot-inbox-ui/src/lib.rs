//! Copilot Inbox UI Library
//!
//! Panel state, the layout controller and a headless driver for the inbox.
//! Rendering is left to the host; it consumes [`views::ViewSnapshot`]s and
//! feeds back [`controller::UiEvent`]s.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ LayoutController (selection, breakpoints, dark mode)                │
//! ├───────────────┬─────────────────────────────────┬───────────────────┤
//! │ ListPanel     │  ChatWindow                     │ CopilotPanel      │
//! │ (>= 768)      │  (always)                       │ (>= 1024)         │
//! │               │                                 │                   │
//! │ filter        │  MessageThread                  │ history           │
//! │ search        │  composer ◄──── ComposerBridge ◄┼─ Add to Composer  │
//! │               │  /suggest /summarize            │ quick prompts     │
//! │               │        │                        │        │          │
//! └───────────────┴────────┼────────────────────────┴────────┼──────────┘
//!                          ▼                                 ▼
//!                  AssistEngine "chat"              AssistEngine "copilot"
//!                          └────────── completions ──────────┘
//!                                          │
//!                                   driver (select!)
//! ```

pub mod controller;
pub mod driver;
pub mod state;
pub mod theme;
pub mod views;

pub use controller::{ControllerDeps, LayoutController, Panel, UiEvent};
pub use theme::ThemeMode;
