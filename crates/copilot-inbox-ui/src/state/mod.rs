//! Application state management
//!
//! Panel state for the inbox UI. Every panel is owned by the
//! [`LayoutController`](crate::controller::LayoutController); panels never
//! change each other directly.

mod chat_window;
mod copilot_panel;
mod layout_state;
mod list_panel;

pub use chat_window::*;
pub use copilot_panel::*;
pub use layout_state::*;
pub use list_panel::*;
