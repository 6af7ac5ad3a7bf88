//! Single-slot text handoff from the copilot panel to the chat composer

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Shared handoff slot.
///
/// Clones share the same slot: the copilot panel keeps one handle and the chat
/// composer another. A write overwrites any value not yet drained
/// (last write wins); a drain returns the value exactly once.
#[derive(Debug, Clone, Default)]
pub struct ComposerBridge {
    slot: Arc<Mutex<Option<String>>>,
}

impl ComposerBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value unconditionally
    pub fn handoff(&self, text: impl Into<String>) {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            debug!("Overwriting undrained composer handoff");
        }
        *slot = Some(text.into());
    }

    /// Take the pending value, leaving the slot empty
    pub fn drain(&self) -> Option<String> {
        self.slot.lock().take()
    }

    /// Drop any pending value without delivering it
    pub fn clear(&self) {
        self.slot.lock().take();
    }

    pub fn is_pending(&self) -> bool {
        self.slot.lock().is_some()
    }
}
