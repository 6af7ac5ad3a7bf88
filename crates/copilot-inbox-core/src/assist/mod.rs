//! AI assist operations
//!
//! # Architecture
//!
//! - `AssistBackend` - produces results for assist requests (simulated or real)
//! - `AssistEngine` - single-flight, supersession-aware dispatcher over a backend
//! - `SimulatedBackend` - fixed-latency, deterministic stand-in
//!
//! Results travel back as `AssistCompletion`s on a channel and only take effect
//! through `AssistEngine::accept`, which drops anything superseded.

mod engine;
mod simulated;
pub mod traits;

pub use engine::{completion_channel, AssistEngine, CompletionReceiver, CompletionSender};
pub use simulated::{
    apply_style, copilot_answer, SimulatedBackend, SimulatedLatency, BASE_SUGGESTION,
    CANNED_SUMMARY, SPANISH_SUGGESTION,
};
pub use traits::AssistBackend;
