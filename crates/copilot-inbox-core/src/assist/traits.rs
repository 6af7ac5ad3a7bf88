//! Assist backend trait

use crate::error::BackendError;
use crate::types::{AssistOutput, AssistRequest};
use async_trait::async_trait;

/// Something that can answer assist requests.
///
/// Implementations may take arbitrarily long; the engine bounds every call with
/// a deadline and discards results that have been superseded in the meantime.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssistBackend: Send + Sync {
    /// Produce the result for a single request
    async fn run(&self, request: AssistRequest) -> Result<AssistOutput, BackendError>;
}
