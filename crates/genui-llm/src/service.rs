//! The completion seam

use crate::error::CompletionError;
use async_trait::async_trait;

/// Opaque text-completion service
///
/// Implementations send `system_prompt` and `user_message` upstream and
/// return the raw completion text. No retries, no post-processing.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Complete one prompt
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompletionError>;
}
