//! Error types for the completion adapter

/// Completion service failures
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Adapter is not usable as configured (missing credential, bad client setup)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Upstream call did not succeed; carries the upstream body or transport error
    #[error("completion service error: {0}")]
    Service(String),

    /// Success response without the expected text field
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Check if the failure is a configuration problem
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if error is retryable
    ///
    /// Always false: the adapter surfaces failures once and leaves recovery to
    /// the caller.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CompletionError::Service("HTTP 500: boom".to_string());
        assert_eq!(err.to_string(), "completion service error: HTTP 500: boom");

        let err =
            CompletionError::Configuration("GEMINI_API_KEY environment variable not set".into());
        assert!(err.to_string().starts_with("configuration error"));
        assert!(err.is_configuration());
    }

    #[test]
    fn nothing_is_retryable() {
        assert!(!CompletionError::Service("x".into()).is_retryable());
        assert!(!CompletionError::MalformedResponse("x".into()).is_retryable());
        assert!(!CompletionError::Configuration("x".into()).is_retryable());
    }
}
