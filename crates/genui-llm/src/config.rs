//! Completion adapter configuration
//!
//! Model, endpoint and sampling settings come from config files or defaults;
//! the credential normally comes from the environment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable holding the access credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "GENUI_MODEL";
/// Environment variable overriding the endpoint base URL
pub const ENDPOINT_ENV: &str = "GENUI_ENDPOINT";

/// Deterministic sampling parameters
///
/// Low randomness and bounded output so a given prompt/model pair reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
    /// Top-k cutoff
    pub top_k: u32,
    /// Nucleus sampling mass
    pub top_p: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: 4096,
            top_k: 1,
            top_p: 0.8,
        }
    }
}

/// Completion service configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Model identifier
    pub model: String,
    /// API base URL (without the `/models/...` suffix)
    pub endpoint: String,
    /// Access credential; `None` makes every call fail with a configuration error
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Sampling parameters
    pub sampling: SamplingConfig,
}

impl CompletionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus environment overrides
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply credential, model and endpoint from the environment when set
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = non_empty_env(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty_env(MODEL_ENV) {
            self.model = model;
        }
        if let Some(endpoint) = non_empty_env(ENDPOINT_ENV) {
            self.endpoint = endpoint;
        }
        self
    }

    /// With credential
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With endpoint base URL
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Credential, if present and not blank
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            sampling: SamplingConfig::default(),
        }
    }
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("sampling", &self.sampling)
            .finish()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CompletionConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.endpoint.contains("generativelanguage.googleapis.com"));
        assert!(config.api_key.is_none());
        assert_eq!(config.sampling.temperature, 0.1);
        assert_eq!(config.sampling.max_output_tokens, 4096);
        assert_eq!(config.sampling.top_k, 1);
        assert_eq!(config.sampling.top_p, 0.8);
    }

    #[test]
    fn blank_credential_is_absent() {
        assert_eq!(CompletionConfig::new().with_api_key("  ").credential(), None);
        assert_eq!(
            CompletionConfig::new().with_api_key("abc").credential(),
            Some("abc")
        );
    }

    #[test]
    fn debug_redacts_credential() {
        let config = CompletionConfig::new().with_api_key("secret-key");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn builders_override_fields() {
        let config = CompletionConfig::new()
            .with_model("gemini-test")
            .with_endpoint("http://localhost:1234");
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.endpoint, "http://localhost:1234");
    }
}
