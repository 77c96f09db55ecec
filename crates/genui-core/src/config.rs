//! Orchestrator configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! [completion]
//! model = "gemini-2.5-flash"
//!
//! [completion.sampling]
//! temperature = 0.1
//!
//! [validation]
//! max_depth = 16
//! ```

use crate::error::ConfigError;
use genui_llm::CompletionConfig;
use genui_plan::{ComponentRegistry, PlanValidator, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plan validation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum component nesting depth
    pub max_depth: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationConfig {
    /// Plan validator over the standard registry with these settings
    #[must_use]
    pub fn plan_validator(&self) -> PlanValidator {
        PlanValidator::new(ComponentRegistry::standard()).with_max_depth(self.max_depth)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenUiConfig {
    /// Completion service settings
    pub completion: CompletionConfig,
    /// Validation settings
    pub validation: ValidationConfig,
}

impl GenUiConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply environment overrides (credential, model, endpoint)
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        self.completion = self.completion.with_env_overrides();
        self
    }

    /// With completion settings
    #[inline]
    #[must_use]
    pub fn with_completion(mut self, completion: CompletionConfig) -> Self {
        self.completion = completion;
        self
    }

    /// With nesting limit
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.validation.max_depth = max_depth;
        self
    }
}
