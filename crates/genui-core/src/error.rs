//! Error types for GenUI Core
//!
//! Provides error handling for:
//! - Agent calls (completion failures, unparseable planner output)
//! - Validation gates (plan and code whitelist violations)
//! - History state (nothing to modify, nothing to roll back)
//! - Configuration loading
//!
//! [`FlowError`] is converted into an [`OrchestratorResult`] exactly once, at
//! the flow boundary.

use crate::types::{FlowType, OrchestratorResult};
use genui_llm::CompletionError;
use std::fmt;
use std::path::PathBuf;

/// Agent call failures
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Completion service failed
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Planner output was not a structured plan
    #[error("Failed to parse planner response as JSON: {source}")]
    PlanParse {
        #[source]
        source: serde_json::Error,
        /// Cleaned planner output that failed to parse
        raw: String,
    },

    /// Plan could not be serialized for a downstream agent
    #[error("failed to serialize plan: {0}")]
    PlanSerialize(#[source] serde_json::Error),
}

impl AgentError {
    /// Raw planner text, if this is a parse failure
    #[inline]
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::PlanParse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// History preconditions that a flow found unmet
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Modify requested with empty history
    #[error("No existing UI to modify. Create a new UI first.")]
    NothingToModify,

    /// Rollback requested with fewer than two versions
    #[error("Cannot rollback: No previous version exists")]
    NothingToRollback,
}

/// Gate that rejected an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    /// Fresh plan
    Plan,
    /// Plan produced in modification mode
    ModifiedPlan,
    /// Generated code
    Code,
}

impl fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plan => "Plan validation failed",
            Self::ModifiedPlan => "Modified plan validation failed",
            Self::Code => "Code validation failed",
        })
    }
}

/// Anything that stops a flow
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Agent or completion failure
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// Whitelist gate failed; carries every violation
    #[error("{stage}")]
    Validation {
        stage: ValidationStage,
        errors: Vec<String>,
    },

    /// History precondition unmet
    #[error(transparent)]
    State(#[from] StateError),
}

impl FlowError {
    /// Build validation failure
    #[inline]
    #[must_use]
    pub fn validation(stage: ValidationStage, errors: Vec<String>) -> Self {
        Self::Validation { stage, errors }
    }

    /// Normalize into the caller-facing result shape
    ///
    /// Agent failures are tagged with the flow they happened in; validation
    /// failures keep their full violation list.
    #[must_use]
    pub fn into_result(self, flow: FlowType) -> OrchestratorResult {
        match self {
            Self::Agent(err) => {
                OrchestratorResult::failure(format!("Error in {} flow: {err}", flow.label()))
            }
            Self::Validation { stage, errors } => {
                OrchestratorResult::validation_failure(stage.to_string(), errors)
            }
            Self::State(err) => OrchestratorResult::failure(err.to_string()),
        }
    }
}

/// Unrecognized flow name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown flow type: {0}")]
pub struct UnknownFlowType(pub String);

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
