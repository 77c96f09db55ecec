//! Flow selection and orchestration results

use crate::error::UnknownFlowType;
use genui_plan::VersionState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline flow to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    /// Build a UI from scratch
    New,
    /// Change the current UI
    Modify,
    /// Drop the current UI and restore the previous one
    Rollback,
}

impl FlowType {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Modify => "modify",
            Self::Rollback => "rollback",
        }
    }

    /// Label used when tagging flow failures
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "new UI",
            Self::Modify => "modify UI",
            Self::Rollback => "rollback",
        }
    }

    /// Check if flow calls the completion service
    #[inline]
    #[must_use]
    pub fn uses_agents(&self) -> bool {
        !matches!(self, Self::Rollback)
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowType {
    type Err = UnknownFlowType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "modify" => Ok(Self::Modify),
            "rollback" => Ok(Self::Rollback),
            other => Err(UnknownFlowType(other.to_string())),
        }
    }
}

/// Structured outcome of one orchestration call
///
/// Callers always get one of these; no error crosses the orchestration
/// boundary any other way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorResult {
    /// Whether the flow produced or restored a version
    pub success: bool,
    /// Stored or restored version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionState>,
    /// Failure summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Every whitelist violation, when a validation gate failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<String>>,
}

impl OrchestratorResult {
    /// Successful result carrying a version
    #[inline]
    #[must_use]
    pub fn success(version: VersionState) -> Self {
        Self {
            success: true,
            version: Some(version),
            error: None,
            validation_errors: None,
        }
    }

    /// Failed result with a message
    #[inline]
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            version: None,
            error: Some(error.into()),
            validation_errors: None,
        }
    }

    /// Failed validation gate
    #[inline]
    #[must_use]
    pub fn validation_failure(error: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            validation_errors: Some(errors),
            ..Self::failure(error)
        }
    }
}
