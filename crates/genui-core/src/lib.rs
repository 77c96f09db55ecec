//! GenUI Core - UI generation orchestrator
//!
//! Drives a natural-language UI request through the agent pipeline:
//! - Planner agent produces a structured plan
//! - Plan is gated through the component whitelist
//! - Code generator turns the plan into source
//! - Source is gated through the code conventions
//! - Explainer documents the design decisions
//! - The accepted result is appended to a rollback-capable version history
//!
//! # Example
//!
//! ```rust,ignore
//! use genui_core::{FlowType, Orchestrator};
//! use genui_llm::{CompletionConfig, GeminiClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(CompletionConfig::from_env())?;
//! let mut orchestrator = Orchestrator::new(Arc::new(client));
//!
//! let result = orchestrator.orchestrate("add a login form", FlowType::New).await;
//! if let Some(version) = result.version {
//!     println!("stored version {}", version.version);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod agents;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prompts;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use config::{GenUiConfig, ValidationConfig};
pub use error::{AgentError, ConfigError, FlowError, StateError, UnknownFlowType, ValidationStage};
pub use orchestrator::Orchestrator;
pub use store::VersionStore;
pub use types::{FlowType, OrchestratorResult};

pub use genui_plan::{GeneratedCode, StructuredPlan, VersionState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with GenUI Core
    pub use crate::{
        FlowType, GenUiConfig, Orchestrator, OrchestratorResult, StructuredPlan, VersionState,
        VersionStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
