//! GenUI Plan
//!
//! Structured UI plans and the whitelist gates they pass through:
//!
//! - [`StructuredPlan`] / [`ComponentNode`]: the planner's output
//! - [`ComponentRegistry`]: static whitelist of component types, props and layouts
//! - [`PlanValidator`]: recursive structural check of a plan against the registry
//! - [`validate_code`]: textual gate over generated source
//! - [`VersionState`]: one accepted (plan, code, explanation) snapshot
//!
//! # Example
//!
//! ```rust
//! use genui_plan::{validate_plan, ComponentNode, StructuredPlan};
//!
//! let plan = StructuredPlan::new("single")
//!     .with_component(ComponentNode::new("login-card", "Card").with_prop("title", "Login"));
//!
//! let result = validate_plan(&plan);
//! assert!(result.is_valid);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod code_validator;
mod plan_validator;
mod registry;
mod types;
mod validation;

pub use code_validator::validate_code;
pub use plan_validator::{validate_plan, PlanValidator, DEFAULT_MAX_DEPTH};
pub use registry::{ComponentRegistry, ComponentSpec, ALLOWED_LAYOUTS, UI_MODULE_PATH};
pub use types::{
    Child, ComponentNode, GeneratedCode, PropValue, Props, StructuredPlan, VersionState,
};
pub use validation::ValidationResult;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
