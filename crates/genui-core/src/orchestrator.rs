//! UI generation orchestrator
//!
//! Sequences the agent pipeline per flow type:
//! - `new`: plan, gate, generate, gate, explain, store
//! - `modify`: same pipeline, planner and explainer in modification mode
//! - `rollback`: restore the previous version, no agent calls
//!
//! Validation gates short-circuit before any further completion call. Every
//! failure is normalized into an [`OrchestratorResult`] at the flow boundary.

use crate::agents::{call_code_generator, call_explainer, call_planner};
use crate::config::GenUiConfig;
use crate::error::{FlowError, StateError, ValidationStage};
use crate::store::VersionStore;
use crate::types::{FlowType, OrchestratorResult};
use chrono::{SecondsFormat, Utc};
use genui_llm::CompletionService;
use genui_plan::{validate_code, PlanValidator, StructuredPlan, VersionState};
use std::fmt;
use std::sync::Arc;

/// Drives requests through the agent pipeline and owns the version history
///
/// `orchestrate` takes `&mut self`, so one flow mutates the history at a
/// time. Share across tasks behind `tokio::sync::Mutex`.
pub struct Orchestrator {
    service: Arc<dyn CompletionService>,
    store: VersionStore,
    validator: PlanValidator,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("store", &self.store)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Create orchestrator with the standard whitelist and an empty history
    #[must_use]
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self::with_validator(service, PlanValidator::default())
    }

    /// Create orchestrator with a custom plan validator
    #[must_use]
    pub fn with_validator(service: Arc<dyn CompletionService>, validator: PlanValidator) -> Self {
        Self {
            service,
            store: VersionStore::new(),
            validator,
        }
    }

    /// Create orchestrator from configuration
    #[must_use]
    pub fn from_config(service: Arc<dyn CompletionService>, config: &GenUiConfig) -> Self {
        Self::with_validator(service, config.validation.plan_validator())
    }

    /// Run one flow
    ///
    /// Never fails: errors come back inside the result.
    pub async fn orchestrate(&mut self, user_input: &str, flow: FlowType) -> OrchestratorResult {
        tracing::info!(flow = %flow, "orchestrating request");

        let outcome = match flow {
            FlowType::New => self.new_ui_flow(user_input).await,
            FlowType::Modify => self.modify_ui_flow(user_input).await,
            FlowType::Rollback => self.rollback_flow(),
        };

        match outcome {
            Ok(version) => OrchestratorResult::success(version),
            Err(err) => {
                tracing::warn!(flow = %flow, error = %err, "flow failed");
                err.into_result(flow)
            }
        }
    }

    /// Run a flow selected by name
    ///
    /// Unrecognized names fail without touching history.
    pub async fn dispatch(&mut self, user_input: &str, flow_name: &str) -> OrchestratorResult {
        match flow_name.parse::<FlowType>() {
            Ok(flow) => self.orchestrate(user_input, flow).await,
            Err(err) => {
                tracing::warn!(flow = flow_name, "unknown flow type");
                OrchestratorResult::failure(err.to_string())
            }
        }
    }

    async fn new_ui_flow(&mut self, user_input: &str) -> Result<VersionState, FlowError> {
        tracing::info!("Planner: creating plan");
        let plan = call_planner(self.service.as_ref(), user_input, None).await?;

        self.generate_version(user_input, plan, false).await
    }

    async fn modify_ui_flow(&mut self, user_input: &str) -> Result<VersionState, FlowError> {
        let current_plan = self
            .store
            .current()
            .map(|current| current.plan.clone())
            .ok_or(StateError::NothingToModify)?;

        tracing::info!("Planner: modifying plan");
        let plan = call_planner(self.service.as_ref(), user_input, Some(&current_plan)).await?;

        self.generate_version(user_input, plan, true).await
    }

    /// Shared tail of `new` and `modify`: gate the plan, generate and gate
    /// code, explain, then store
    async fn generate_version(
        &mut self,
        user_input: &str,
        plan: StructuredPlan,
        is_modification: bool,
    ) -> Result<VersionState, FlowError> {
        let plan_stage = if is_modification {
            ValidationStage::ModifiedPlan
        } else {
            ValidationStage::Plan
        };
        self.validator
            .validate(&plan)
            .into_result()
            .map_err(|errors| FlowError::validation(plan_stage, errors))?;
        tracing::debug!(components = plan.components.len(), layout = %plan.layout, "plan accepted");

        tracing::info!("Generator: generating code");
        let code = call_code_generator(self.service.as_ref(), &plan).await?;
        validate_code(code.as_str())
            .into_result()
            .map_err(|errors| FlowError::validation(ValidationStage::Code, errors))?;
        tracing::debug!(bytes = code.as_str().len(), "code accepted");

        tracing::info!("Explainer: explaining design");
        let explanation =
            call_explainer(self.service.as_ref(), user_input, &plan, is_modification).await?;

        let version = VersionState {
            version: self.store.next_version_number(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_request: user_input.to_string(),
            plan,
            code,
            explanation,
        };
        self.store.store(version.clone());
        tracing::info!(version = version.version, "version stored");

        Ok(version)
    }

    fn rollback_flow(&mut self) -> Result<VersionState, FlowError> {
        let restored = self.store.rollback().ok_or(StateError::NothingToRollback)?;
        tracing::info!(version = restored.version, "rolled back");
        Ok(restored)
    }

    /// Latest version
    #[inline]
    #[must_use]
    pub fn current_ui(&self) -> Option<&VersionState> {
        self.store.current()
    }

    /// Snapshot of all versions, oldest first
    #[must_use]
    pub fn version_history(&self) -> Vec<VersionState> {
        self.store.all_versions()
    }

    /// Version numbered `n`
    #[inline]
    #[must_use]
    pub fn version(&self, n: u32) -> Option<&VersionState> {
        self.store.version(n)
    }

    /// Drop all history; numbering restarts at 1
    pub fn clear_history(&mut self) {
        self.store.clear();
        tracing::info!("history cleared");
    }

    /// Read-only view of the store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &VersionStore {
        &self.store
    }
}
