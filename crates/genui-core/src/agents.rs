//! Agent callers
//!
//! Thin, stateless wrappers over a [`CompletionService`]: each builds its
//! messages, makes one completion call, and cleans the raw text into a
//! typed result. Nothing is retried or recovered here.

use crate::error::AgentError;
use crate::prompts::{
    build_explainer_message, build_generator_message, build_modification_message,
    build_planner_message, CODE_GENERATOR_PROMPT, EXPLAINER_PROMPT, MODIFICATION_PLANNER_PROMPT,
    PLANNER_PROMPT,
};
use genui_llm::CompletionService;
use genui_plan::{GeneratedCode, StructuredPlan};
use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?\n?").expect("valid regex"));

// Longer tags first so `jsx` is not cut to `js`.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:typescript|javascript|jsx|tsx|js|ts)?\n?").expect("valid regex")
});

/// Remove every JSON code fence marker and trim
#[must_use]
pub fn strip_json_fences(text: &str) -> String {
    JSON_FENCE.replace_all(text, "").trim().to_string()
}

/// Remove every source code fence marker and trim
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

fn plan_json(plan: &StructuredPlan) -> Result<String, AgentError> {
    plan.to_pretty_json().map_err(AgentError::PlanSerialize)
}

/// Ask the planner for a plan
///
/// With `current_plan` the planner runs in modification mode and receives the
/// current plan as context; otherwise it plans from scratch.
///
/// # Errors
/// - `AgentError::Completion` if the service call fails
/// - `AgentError::PlanParse` if the cleaned output is not a plan
pub async fn call_planner(
    service: &dyn CompletionService,
    user_request: &str,
    current_plan: Option<&StructuredPlan>,
) -> Result<StructuredPlan, AgentError> {
    let (system_prompt, user_message) = match current_plan {
        Some(current) => (
            MODIFICATION_PLANNER_PROMPT.as_str(),
            build_modification_message(user_request, &plan_json(current)?),
        ),
        None => (PLANNER_PROMPT.as_str(), build_planner_message(user_request)),
    };

    let response = service.complete(system_prompt, &user_message).await?;
    let cleaned = strip_json_fences(&response);

    StructuredPlan::from_json(&cleaned).map_err(|source| AgentError::PlanParse {
        source,
        raw: cleaned,
    })
}

/// Ask the code generator to render a plan
pub async fn call_code_generator(
    service: &dyn CompletionService,
    plan: &StructuredPlan,
) -> Result<GeneratedCode, AgentError> {
    let user_message = build_generator_message(&plan_json(plan)?);
    let response = service
        .complete(CODE_GENERATOR_PROMPT.as_str(), &user_message)
        .await?;

    Ok(GeneratedCode::new(strip_code_fences(&response)))
}

/// Ask the explainer to describe a plan
pub async fn call_explainer(
    service: &dyn CompletionService,
    user_request: &str,
    plan: &StructuredPlan,
    is_modification: bool,
) -> Result<String, AgentError> {
    let user_message = build_explainer_message(user_request, &plan_json(plan)?, is_modification);
    let response = service.complete(EXPLAINER_PROMPT, &user_message).await?;

    Ok(response.trim().to_string())
}
