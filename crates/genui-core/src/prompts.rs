//! Agent instructions and message builders
//!
//! Planner instructions embed the component whitelist straight from the
//! registry so prompts and validation cannot drift apart.

use genui_plan::{ComponentRegistry, UI_MODULE_PATH};
use once_cell::sync::Lazy;

/// Instruction for planning a UI from scratch
pub static PLANNER_PROMPT: Lazy<String> =
    Lazy::new(|| planner_prompt(&ComponentRegistry::standard()));

/// Instruction for revising an existing plan
pub static MODIFICATION_PLANNER_PROMPT: Lazy<String> =
    Lazy::new(|| modification_planner_prompt(&ComponentRegistry::standard()));

/// Instruction for turning a plan into source
pub static CODE_GENERATOR_PROMPT: Lazy<String> = Lazy::new(code_generator_prompt);

/// Instruction for explaining a plan
pub const EXPLAINER_PROMPT: &str = "\
You are the Explainer agent. Explain the design decisions behind a UI plan.

Cover, in plain prose without markdown:
Layout Choice: why this layout fits the request.
Component Selection: why these components were used.
Key Decisions: notable tradeoffs.
Changes Made: what changed and what was kept (modifications only).

Keep each section to a few sentences. No apologies, no hedging.";

/// Render the whitelist section shared by both planner instructions
fn whitelist_section(registry: &ComponentRegistry) -> String {
    let components: String = registry
        .components()
        .iter()
        .map(|spec| format!("- {}: {}\n", spec.name(), spec.allowed_props().join(", ")))
        .collect();

    format!(
        "ALLOWED COMPONENTS AND PROPS:\n{components}\nALLOWED LAYOUTS: {}\n",
        registry.layouts().join(", ")
    )
}

const PLAN_SHAPE: &str = r#"{
  "layout": "single",
  "components": [
    {
      "id": "login-card",
      "type": "Card",
      "props": { "title": "Sign in" },
      "children": ["text or nested components"]
    }
  ],
  "reasoning": "why this structure"
}"#;

/// Planner instruction for a given registry
#[must_use]
pub fn planner_prompt(registry: &ComponentRegistry) -> String {
    format!(
        "You are the Planner agent. Convert a natural-language UI request into a structured JSON plan.\n\
         \n\
         Use only the components, props and layouts listed below. Never invent components or add styling.\n\
         \n\
         {whitelist}\n\
         Respond with exactly one JSON object of this shape, with no markdown and no commentary:\n\
         {PLAN_SHAPE}\n\
         \n\
         Give every component a unique, descriptive id. Nest components through \"children\". \
         Button labels go in the \"children\" prop.",
        whitelist = whitelist_section(registry),
    )
}

/// Modification-planner instruction for a given registry
#[must_use]
pub fn modification_planner_prompt(registry: &ComponentRegistry) -> String {
    format!(
        "You are the Modification Planner agent. Revise the current UI plan to satisfy the request.\n\
         \n\
         Keep components the request does not mention, including their ids. \
         Only rebuild from scratch when explicitly asked. New components get new unique ids.\n\
         \n\
         {whitelist}\n\
         Respond with exactly one JSON object in the same shape as the current plan, with no markdown. \
         The \"reasoning\" field must say what changed and what was preserved.",
        whitelist = whitelist_section(registry),
    )
}

fn code_generator_prompt() -> String {
    format!(
        "You are the Code Generator agent. Convert a JSON UI plan into React JSX.\n\
         \n\
         Rules:\n\
         - Import every component from '{UI_MODULE_PATH}'.\n\
         - Declare the component as `export default function GeneratedUI()`.\n\
         - Use only the components in the plan and preserve its hierarchy exactly.\n\
         - Wrap the output in <div className=\"layout-<layout>\">.\n\
         - No inline styles, no dangerouslySetInnerHTML, no eval.\n\
         \n\
         Respond with the source code only, no markdown fences and no explanation."
    )
}

/// User message for a fresh plan
#[must_use]
pub fn build_planner_message(user_request: &str) -> String {
    format!("User Request: {user_request}")
}

/// User message for a plan revision
#[must_use]
pub fn build_modification_message(user_request: &str, current_plan_json: &str) -> String {
    format!("User Request: {user_request}\n\nCurrent Plan:\n{current_plan_json}")
}

/// User message for code generation
#[must_use]
pub fn build_generator_message(plan_json: &str) -> String {
    format!("Plan:\n{plan_json}")
}

/// User message for the explainer
#[must_use]
pub fn build_explainer_message(
    user_request: &str,
    plan_json: &str,
    is_modification: bool,
) -> String {
    format!(
        "User Request: {user_request}\n\nPlan:\n{plan_json}\n\nIs Modification: {is_modification}"
    )
}
