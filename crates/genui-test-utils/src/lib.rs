//! Testing utilities for GenUI workspace
//!
//! Shared fixtures and a scripted completion service.

#![allow(missing_docs)]

use async_trait::async_trait;
use genui_core::Orchestrator;
use genui_llm::{CompletionError, CompletionService};
use genui_plan::{ComponentNode, Child, StructuredPlan};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// One recorded `complete` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub user_message: String,
}

/// Completion service that replays queued responses in order
///
/// Every call is logged. Calling past the end of the queue yields a
/// `Service` error so over-calling shows up as a failed flow.
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scripted = Self::new();
        for response in responses {
            scripted.push_ok(response);
        }
        scripted
    }

    pub fn push_ok(&self, response: impl Into<String>) {
        self.responses.lock().push_back(Ok(response.into()));
    }

    pub fn push_err(&self, error: CompletionError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompletionError> {
        self.calls.lock().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            user_message: user_message.to_string(),
        });

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Service("no scripted response left".into())))
    }
}

/// Card + Input + Button login form on a single layout
pub fn login_plan() -> StructuredPlan {
    StructuredPlan::new("single")
        .with_component(
            ComponentNode::new("login-card", "Card")
                .with_prop("title", "Login")
                .with_child(
                    ComponentNode::new("email-input", "Input")
                        .with_prop("type", "email")
                        .with_prop("placeholder", "Email"),
                )
                .with_child(
                    ComponentNode::new("password-input", "Input")
                        .with_prop("type", "password")
                        .with_prop("placeholder", "Password"),
                )
                .with_child(
                    ComponentNode::new("submit-button", "Button")
                        .with_prop("variant", "primary")
                        .with_child(Child::Text("Login".to_string())),
                ),
        )
        .with_reasoning("Single card keeps the form focused")
}

pub fn login_plan_json() -> String {
    serde_json::to_string(&login_plan()).unwrap()
}

/// Planner output wrapped in a markdown fence, as models often return it
pub fn fenced_login_plan_json() -> String {
    format!("```json\n{}\n```", login_plan_json())
}

pub fn valid_code() -> &'static str {
    r#"import { Card, Input, Button } from '@/components/ui'

export default function GeneratedUI() {
  return (
    <div className="layout-single">
      <Card title="Login">
        <Input type="email" placeholder="Email" />
        <Input type="password" placeholder="Password" />
        <Button variant="primary">Login</Button>
      </Card>
    </div>
  )
}"#
}

pub fn explanation() -> &'static str {
    "Layout Choice: a single column keeps the form focused."
}

/// Responses for one successful `new` or `modify` flow
pub fn happy_path() -> [String; 3] {
    [
        login_plan_json(),
        valid_code().to_string(),
        explanation().to_string(),
    ]
}

pub fn setup_orchestrator(service: Arc<ScriptedCompletion>) -> Orchestrator {
    Orchestrator::new(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genui_plan::{validate_code, validate_plan};

    #[test]
    fn fixtures_pass_validation() {
        assert!(validate_plan(&login_plan()).is_valid);
        assert!(validate_code(valid_code()).is_valid);
    }

    #[tokio::test]
    async fn scripted_replays_then_errors() {
        let scripted = ScriptedCompletion::with_responses(["one"]);
        assert_eq!(scripted.complete("s", "u").await.unwrap(), "one");
        assert!(scripted.complete("s", "u").await.is_err());

        assert_eq!(scripted.call_count(), 2);
        assert_eq!(scripted.calls()[0].user_message, "u");
        assert_eq!(scripted.remaining(), 0);
    }
}
