//! Structural validation of plans against the component registry
//!
//! Walks the component tree depth-first in plan order and reports every
//! violation it finds:
//! - layout not in the allowed set
//! - component type missing from the registry (children not visited)
//! - prop keys outside the type's whitelist
//! - nesting deeper than the configured limit

use crate::registry::ComponentRegistry;
use crate::types::{ComponentNode, StructuredPlan};
use crate::validation::ValidationResult;

/// Default nesting limit; top-level components are at depth 1
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Plan validator bound to a registry
#[derive(Debug, Clone, Copy)]
pub struct PlanValidator {
    registry: ComponentRegistry,
    max_depth: usize,
}

impl PlanValidator {
    /// Create validator over registry
    #[inline]
    #[must_use]
    pub fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// With nesting limit
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Registry in use
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Validate a whole plan
    #[must_use]
    pub fn validate(&self, plan: &StructuredPlan) -> ValidationResult {
        let mut errors = Vec::new();

        if !self.registry.is_allowed_layout(&plan.layout) {
            errors.push(format!(
                "Layout \"{}\" is not valid. Allowed layouts: {}",
                plan.layout,
                self.registry.layouts().join(", ")
            ));
        }

        for component in &plan.components {
            self.validate_node(component, 1, &mut errors);
        }

        ValidationResult::from_errors(errors)
    }

    fn validate_node(&self, node: &ComponentNode, depth: usize, errors: &mut Vec<String>) {
        if depth > self.max_depth {
            errors.push(format!(
                "Component \"{}\" exceeds the maximum nesting depth of {}",
                node.id, self.max_depth
            ));
            return;
        }

        let Some(spec) = self.registry.find(&node.component_type) else {
            // Props of an unknown type cannot be checked, and neither can its subtree.
            errors.push(format!(
                "Component type \"{}\" is not in the allowed library",
                node.component_type
            ));
            return;
        };

        for key in node.props.keys() {
            if !spec.allows(key) {
                errors.push(format!(
                    "Prop \"{}\" is not allowed for component \"{}\". Allowed props: {}",
                    key,
                    node.component_type,
                    spec.allowed_props().join(", ")
                ));
            }
        }

        for child in node.child_nodes() {
            self.validate_node(child, depth + 1, errors);
        }
    }
}

impl Default for PlanValidator {
    fn default() -> Self {
        Self::new(ComponentRegistry::standard())
    }
}

/// Validate plan against the standard registry
#[must_use]
pub fn validate_plan(plan: &StructuredPlan) -> ValidationResult {
    PlanValidator::default().validate(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ComponentSpec;
    use crate::types::PropValue;
    use pretty_assertions::assert_eq;

    fn login_plan() -> StructuredPlan {
        StructuredPlan::new("single").with_component(
            ComponentNode::new("login-card", "Card")
                .with_prop("title", "Login")
                .with_child(ComponentNode::new("email", "Input").with_prop("type", "email"))
                .with_child(ComponentNode::new("password", "Input").with_prop("type", "password"))
                .with_child(
                    ComponentNode::new("submit", "Button")
                        .with_prop("variant", "primary")
                        .with_prop("children", "Login"),
                )
                .with_child("Need an account?"),
        )
    }

    #[test]
    fn valid_plan_passes() {
        let result = validate_plan(&login_plan());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_plan_with_valid_layout_passes() {
        assert!(validate_plan(&StructuredPlan::new("dashboard")).is_valid);
    }

    #[test]
    fn invalid_layout_lists_allowed_set() {
        let mut plan = login_plan();
        plan.layout = "grid".to_string();

        let result = validate_plan(&plan);
        assert_eq!(
            result.errors,
            vec![
                "Layout \"grid\" is not valid. Allowed layouts: dashboard, two-column, three-column, single"
                    .to_string()
            ]
        );
    }

    #[test]
    fn unknown_type_reports_once_and_skips_children() {
        let plan = StructuredPlan::new("single").with_component(
            ComponentNode::new("carousel", "Carousel")
                .with_prop("slides", 3_i64)
                .with_child(ComponentNode::new("bad-child", "Button").with_prop("style", "x")),
        );

        let result = validate_plan(&plan);
        assert_eq!(
            result.errors,
            vec!["Component type \"Carousel\" is not in the allowed library".to_string()]
        );
    }

    #[test]
    fn one_error_per_disallowed_prop() {
        let plan = StructuredPlan::new("single").with_component(
            ComponentNode::new("b", "Button")
                .with_prop("variant", "primary")
                .with_prop("style", "red")
                .with_prop("className", "big"),
        );

        let result = validate_plan(&plan);
        assert_eq!(
            result.errors,
            vec![
                "Prop \"style\" is not allowed for component \"Button\". Allowed props: variant, children, onClick"
                    .to_string(),
                "Prop \"className\" is not allowed for component \"Button\". Allowed props: variant, children, onClick"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn errors_follow_depth_first_order() {
        let plan = StructuredPlan::new("nope")
            .with_component(
                ComponentNode::new("card", "Card")
                    .with_prop("color", "red")
                    .with_child(ComponentNode::new("inner", "Widget")),
            )
            .with_component(
                ComponentNode::new("nav", "Navbar").with_prop("links", PropValue::Null),
            );

        let errors = validate_plan(&plan).errors;
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("Layout \"nope\""));
        assert!(errors[1].starts_with("Prop \"color\" is not allowed for component \"Card\""));
        assert!(errors[2].starts_with("Component type \"Widget\""));
        assert!(errors[3].starts_with("Prop \"links\" is not allowed for component \"Navbar\""));
    }

    #[test]
    fn text_children_are_not_validated() {
        let plan = StructuredPlan::new("single")
            .with_component(ComponentNode::new("card", "Card").with_child("<Carousel/>"));
        assert!(validate_plan(&plan).is_valid);
    }

    #[test]
    fn nesting_beyond_limit_is_rejected() {
        let validator = PlanValidator::default().with_max_depth(2);

        let within = StructuredPlan::new("single").with_component(
            ComponentNode::new("outer", "Card").with_child(ComponentNode::new("inner", "Card")),
        );
        assert!(validator.validate(&within).is_valid);

        let too_deep = StructuredPlan::new("single").with_component(
            ComponentNode::new("outer", "Card").with_child(
                ComponentNode::new("inner", "Card")
                    .with_child(ComponentNode::new("deepest", "Card").with_prop("bogus", true)),
            ),
        );
        assert_eq!(
            validator.validate(&too_deep).errors,
            vec!["Component \"deepest\" exceeds the maximum nesting depth of 2".to_string()]
        );
    }

    #[test]
    fn custom_registry_bounds_plans() {
        static ONLY_CHART: &[ComponentSpec] = &[ComponentSpec::new("Chart", &["type", "data"])];
        static ONLY_DASHBOARD: &[&str] = &["dashboard"];

        let validator =
            PlanValidator::new(ComponentRegistry::from_static(ONLY_CHART, ONLY_DASHBOARD));
        assert!(validator.registry().find("Chart").is_some());
        assert!(validator.registry().find("Card").is_none());

        let plan = StructuredPlan::new("dashboard")
            .with_component(ComponentNode::new("sales", "Chart").with_prop("type", "bar"))
            .with_component(ComponentNode::new("card", "Card"));
        assert_eq!(
            validator.validate(&plan).errors,
            vec!["Component type \"Card\" is not in the allowed library".to_string()]
        );
    }
}
