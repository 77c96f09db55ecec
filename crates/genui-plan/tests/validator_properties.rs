use genui_plan::{
    validate_code, validate_plan, Child, ComponentNode, ComponentRegistry, StructuredPlan,
    ALLOWED_LAYOUTS,
};
use proptest::prelude::*;

/// A node built only from registry-approved type/prop pairs.
fn approved_node() -> impl Strategy<Value = ComponentNode> {
    let registry = ComponentRegistry::standard();
    let leaf = (0..registry.components().len(), any::<u8>(), "[a-z]{1,8}").prop_map(
        move |(idx, mask, text)| {
            let spec = registry.components()[idx];
            let mut node = ComponentNode::new(format!("{}-{mask}", spec.name()), spec.name());
            for (bit, prop) in spec.allowed_props().iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    node = node.with_prop(*prop, text.as_str());
                }
            }
            node
        },
    );

    leaf.prop_recursive(4, 32, 4, |inner| {
        (inner.clone(), prop::collection::vec(prop_oneof![
            inner.prop_map(Child::Node),
            "[a-z ]{0,12}".prop_map(Child::Text),
        ], 0..4))
            .prop_map(|(mut parent, children)| {
                parent.children = children;
                parent
            })
    })
}

fn approved_plan() -> impl Strategy<Value = StructuredPlan> {
    (
        prop::sample::select(ALLOWED_LAYOUTS),
        prop::collection::vec(approved_node(), 0..5),
    )
        .prop_map(|(layout, components)| StructuredPlan {
            layout: layout.to_string(),
            components,
            reasoning: String::new(),
        })
}

proptest! {
    #[test]
    fn prop_approved_plans_are_valid(plan in approved_plan()) {
        let result = validate_plan(&plan);
        prop_assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
        prop_assert!(result.errors.is_empty());
    }

    #[test]
    fn prop_unknown_type_yields_exactly_one_error(
        plan in approved_plan(),
        name in "X[a-z]{1,10}",
        bad_children in prop::collection::vec(approved_node(), 0..3),
    ) {
        let mut unknown = ComponentNode::new("mystery", name.clone()).with_prop("anything", "goes");
        for mut child in bad_children {
            child.props.insert("notAllowed".to_string(), true.into());
            unknown.children.push(Child::Node(child));
        }

        let mut plan = plan;
        plan.components.push(unknown);

        let errors = validate_plan(&plan).errors;
        prop_assert_eq!(
            errors,
            vec![format!("Component type \"{name}\" is not in the allowed library")]
        );
    }

    #[test]
    fn prop_disallowed_layout_yields_one_layout_error(
        plan in approved_plan(),
        layout in "[a-z]{1,12}",
    ) {
        prop_assume!(!ALLOWED_LAYOUTS.contains(&layout.as_str()));

        let mut plan = plan;
        plan.layout = layout;

        let errors = validate_plan(&plan).errors;
        let layout_errors: Vec<_> = errors
            .iter()
            .filter(|e| e.starts_with("Layout \""))
            .collect();
        prop_assert_eq!(layout_errors.len(), 1);
        prop_assert!(layout_errors[0].ends_with(
            "Allowed layouts: dashboard, two-column, three-column, single"
        ));
        prop_assert_eq!(errors.len(), 1);
    }

    #[test]
    fn prop_code_errors_are_independent_of_position(
        prefix in "[a-h \n]{0,20}",
        style_first in any::<bool>(),
    ) {
        let style = "<div style={{ color: 'red' }} />";
        let body = "function App() { return null }";
        let code = if style_first {
            format!("{prefix}{style}\n{body}")
        } else {
            format!("{prefix}{body}\n{style}")
        };

        let errors = validate_code(&code).errors;
        prop_assert_eq!(
            errors,
            vec![
                "Code must export a default function component".to_string(),
                "Inline styles are not allowed".to_string(),
            ]
        );
    }
}
