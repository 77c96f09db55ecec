//! Plan and version data model
//!
//! Everything here is plain serde data. JSON field names follow the planner
//! wire format (`type`, `userRequest`, ...), so a plan round-trips through the
//! completion service unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered prop map; key order is the order the planner wrote them in
pub type Props = IndexMap<String, PropValue>;

/// Closed set of values a component prop may hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// JSON `null`
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer or float, kept as written
    Number(serde_json::Number),
    /// Text
    String(String),
    /// Nested list (table rows, nav items)
    Array(Vec<PropValue>),
    /// Nested record
    Object(IndexMap<String, PropValue>),
}

impl PropValue {
    /// Borrow as string if this is a `String`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        Self::Array(value)
    }
}

/// A child slot: either a nested component or a text leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// Literal text; never validated
    Text(String),
    /// Nested component
    Node(ComponentNode),
}

impl From<ComponentNode> for Child {
    fn from(node: ComponentNode) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// One component instance in a plan tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Planner-assigned identifier; uniqueness is not enforced
    #[serde(default)]
    pub id: String,
    /// Registry component name
    #[serde(rename = "type")]
    pub component_type: String,
    /// Props passed to the component
    #[serde(default)]
    pub props: Props,
    /// Ordered children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,
}

impl ComponentNode {
    /// Create node with no props or children
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// With prop
    #[inline]
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// With child (node or text)
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Iterate nested component children, skipping text
    pub fn child_nodes(&self) -> impl Iterator<Item = &ComponentNode> {
        self.children.iter().filter_map(|child| match child {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        })
    }
}

/// Planner output: layout plus component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredPlan {
    /// Layout identifier
    pub layout: String,
    /// Top-level components in render order
    pub components: Vec<ComponentNode>,
    /// Planner's rationale
    #[serde(default)]
    pub reasoning: String,
}

impl StructuredPlan {
    /// Create empty plan with layout
    #[inline]
    #[must_use]
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            components: Vec::new(),
            reasoning: String::new(),
        }
    }

    /// With top-level component
    #[inline]
    #[must_use]
    pub fn with_component(mut self, component: ComponentNode) -> Self {
        self.components.push(component);
        self
    }

    /// With reasoning
    #[inline]
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Parse from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Pretty JSON, as handed to downstream agents
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Generated UI source text, opaque apart from the code gate's checks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedCode(String);

impl GeneratedCode {
    /// Wrap source text
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Source text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into source text
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for GeneratedCode {
    fn from(source: String) -> Self {
        Self(source)
    }
}

impl fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One accepted UI version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionState {
    /// Version number, starting at 1
    pub version: u32,
    /// RFC 3339 creation time
    pub timestamp: String,
    /// Request that produced this version
    pub user_request: String,
    /// Validated plan
    pub plan: StructuredPlan,
    /// Validated code
    pub code: GeneratedCode,
    /// Explainer output
    pub explanation: String,
}
