//! Component whitelist
//!
//! Provides [`ComponentRegistry`], the static set of component types, their
//! permitted props, and the layouts a plan may pick from.

/// Module path generated code must import UI components from
pub const UI_MODULE_PATH: &str = "@/components/ui";

/// Layout identifiers, in declared order
pub const ALLOWED_LAYOUTS: &[&str] = &["dashboard", "two-column", "three-column", "single"];

/// A whitelisted component type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    name: &'static str,
    allowed_props: &'static [&'static str],
}

impl ComponentSpec {
    /// Define a component entry
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, allowed_props: &'static [&'static str]) -> Self {
        Self {
            name,
            allowed_props,
        }
    }

    /// Component name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Permitted prop keys, in declared order
    #[inline]
    #[must_use]
    pub fn allowed_props(&self) -> &'static [&'static str] {
        self.allowed_props
    }

    /// Check if prop key is permitted
    #[inline]
    #[must_use]
    pub fn allows(&self, prop: &str) -> bool {
        self.allowed_props.contains(&prop)
    }
}

const STANDARD_COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec::new("Button", &["variant", "children", "onClick"]),
    ComponentSpec::new("Card", &["title", "children"]),
    ComponentSpec::new("Input", &["type", "placeholder", "value", "onChange"]),
    ComponentSpec::new("Table", &["columns", "data", "headers"]),
    ComponentSpec::new("Modal", &["isOpen", "title", "children", "onClose"]),
    ComponentSpec::new("Sidebar", &["items", "children"]),
    ComponentSpec::new("Navbar", &["title", "items"]),
    ComponentSpec::new("Chart", &["type", "data", "title"]),
];

/// Read-only whitelist of components and layouts
///
/// Backed by static slices; there is no way to add or remove entries at
/// runtime. Lookups are exact, case-sensitive linear scans.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRegistry {
    components: &'static [ComponentSpec],
    layouts: &'static [&'static str],
}

impl ComponentRegistry {
    /// The shipped UI library
    #[inline]
    #[must_use]
    pub const fn standard() -> Self {
        Self::from_static(STANDARD_COMPONENTS, ALLOWED_LAYOUTS)
    }

    /// Registry over caller-provided static tables
    #[inline]
    #[must_use]
    pub const fn from_static(
        components: &'static [ComponentSpec],
        layouts: &'static [&'static str],
    ) -> Self {
        Self { components, layouts }
    }

    /// Look up component by exact name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static ComponentSpec> {
        self.components.iter().find(|spec| spec.name == name)
    }

    /// All component entries
    #[inline]
    #[must_use]
    pub fn components(&self) -> &'static [ComponentSpec] {
        self.components
    }

    /// All layout identifiers
    #[inline]
    #[must_use]
    pub fn layouts(&self) -> &'static [&'static str] {
        self.layouts
    }

    /// Check if layout is allowed
    #[inline]
    #[must_use]
    pub fn is_allowed_layout(&self, layout: &str) -> bool {
        self.layouts.contains(&layout)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
