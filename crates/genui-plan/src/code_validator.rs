//! Textual gate over generated UI source
//!
//! A heuristic pattern check, not a parser and not a sandbox. Code that passes
//! is still untrusted wherever it ends up being rendered.

use crate::registry::UI_MODULE_PATH;
use crate::validation::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

const DEFAULT_EXPORT_MARKER: &str = "export default function";

struct ForbiddenPattern {
    pattern: Lazy<Regex>,
    message: &'static str,
}

// Reported in this order.
static FORBIDDEN_PATTERNS: [ForbiddenPattern; 3] = [
    ForbiddenPattern {
        pattern: Lazy::new(|| Regex::new(r"style\s*=\s*\{").expect("valid regex")),
        message: "Inline styles are not allowed",
    },
    ForbiddenPattern {
        pattern: Lazy::new(|| Regex::new(r"dangerouslySetInnerHTML").expect("valid regex")),
        message: "dangerouslySetInnerHTML is not allowed",
    },
    ForbiddenPattern {
        pattern: Lazy::new(|| Regex::new(r"eval\(").expect("valid regex")),
        message: "eval() is not allowed",
    },
];

static IMPORT_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*import\b").expect("valid regex"));

static SANCTIONED_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"from\s*['"]{}['"]"#,
        regex::escape(UI_MODULE_PATH)
    ))
    .expect("valid regex")
});

/// Check generated source against the code conventions
///
/// Every check runs regardless of earlier failures. Error order: missing
/// default export, then forbidden patterns in declared order, then the
/// import-path check.
#[must_use]
pub fn validate_code(code: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if !code.contains(DEFAULT_EXPORT_MARKER) {
        errors.push("Code must export a default function component".to_string());
    }

    for forbidden in &FORBIDDEN_PATTERNS {
        if forbidden.pattern.is_match(code) {
            errors.push(forbidden.message.to_string());
        }
    }

    if IMPORT_STATEMENT.is_match(code) && !SANCTIONED_IMPORT.is_match(code) {
        errors.push(format!("Components must be imported from '{UI_MODULE_PATH}'"));
    }

    ValidationResult::from_errors(errors)
}
