//! Shared validation outcome

use serde::Serialize;

/// Outcome of a whitelist gate
///
/// Gates never stop at the first violation; `errors` lists every one found,
/// in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    /// Human-readable violations
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build result from collected errors
    #[inline]
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Passing result
    #[inline]
    #[must_use]
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Convert into `Ok(())` or the error list
    pub fn into_result(self) -> Result<(), Vec<String>> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
