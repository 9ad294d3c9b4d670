//! Validation outcomes for a single field and for a whole form.

use std::collections::HashMap;

use serde::Serialize;

/// Outcome of validating one field.
///
/// `errors` holds one message per failing condition, in the fixed
/// evaluation order. The list is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl FieldVerdict {
    /// Verdict with no failing conditions.
    pub fn pass() -> Self {
        FieldVerdict {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Verdict built from accumulated error messages.
    pub fn from_errors(errors: Vec<String>) -> Self {
        FieldVerdict {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|message| message.as_str())
    }
}

/// Outcome of validating a whole form.
///
/// Every submitted field with a catalog entry gets an entry in `errors`,
/// empty when the field passed. Submitted fields without a catalog entry
/// are absent. `valid` is true exactly when every entry's list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormVerdict {
    pub valid: bool,
    pub errors: HashMap<String, Vec<String>>,
}

impl FormVerdict {
    /// Verdict for an empty or rule-free form.
    pub fn pass() -> Self {
        FormVerdict {
            valid: true,
            errors: HashMap::new(),
        }
    }

    /// True when any field failed.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|errors| !errors.is_empty())
    }

    /// All error messages recorded for a field.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|errors| errors.as_slice())
    }

    /// First error message recorded for a field.
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(|message| message.as_str())
    }
}
