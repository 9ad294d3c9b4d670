//! Configuration errors raised by malformed rule definitions.

use thiserror::Error;

use crate::rules::ConditionKind;

/// A rule definition itself is invalid.
///
/// Configuration errors are programmer mistakes, reported before any
/// condition is evaluated and never mixed with validation failures: a
/// malformed rule set produces an `Err`, never a failing
/// [`FieldVerdict`](crate::FieldVerdict).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A condition's trigger has the wrong type for its kind, e.g.
    /// `{"required": "yes"}`.
    #[error("Field {field} has invalid {kind} value")]
    InvalidTrigger {
        field: String,
        kind: ConditionKind,
    },

    /// A `pattern` trigger's regex source failed to compile.
    #[error("Field {field} has invalid pattern value: {source}")]
    InvalidPattern {
        field: String,
        source: regex::Error,
    },

    /// A field's rule set is not an object.
    #[error("Field {field} has invalid rule")]
    InvalidRuleSet { field: String },

    /// The rule catalog is not an object of per-field rule sets.
    #[error("rule catalog must be an object")]
    InvalidCatalog,
}

impl ConfigError {
    /// The field the error names, when one exists.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidTrigger { field, .. }
            | ConfigError::InvalidPattern { field, .. }
            | ConfigError::InvalidRuleSet { field } => Some(field),
            ConfigError::InvalidCatalog => None,
        }
    }

    /// The condition kind the error names, when one exists.
    pub fn kind(&self) -> Option<ConditionKind> {
        match self {
            ConfigError::InvalidTrigger { kind, .. } => Some(*kind),
            ConfigError::InvalidPattern { .. } => Some(ConditionKind::Pattern),
            _ => None,
        }
    }
}
