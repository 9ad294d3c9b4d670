//! Trigger values that configure a single validation condition.

use regex::Regex;

use crate::rules::Predicate;

/// Configuration value for one condition kind.
///
/// A condition can be configured with the bare value (`.min_length(8)`) or
/// with a wrapper carrying a custom error message
/// (`Trigger::with_error(8, "too short")`). Both forms resolve through the
/// same accessors, so the evaluator never branches on the shape.
///
/// # Examples
///
/// ```
/// use formcheck::Trigger;
///
/// let plain: Trigger<usize> = 8.into();
/// assert_eq!(*plain.value(), 8);
/// assert_eq!(plain.message(), None);
///
/// let custom = Trigger::with_error(8, "too short");
/// assert_eq!(*custom.value(), 8);
/// assert_eq!(custom.message(), Some("too short"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger<T> {
    /// Bare configuration value.
    Plain(T),
    /// Configuration value plus an optional custom error message.
    WithMessage {
        value: T,
        error: Option<String>,
    },
}

impl<T> Trigger<T> {
    /// Wrapper trigger with a custom error message.
    pub fn with_error(value: T, error: impl Into<String>) -> Self {
        Trigger::WithMessage {
            value,
            error: Some(error.into()),
        }
    }

    /// The configured value, regardless of shape.
    pub fn value(&self) -> &T {
        match self {
            Trigger::Plain(value) => value,
            Trigger::WithMessage { value, .. } => value,
        }
    }

    /// The custom error message, if one was supplied.
    pub fn message(&self) -> Option<&str> {
        match self {
            Trigger::Plain(_) => None,
            Trigger::WithMessage { error, .. } => error.as_deref(),
        }
    }

    /// The custom message if present, otherwise the kind's default.
    pub fn message_or(&self, default: impl FnOnce() -> String) -> String {
        match self.message() {
            Some(message) => message.to_string(),
            None => default(),
        }
    }
}

impl From<bool> for Trigger<bool> {
    fn from(value: bool) -> Self {
        Trigger::Plain(value)
    }
}

impl From<usize> for Trigger<usize> {
    fn from(value: usize) -> Self {
        Trigger::Plain(value)
    }
}

impl From<Regex> for Trigger<Regex> {
    fn from(value: Regex) -> Self {
        Trigger::Plain(value)
    }
}

impl From<String> for Trigger<String> {
    fn from(value: String) -> Self {
        Trigger::Plain(value)
    }
}

impl From<&str> for Trigger<String> {
    fn from(value: &str) -> Self {
        Trigger::Plain(value.to_string())
    }
}

impl From<Predicate> for Trigger<Predicate> {
    fn from(value: Predicate) -> Self {
        Trigger::Plain(value)
    }
}
