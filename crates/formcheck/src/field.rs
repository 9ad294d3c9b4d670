//! Per-field rule interpreter.

use crate::rules::FieldRules;
use crate::validators;
use crate::verdict::FieldVerdict;

/// Evaluate one field's value against its rule set.
///
/// Conditions run in a fixed order: `required`, `pattern`, `minLength`,
/// `maxLength`, `hasUpper`, `hasLower`, `hasSpecial`, `hasNum`, `equal`,
/// `custom`. Unset conditions are skipped. Failures accumulate: there is
/// no short-circuit, so one call reports every failing condition, one
/// message per kind, in that order. The order of `errors` in the returned
/// verdict is part of the contract.
///
/// The four character-class conditions are symmetric: a `true` trigger
/// fails when the class is absent, a `false` trigger fails when the class
/// is present. `required` never fails on a `false` trigger.
///
/// # Examples
///
/// ```
/// use formcheck::{validate_field, FieldRules};
///
/// let rules = FieldRules::new().required(true).min_length(8);
///
/// let verdict = validate_field("password", "hunter2", &rules);
/// assert!(!verdict.valid);
/// assert_eq!(verdict.errors, vec!["Field password is shorter than 8"]);
/// ```
pub fn validate_field(label: &str, value: &str, rules: &FieldRules) -> FieldVerdict {
    let mut errors = Vec::new();

    if let Some(required) = &rules.required {
        if *required.value() && value.is_empty() {
            errors.push(required.message_or(|| format!("Field {label} is required")));
        }
    }

    if let Some(pattern) = &rules.pattern {
        if !pattern.value().is_match(value) {
            errors.push(pattern.message_or(|| format!("Field {label} has invalid format")));
        }
    }

    if let Some(min_length) = &rules.min_length {
        let bound = *min_length.value();
        if value.len() < bound {
            errors.push(min_length.message_or(|| format!("Field {label} is shorter than {bound}")));
        }
    }

    if let Some(max_length) = &rules.max_length {
        let bound = *max_length.value();
        if value.len() > bound {
            errors.push(max_length.message_or(|| format!("Field {label} is longer than {bound}")));
        }
    }

    if let Some(has_upper) = &rules.has_upper {
        if *has_upper.value() != validators::has_uppercase(value) {
            errors.push(has_upper.message_or(|| {
                format!("Field {label} does not have an uppercase character")
            }));
        }
    }

    if let Some(has_lower) = &rules.has_lower {
        if *has_lower.value() != validators::has_lowercase(value) {
            errors.push(has_lower.message_or(|| {
                format!("Field {label} does not have a lowercase character")
            }));
        }
    }

    if let Some(has_special) = &rules.has_special {
        if *has_special.value() != validators::has_special_char(value) {
            errors.push(
                has_special.message_or(|| format!("Field {label} does not have a special character")),
            );
        }
    }

    if let Some(has_num) = &rules.has_num {
        if *has_num.value() != validators::has_digit(value) {
            errors.push(has_num.message_or(|| format!("Field {label} does not have a number")));
        }
    }

    if let Some(equal) = &rules.equal {
        let target = equal.value();
        if value != target {
            errors.push(equal.message_or(|| format!("Field {label} not equal to {target}")));
        }
    }

    if let Some(custom) = &rules.custom {
        if !custom.value().test(value) {
            errors.push(custom.message_or(|| format!("Field {label} does not pass custom test")));
        }
    }

    tracing::trace!(field = %label, failures = errors.len(), "field validated");

    FieldVerdict::from_errors(errors)
}
