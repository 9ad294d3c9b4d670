//! Rule model: condition kinds, per-field rule sets, and the form catalog.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::trigger::Trigger;

/// The recognized condition kinds, in their fixed evaluation order.
///
/// `Display` renders the key spelling used by JSON rule sources and
/// configuration errors (`minLength`, `hasUpper`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Required,
    Pattern,
    MinLength,
    MaxLength,
    HasUpper,
    HasLower,
    HasSpecial,
    HasNum,
    Equal,
    Custom,
}

impl ConditionKind {
    /// The rule-set key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            ConditionKind::Required => "required",
            ConditionKind::Pattern => "pattern",
            ConditionKind::MinLength => "minLength",
            ConditionKind::MaxLength => "maxLength",
            ConditionKind::HasUpper => "hasUpper",
            ConditionKind::HasLower => "hasLower",
            ConditionKind::HasSpecial => "hasSpecial",
            ConditionKind::HasNum => "hasNum",
            ConditionKind::Equal => "equal",
            ConditionKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Caller-supplied check for the `custom` condition.
///
/// The wrapped function must be pure and total over strings: no side
/// effects, no panics, same verdict for the same input. It is shared by
/// reference, so cloning a rule set never clones the closure itself.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Predicate {
    pub fn new(check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Predicate(Arc::new(check))
    }

    /// Run the check against a field value.
    pub fn test(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Validation rule set for a single field.
///
/// One optional trigger per recognized condition kind. Unset conditions are
/// skipped entirely during evaluation. Build with the chainable setters:
///
/// ```
/// use formcheck::{FieldRules, Trigger};
///
/// let rules = FieldRules::new()
///     .required(true)
///     .min_length(Trigger::with_error(8, "too short"))
///     .has_num(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    pub required: Option<Trigger<bool>>,
    pub pattern: Option<Trigger<Regex>>,
    pub min_length: Option<Trigger<usize>>,
    pub max_length: Option<Trigger<usize>>,
    pub has_upper: Option<Trigger<bool>>,
    pub has_lower: Option<Trigger<bool>>,
    pub has_special: Option<Trigger<bool>>,
    pub has_num: Option<Trigger<bool>>,
    pub equal: Option<Trigger<String>>,
    pub custom: Option<Trigger<Predicate>>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on empty values when the trigger resolves to `true`. A `false`
    /// trigger is accepted and never fails.
    pub fn required(mut self, trigger: impl Into<Trigger<bool>>) -> Self {
        self.required = Some(trigger.into());
        self
    }

    /// Fail when the compiled pattern does not match the value.
    pub fn pattern(mut self, trigger: impl Into<Trigger<Regex>>) -> Self {
        self.pattern = Some(trigger.into());
        self
    }

    /// Fail when the value is shorter than the bound.
    pub fn min_length(mut self, trigger: impl Into<Trigger<usize>>) -> Self {
        self.min_length = Some(trigger.into());
        self
    }

    /// Fail when the value is longer than the bound.
    pub fn max_length(mut self, trigger: impl Into<Trigger<usize>>) -> Self {
        self.max_length = Some(trigger.into());
        self
    }

    /// `true` asserts an uppercase character is present, `false` asserts
    /// none is.
    pub fn has_upper(mut self, trigger: impl Into<Trigger<bool>>) -> Self {
        self.has_upper = Some(trigger.into());
        self
    }

    /// `true` asserts a lowercase character is present, `false` asserts
    /// none is.
    pub fn has_lower(mut self, trigger: impl Into<Trigger<bool>>) -> Self {
        self.has_lower = Some(trigger.into());
        self
    }

    /// `true` asserts a special (non-word, non-space) character is present,
    /// `false` asserts none is.
    pub fn has_special(mut self, trigger: impl Into<Trigger<bool>>) -> Self {
        self.has_special = Some(trigger.into());
        self
    }

    /// `true` asserts a digit is present, `false` asserts none is.
    pub fn has_num(mut self, trigger: impl Into<Trigger<bool>>) -> Self {
        self.has_num = Some(trigger.into());
        self
    }

    /// Fail when the value differs from the target string.
    pub fn equal(mut self, trigger: impl Into<Trigger<String>>) -> Self {
        self.equal = Some(trigger.into());
        self
    }

    /// Fail when the predicate rejects the value.
    pub fn custom(mut self, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.custom = Some(Trigger::Plain(Predicate::new(check)));
        self
    }

    /// Fail when the predicate rejects the value, reporting a custom
    /// message.
    pub fn custom_trigger(mut self, trigger: impl Into<Trigger<Predicate>>) -> Self {
        self.custom = Some(trigger.into());
        self
    }

    /// True when no condition is configured.
    pub fn is_empty(&self) -> bool {
        self.required.is_none()
            && self.pattern.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.has_upper.is_none()
            && self.has_lower.is_none()
            && self.has_special.is_none()
            && self.has_num.is_none()
            && self.equal.is_none()
            && self.custom.is_none()
    }
}

/// Rule sets for a whole form, keyed by field name.
///
/// Fields submitted without a catalog entry are skipped by
/// [`validate_form`](crate::validate_form); catalog entries for fields not
/// submitted are never visited.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    fields: HashMap<String, FieldRules>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert for building a catalog inline.
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, rules: FieldRules) {
        self.fields.insert(name.into(), rules);
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field name, rule set)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_kind_keys_match_rule_spelling() {
        assert_eq!(ConditionKind::MinLength.to_string(), "minLength");
        assert_eq!(ConditionKind::HasUpper.to_string(), "hasUpper");
        assert_eq!(ConditionKind::Required.to_string(), "required");
    }

    #[test]
    fn test_builder_sets_conditions() {
        let rules = FieldRules::new().required(true).min_length(4);
        assert!(rules.required.is_some());
        assert!(rules.min_length.is_some());
        assert!(rules.max_length.is_none());
        assert!(!rules.is_empty());
    }

    #[test]
    fn test_empty_rules() {
        assert!(FieldRules::new().is_empty());
    }

    #[test]
    fn test_predicate_runs_closure() {
        let predicate = Predicate::new(|value| value.len() > 2);
        assert!(predicate.test("abc"));
        assert!(!predicate.test("ab"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = RuleCatalog::new().field("email", FieldRules::new().required(true));
        assert!(catalog.get("email").is_some());
        assert!(catalog.get("name").is_none());
        assert_eq!(catalog.len(), 1);
    }
}
