//! JSON rule source.
//!
//! Rule sets are plain data and often arrive as JSON. The typed builder on
//! [`FieldRules`] is for rules defined in Rust, this module is for rules
//! defined elsewhere. Parsing performs the per-kind trigger type checks, so
//! a malformed catalog is rejected in full before anything is evaluated;
//! the result is an ordinary [`FieldRules`]/[`RuleCatalog`] that can never
//! fail configuration again.

use regex::Regex;
use serde_json::Value;

use crate::error::ConfigError;
use crate::rules::{ConditionKind, FieldRules, RuleCatalog};
use crate::trigger::Trigger;

impl FieldRules {
    /// Parse one field's rule set from JSON.
    ///
    /// Each condition accepts its bare trigger value or a wrapper object
    /// `{"value": ..., "error": "custom message"}`. A `null` trigger
    /// disables the condition. Unrecognized keys are ignored. A trigger of
    /// the wrong type for its kind is a [`ConfigError`] naming the field
    /// and the kind. `custom` is never expressible in JSON, so any value
    /// under that key is rejected.
    ///
    /// ```
    /// use formcheck::FieldRules;
    /// use serde_json::json;
    ///
    /// let rules = FieldRules::from_json(
    ///     "password",
    ///     &json!({
    ///         "required": true,
    ///         "minLength": { "value": 8, "error": "too short" },
    ///         "hasNum": true,
    ///     }),
    /// )
    /// .unwrap();
    /// assert!(rules.required.is_some());
    ///
    /// assert!(FieldRules::from_json("x", &json!({ "required": "yes" })).is_err());
    /// ```
    pub fn from_json(label: &str, raw: &Value) -> Result<FieldRules, ConfigError> {
        let Some(map) = raw.as_object() else {
            tracing::debug!(field = %label, "rejected rule set: not an object");
            return Err(ConfigError::InvalidRuleSet {
                field: label.to_string(),
            });
        };

        let mut rules = FieldRules::new();

        for (key, value) in map {
            // A null trigger disables the condition it names.
            if value.is_null() {
                continue;
            }

            match key.as_str() {
                "required" => {
                    rules.required = Some(bool_trigger(label, ConditionKind::Required, value)?)
                }
                "pattern" => rules.pattern = Some(pattern_trigger(label, value)?),
                "minLength" => {
                    rules.min_length = Some(length_trigger(label, ConditionKind::MinLength, value)?)
                }
                "maxLength" => {
                    rules.max_length = Some(length_trigger(label, ConditionKind::MaxLength, value)?)
                }
                "hasUpper" => {
                    rules.has_upper = Some(bool_trigger(label, ConditionKind::HasUpper, value)?)
                }
                "hasLower" => {
                    rules.has_lower = Some(bool_trigger(label, ConditionKind::HasLower, value)?)
                }
                "hasSpecial" => {
                    rules.has_special = Some(bool_trigger(label, ConditionKind::HasSpecial, value)?)
                }
                "hasNum" => {
                    rules.has_num = Some(bool_trigger(label, ConditionKind::HasNum, value)?)
                }
                "equal" => rules.equal = Some(string_trigger(label, value)?),
                "custom" => return Err(reject(label, ConditionKind::Custom)),
                _ => {}
            }
        }

        Ok(rules)
    }
}

impl RuleCatalog {
    /// Parse a whole catalog from a JSON object of per-field rule sets.
    ///
    /// Fails on the first malformed entry; no partial catalog is returned.
    /// A `null` rule set disables its field.
    pub fn from_json(raw: &Value) -> Result<RuleCatalog, ConfigError> {
        let Some(map) = raw.as_object() else {
            tracing::debug!("rejected rule catalog: not an object");
            return Err(ConfigError::InvalidCatalog);
        };

        let mut catalog = RuleCatalog::new();
        for (field, raw_rules) in map {
            if raw_rules.is_null() {
                continue;
            }
            catalog.insert(field, FieldRules::from_json(field, raw_rules)?);
        }

        Ok(catalog)
    }
}

fn reject(label: &str, kind: ConditionKind) -> ConfigError {
    tracing::debug!(field = %label, kind = %kind, "rejected rule trigger");
    ConfigError::InvalidTrigger {
        field: label.to_string(),
        kind,
    }
}

/// Split a trigger into its inner value and optional custom message,
/// accepting both the bare form and the `{"value", "error"}` wrapper.
fn split_wrapper<'a>(
    label: &str,
    kind: ConditionKind,
    value: &'a Value,
) -> Result<(&'a Value, Option<String>), ConfigError> {
    let Some(object) = value.as_object() else {
        return Ok((value, None));
    };

    let inner = object.get("value").ok_or_else(|| reject(label, kind))?;
    let error = match object.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(_) => return Err(reject(label, kind)),
    };

    Ok((inner, error))
}

fn build<T>(value: T, error: Option<String>) -> Trigger<T> {
    match error {
        Some(message) => Trigger::with_error(value, message),
        None => Trigger::Plain(value),
    }
}

fn bool_trigger(label: &str, kind: ConditionKind, value: &Value) -> Result<Trigger<bool>, ConfigError> {
    let (inner, error) = split_wrapper(label, kind, value)?;
    let flag = inner.as_bool().ok_or_else(|| reject(label, kind))?;
    Ok(build(flag, error))
}

fn length_trigger(
    label: &str,
    kind: ConditionKind,
    value: &Value,
) -> Result<Trigger<usize>, ConfigError> {
    let (inner, error) = split_wrapper(label, kind, value)?;
    // as_u64 rejects negative and fractional bounds in one step.
    let bound = inner.as_u64().ok_or_else(|| reject(label, kind))?;
    Ok(build(bound as usize, error))
}

fn string_trigger(label: &str, value: &Value) -> Result<Trigger<String>, ConfigError> {
    let (inner, error) = split_wrapper(label, ConditionKind::Equal, value)?;
    let target = inner
        .as_str()
        .ok_or_else(|| reject(label, ConditionKind::Equal))?;
    Ok(build(target.to_string(), error))
}

fn pattern_trigger(label: &str, value: &Value) -> Result<Trigger<Regex>, ConfigError> {
    let (inner, error) = split_wrapper(label, ConditionKind::Pattern, value)?;
    let source = inner
        .as_str()
        .ok_or_else(|| reject(label, ConditionKind::Pattern))?;
    let regex = Regex::new(source).map_err(|source| {
        tracing::debug!(field = %label, "rejected pattern: regex failed to compile");
        ConfigError::InvalidPattern {
            field: label.to_string(),
            source,
        }
    })?;
    Ok(build(regex, error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_wrapper_triggers_parse() {
        let rules = FieldRules::from_json(
            "pw",
            &json!({
                "required": true,
                "minLength": { "value": 8, "error": "too short" },
                "equal": "secret",
            }),
        )
        .unwrap();

        assert_eq!(rules.required, Some(Trigger::Plain(true)));
        assert_eq!(rules.min_length, Some(Trigger::with_error(8, "too short")));
        assert_eq!(rules.equal, Some(Trigger::Plain("secret".to_string())));
    }

    #[test]
    fn test_wrong_trigger_type_names_field_and_kind() {
        let error = FieldRules::from_json("x", &json!({ "required": "yes" })).unwrap_err();
        match error {
            ConfigError::InvalidTrigger { field, kind } => {
                assert_eq!(field, "x");
                assert_eq!(kind, ConditionKind::Required);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrapper_with_wrong_inner_type_is_rejected() {
        let error = FieldRules::from_json("name", &json!({ "hasUpper": { "value": "wee" } }))
            .unwrap_err();
        assert_eq!(error.to_string(), "Field name has invalid hasUpper value");
    }

    #[test]
    fn test_null_trigger_disables_the_condition() {
        let rules = FieldRules::from_json("name", &json!({ "hasUpper": null })).unwrap();
        assert!(rules.has_upper.is_none());

        let error = FieldRules::from_json("name", &json!({ "hasUpper": { "value": null } }))
            .unwrap_err();
        assert_eq!(error.to_string(), "Field name has invalid hasUpper value");
    }

    #[test]
    fn test_negative_and_fractional_bounds_are_rejected() {
        assert!(FieldRules::from_json("pw", &json!({ "minLength": -1 })).is_err());
        assert!(FieldRules::from_json("pw", &json!({ "maxLength": 2.5 })).is_err());
    }

    #[test]
    fn test_pattern_compiles_eagerly() {
        let rules = FieldRules::from_json("email", &json!({ "pattern": "@" })).unwrap();
        assert!(rules.pattern.unwrap().value().is_match("a@b.com"));

        let error = FieldRules::from_json("email", &json!({ "pattern": "(" })).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_custom_is_not_expressible_in_json() {
        let error = FieldRules::from_json("x", &json!({ "custom": true })).unwrap_err();
        assert_eq!(error.to_string(), "Field x has invalid custom value");
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let rules = FieldRules::from_json("x", &json!({ "yes": true, "no": false })).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_rule_set_must_be_an_object() {
        let error = FieldRules::from_json("email", &json!([1, 2])).unwrap_err();
        assert_eq!(error.to_string(), "Field email has invalid rule");
    }

    #[test]
    fn test_catalog_parses_fields_and_skips_null() {
        let catalog = RuleCatalog::from_json(&json!({
            "email": { "required": true },
            "legacy": null,
        }))
        .unwrap();

        assert!(catalog.get("email").is_some());
        assert!(catalog.get("legacy").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_must_be_an_object() {
        assert!(matches!(
            RuleCatalog::from_json(&json!("rules")).unwrap_err(),
            ConfigError::InvalidCatalog
        ));
    }

    #[test]
    fn test_catalog_fails_fast_on_first_bad_entry() {
        let error = RuleCatalog::from_json(&json!({
            "ok": { "required": true },
            "bad": { "minLength": "eight" },
        }))
        .unwrap_err();
        assert_eq!(error.field(), Some("bad"));
        assert_eq!(error.kind(), Some(ConditionKind::MinLength));
    }
}
