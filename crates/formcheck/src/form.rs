//! Form-level aggregation over per-field verdicts.

use std::collections::HashMap;

use crate::field::validate_field;
use crate::rules::RuleCatalog;
use crate::verdict::FormVerdict;

/// Submitted form values, keyed by field name.
pub type FormData = HashMap<String, String>;

/// Evaluate every submitted field against the catalog.
///
/// A single pass over `data`: fields without a catalog entry are skipped
/// and contribute nothing to the result; fields with one are delegated to
/// [`validate_field`] and their error lists recorded under the field name,
/// an empty list when the field passed. Catalog entries for fields that
/// were not submitted are never visited. An empty form is valid.
///
/// # Examples
///
/// ```
/// use formcheck::{validate_form, FieldRules, FormData, RuleCatalog};
///
/// let catalog = RuleCatalog::new()
///     .field("email", FieldRules::new().required(true).has_special(true));
///
/// let mut form = FormData::new();
/// form.insert("email".to_string(), "user@example.com".to_string());
/// form.insert("note".to_string(), "no rules for me".to_string());
///
/// let verdict = validate_form(&form, &catalog);
/// assert!(verdict.valid);
/// assert_eq!(verdict.field_errors("email"), Some(&[][..]));
/// assert_eq!(verdict.field_errors("note"), None);
/// ```
pub fn validate_form(data: &FormData, rules: &RuleCatalog) -> FormVerdict {
    let mut errors = HashMap::new();
    let mut valid = true;

    for (field, value) in data {
        let Some(field_rules) = rules.get(field) else {
            continue;
        };

        let verdict = validate_field(field, value, field_rules);
        valid = valid && verdict.valid;
        errors.insert(field.clone(), verdict.errors);
    }

    tracing::trace!(fields = data.len(), checked = errors.len(), valid, "form validated");

    FormVerdict { valid, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FieldRules;

    fn form(entries: &[(&str, &str)]) -> FormData {
        entries
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_form_and_catalog_pass() {
        let verdict = validate_form(&FormData::new(), &RuleCatalog::new());
        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn test_uncataloged_fields_are_skipped() {
        let catalog = RuleCatalog::new().field("a", FieldRules::new().required(true));
        let verdict = validate_form(&form(&[("a", "x"), ("b", "y")]), &catalog);

        assert!(verdict.valid);
        assert!(verdict.errors.contains_key("a"));
        assert!(!verdict.errors.contains_key("b"));
    }

    #[test]
    fn test_catalog_entry_without_submission_is_ignored() {
        let catalog = RuleCatalog::new().field("email", FieldRules::new().required(true));
        let verdict = validate_form(&form(&[("name", "Welcome")]), &catalog);

        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn test_one_failing_field_invalidates_the_form() {
        let catalog = RuleCatalog::new()
            .field("first", FieldRules::new().min_length(3usize))
            .field("last", FieldRules::new().min_length(3usize));
        let verdict = validate_form(&form(&[("first", "Marcus"), ("last", "Br")]), &catalog);

        assert!(!verdict.valid);
        assert_eq!(verdict.field_errors("first"), Some(&[][..]));
        assert_eq!(
            verdict.field_errors("last"),
            Some(&["Field last is shorter than 3".to_string()][..])
        );
    }
}
