//! # formcheck
//!
//! Declarative validation for flat string forms: attach a rule set to each
//! field, evaluate a submission, get back a pass/fail verdict and
//! human-readable error messages per field.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck::{validate_form, FieldRules, FormData, RuleCatalog, Trigger};
//!
//! let catalog = RuleCatalog::new()
//!     .field(
//!         "email",
//!         FieldRules::new().required(true).has_special(true),
//!     )
//!     .field(
//!         "password",
//!         FieldRules::new()
//!             .min_length(Trigger::with_error(8, "Password must be at least 8 characters"))
//!             .has_upper(true)
//!             .has_num(true),
//!     );
//!
//! let mut form = FormData::new();
//! form.insert("email".to_string(), "user@example.com".to_string());
//! form.insert("password".to_string(), "hunter2".to_string());
//!
//! let verdict = validate_form(&form, &catalog);
//! assert!(!verdict.valid);
//! assert_eq!(
//!     verdict.first_error("password"),
//!     Some("Password must be at least 8 characters"),
//! );
//! ```
//!
//! Rule sets are plain data and can also be parsed from JSON (see
//! [`FieldRules::from_json`] and [`RuleCatalog::from_json`]); malformed
//! definitions are rejected as [`ConfigError`]s before anything is
//! evaluated, never reported as failed validations.
//!
//! Evaluation is synchronous and allocation-fresh per call: rule sets and
//! catalogs are read-only inputs and can be shared across threads.

pub mod error;
pub mod field;
pub mod form;
mod json;
pub mod rules;
pub mod trigger;
pub mod validators;
pub mod verdict;

pub use error::ConfigError;
pub use field::validate_field;
pub use form::{validate_form, FormData};
pub use rules::{ConditionKind, FieldRules, Predicate, RuleCatalog};
pub use trigger::Trigger;
pub use verdict::{FieldVerdict, FormVerdict};
