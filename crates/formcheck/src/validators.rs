//! Character-class checks used by the has* conditions.

use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static LOWER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

// Anything that is neither a word character nor whitespace.
static SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Check for an uppercase character A-Z
pub fn has_uppercase(value: &str) -> bool {
    UPPER_REGEX.is_match(value)
}

/// Check for a lowercase character a-z
pub fn has_lowercase(value: &str) -> bool {
    LOWER_REGEX.is_match(value)
}

/// Check for a digit 0-9
pub fn has_digit(value: &str) -> bool {
    DIGIT_REGEX.is_match(value)
}

/// Check for a special character
pub fn has_special_char(value: &str) -> bool {
    SPECIAL_REGEX.is_match(value)
}
