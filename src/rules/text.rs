//! Length and letter-case rules
//!
//! All of these fail for non-string values. Lengths are counted in UTF-16
//! code units so that `"😀"` has length 2, as it does for browser form
//! validation.

use std::borrow::Cow;

use super::Rule;
use crate::Value;

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// String must have at least `min` characters.
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    min: usize,
}

impl Rule for MinLength {
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| utf16_len(s) >= self.min)
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Value must have at least {} characters.", self.min))
    }
}

/// Create a rule that requires a string of at least `min` characters.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(min_length(3).check(&Value::from("Hello")));
/// assert!(min_length(3).check(&Value::from("abc")));
/// assert!(!min_length(3).check(&Value::from("Hi")));
/// assert!(!min_length(0).check(&Value::from(12345)));
/// ```
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

/// String must have at most `max` characters.
#[derive(Clone, Copy, Debug)]
pub struct MaxLength {
    max: usize,
}

impl Rule for MaxLength {
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| utf16_len(s) <= self.max)
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Value must have at most {} characters.", self.max))
    }
}

/// Create a rule that requires a string of at most `max` characters.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(max_length(5).check(&Value::from("Hello")));
/// assert!(!max_length(5).check(&Value::from("HelloWorld")));
/// ```
pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

/// String must equal its own lowercase form.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsLowercase;

impl Rule for IsLowercase {
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| s == s.to_lowercase())
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be in lowercase.")
    }
}

/// Create a rule that requires a lowercase string.
///
/// Characters without case (digits, punctuation) are ignored, so `"abc-123"`
/// passes.
pub fn is_lowercase() -> IsLowercase {
    IsLowercase
}

/// String must equal its own uppercase form.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUppercase;

impl Rule for IsUppercase {
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| s == s.to_uppercase())
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be in uppercase.")
    }
}

/// Create a rule that requires an uppercase string.
pub fn is_uppercase() -> IsUppercase {
    IsUppercase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(min_length(5).check(&Value::from("Hello")));
        assert!(max_length(5).check(&Value::from("Hello")));
        assert!(!min_length(6).check(&Value::from("Hello")));
        assert!(!max_length(4).check(&Value::from("Hello")));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(min_length(2).check(&Value::from("😀")));
        assert!(!max_length(1).check(&Value::from("😀")));
        assert!(max_length(1).check(&Value::from("é")));
    }

    #[test]
    fn test_length_rules_reject_non_strings() {
        assert!(!max_length(100).check(&Value::from(1)));
        assert!(!max_length(100).check(&Value::Absent));
    }

    #[test]
    fn test_length_messages_interpolate() {
        assert_eq!(
            min_length(8).message(),
            "Value must have at least 8 characters."
        );
        assert_eq!(max_length(2).message(), "Value must have at most 2 characters.");
    }

    #[test]
    fn test_case_rules() {
        assert!(is_lowercase().check(&Value::from("hello world 42")));
        assert!(!is_lowercase().check(&Value::from("Hello")));
        assert!(is_uppercase().check(&Value::from("HELLO-1")));
        assert!(!is_uppercase().check(&Value::from("HELLo")));
        assert!(!is_uppercase().check(&Value::from(7)));
    }

    #[test]
    fn test_case_rules_accept_empty_string() {
        assert!(is_lowercase().check(&Value::from("")));
        assert!(is_uppercase().check(&Value::from("")));
    }
}
