//! Type rules
//!
//! Checks on the kind of value rather than its contents.

use std::borrow::Cow;

use super::Rule;
use crate::Value;

/// Value must be a string.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsString;

impl Rule for IsString {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_string()
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be a string.")
    }
}

/// Create a rule that requires a string.
pub fn is_string() -> IsString {
    IsString
}

/// Value must be a number other than `NaN`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNumber;

impl Rule for IsNumber {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_number().is_some_and(|n| !n.is_nan())
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be a number.")
    }
}

/// Create a rule that requires a number.
///
/// `NaN` fails even though it is stored as a number. Infinities pass.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(is_number().check(&Value::from(42)));
/// assert!(!is_number().check(&Value::from(f64::NAN)));
/// assert!(!is_number().check(&Value::from("42")));
/// ```
pub fn is_number() -> IsNumber {
    IsNumber
}

/// Value must be a boolean.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBoolean;

impl Rule for IsBoolean {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_bool().is_some()
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be a boolean.")
    }
}

/// Create a rule that requires a boolean.
pub fn is_boolean() -> IsBoolean {
    IsBoolean
}

/// Fails when the value is empty: the empty string, null, or absent.
///
/// Named for the check it performs; every other value passes.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl Rule for IsEmpty {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !(value.is_nullish() || value.as_str() == Some(""))
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must not be empty.")
    }
}

/// Create a rule that rejects empty values.
///
/// `0`, `false` and whitespace-only strings are not empty.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(!is_empty().check(&Value::from("")));
/// assert!(!is_empty().check(&Value::Absent));
/// assert!(is_empty().check(&Value::from(0)));
/// assert!(is_empty().check(&Value::from(" ")));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_string() {
        assert!(is_string().check(&Value::from("")));
        assert!(!is_string().check(&Value::from(123)));
        assert!(!is_string().check(&Value::Absent));
    }

    #[test]
    fn test_is_number_accepts_infinity() {
        assert!(is_number().check(&Value::from(f64::INFINITY)));
        assert!(is_number().check(&Value::from(-0.5)));
    }

    #[test]
    fn test_is_number_rejects_nan_and_others() {
        assert!(!is_number().check(&Value::from(f64::NAN)));
        assert!(!is_number().check(&Value::Null));
        assert!(!is_number().check(&Value::from(true)));
    }

    #[test]
    fn test_is_boolean() {
        assert!(is_boolean().check(&Value::from(false)));
        assert!(!is_boolean().check(&Value::from("true")));
        assert!(!is_boolean().check(&Value::from(1)));
    }

    #[test]
    fn test_is_empty_treats_null_and_absent_alike() {
        assert_eq!(
            is_empty().check(&Value::Null),
            is_empty().check(&Value::Absent)
        );
        assert!(!is_empty().check(&Value::Null));
    }

    #[test]
    fn test_is_empty_passes_falsy_non_empty_values() {
        assert!(is_empty().check(&Value::from(false)));
        assert!(is_empty().check(&Value::from(0)));
        assert!(is_empty().check(&Value::Array(vec![])));
    }
}
