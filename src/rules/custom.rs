//! Caller-defined rules

use std::borrow::Cow;
use std::fmt;

use super::Rule;
use crate::Value;

/// A rule built from a closure and a fixed message.
pub struct Custom<F> {
    check: F,
    message: Cow<'static, str>,
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<F> Rule for Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    fn message(&self) -> Cow<'static, str> {
        self.message.clone()
    }
}

/// Create a rule from a predicate closure and the message to record when it
/// returns `false`.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::custom;
/// use checkmate::{Validator, Value};
///
/// let even = custom(
///     |v: &Value| v.as_number().is_some_and(|n| n % 2.0 == 0.0),
///     "Value must be even.",
/// );
///
/// let mut validator = Validator::new(3);
/// validator.is_number().check(&even);
/// assert_eq!(validator.errors(), ["Value must be even."]);
/// ```
pub fn custom<F, M>(check: F, message: M) -> Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
    M: Into<Cow<'static, str>>,
{
    Custom {
        check,
        message: message.into(),
    }
}
