//! The rule set
//!
//! A [`Rule`] is a pure check over a single [`Value`] paired with the
//! message reported when the check fails. Rules hold no state beyond their
//! parameters, never mutate the value, and give the same verdict every time
//! they see the same input.
//!
//! Each rule is a small struct with a constructor function, so rules can be
//! used on their own or handed to [`Validator::check`](crate::Validator::check).
//!
//! # Example
//!
//! ```rust
//! use checkmate::rules::*;
//! use checkmate::Value;
//!
//! assert!(is_email().check(&Value::from("test@example.com")));
//! assert!(!is_email().check(&Value::from("invalid-email")));
//!
//! let rule = min_length(3);
//! assert_eq!(
//!     rule.evaluate(&Value::from("Hi")),
//!     Err("Value must have at least 3 characters.".into())
//! );
//! ```

use std::borrow::Cow;

use crate::Value;

mod custom;
mod membership;
mod parse;
mod pattern;
mod text;
mod types;

pub use custom::{custom, Custom};
pub use membership::{is_in, IsIn};
pub use parse::{is_date, is_url, IsDate, IsUrl};
pub use pattern::{
    is_alpha, is_alpha_numeric, is_alpha_space, is_alphanumeric_space, is_credit_card, is_email,
    is_hex_color, is_name, is_phone_number, is_postal_code, is_strong_password, is_uuid, IsAlpha,
    IsAlphaNumeric, IsAlphaSpace, IsAlphanumericSpace, IsCreditCard, IsEmail, IsHexColor, IsName,
    IsPhoneNumber, IsPostalCode, IsStrongPassword, IsUuid,
};
pub use text::{
    is_lowercase, is_uppercase, max_length, min_length, IsLowercase, IsUppercase, MaxLength,
    MinLength,
};
pub use types::{
    is_boolean, is_empty, is_number, is_string, IsBoolean, IsEmpty, IsNumber, IsString,
};

/// A named, pure predicate over a [`Value`] with a failure message.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use checkmate::rules::Rule;
/// use checkmate::Value;
///
/// struct IsPositive;
///
/// impl Rule for IsPositive {
///     fn check(&self, value: &Value) -> bool {
///         value.as_number().is_some_and(|n| n > 0.0)
///     }
///
///     fn message(&self) -> Cow<'static, str> {
///         Cow::Borrowed("Value must be positive.")
///     }
/// }
///
/// assert!(IsPositive.check(&Value::from(3)));
/// assert_eq!(IsPositive.evaluate(&Value::from(-3)), Err("Value must be positive.".into()));
/// ```
pub trait Rule: Send + Sync {
    /// Whether `value` passes this rule.
    fn check(&self, value: &Value) -> bool;

    /// The message recorded when the rule fails.
    fn message(&self) -> Cow<'static, str>;

    /// Check `value` and pair a failure with its message.
    fn evaluate(&self, value: &Value) -> Result<(), Cow<'static, str>> {
        if self.check(value) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        (**self).check(value)
    }

    fn message(&self) -> Cow<'static, str> {
        (**self).message()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        (**self).check(value)
    }

    fn message(&self) -> Cow<'static, str> {
        (**self).message()
    }
}
