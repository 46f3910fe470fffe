//! Fluent validator with message accumulation
//!
//! A [`Validator`] wraps one [`Value`] and an ordered list of failure
//! messages. Every check method runs its rule, records the rule's message if
//! it fails, and hands back the same validator so further checks can be
//! chained. Nothing short-circuits: every check you ask for runs, and every
//! failure is kept, in call order.
//!
//! # Example
//!
//! ```rust
//! use checkmate::Validator;
//!
//! let mut username = Validator::new("ab");
//! username.is_string().min_length(3).is_alpha_numeric();
//!
//! assert!(!username.is_valid());
//! assert_eq!(username.errors(), ["Value must have at least 3 characters."]);
//!
//! // Ad hoc checks read as a single expression
//! assert!(Validator::new("Hello").is_string().max_length(5).is_valid());
//! ```

use crate::rules::{self, Rule};
use crate::Value;

/// Validates a single value, collecting a message for each failed check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validator {
    value: Value,
    errors: Vec<String>,
}

macro_rules! rule_methods {
    ($( $(#[$meta:meta])* $method:ident => $rule:expr; )+) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self) -> &mut Self {
                self.check(&$rule)
            }
        )+
    };
}

impl Validator {
    /// Create a validator for `value` with no recorded errors.
    pub fn new(value: impl Into<Value>) -> Self {
        Validator {
            value: value.into(),
            errors: Vec::new(),
        }
    }

    /// Create a validator for a missing value.
    pub fn absent() -> Self {
        Self::new(Value::Absent)
    }

    /// The value under test.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Run any [`Rule`] against the value, recording its message on failure.
    ///
    /// This is what every named check method does; use it directly for
    /// custom rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkmate::rules::is_uuid;
    /// use checkmate::Validator;
    ///
    /// let mut v = Validator::new("not-a-uuid");
    /// v.check(&is_uuid()).check(&is_uuid());
    /// assert_eq!(v.errors().len(), 2);
    /// ```
    pub fn check<R: Rule + ?Sized>(&mut self, rule: &R) -> &mut Self {
        if let Err(message) = rule.evaluate(&self.value) {
            self.errors.push(message.into_owned());
        }
        self
    }

    rule_methods! {
        /// Value must be a string.
        is_string => rules::is_string();
        /// Value must be a number other than `NaN`.
        is_number => rules::is_number();
        /// Value must be a boolean.
        is_boolean => rules::is_boolean();
        /// Value must be a valid email address.
        is_email => rules::is_email();
        /// Value must be an absolute URL.
        is_url => rules::is_url();
        /// Value must not be empty: fails for `""`, null and absent values.
        is_empty => rules::is_empty();
        /// Value must be a parseable date string.
        is_date => rules::is_date();
        /// Value must contain only ASCII letters.
        is_alpha => rules::is_alpha();
        /// Value must contain only ASCII letters and digits.
        is_alpha_numeric => rules::is_alpha_numeric();
        /// Value must be a phone number.
        is_phone_number => rules::is_phone_number();
        /// Value must be a sixteen-digit card number.
        is_credit_card => rules::is_credit_card();
        /// Value must be a hyphenated UUID.
        is_uuid => rules::is_uuid();
        /// Value must be a lowercase string.
        is_lowercase => rules::is_lowercase();
        /// Value must be an uppercase string.
        is_uppercase => rules::is_uppercase();
        /// Value must be a US postal code.
        is_postal_code => rules::is_postal_code();
        /// Value must contain only letters and spaces.
        is_name => rules::is_name();
        /// Value must contain only letters, digits and spaces.
        is_alphanumeric_space => rules::is_alphanumeric_space();
        /// Value must contain only letters and spaces.
        is_alpha_space => rules::is_alpha_space();
        /// Value must be a `#rgb` or `#rrggbb` color code.
        is_hex_color => rules::is_hex_color();
        /// Value must be a strong password.
        is_strong_password => rules::is_strong_password();
    }

    /// Value must be a string of at least `min` characters.
    pub fn min_length(&mut self, min: usize) -> &mut Self {
        self.check(&rules::min_length(min))
    }

    /// Value must be a string of at most `max` characters.
    pub fn max_length(&mut self, max: usize) -> &mut Self {
        self.check(&rules::max_length(max))
    }

    /// Value must equal one of `candidates`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkmate::Validator;
    ///
    /// let mut v = Validator::new("cherry");
    /// v.is_in(["apple", "banana"]);
    /// assert_eq!(v.errors(), ["Value must be one of: apple, banana"]);
    /// ```
    pub fn is_in<I, T>(&mut self, candidates: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.check(&rules::is_in(candidates))
    }

    /// True when no check has failed so far.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded messages, in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the validator, returning its messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Consume the validator, returning the value if every check passed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkmate::{Validator, Value};
    ///
    /// let mut v = Validator::new("x");
    /// v.is_string();
    /// assert_eq!(v.into_result(), Ok(Value::from("x")));
    ///
    /// let mut v = Validator::new(1);
    /// v.is_string().is_email();
    /// assert_eq!(v.into_result().unwrap_err().len(), 2);
    /// ```
    pub fn into_result(self) -> Result<Value, Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}
