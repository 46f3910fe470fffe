//! Pattern rules
//!
//! Format checks backed by regular expressions. Every rule here fails for
//! non-string values. Patterns are compiled once, on first use.
//!
//! `\d` is spelled `[0-9]` because `regex` treats `\d` as any Unicode digit.
//! Whitespace is the ECMAScript set: `regex`'s `\s` plus U+FEFF, minus U+0085.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::Rule;
use crate::Value;

pub(super) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

fn matches(re: &Regex, value: &Value) -> bool {
    value.as_str().is_some_and(|s| re.is_match(s))
}

macro_rules! space {
    () => {
        r"[\s\u{FEFF}&&[^\u{85}]]"
    };
}

macro_rules! pattern_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $regex:ident = $pattern:expr, $message:expr
    ) => {
        static $regex: LazyLock<Regex> = LazyLock::new(|| compile($pattern));

        $(#[$meta])*
        #[derive(Clone, Copy, Default, Debug)]
        pub struct $name;

        impl Rule for $name {
            #[inline]
            fn check(&self, value: &Value) -> bool {
                matches(&$regex, value)
            }

            fn message(&self) -> Cow<'static, str> {
                Cow::Borrowed($message)
            }
        }

        #[doc = concat!("Create the [`", stringify!($name), "`] rule.")]
        pub fn $ctor() -> $name {
            $name
        }
    };
}

pattern_rule!(
    /// String must look like `local@domain.tld`.
    IsEmail, is_email, EMAIL = concat!("^[^@", space!(), "]+@[^@", space!(), r"]+\.[^@", space!(), "]+$"),
    "Value must be a valid email."
);

pattern_rule!(
    /// String must contain only ASCII letters.
    IsAlpha, is_alpha, ALPHA = r"^[A-Za-z]+$",
    "Value must contain only alphabetic characters."
);

pattern_rule!(
    /// String must contain only ASCII letters and digits.
    IsAlphaNumeric, is_alpha_numeric, ALPHA_NUMERIC = r"^[A-Za-z0-9]+$",
    "Value must contain only alphanumeric characters."
);

pattern_rule!(
    /// String must be up to four groups of one to four digits, optionally
    /// separated by a space or dash and optionally prefixed with `+`.
    IsPhoneNumber, is_phone_number,
    PHONE = r"^[+]*[0-9]{1,4}[ -]?[0-9]{1,4}[ -]?[0-9]{1,4}[ -]?[0-9]{1,4}$",
    "Value must be a valid phone number."
);

pattern_rule!(
    /// String must be sixteen digits in groups of four, optionally separated
    /// by dashes or whitespace. No checksum is applied.
    IsCreditCard, is_credit_card, CREDIT_CARD = concat!("^([0-9]{4}[-", space!(), "]?){3}[0-9]{4}$"),
    "Value must be a valid credit card number."
);

pattern_rule!(
    /// String must be a hyphenated UUID of any version, either case.
    IsUuid, is_uuid,
    UUID = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    "Value must be a valid UUID."
);

pattern_rule!(
    /// String must be a US ZIP or ZIP+4 code.
    IsPostalCode, is_postal_code, POSTAL_CODE = r"^[0-9]{5}(?:-[0-9]{4})?$",
    "Value must be a valid postal code."
);

pattern_rule!(
    /// String must contain only letters and whitespace.
    IsName, is_name, NAME = concat!("^[A-Za-z", space!(), "]+$"),
    "Value must be a valid name (letters and spaces only)."
);

pattern_rule!(
    /// String must contain only letters, digits and whitespace.
    IsAlphanumericSpace, is_alphanumeric_space, ALPHANUMERIC_SPACE = concat!("^[A-Za-z0-9", space!(), "]+$"),
    "Value must be alphanumeric and spaces only."
);

pattern_rule!(
    /// String must contain only letters and whitespace.
    IsAlphaSpace, is_alpha_space, ALPHA_SPACE = concat!("^[A-Za-z", space!(), "]+$"),
    "Value must be alphabetic characters and spaces only."
);

pattern_rule!(
    /// String must be `#` followed by three or six hex digits, either case.
    IsHexColor, is_hex_color, HEX_COLOR = r"(?i)^#([0-9A-F]{3}){1,2}$",
    "Value must be a valid hexadecimal color code."
);

// `regex` has no look-around, so each look-ahead of
// ^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[!@#$%^&*])[A-Za-z\d!@#$%^&*]{8,}$
// is its own search. The charset pattern excludes newlines, so the
// look-aheads' `.*` never has a line break to stop at.
static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9!@#$%^&*]{8,}$"));
static PASSWORD_REQUIRED: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        compile("[a-z]"),
        compile("[A-Z]"),
        compile("[0-9]"),
        compile("[!@#$%^&*]"),
    ]
});

/// String must be at least eight characters drawn from letters, digits and
/// `!@#$%^&*`, with at least one of each of lowercase, uppercase, digit and
/// special character.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsStrongPassword;

impl Rule for IsStrongPassword {
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| {
            PASSWORD_CHARSET.is_match(s) && PASSWORD_REQUIRED.iter().all(|re| re.is_match(s))
        })
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed(
            "Value must be a strong password (at least 8 characters, one uppercase, one number, and one special character).",
        )
    }
}

/// Create the [`IsStrongPassword`] rule.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(is_strong_password().check(&Value::from("Password1!")));
/// assert!(!is_strong_password().check(&Value::from("password1!")));
/// assert!(!is_strong_password().check(&Value::from("Pass1!")));
/// ```
pub fn is_strong_password() -> IsStrongPassword {
    IsStrongPassword
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes<R: Rule>(rule: R, input: &str) -> bool {
        rule.check(&Value::from(input))
    }

    #[test]
    fn test_email() {
        assert!(passes(is_email(), "john.doe@example.com"));
        assert!(passes(is_email(), "a@b.c"));
        assert!(!passes(is_email(), "invalid-email"));
        assert!(!passes(is_email(), "a b@example.com"));
        assert!(!passes(is_email(), "a@@example.com"));
        assert!(!passes(is_email(), "user@localhost"));
        assert!(!is_email().check(&Value::Absent));
    }

    #[test]
    fn test_whitespace_classes_follow_ecmascript() {
        assert!(!passes(is_email(), "a\u{FEFF}b@x.com"));
        assert!(passes(is_email(), "a\u{85}b@x.com"));
        assert!(passes(is_name(), "John\u{FEFF}Doe"));
        assert!(!passes(is_name(), "John\u{85}Doe"));
        assert!(passes(is_alpha_space(), "Jo\u{A0}Ann"));
        assert!(passes(is_alphanumeric_space(), "R2\u{FEFF}D2"));
        assert!(passes(is_credit_card(), "4111\u{FEFF}1111\u{FEFF}1111\u{FEFF}1111"));
    }

    #[test]
    fn test_alpha_family() {
        assert!(passes(is_alpha(), "Hello"));
        assert!(!passes(is_alpha(), "Hello World"));
        assert!(!passes(is_alpha(), ""));
        assert!(passes(is_alpha_numeric(), "abc123"));
        assert!(!passes(is_alpha_numeric(), "abc_123"));
        assert!(passes(is_alpha_space(), "Hello World"));
        assert!(!passes(is_alpha_space(), "Hello World 2"));
        assert!(passes(is_alphanumeric_space(), "Hello World 2"));
        assert!(!passes(is_alphanumeric_space(), "Hello, World"));
    }

    #[test]
    fn test_name() {
        assert!(passes(is_name(), "John Doe"));
        assert!(passes(is_name(), "Mary\tAnn"));
        assert!(!passes(is_name(), "O'Brien"));
        assert!(!passes(is_name(), "José"));
    }

    #[test]
    fn test_phone_number() {
        assert!(passes(is_phone_number(), "+1234567890"));
        assert!(passes(is_phone_number(), "+1 555-123-4567"));
        assert!(passes(is_phone_number(), "5551234"));
        assert!(!passes(is_phone_number(), "invalid-phone"));
        assert!(!passes(is_phone_number(), "12345678901234567"));
        assert!(!passes(is_phone_number(), "(555) 123-4567"));
    }

    #[test]
    fn test_credit_card() {
        assert!(passes(is_credit_card(), "4111111111111111"));
        assert!(passes(is_credit_card(), "4111-1111-1111-1111"));
        assert!(passes(is_credit_card(), "4111 1111 1111 1111"));
        assert!(!passes(is_credit_card(), "4111-1111-1111"));
        assert!(!passes(is_credit_card(), "٤١١١١١١١١١١١١١١١"));
    }

    #[test]
    fn test_uuid() {
        assert!(passes(is_uuid(), "123e4567-e89b-12d3-a456-426614174000"));
        assert!(passes(is_uuid(), "123E4567-E89B-12D3-A456-426614174000"));
        assert!(!passes(is_uuid(), "123e4567e89b12d3a456426614174000"));
        assert!(!passes(is_uuid(), "not-a-uuid"));
    }

    #[test]
    fn test_postal_code() {
        assert!(passes(is_postal_code(), "12345"));
        assert!(passes(is_postal_code(), "12345-6789"));
        assert!(!passes(is_postal_code(), "1234"));
        assert!(!passes(is_postal_code(), "12345-678"));
    }

    #[test]
    fn test_hex_color() {
        assert!(passes(is_hex_color(), "#fff"));
        assert!(passes(is_hex_color(), "#A1B2C3"));
        assert!(passes(is_hex_color(), "#a1b2c3"));
        assert!(!passes(is_hex_color(), "fff"));
        assert!(!passes(is_hex_color(), "#ffff"));
        assert!(!passes(is_hex_color(), "#ggg"));
    }

    #[test]
    fn test_strong_password_requires_every_class() {
        assert!(passes(is_strong_password(), "Password1!"));
        assert!(!passes(is_strong_password(), "PASSWORD1!"));
        assert!(!passes(is_strong_password(), "Password!!"));
        assert!(!passes(is_strong_password(), "Password11"));
        assert!(!passes(is_strong_password(), "weak"));
    }

    #[test]
    fn test_strong_password_rejects_other_characters() {
        assert!(!passes(is_strong_password(), "Password1! "));
        assert!(!passes(is_strong_password(), "Password1!?"));
        assert!(!passes(is_strong_password(), "Pass\nword1!"));
    }

    #[test]
    fn test_pattern_rules_reject_non_strings() {
        assert!(!is_postal_code().check(&Value::from(12345)));
        assert!(!is_alpha_numeric().check(&Value::from(true)));
        assert!(!is_strong_password().check(&Value::Null));
    }
}
