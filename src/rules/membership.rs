//! Membership rule

use std::borrow::Cow;

use super::Rule;
use crate::Value;

/// Value must equal one of a fixed list of candidates.
///
/// Equality is [`Value::same_value_zero`]: no coercion between kinds, and
/// `NaN` matches `NaN`.
#[derive(Clone, Debug)]
pub struct IsIn {
    candidates: Vec<Value>,
}

impl IsIn {
    /// The candidates, in the order given.
    pub fn candidates(&self) -> &[Value] {
        &self.candidates
    }
}

impl Rule for IsIn {
    fn check(&self, value: &Value) -> bool {
        self.candidates.iter().any(|c| c.same_value_zero(value))
    }

    fn message(&self) -> Cow<'static, str> {
        let listed = self
            .candidates
            .iter()
            .map(Value::join_text)
            .collect::<Vec<_>>()
            .join(", ");
        Cow::Owned(format!("Value must be one of: {listed}"))
    }
}

/// Create a rule that requires one of `candidates`.
///
/// The failure message lists the candidates in order, separated by `", "`.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// let rule = is_in(["apple", "banana"]);
/// assert!(rule.check(&Value::from("apple")));
/// assert_eq!(
///     rule.evaluate(&Value::from("cherry")),
///     Err("Value must be one of: apple, banana".into())
/// );
/// ```
pub fn is_in<I, T>(candidates: I) -> IsIn
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    IsIn {
        candidates: candidates.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_strings() {
        let rule = is_in(["dark", "light"]);
        assert!(rule.check(&Value::from("dark")));
        assert!(!rule.check(&Value::from("blue")));
        assert!(!rule.check(&Value::from("Dark")));
    }

    #[test]
    fn test_is_in_does_not_coerce() {
        let rule = is_in([1, 2, 3]);
        assert!(rule.check(&Value::from(2)));
        assert!(!rule.check(&Value::from("2")));
    }

    #[test]
    fn test_is_in_mixed_candidates_message() {
        let rule = is_in(vec![
            Value::from("a"),
            Value::from(1),
            Value::from(2.5),
            Value::from(true),
            Value::Null,
        ]);
        assert_eq!(rule.message(), "Value must be one of: a, 1, 2.5, true, ");
        assert!(rule.check(&Value::Null));
        assert!(!rule.check(&Value::Absent));
    }

    #[test]
    fn test_is_in_nan() {
        let rule = is_in([f64::NAN]);
        assert!(rule.check(&Value::from(f64::NAN)));
        assert_eq!(rule.message(), "Value must be one of: NaN");
    }

    #[test]
    fn test_is_in_message_renders_extreme_numbers_in_exponent_form() {
        let rule = is_in([1.5e-7, 1e21, 0.1]);
        assert_eq!(rule.message(), "Value must be one of: 1.5e-7, 1e+21, 0.1");
    }

    #[test]
    fn test_is_in_empty_list_always_fails() {
        let rule = is_in(Vec::<Value>::new());
        assert!(!rule.check(&Value::from("anything")));
        assert_eq!(rule.message(), "Value must be one of: ");
    }

    #[test]
    fn test_candidates_keep_order() {
        let rule = is_in(["b", "a", "c"]);
        assert_eq!(
            rule.candidates(),
            &[Value::from("b"), Value::from("a"), Value::from("c")]
        );
    }
}
