//! Testing utilities
//!
//! Assertion macros for validators and schema results, and (with the
//! `proptest` feature) an [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementation for [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use checkmate::{assert_errors, assert_invalid, assert_valid, Validator};
//!
//! let mut ok = Validator::new("hello");
//! ok.is_string().is_lowercase();
//! assert_valid!(ok);
//!
//! let mut bad = Validator::new(5);
//! bad.is_string();
//! assert_invalid!(bad);
//! assert_errors!(bad, ["Value must be a string."]);
//! ```

/// Assert that a validator recorded no errors.
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr) => {{
        let errors = $validator.errors();
        if !errors.is_empty() {
            panic!("Expected valid, got errors: {:?}", errors);
        }
    }};
}

/// Assert that a validator recorded at least one error.
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr) => {
        if $validator.is_valid() {
            panic!("Expected errors, got valid value: {:?}", $validator.value());
        }
    };
}

/// Assert that a validator recorded exactly `expected`, in order.
#[macro_export]
macro_rules! assert_errors {
    ($validator:expr, $expected:expr) => {
        assert_eq!($validator.errors(), $expected);
    };
}

/// Assert that a schema validation result is the "no errors" marker.
///
/// ```rust
/// use checkmate::{assert_no_errors, validate_object, Schema, Value};
///
/// let schema = Schema::new().field("n", |v| v.is_number());
/// assert_no_errors!(validate_object(&Value::object([("n", Value::from(1))]), &schema));
/// ```
#[macro_export]
macro_rules! assert_no_errors {
    ($result:expr) => {
        match $result {
            None => {}
            Some(tree) => {
                panic!("Expected no errors, got:\n{}", tree);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        let leaf = prop_oneof![
            Just(Value::Absent),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            ".*".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}
