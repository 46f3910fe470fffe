//! # Checkmate
//!
//! Fluent value validation that never stops at the first problem.
//!
//! - A [`Validator`] wraps one value and runs any number of chained checks,
//!   collecting a human-readable message for each one that fails.
//! - A [`Schema`] describes a nested record; [`validate_object`] walks it
//!   and returns an [`ErrorTree`] shaped like the fields that failed, or
//!   `None` when everything passed.
//! - The [`rules`] module holds the checks themselves as plain, reusable
//!   values.
//!
//! ## Quick Example
//!
//! ```rust
//! use checkmate::{validate_object, Schema, Validator, Value};
//!
//! // Ad hoc: every check runs, every failure is kept
//! let mut email = Validator::new(42);
//! email.is_string().is_email();
//! assert_eq!(
//!     email.errors(),
//!     ["Value must be a string.", "Value must be a valid email."]
//! );
//!
//! // Schema-driven: only failing fields come back
//! let schema = Schema::new()
//!     .field("name", |v| v.is_string())
//!     .field("email", |v| v.is_email())
//!     .nested("preferences", Schema::new().field("notifications", |v| v.is_boolean()));
//!
//! let data = Value::object([
//!     ("name", Value::from("Alice")),
//!     ("email", Value::from("alice@example.com")),
//!     ("preferences", Value::object([("notifications", Value::from("true"))])),
//! ]);
//!
//! match validate_object(&data, &schema) {
//!     None => println!("valid"),
//!     Some(errors) => {
//!         assert_eq!(errors.to_string(), "preferences.notifications: Value must be a boolean.");
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug/trace events from the schema walker and from parser
//!   rejections in `is_url`/`is_date`
//! - `serde`: serialize [`ErrorTree`] and [`Value`], and convert
//!   `serde_json::Value` into [`Value`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error_tree;
pub mod rules;
pub mod schema;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error_tree::{ErrorNode, ErrorTree};
pub use rules::Rule;
pub use schema::{validate_object, Schema, SchemaNode};
pub use validator::Validator;
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error_tree::{ErrorNode, ErrorTree};
    pub use crate::rules::Rule;
    pub use crate::schema::{validate_object, Schema, SchemaNode};
    pub use crate::validator::Validator;
    pub use crate::value::Value;
}
