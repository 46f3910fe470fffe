//! Schema-driven validation of nested records
//!
//! A [`Schema`] describes a record: each key maps either to a leaf check (a
//! function that chains rules on a [`Validator`]) or to a nested schema.
//! [`validate_object`] walks the schema, validates each field of the data
//! against it, and returns an [`ErrorTree`] shaped like the failing part of
//! the schema, or `None` when everything passed.
//!
//! The schema is authoritative:
//! - keys in the data that the schema does not mention are ignored
//! - keys in the schema that the data lacks are validated as absent values
//! - if the data at some level is not an object, every field below it is
//!   absent
//!
//! # Example
//!
//! ```rust
//! use checkmate::{validate_object, Schema, Value};
//!
//! let schema = Schema::new()
//!     .field("name", |v| v.is_string())
//!     .field("age", |v| v.is_number())
//!     .nested(
//!         "preferences",
//!         Schema::new().field("theme", |v| v.is_in(["dark", "light"])),
//!     );
//!
//! let data = Value::object([
//!     ("name", Value::from("Alice")),
//!     ("age", Value::from("thirty")),
//!     ("preferences", Value::object([("theme", Value::from("blue"))])),
//! ]);
//!
//! let errors = validate_object(&data, &schema).unwrap();
//! assert_eq!(errors.messages("age"), Some(&["Value must be a number.".to_string()][..]));
//! assert!(errors.get("name").is_none());
//! assert_eq!(
//!     errors.subtree("preferences").and_then(|p| p.messages("theme")),
//!     Some(&["Value must be one of: dark, light".to_string()][..])
//! );
//! ```

use std::fmt;

use crate::{ErrorTree, Validator, Value};

type LeafFn = dyn Fn(&mut Validator) -> &mut Validator + Send + Sync;

static ABSENT: Value = Value::Absent;

/// A schema entry: a leaf check or a nested group.
pub enum SchemaNode {
    /// Checks applied to a single field's value.
    Leaf(Box<LeafFn>),
    /// A nested record.
    Group(Schema),
}

impl SchemaNode {
    /// Wrap a leaf check function.
    pub fn leaf<F>(check: F) -> Self
    where
        F: Fn(&mut Validator) -> &mut Validator + Send + Sync + 'static,
    {
        SchemaNode::Leaf(Box::new(check))
    }
}

impl fmt::Debug for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaNode::Leaf(_) => f.write_str("Leaf(<fn>)"),
            SchemaNode::Group(schema) => f.debug_tuple("Group").field(schema).finish(),
        }
    }
}

impl From<Schema> for SchemaNode {
    fn from(schema: Schema) -> Self {
        SchemaNode::Group(schema)
    }
}

/// An ordered description of a record's fields.
///
/// Built once and reused; validation never mutates it. Schemas are
/// `Send + Sync`, so one schema can serve many threads.
#[derive(Debug, Default)]
pub struct Schema {
    entries: Vec<(String, SchemaNode)>,
}

impl Schema {
    /// Create an empty schema. An empty schema accepts anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf check for `key`.
    ///
    /// Re-using a key replaces the earlier entry but keeps its position.
    pub fn field<F>(self, key: impl Into<String>, check: F) -> Self
    where
        F: Fn(&mut Validator) -> &mut Validator + Send + Sync + 'static,
    {
        self.entry(key, SchemaNode::leaf(check))
    }

    /// Add a nested schema for `key`.
    pub fn nested(self, key: impl Into<String>, schema: Schema) -> Self {
        self.entry(key, SchemaNode::Group(schema))
    }

    /// Add any node for `key`.
    pub fn entry(mut self, key: impl Into<String>, node: SchemaNode) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.entries.push((key, node)),
        }
        self
    }

    /// The node for `key`.
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the schema has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Validate `data`, returning the failing fields or `None`.
    ///
    /// Same as [`validate_object`].
    pub fn validate(&self, data: &Value) -> Option<ErrorTree> {
        validate_object(data, self)
    }

    /// Validate `data` as a `Result`, for use with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkmate::{ErrorTree, Schema, Value};
    ///
    /// fn register(form: &Value) -> Result<(), ErrorTree> {
    ///     let schema = Schema::new().field("email", |v| v.is_email());
    ///     schema.check(form)?;
    ///     Ok(())
    /// }
    ///
    /// assert!(register(&Value::object([("email", Value::from("a@b.co"))])).is_ok());
    /// assert!(register(&Value::object([("email", Value::from("ab.co"))])).is_err());
    /// ```
    pub fn check(&self, data: &Value) -> Result<(), ErrorTree> {
        match validate_object(data, self) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}

/// Validate `data` against `schema`.
///
/// Returns `None` when every leaf passes. Otherwise returns a tree holding
/// only the failing fields, nested the same way the schema is, with keys in
/// schema order.
pub fn validate_object(data: &Value, schema: &Schema) -> Option<ErrorTree> {
    let errors = walk(data, schema);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        failing_fields = errors.len(),
        messages = errors.error_count(),
        "schema validation finished"
    );

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

fn walk(data: &Value, schema: &Schema) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for (key, node) in &schema.entries {
        let field = data.get(key).unwrap_or(&ABSENT);
        match node {
            SchemaNode::Leaf(check) => {
                let mut validator = Validator::new(field.clone());
                check(&mut validator);
                if !validator.is_valid() {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        field = key.as_str(),
                        errors = validator.errors().len(),
                        "field failed"
                    );
                    errors.insert_messages(key.clone(), validator.into_errors());
                }
            }
            SchemaNode::Group(nested) => {
                let nested_errors = walk(field, nested);
                if !nested_errors.is_empty() {
                    errors.insert_tree(key.clone(), nested_errors);
                }
            }
        }
    }

    errors
}
