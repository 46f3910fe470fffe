//! Error trees produced by schema validation
//!
//! An [`ErrorTree`] mirrors the part of a schema that failed: each entry is
//! either the messages for a single field or the tree for a nested group.
//! Fields that passed are left out entirely, so a tree is never padded with
//! empty lists or empty groups.
//!
//! # Example
//!
//! ```rust
//! use checkmate::{validate_object, Schema, Value};
//!
//! let schema = Schema::new()
//!     .nested("user", Schema::new().field("email", |v| v.is_email()));
//! let data = Value::object([("user", Value::object([("email", Value::from("nope"))]))]);
//!
//! let errors = validate_object(&data, &schema).unwrap();
//! assert_eq!(
//!     errors.at_path(&["user", "email"]).and_then(|n| n.as_messages()),
//!     Some(&["Value must be a valid email.".to_string()][..])
//! );
//! assert_eq!(errors.to_string(), "user.email: Value must be a valid email.");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// One entry of an [`ErrorTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNode {
    /// Messages for a single field, in the order its checks ran.
    Messages(Vec<String>),
    /// Errors for a nested group of fields.
    Nested(ErrorTree),
}

impl ErrorNode {
    /// The messages, if this is a field entry.
    pub fn as_messages(&self) -> Option<&[String]> {
        match self {
            ErrorNode::Messages(messages) => Some(messages),
            ErrorNode::Nested(_) => None,
        }
    }

    /// The subtree, if this is a group entry.
    pub fn as_tree(&self) -> Option<&ErrorTree> {
        match self {
            ErrorNode::Messages(_) => None,
            ErrorNode::Nested(tree) => Some(tree),
        }
    }

    fn error_count(&self) -> usize {
        match self {
            ErrorNode::Messages(messages) => messages.len(),
            ErrorNode::Nested(tree) => tree.error_count(),
        }
    }
}

/// Field errors keyed by field name, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorTree {
    entries: Vec<(String, ErrorNode)>,
}

impl ErrorTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `messages` for the field `key`.
    pub fn insert_messages(&mut self, key: impl Into<String>, messages: Vec<String>) {
        self.insert(key.into(), ErrorNode::Messages(messages));
    }

    /// Record a nested tree under `key`.
    pub fn insert_tree(&mut self, key: impl Into<String>, tree: ErrorTree) {
        self.insert(key.into(), ErrorNode::Nested(tree));
    }

    fn insert(&mut self, key: String, node: ErrorNode) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.entries.push((key, node)),
        }
    }

    /// The entry for `key`.
    pub fn get(&self, key: &str) -> Option<&ErrorNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    /// The messages recorded for the field `key`.
    pub fn messages(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(ErrorNode::as_messages)
    }

    /// The subtree recorded for the group `key`.
    pub fn subtree(&self, key: &str) -> Option<&ErrorTree> {
        self.get(key).and_then(ErrorNode::as_tree)
    }

    /// Follow `path` through nested groups.
    ///
    /// An empty path returns `None`.
    pub fn at_path(&self, path: &[&str]) -> Option<&ErrorNode> {
        let (last, parents) = path.split_last()?;
        let mut tree = self;
        for key in parents {
            tree = tree.subtree(key)?;
        }
        tree.get(last)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    /// Total number of messages at every depth.
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, n)| n.error_count()).sum()
    }

    /// Every field's messages keyed by its dotted path, depth-first in
    /// schema order.
    ///
    /// ```rust
    /// use checkmate::ErrorTree;
    ///
    /// let mut contact = ErrorTree::new();
    /// contact.insert_messages("phone", vec!["bad phone".into()]);
    /// let mut root = ErrorTree::new();
    /// root.insert_messages("name", vec!["bad name".into()]);
    /// root.insert_tree("contact", contact);
    ///
    /// assert_eq!(
    ///     root.flatten(),
    ///     vec![
    ///         ("name".to_string(), vec!["bad name".to_string()]),
    ///         ("contact.phone".to_string(), vec!["bad phone".to_string()]),
    ///     ]
    /// );
    /// ```
    pub fn flatten(&self) -> Vec<(String, Vec<String>)> {
        let mut out = Vec::new();
        self.flatten_into(None, &mut out);
        out
    }

    fn flatten_into(&self, prefix: Option<&str>, out: &mut Vec<(String, Vec<String>)>) {
        for (key, node) in &self.entries {
            let path = match prefix {
                Some(p) => format!("{p}.{key}"),
                None => key.clone(),
            };
            match node {
                ErrorNode::Messages(messages) => out.push((path, messages.clone())),
                ErrorNode::Nested(tree) => tree.flatten_into(Some(&path), out),
            }
        }
    }
}

impl<'a> IntoIterator for &'a ErrorTree {
    type Item = (&'a str, &'a ErrorNode);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a ErrorNode)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, messages) in self.flatten() {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{path}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl StdError for ErrorTree {}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorNode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ErrorNode::Messages(messages) => messages.serialize(serializer),
            ErrorNode::Nested(tree) => tree.serialize(serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ErrorTree {
        let mut contact = ErrorTree::new();
        contact.insert_messages("email", vec!["Value must be a valid email.".into()]);
        contact.insert_messages(
            "phone",
            vec!["Value must be a valid phone number.".into()],
        );
        let mut profile = ErrorTree::new();
        profile.insert_messages("name", vec!["Value must be a string.".into()]);
        profile.insert_tree("contact", contact);
        let mut root = ErrorTree::new();
        root.insert_tree("profile", profile);
        root
    }

    #[test]
    fn test_lookup_by_path() {
        let tree = sample();
        assert_eq!(
            tree.at_path(&["profile", "contact", "phone"])
                .and_then(ErrorNode::as_messages),
            Some(&["Value must be a valid phone number.".to_string()][..])
        );
        assert!(tree.at_path(&["profile", "missing"]).is_none());
        assert!(tree.at_path(&["profile", "name", "deeper"]).is_none());
        assert!(tree.at_path(&[]).is_none());
    }

    #[test]
    fn test_error_count_spans_depths() {
        assert_eq!(sample().error_count(), 3);
        assert_eq!(sample().len(), 1);
    }

    #[test]
    fn test_insert_existing_key_replaces_in_place() {
        let mut tree = ErrorTree::new();
        tree.insert_messages("a", vec!["1".into()]);
        tree.insert_messages("b", vec!["2".into()]);
        tree.insert_messages("a", vec!["3".into()]);
        let keys: Vec<_> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(tree.messages("a"), Some(&["3".to_string()][..]));
    }

    #[test]
    fn test_display_lists_every_message() {
        let rendered = sample().to_string();
        assert_eq!(
            rendered,
            "profile.name: Value must be a string.\n\
             profile.contact.email: Value must be a valid email.\n\
             profile.contact.phone: Value must be a valid phone number."
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = ErrorTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.to_string(), "");
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn test_is_std_error() {
        let boxed: Box<dyn StdError> = Box::new(sample());
        assert!(boxed.to_string().starts_with("profile.name"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_to_nested_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "profile": {
                    "name": ["Value must be a string."],
                    "contact": {
                        "email": ["Value must be a valid email."],
                        "phone": ["Value must be a valid phone number."]
                    }
                }
            })
        );
    }
}
