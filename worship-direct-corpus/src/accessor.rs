//! Read-only navigation over a node of the corpus tree.
//!
//! A [`VerseAccessor`] borrows one mapping of the `{Book: {Chapter: {Verse: Text}}}`
//! tree. Each lookup either yields a new accessor over the child mapping or the
//! leaf value itself, so a full reference is resolved by chaining:
//!
//! ```
//! use worship_direct_corpus::Corpus;
//!
//! let corpus = Corpus::from_json_str(r#"{"John": {"3": {"16": "For God so loved the world"}}}"#)?;
//!
//! // Attribute style: book names are title-cased on demand
//! let by_field = corpus.root().get_field("john")?.into_node()?.get_field("3")?.into_node()?.get_field("16")?;
//! // Indexed style: keys are matched as given, numbers are stringified
//! let by_item = corpus.root().get_item("John")?.into_node()?.get_item(3)?.into_node()?.get_item(16)?;
//!
//! assert_eq!(by_field.as_text(), Some("For God so loved the world"));
//! assert_eq!(by_field, by_item);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::AccessError;
use crate::text::title_case;
use serde_json::{Map, Value};
use std::fmt;

/// A borrowed view of one mapping node in the corpus tree.
///
/// Accessors are cheap to create and copy; they hold nothing but a reference
/// into the tree owned by [`crate::Corpus`].
#[derive(Clone, Copy, PartialEq)]
pub struct VerseAccessor<'a> {
    node: &'a Map<String, Value>,
}

/// The outcome of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The key held a mapping (a book or a chapter)
    Node(VerseAccessor<'a>),
    /// The key held a leaf value, normally verse text
    Leaf(&'a Value),
}

impl<'a> VerseAccessor<'a> {
    pub fn new(node: &'a Map<String, Value>) -> Self {
        Self { node }
    }

    /// Attribute-style lookup.
    ///
    /// The title-cased form of `name` wins when it is present as a key;
    /// otherwise `name` is used verbatim. This lets callers write `john` for a
    /// book stored as `"John"`, while digit keys such as `"3"` are unaffected.
    /// The fallback is applied at every depth.
    pub fn get_field(&self, name: &str) -> Result<Lookup<'a>, AccessError> {
        self.field_key(name)
            .and_then(|key| self.resolve(key))
            .ok_or_else(|| AccessError::UnknownField {
                name: name.to_string(),
            })
    }

    /// The stored key that [`get_field`](Self::get_field) would use for `name`.
    pub fn field_key(&self, name: &str) -> Option<&'a str> {
        let titled = title_case(name);
        self.node
            .get_key_value(titled.as_str())
            .or_else(|| self.node.get_key_value(name))
            .map(|(key, _)| key.as_str())
    }

    /// Indexed lookup.
    ///
    /// `key` is converted to its string form and matched exactly; no
    /// title-casing is attempted.
    pub fn get_item(&self, key: impl fmt::Display) -> Result<Lookup<'a>, AccessError> {
        let key = key.to_string();
        self.resolve(&key).ok_or(AccessError::UnknownKey { key })
    }

    /// Keys at this level, in corpus order.
    pub fn keys(self) -> impl Iterator<Item = &'a str> {
        self.node.keys().map(String::as_str)
    }

    /// Exact-key membership test.
    pub fn contains(&self, key: &str) -> bool {
        self.node.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    /// The underlying mapping.
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.node
    }

    fn resolve(&self, key: &str) -> Option<Lookup<'a>> {
        self.node.get(key).map(|value| match value {
            Value::Object(child) => Lookup::Node(VerseAccessor::new(child)),
            leaf => Lookup::Leaf(leaf),
        })
    }
}

impl fmt::Debug for VerseAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerseAccessor")
            .field("keys", &self.node.len())
            .finish()
    }
}

impl<'a> Lookup<'a> {
    pub fn as_node(&self) -> Option<VerseAccessor<'a>> {
        match self {
            Lookup::Node(node) => Some(*node),
            Lookup::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&'a Value> {
        match self {
            Lookup::Leaf(value) => Some(*value),
            Lookup::Node(_) => None,
        }
    }

    /// Leaf value as a string slice, if it is one.
    pub fn as_text(&self) -> Option<&'a str> {
        self.as_leaf().and_then(Value::as_str)
    }

    /// Continue descending, failing with the requested-key error if this is a leaf.
    ///
    /// The error names the leaf's position rather than a child key, since there
    /// are no children below a leaf.
    pub fn into_node(self) -> Result<VerseAccessor<'a>, AccessError> {
        match self {
            Lookup::Node(node) => Ok(node),
            Lookup::Leaf(value) => Err(AccessError::UnknownKey {
                key: leaf_description(value),
            }),
        }
    }
}

fn leaf_description(value: &Value) -> String {
    match value {
        Value::String(text) => format!("<below leaf {:?}>", truncate(text, 24)),
        other => format!("<below leaf {other}>"),
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
