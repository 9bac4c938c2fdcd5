//! Loading the nested corpus document and owning the tree.
//!
//! The nested format written by the converters is
//! `{Book: {Chapter: {Verse: Text}}}`. A [`Corpus`] reads one such document
//! fully into memory and hands out [`VerseAccessor`]s that borrow from it.
//!
//! Loading follows an asymmetric policy: a missing file is treated as an
//! expected packaging variant and yields an empty corpus, while a file that
//! exists but cannot be parsed is a hard error.

use crate::accessor::{Lookup, VerseAccessor};
use crate::error::{AccessError, CorpusError, Result};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Process-wide corpus installed by [`Corpus::init_global`]
static GLOBAL_CORPUS: OnceLock<Corpus> = OnceLock::new();

/// An immutable, shared corpus tree.
///
/// Cloning is cheap; all clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    tree: Arc<Map<String, Value>>,
}

impl Corpus {
    /// A corpus with no books; every lookup on it is not-found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a nested corpus document from `path`.
    ///
    /// Returns an empty corpus if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Corpus file {} not found, continuing with an empty corpus",
                    path.display()
                );
                return Ok(Self::empty());
            }
            Err(source) => {
                return Err(CorpusError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let value: Value = serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_value(value)?;

        info!(
            "Loaded corpus from {} with {} books",
            path.display(),
            corpus.book_count()
        );
        Ok(corpus)
    }

    /// Build a corpus from an already-parsed document.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(tree) => Ok(Self::from_map(tree)),
            other => Err(CorpusError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    pub fn from_map(tree: Map<String, Value>) -> Self {
        Self {
            tree: Arc::new(tree),
        }
    }

    /// Parse a corpus from JSON text. Mostly useful for tests and fixtures.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|source| CorpusError::Parse {
            path: "<inline>".into(),
            source,
        })?;
        Self::from_value(value)
    }

    /// Load `path` once and install it as the process-wide corpus.
    ///
    /// The first successful call wins; later calls return the installed corpus
    /// without reading anything, whatever path they pass.
    pub fn init_global(path: impl AsRef<Path>) -> Result<&'static Corpus> {
        if let Some(existing) = GLOBAL_CORPUS.get() {
            debug!("Global corpus already initialized, ignoring {}", path.as_ref().display());
            return Ok(existing);
        }
        let corpus = Self::load(path)?;
        Ok(GLOBAL_CORPUS.get_or_init(|| corpus))
    }

    /// The process-wide corpus, if [`Corpus::init_global`] has run.
    pub fn global() -> Option<&'static Corpus> {
        GLOBAL_CORPUS.get()
    }

    /// Root accessor for uniform traversal.
    pub fn root(&self) -> VerseAccessor<'_> {
        VerseAccessor::new(&self.tree)
    }

    /// Accessor bound to a single book, resolved attribute-style (`"john"` finds `"John"`).
    pub fn book(&self, name: &str) -> std::result::Result<VerseAccessor<'_>, AccessError> {
        match self.root().get_field(name)? {
            Lookup::Node(book) => Ok(book),
            Lookup::Leaf(_) => Err(AccessError::UnknownField {
                name: name.to_string(),
            }),
        }
    }

    /// Every top-level entry that is a mapping, as `(book name, accessor)` pairs.
    pub fn books(&self) -> impl Iterator<Item = (&str, VerseAccessor<'_>)> {
        self.tree.iter().filter_map(|(name, value)| {
            value
                .as_object()
                .map(|chapters| (name.as_str(), VerseAccessor::new(chapters)))
        })
    }

    /// Number of top-level entries that are books (mappings).
    pub fn book_count(&self) -> usize {
        self.books().count()
    }

    /// Total number of leaves at verse depth.
    pub fn verse_count(&self) -> usize {
        self.books()
            .flat_map(|(_, book)| book.as_map().values())
            .filter_map(Value::as_object)
            .map(Map::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
