//! Error types for corpus loading and traversal

use std::path::PathBuf;

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Failure to load a nested corpus document.
///
/// A missing file is not an error: [`crate::Corpus::load`] degrades to an empty
/// corpus in that case. Everything else that goes wrong while reading the
/// document is reported through this type and should abort the caller.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The corpus file exists but could not be read
    #[error("Failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not valid JSON
    #[error("Malformed corpus JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its top level is not a mapping of books
    #[error("Corpus document must be a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}

/// A requested book, chapter or verse does not exist at the current level.
///
/// The two variants correspond to the two navigation styles of
/// [`crate::VerseAccessor`], so callers can tell which style missed while still
/// handling a single error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Attribute-style lookup via [`crate::VerseAccessor::get_field`] missed
    #[error("No such book/chapter/verse: {name}")]
    UnknownField { name: String },

    /// Indexed lookup via [`crate::VerseAccessor::get_item`] missed
    #[error("No such book/chapter/verse: {key}")]
    UnknownKey { key: String },
}

impl AccessError {
    /// The name or key that could not be resolved.
    pub fn requested(&self) -> &str {
        match self {
            Self::UnknownField { name } => name,
            Self::UnknownKey { key } => key,
        }
    }
}

/// A textual verse reference could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("Route does not match /bible/<version>/<book>/<chapter>/<verse>: {route}")]
    InvalidRoute { route: String },

    #[error("Verse reference has an empty {part}")]
    EmptyPart { part: &'static str },
}

/// A verse lookup through [`crate::Library`] failed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Unknown version '{version}' (available: {available})")]
    UnknownVersion { version: String, available: String },

    #[error(transparent)]
    Access(#[from] AccessError),

    /// The path reached a leaf before the verse level, or a mapping at it
    #[error("'{reference}' does not resolve to verse text")]
    NotAVerse { reference: String },
}
