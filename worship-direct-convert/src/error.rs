//! Error types for the conversion jobs
//!
//! Only job-level failures live here. Problems with individual entries or rows
//! are logged and counted in the [`crate::ConversionReport`] instead.

use std::path::PathBuf;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// A failure that aborts a whole conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input file does not exist
    #[error("Could not find input file: {path}")]
    InputNotFound { path: PathBuf },

    /// The input file exists but could not be read
    #[error("Could not read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON
    #[error("Invalid JSON in input file {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top level of the input document has the wrong shape
    #[error("Input file is not {expected}")]
    UnexpectedShape { expected: &'static str },

    /// The relational dump lacks `resultset.row`
    #[error("Input file does not have expected 'resultset.row' structure")]
    MissingResultSet,

    /// Serializing the nested tree failed
    #[error("Failed to serialize nested corpus: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    /// The output file could not be written
    #[error("Error writing output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
