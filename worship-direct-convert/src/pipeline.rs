//! The read → convert → write pipeline shared by every input format.
//!
//! Each input format implements [`CorpusConverter`]; [`run_conversion`] drives
//! one converter over one input file. Job-level problems (missing or
//! unparsable input, wrong top-level shape, write failures) abort the run with
//! a [`ConvertError`]. Per-entry problems are absorbed by the converter and
//! show up only in the returned [`ConversionReport`].

use crate::error::{ConvertError, Result};
use crate::tree::NestedCorpus;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// How often converters log a progress line, in input records.
pub const PROGRESS_INTERVAL: usize = 5000;

/// A raw input format that can be converted into a [`NestedCorpus`].
pub trait CorpusConverter {
    /// Human-readable name of the corpus, e.g. `KJV`.
    fn label(&self) -> &str;

    /// Version name used to derive default file paths, e.g. `kjv`.
    fn version(&self) -> &str;

    /// Convert a parsed input document.
    ///
    /// Fails only if the document as a whole has the wrong shape.
    fn convert(&self, input: &Value) -> Result<Conversion>;
}

/// The result of converting one document.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub corpus: NestedCorpus,
    pub report: ConversionReport,
}

/// Counters describing a finished conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Input records examined
    pub processed: usize,
    /// Records dropped because they could not be parsed
    pub skipped: usize,
    /// Records whose path was already present; the later text was kept
    pub duplicates: usize,
    /// Distinct book names outside the canonical 66
    pub non_canonical_books: usize,
    /// Books in the output
    pub books: usize,
    /// Verses in the output
    pub verses: usize,
}

impl ConversionReport {
    /// Fill in the output totals from the finished tree.
    pub fn finish(mut self, corpus: &NestedCorpus) -> Self {
        self.books = corpus.book_count();
        self.verses = corpus.verse_count();
        self
    }

    /// Final summary line.
    pub fn summary(&self) -> String {
        format!(
            "Successfully converted {} books with {} verses.",
            self.books, self.verses
        )
    }
}

/// Log a progress line every [`PROGRESS_INTERVAL`] records.
pub(crate) fn log_progress(done: usize, total: usize) {
    if done % PROGRESS_INTERVAL == 0 {
        info!("Processed {done}/{total} verses...");
    }
}

/// Read and parse the input document.
pub fn read_input(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConvertError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConvertError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| ConvertError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the tree to `path`.
///
/// The JSON is written to a temporary file next to `path` and renamed into
/// place once complete, so an interrupted run leaves no partial output.
pub fn write_output(corpus: &NestedCorpus, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ConvertError::write(path, e))?;
    write_tree(corpus, BufWriter::new(temp.as_file_mut()), path)?;
    set_readable(temp.as_file()).map_err(|e| ConvertError::write(path, e))?;
    temp.persist(path)
        .map_err(|e| ConvertError::write(path, e.error))?;
    Ok(())
}

/// Serialize `corpus` into `writer` and flush it.
///
/// I/O failures surfacing through serde_json are reported against `path`.
fn write_tree<W: Write>(corpus: &NestedCorpus, mut writer: W, path: &Path) -> Result<()> {
    corpus.write_pretty(&mut writer).map_err(|e| {
        if e.is_io() {
            ConvertError::write(path, e.into())
        } else {
            ConvertError::from(e)
        }
    })?;
    writer.flush().map_err(|e| ConvertError::write(path, e))
}

/// Temp files are created owner-only; the corpus is meant to be shared.
#[cfg(unix)]
fn set_readable(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_file: &File) -> std::io::Result<()> {
    Ok(())
}

/// Run `converter` over `input`, writing the nested tree to `output`.
pub fn run_conversion(
    converter: &dyn CorpusConverter,
    input: &Path,
    output: &Path,
) -> Result<ConversionReport> {
    info!("Reading {} Bible from: {}", converter.label(), input.display());
    let document = read_input(input)?;

    let Conversion { corpus, report } = converter.convert(&document)?;
    if corpus.is_empty() {
        warn!("Conversion produced no verses");
    }

    info!("Conversion complete. Writing to: {}", output.display());
    write_output(&corpus, output)?;

    Ok(report)
}
