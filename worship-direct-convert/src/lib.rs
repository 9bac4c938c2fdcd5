//! worship-direct-convert: one-shot conversion of raw Bible dumps into the
//! nested `{Book: {Chapter: {Verse: Text}}}` JSON read by `worship-direct-corpus`.
//!
//! Two input formats are supported:
//!
//! - **[`flat`]**: `{"Genesis 1:1": "In the beginning..."}`, as in the KJV dump
//! - **[`resultset`]**: `{"resultset": {"row": [{"field": [id, book, chapter, verse, text]}]}}`,
//!   as in the ASV dump
//!
//! Both implement [`CorpusConverter`] and run through the same
//! [`run_conversion`] pipeline: read, convert, write atomically, report.
//!
//! ```no_run
//! use std::path::Path;
//! use worship_direct_convert::{FlatKeyConverter, run_conversion};
//!
//! # fn example() -> worship_direct_convert::Result<()> {
//! let report = run_conversion(
//!     &FlatKeyConverter,
//!     Path::new("bible/kjv.json"),
//!     Path::new("bible/kjv_nested.json"),
//! )?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

pub mod books;
pub mod cli;
pub mod error;
pub mod flat;
pub mod pipeline;
pub mod resultset;
pub mod tree;

pub use error::{ConvertError, Result};
pub use flat::FlatKeyConverter;
pub use pipeline::{Conversion, ConversionReport, CorpusConverter, run_conversion};
pub use resultset::ResultSetConverter;
pub use tree::NestedCorpus;
