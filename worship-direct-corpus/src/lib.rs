//! worship-direct-corpus: navigation over a nested Book → Chapter → Verse corpus
//!
//! The corpus is a JSON document shaped `{Book: {Chapter: {Verse: Text}}}`, as
//! produced by the `worship-direct-convert` tools. It is read once into memory
//! and then traversed without further I/O.
//!
//! ## Key Modules
//!
//! - **[`accessor`]**: [`VerseAccessor`], attribute-style and indexed lookup over one tree node
//! - **[`corpus`]**: [`Corpus`], loading and owning the tree, plus the process-wide handle
//! - **[`library`]**: [`Library`], several versions side by side with whole-reference lookup
//! - **[`reference`]**: [`VerseRef`] and the `/bible/<version>/<book>/<chapter>/<verse>` route form
//! - **[`config`]**: [`CorpusConfig`], where corpus files live
//!
//! ## Quick Start
//!
//! ```no_run
//! use worship_direct_corpus::{Corpus, Lookup};
//!
//! # fn example() -> anyhow::Result<()> {
//! let corpus = Corpus::init_global("bible/kjv_nested.json")?;
//!
//! let john = corpus.book("john")?;
//! if let Lookup::Node(chapter) = john.get_field("3")? {
//!     println!("{:?}", chapter.get_item(16)?.as_text());
//! }
//! # Ok(())
//! # }
//! ```

pub mod accessor;
pub mod config;
pub mod corpus;
pub mod error;
pub mod library;
pub mod reference;
pub mod text;

pub use accessor::{Lookup, VerseAccessor};
pub use config::{BIBLE_DIR_ENV, CorpusConfig};
pub use corpus::Corpus;
pub use error::{AccessError, CorpusError, LookupError, ReferenceError, Result};
pub use library::{Library, Verse};
pub use reference::VerseRef;
