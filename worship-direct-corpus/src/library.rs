//! A set of loaded corpora keyed by version, with whole-reference lookup.

use crate::config::CorpusConfig;
use crate::corpus::Corpus;
use crate::error::{LookupError, Result};
use crate::reference::VerseRef;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Verse text together with the reference it was resolved from.
///
/// `book` is the stored book name, which may differ in case from the
/// requested one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub text: String,
    pub version: String,
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

/// Corpora for several versions, loaded from one [`CorpusConfig`].
#[derive(Debug, Clone, Default)]
pub struct Library {
    versions: BTreeMap<String, Corpus>,
}

impl Library {
    /// Load every configured version. Missing files load as empty corpora.
    pub fn load(config: &CorpusConfig) -> Result<Self> {
        let mut library = Self::default();
        for version in &config.versions {
            let corpus = Corpus::load(config.corpus_path(version))?;
            library.insert(version, corpus);
        }
        Ok(library)
    }

    /// Register a corpus under `version` (case-insensitive), replacing any previous one.
    pub fn insert(&mut self, version: &str, corpus: Corpus) {
        self.versions.insert(version.to_lowercase(), corpus);
    }

    pub fn corpus(&self, version: &str) -> std::result::Result<&Corpus, LookupError> {
        self.versions
            .get(&version.to_lowercase())
            .ok_or_else(|| LookupError::UnknownVersion {
                version: version.to_string(),
                available: self.version_names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn version_names(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Resolve a reference to its verse text.
    ///
    /// The book is resolved attribute-style so `john` finds `John`; chapter and
    /// verse are matched exactly.
    pub fn lookup(&self, verse_ref: &VerseRef) -> std::result::Result<Verse, LookupError> {
        let corpus = self.corpus(&verse_ref.version)?;
        debug!("Looking up {}", verse_ref);

        let not_a_verse = || LookupError::NotAVerse {
            reference: verse_ref.to_string(),
        };

        let root = corpus.root();
        let book_name = root.field_key(&verse_ref.book).map(str::to_string);
        let book = root
            .get_field(&verse_ref.book)?
            .as_node()
            .ok_or_else(not_a_verse)?;
        let chapter = book
            .get_item(&verse_ref.chapter)?
            .as_node()
            .ok_or_else(not_a_verse)?;
        let text = chapter
            .get_item(&verse_ref.verse)?
            .as_text()
            .ok_or_else(not_a_verse)?;

        Ok(Verse {
            text: text.to_string(),
            version: verse_ref.version.clone(),
            book: book_name.unwrap_or_else(|| verse_ref.book.clone()),
            chapter: verse_ref.chapter.clone(),
            verse: verse_ref.verse.clone(),
        })
    }
}
