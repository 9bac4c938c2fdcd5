//! Verse references and the `/bible/<version>/<book>/<chapter>/<verse>` route form.

use crate::error::ReferenceError;
use crate::text::{canonical_number, capitalize_first};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Matches `/bible/<version>/<book>/<chapter>/<verse>` anywhere in a path.
fn route_pattern() -> &'static Regex {
    static ROUTE: OnceLock<Regex> = OnceLock::new();
    ROUTE.get_or_init(|| {
        Regex::new(r"/bible/([^/]+)/([^/]+)/([^/]+)/([^/]+)").expect("route pattern is valid")
    })
}

/// A fully-qualified verse address in a particular version.
///
/// `book` is kept as the caller wrote it; resolution against the stored book
/// name happens at lookup time. Chapter and verse are stored without leading
/// zeros when they are plain digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRef {
    pub version: String,
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl VerseRef {
    pub fn new(
        version: impl Into<String>,
        book: impl Into<String>,
        chapter: impl Into<String>,
        verse: impl Into<String>,
    ) -> Result<Self, ReferenceError> {
        let version = non_empty(version.into(), "version")?.to_lowercase();
        let book = non_empty(book.into(), "book")?;
        let chapter = normalize_number(non_empty(chapter.into(), "chapter")?);
        let verse = normalize_number(non_empty(verse.into(), "verse")?);

        Ok(Self {
            version,
            book,
            chapter,
            verse,
        })
    }

    /// Parse a route such as `/bible/kjv/john/3/16`.
    ///
    /// `%20` in the book segment is decoded to a space so that routes like
    /// `/bible/kjv/1%20john/1/9` address multi-word books.
    pub fn from_route(route: &str) -> Result<Self, ReferenceError> {
        let caps = route_pattern()
            .captures(route)
            .ok_or_else(|| ReferenceError::InvalidRoute {
                route: route.to_string(),
            })?;

        Self::new(
            &caps[1],
            caps[2].replace("%20", " "),
            &caps[3],
            &caps[4],
        )
    }

    /// Route form of this reference.
    pub fn to_route(&self) -> String {
        format!(
            "/bible/{}/{}/{}/{}",
            self.version,
            self.book.to_lowercase().replace(' ', "%20"),
            self.chapter,
            self.verse
        )
    }
}

impl fmt::Display for VerseRef {
    /// `John 3:16 (KJV)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} ({})",
            capitalize_first(&self.book),
            self.chapter,
            self.verse,
            self.version.to_uppercase()
        )
    }
}

fn non_empty(value: String, part: &'static str) -> Result<String, ReferenceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ReferenceError::EmptyPart { part })
    } else {
        Ok(trimmed.to_string())
    }
}

fn normalize_number(value: String) -> String {
    canonical_number(&value).unwrap_or(value)
}
