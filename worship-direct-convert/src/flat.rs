//! Converter for flat dumps keyed by `"<Book> <Chapter>:<Verse>"`.
//!
//! ```text
//! {"Genesis 1:1": "In the beginning...", "1 John 1:9": "If we confess..."}
//! ```
//!
//! The book is everything before the trailing `" <digits>:<digits>"`, so book
//! names may themselves contain spaces and digits. Keys without that suffix
//! are skipped and counted; they never abort the run.

use crate::books;
use crate::error::{ConvertError, Result};
use crate::pipeline::{Conversion, ConversionReport, CorpusConverter, log_progress};
use crate::tree::NestedCorpus;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use worship_direct_corpus::text::canonical_number;

fn verse_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.+?)\s+([0-9]+):([0-9]+)$").expect("verse key pattern is valid")
    })
}

/// A parsed `"<Book> <Chapter>:<Verse>"` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseKey<'a> {
    pub book: &'a str,
    /// Chapter number without leading zeros
    pub chapter: String,
    /// Verse number without leading zeros
    pub verse: String,
}

/// Split a flat key into book, chapter and verse.
///
/// Surrounding whitespace is ignored. Returns `None` if the key does not end
/// in `" <digits>:<digits>"` or has nothing before it.
pub fn parse_verse_key(key: &str) -> Option<VerseKey<'_>> {
    let caps = verse_key_pattern().captures(key.trim())?;
    let book = caps.get(1)?.as_str().trim();
    if book.is_empty() {
        return None;
    }

    Some(VerseKey {
        book,
        chapter: canonical_number(caps.get(2)?.as_str())?,
        verse: canonical_number(caps.get(3)?.as_str())?,
    })
}

/// Converts the flat KJV-style dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatKeyConverter;

impl CorpusConverter for FlatKeyConverter {
    fn label(&self) -> &str {
        "KJV"
    }

    fn version(&self) -> &str {
        "kjv"
    }

    fn convert(&self, input: &Value) -> Result<Conversion> {
        let entries = input.as_object().ok_or(ConvertError::UnexpectedShape {
            expected: "a JSON object keyed by \"Book Chapter:Verse\"",
        })?;

        let total = entries.len();
        info!("Processing {total} verses...");

        let mut corpus = NestedCorpus::new();
        let mut report = ConversionReport::default();
        let mut non_canonical = BTreeSet::new();

        for (i, (key, text)) in entries.iter().enumerate() {
            report.processed += 1;

            match parse_verse_key(key) {
                Some(parsed) => {
                    if !books::is_canonical(parsed.book) && non_canonical.insert(parsed.book) {
                        debug!("Book '{}' is not one of the canonical 66 names", parsed.book);
                    }
                    let previous =
                        corpus.insert(parsed.book, &parsed.chapter, &parsed.verse, text.clone());
                    if previous.is_some() {
                        warn!("Duplicate verse for key '{key}', keeping the later text");
                        report.duplicates += 1;
                    }
                }
                None => {
                    warn!("Could not parse verse key '{key}', skipping");
                    report.skipped += 1;
                }
            }

            log_progress(i + 1, total);
        }

        if report.skipped > 0 {
            warn!("Skipped {} verses due to parsing issues", report.skipped);
        }
        report.non_canonical_books = non_canonical.len();

        let report = report.finish(&corpus);
        Ok(Conversion { corpus, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    fn test_parse_simple_key() {
        assert_eq!(
            parse_verse_key("Genesis 1:1"),
            Some(VerseKey {
                book: "Genesis",
                chapter: "1".to_string(),
                verse: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_books_with_digits_and_spaces() {
        let key = parse_verse_key("1 John 4:8").unwrap();
        assert_eq!((key.book, key.chapter.as_str(), key.verse.as_str()), ("1 John", "4", "8"));

        let key = parse_verse_key("Song of Solomon 2:1").unwrap();
        assert_eq!(key.book, "Song of Solomon");

        let key = parse_verse_key("  Psalms 119:105 ").unwrap();
        assert_eq!((key.book, key.chapter.as_str(), key.verse.as_str()), ("Psalms", "119", "105"));
    }

    #[test]
    fn test_parse_strips_leading_zeros() {
        let key = parse_verse_key("Genesis 01:007").unwrap();
        assert_eq!((key.chapter.as_str(), key.verse.as_str()), ("1", "7"));
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for key in ["BadKey", "Genesis", "Genesis 1", "Genesis 1:", "Genesis 1:1a", "1:1", " 1:1", "Genesis a:1"] {
            assert_eq!(parse_verse_key(key), None, "{key:?} should not parse");
        }
    }

    #[test]
    fn test_convert_single_verse() {
        let input = json!({"Genesis 1:1": "In the beginning God created the heaven and the earth."});

        let conversion = FlatKeyConverter.convert(&input).unwrap();

        assert_eq!(
            conversion.corpus.into_value(),
            json!({"Genesis": {"1": {"1": "In the beginning God created the heaven and the earth."}}})
        );
        assert_eq!(conversion.report.books, 1);
        assert_eq!(conversion.report.verses, 1);
        assert_eq!(conversion.report.skipped, 0);
    }

    #[test]
    #[traced_test]
    fn test_convert_skips_bad_keys_and_continues() {
        let input = json!({
            "Genesis 1:1": "In the beginning",
            "BadKey": "orphan text",
            "Genesis 1:2": "And the earth was without form",
            "John 3:16": "For God so loved the world"
        });

        let conversion = FlatKeyConverter.convert(&input).unwrap();

        assert_eq!(conversion.report.processed, 4);
        assert_eq!(conversion.report.skipped, 1);
        assert_eq!(conversion.report.books, 2);
        assert_eq!(conversion.report.verses, 3);
        assert!(!conversion.corpus.as_map().contains_key("BadKey"));
        assert!(logs_contain("Could not parse verse key 'BadKey', skipping"));
        assert!(logs_contain("Skipped 1 verses due to parsing issues"));
    }

    #[test]
    #[traced_test]
    fn test_convert_counts_duplicate_paths() {
        let input = json!({
            "John 11:35": "Jesus wept",
            "John 11:035": "Jesus wept."
        });

        let conversion = FlatKeyConverter.convert(&input).unwrap();

        assert_eq!(conversion.report.duplicates, 1);
        assert_eq!(conversion.report.verses, 1);
        assert_eq!(conversion.corpus.as_map()["John"]["11"]["35"], "Jesus wept.");
        assert!(logs_contain("Duplicate verse"));
    }

    #[test]
    #[traced_test]
    fn test_convert_keeps_non_canonical_books() {
        let input = json!({
            "Psalm 23:1": "The LORD is my shepherd",
            "Psalms 23:2": "He maketh me to lie down",
            "Psalm 23:3": "He restoreth my soul"
        });

        let conversion = FlatKeyConverter.convert(&input).unwrap();

        assert_eq!(conversion.report.non_canonical_books, 1);
        assert_eq!(conversion.report.books, 2);
        assert!(conversion.corpus.as_map().contains_key("Psalm"));
        assert!(logs_contain("Book 'Psalm' is not one of the canonical 66 names"));
        assert!(!logs_contain("Book 'Psalms' is not"));
    }

    #[test]
    fn test_convert_rejects_non_object_input() {
        let err = FlatKeyConverter
            .convert(&json!(["Genesis 1:1", "In the beginning"]))
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnexpectedShape { .. }));
    }

    #[test]
    #[traced_test]
    fn test_convert_logs_progress() {
        let input: serde_json::Map<String, Value> = (1..=5000)
            .map(|n| (format!("Psalms 1:{n}"), json!("selah")))
            .collect();

        let conversion = FlatKeyConverter.convert(&Value::Object(input)).unwrap();

        assert_eq!(conversion.report.verses, 5000);
        assert!(logs_contain("Processed 5000/5000 verses..."));
    }
}
