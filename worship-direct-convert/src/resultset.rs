//! Converter for relational result-set dumps.
//!
//! ```text
//! {"resultset": {"row": [{"field": [verse_id, book_number, chapter, verse, text]}, ...]}}
//! ```
//!
//! Book numbers are resolved through [`crate::books::BOOK_NAMES`]. Rows that
//! are malformed or name an unknown book are skipped with a warning; only a
//! missing `resultset.row` array fails the run.

use crate::books;
use crate::error::{ConvertError, Result};
use crate::pipeline::{Conversion, ConversionReport, CorpusConverter, log_progress};
use crate::tree::NestedCorpus;
use serde_json::Value;
use tracing::{info, warn};
use worship_direct_corpus::text::canonical_number;

/// Minimum number of entries in a row's `field` array.
pub const FIELD_COUNT: usize = 5;

/// Why a single row was skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowIssue {
    #[error("missing 'field' property")]
    MissingField,

    #[error("field has less than {} elements", FIELD_COUNT)]
    TooShort { len: usize },

    #[error("unknown book number {book} for verse {verse_id}")]
    UnknownBook { book: Value, verse_id: Value },

    #[error("{part} {value} is not a non-negative whole number")]
    BadNumber { part: &'static str, value: Value },
}

/// A row reduced to the parts the nested tree needs.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseRow {
    pub book: &'static str,
    pub chapter: String,
    pub verse: String,
    pub text: Value,
}

/// Extract book, chapter, verse and text from one `{"field": [...]}` row.
pub fn parse_row(row: &Value) -> std::result::Result<VerseRow, RowIssue> {
    let field = row
        .get("field")
        .and_then(Value::as_array)
        .ok_or(RowIssue::MissingField)?;
    if field.len() < FIELD_COUNT {
        return Err(RowIssue::TooShort { len: field.len() });
    }

    let (verse_id, book_number, chapter, verse, text) =
        (&field[0], &field[1], &field[2], &field[3], &field[4]);

    let book = book_number
        .as_u64()
        .and_then(books::book_name)
        .ok_or_else(|| RowIssue::UnknownBook {
            book: book_number.clone(),
            verse_id: verse_id.clone(),
        })?;

    Ok(VerseRow {
        book,
        chapter: number_key("chapter", chapter)?,
        verse: number_key("verse", verse)?,
        text: text.clone(),
    })
}

/// Coerce an integer or digit string into a canonical key.
fn number_key(part: &'static str, value: &Value) -> std::result::Result<String, RowIssue> {
    let key = match value {
        Value::Number(n) => n.as_u64().map(|n| n.to_string()),
        Value::String(s) => canonical_number(s.trim()),
        _ => None,
    };
    key.ok_or_else(|| RowIssue::BadNumber {
        part,
        value: value.clone(),
    })
}

/// Converts the result-set ASV-style dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultSetConverter;

impl CorpusConverter for ResultSetConverter {
    fn label(&self) -> &str {
        "ASV"
    }

    fn version(&self) -> &str {
        "asv"
    }

    fn convert(&self, input: &Value) -> Result<Conversion> {
        let rows = input
            .get("resultset")
            .and_then(|resultset| resultset.get("row"))
            .and_then(Value::as_array)
            .ok_or(ConvertError::MissingResultSet)?;

        let total = rows.len();
        info!("Processing {total} verses...");

        let mut corpus = NestedCorpus::new();
        let mut report = ConversionReport::default();

        for (i, row) in rows.iter().enumerate() {
            report.processed += 1;

            match parse_row(row) {
                Ok(parsed) => {
                    let previous =
                        corpus.insert(parsed.book, &parsed.chapter, &parsed.verse, parsed.text);
                    if previous.is_some() {
                        warn!(
                            "Row {i} repeats {} {}:{}, keeping the later text",
                            parsed.book, parsed.chapter, parsed.verse
                        );
                        report.duplicates += 1;
                    }
                }
                Err(issue) => {
                    warn!("Row {i} {issue}, skipping");
                    report.skipped += 1;
                }
            }

            log_progress(i + 1, total);
        }

        if report.skipped > 0 {
            warn!("Skipped {} rows due to parsing issues", report.skipped);
        }

        let report = report.finish(&corpus);
        Ok(Conversion { corpus, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    fn resultset(rows: Value) -> Value {
        json!({"resultset": {"row": rows}})
    }

    #[test]
    fn test_convert_single_row() {
        let input = resultset(json!([{"field": [1, 43, 3, 16, "For God so loved..."]}]));

        let conversion = ResultSetConverter.convert(&input).unwrap();

        assert_eq!(
            conversion.corpus.into_value(),
            json!({"John": {"3": {"16": "For God so loved..."}}})
        );
        assert_eq!(conversion.report.books, 1);
        assert_eq!(conversion.report.verses, 1);
    }

    #[test]
    #[traced_test]
    fn test_short_rows_and_unknown_books_are_skipped() {
        let input = resultset(json!([
            {"field": [1001001, 1, 1, 1, "In the beginning God created the heavens and the earth."]},
            {"field": [1, 2, 3]},
            {"field": [9999, 99, 1, 1, "Not a book"]},
            {"id": 7},
            {"field": [43003016, 43, 3, 16, "For God so loved the world"]}
        ]));

        let conversion = ResultSetConverter.convert(&input).unwrap();

        assert_eq!(conversion.report.processed, 5);
        assert_eq!(conversion.report.skipped, 3);
        assert_eq!(conversion.report.books, 2);
        assert_eq!(conversion.report.verses, 2);
        let books: Vec<&String> = conversion.corpus.as_map().keys().collect();
        assert_eq!(books, vec!["Genesis", "John"]);

        assert!(logs_contain("Row 1 field has less than 5 elements, skipping"));
        assert!(logs_contain("Row 2 unknown book number 99 for verse 9999, skipping"));
        assert!(logs_contain("Row 3 missing 'field' property, skipping"));
    }

    #[test]
    fn test_parse_row_coerces_numbers_to_keys() {
        let row = parse_row(&json!({"field": [1, 19, "023", 1, "The LORD is my shepherd"]})).unwrap();

        assert_eq!(row.book, "Psalms");
        assert_eq!(row.chapter, "23");
        assert_eq!(row.verse, "1");
        assert_eq!(row.text, json!("The LORD is my shepherd"));
    }

    #[test]
    fn test_parse_row_rejects_bad_numbers() {
        assert_eq!(
            parse_row(&json!({"field": [1, 1, -1, 1, "text"]})),
            Err(RowIssue::BadNumber {
                part: "chapter",
                value: json!(-1)
            })
        );
        assert!(matches!(
            parse_row(&json!({"field": [1, 1, 1, null, "text"]})),
            Err(RowIssue::BadNumber { part: "verse", .. })
        ));
        assert!(matches!(
            parse_row(&json!({"field": [1, "43", 3, 16, "text"]})),
            Err(RowIssue::UnknownBook { .. })
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let row = parse_row(&json!({"field": [1, 66, 22, 21, "Amen.", "extra"]})).unwrap();
        assert_eq!(row.book, "Revelation");
    }

    #[test]
    #[traced_test]
    fn test_convert_logs_progress() {
        let rows: Vec<Value> = (1..=5000)
            .map(|n| json!({"field": [19_119_000 + n, 19, 119, n, "selah"]}))
            .collect();

        let conversion = ResultSetConverter.convert(&resultset(Value::Array(rows))).unwrap();

        assert_eq!(conversion.report.verses, 5000);
        assert!(logs_contain("Processing 5000 verses..."));
        assert!(logs_contain("Processed 5000/5000 verses..."));
    }

    #[test]
    fn test_missing_resultset_is_fatal() {
        for input in [
            json!({}),
            json!({"resultset": {}}),
            json!({"resultset": {"row": "not rows"}}),
            json!([]),
        ] {
            let err = ResultSetConverter.convert(&input).unwrap_err();
            assert!(matches!(err, ConvertError::MissingResultSet), "{input}");
        }
    }

    #[test]
    fn test_empty_row_list_converts_to_empty_tree() {
        let conversion = ResultSetConverter.convert(&resultset(json!([]))).unwrap();

        assert!(conversion.corpus.is_empty());
        assert_eq!(conversion.report, ConversionReport::default());
    }
}
