//! The nested `{Book: {Chapter: {Verse: Text}}}` tree built by the converters.

use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

/// Output tree of a conversion, in first-seen order at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NestedCorpus {
    books: Map<String, Value>,
}

impl NestedCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a verse, creating the book and chapter levels on first use.
    ///
    /// Returns the text previously stored at the same path, if any; the new
    /// text replaces it.
    pub fn insert(&mut self, book: &str, chapter: &str, verse: &str, text: Value) -> Option<Value> {
        let chapters = child_map(&mut self.books, book);
        let verses = child_map(chapters, chapter);
        verses.insert(verse.to_string(), text)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of verses across every book and chapter.
    pub fn verse_count(&self) -> usize {
        self.books
            .values()
            .filter_map(Value::as_object)
            .flat_map(|chapters| chapters.values())
            .filter_map(Value::as_object)
            .map(Map::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.books
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.books)
    }

    /// Write the tree as UTF-8 JSON with a two-space indent; non-ASCII text is
    /// written literally rather than escaped.
    pub fn write_pretty<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.books)
    }
}

fn child_map<'m>(parent: &'m mut Map<String, Value>, key: &str) -> &'m mut Map<String, Value> {
    let slot = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(children) => children,
        _ => unreachable!("slot was just set to an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_creates_levels() {
        let mut corpus = NestedCorpus::new();
        corpus.insert("Genesis", "1", "1", json!("In the beginning"));
        corpus.insert("Genesis", "1", "2", json!("And the earth was without form"));
        corpus.insert("John", "3", "16", json!("For God so loved the world"));

        assert_eq!(
            corpus.clone().into_value(),
            json!({
                "Genesis": {"1": {"1": "In the beginning", "2": "And the earth was without form"}},
                "John": {"3": {"16": "For God so loved the world"}}
            })
        );
        assert_eq!(corpus.book_count(), 2);
        assert_eq!(corpus.verse_count(), 3);
    }

    #[test]
    fn test_insert_reports_replaced_text() {
        let mut corpus = NestedCorpus::new();
        assert_eq!(corpus.insert("John", "11", "35", json!("Jesus wept")), None);
        assert_eq!(
            corpus.insert("John", "11", "35", json!("Jesus wept.")),
            Some(json!("Jesus wept"))
        );
        assert_eq!(corpus.verse_count(), 1);
    }

    #[test]
    fn test_keys_keep_first_seen_order() {
        let mut corpus = NestedCorpus::new();
        corpus.insert("Revelation", "22", "21", json!("The grace"));
        corpus.insert("Genesis", "1", "1", json!("In the beginning"));
        corpus.insert("Revelation", "1", "1", json!("The Revelation"));

        let books: Vec<&String> = corpus.as_map().keys().collect();
        assert_eq!(books, vec!["Revelation", "Genesis"]);
        let chapters: Vec<&String> = corpus.as_map()["Revelation"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(chapters, vec!["22", "1"]);
    }

    #[test]
    fn test_write_pretty_keeps_non_ascii() {
        let mut corpus = NestedCorpus::new();
        corpus.insert("Psalms", "119", "1", json!("ALEPH. Blessed are the undefiled, «selah» ἀλήθεια"));

        let mut out = Vec::new();
        corpus.write_pretty(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("«selah»"));
        assert!(!text.contains("\\u"));
        assert!(text.starts_with("{\n  \"Psalms\": {\n    \"119\": {"));
    }
}
