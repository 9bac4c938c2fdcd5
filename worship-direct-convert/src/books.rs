//! The 66 canonical book names in canonical order.

/// Canonical book names; book number `n` (1-based) is `BOOK_NAMES[n - 1]`.
pub const BOOK_NAMES: [&str; 66] = [
    // Old Testament
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    // New Testament
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Name of book `number` (1 = Genesis, 66 = Revelation).
pub fn book_name(number: u64) -> Option<&'static str> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    BOOK_NAMES.get(index).copied()
}

/// Whether `name` is spelled exactly as one of the canonical books.
pub fn is_canonical(name: &str) -> bool {
    BOOK_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_numbers() {
        assert_eq!(book_name(1), Some("Genesis"));
        assert_eq!(book_name(22), Some("Song of Solomon"));
        assert_eq!(book_name(43), Some("John"));
        assert_eq!(book_name(66), Some("Revelation"));
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert_eq!(book_name(0), None);
        assert_eq!(book_name(67), None);
        assert_eq!(book_name(99), None);
        assert_eq!(book_name(u64::MAX), None);
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("1 John"));
        assert!(is_canonical("Psalms"));
        assert!(!is_canonical("Psalm"));
        assert!(!is_canonical("john"));
    }
}
