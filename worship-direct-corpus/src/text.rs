//! Key normalisation helpers shared by the accessor and verse references.

/// Title-case a key the way book names are stored in the corpus.
///
/// Every cased character that follows another cased character is lowercased;
/// every other cased character is put in titlecase. Digits, spaces and
/// punctuation have no case, so they both start new words and pass through
/// untouched:
///
/// ```
/// use worship_direct_corpus::text::title_case;
///
/// assert_eq!(title_case("john"), "John");
/// assert_eq!(title_case("1 CORINTHIANS"), "1 Corinthians");
/// assert_eq!(title_case("1john"), "1John");
/// assert_eq!(title_case("16"), "16");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        let cased = is_cased(ch);
        if cased && previous_cased {
            out.extend(ch.to_lowercase());
        } else if cased {
            push_titlecase(&mut out, ch);
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }

    out
}

/// Uppercase only the first character, leaving the rest as given.
///
/// Used when echoing a user-supplied book segment back in a reference label.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip leading zeros from a run of ASCII digits, keeping a lone `"0"`.
///
/// Returns `None` if `digits` is empty or contains anything but `0-9`.
pub fn canonical_number(digits: &str) -> Option<String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

/// Latin digraphs with a distinct titlecase form: (upper, title, lower).
const DIGRAPHS: [(char, char, char); 4] = [
    ('\u{01C4}', '\u{01C5}', '\u{01C6}'),
    ('\u{01C7}', '\u{01C8}', '\u{01C9}'),
    ('\u{01CA}', '\u{01CB}', '\u{01CC}'),
    ('\u{01F1}', '\u{01F2}', '\u{01F3}'),
];

/// Titlecase form of `ch`.
///
/// Digraphs use their dedicated titlecase letter. Otherwise the uppercase
/// expansion is kept up to its first cased character and the rest is
/// lowercased, so ligatures such as `ﬁ` become `Fi` rather than `FI`.
fn push_titlecase(out: &mut String, ch: char) {
    if let Some(&(_, title, _)) = DIGRAPHS
        .iter()
        .find(|(upper, title, lower)| [*upper, *title, *lower].contains(&ch))
    {
        out.push(title);
        return;
    }

    let mut seen_cased = false;
    for upper in ch.to_uppercase() {
        if seen_cased {
            out.extend(upper.to_lowercase());
        } else {
            out.push(upper);
            seen_cased = is_cased(upper);
        }
    }
}

/// Lowercase, uppercase and titlecase letters all count as cased.
fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || !ch.to_lowercase().eq([ch])
}
