/*!
 * Paragraph and whitespace handling for prose scripts.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// A blank line (possibly holding spaces or tabs) separates two paragraphs.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Invalid paragraph break regex")
});

/// Split a script into paragraphs.
///
/// Line endings are normalized, every paragraph has its internal whitespace
/// collapsed to single spaces, and paragraphs that hold only whitespace are
/// dropped. Paragraph order is preserved.
pub fn split_paragraphs(script: &str) -> Vec<String> {
    let unified = script.replace("\r\n", "\n").replace('\r', "\n");

    PARAGRAPH_BREAK
        .split(&unified)
        .map(collapse_whitespace)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the text contains at least one letter or digit.
pub fn has_words(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Count whitespace-separated tokens that contain a letter or digit.
///
/// Stand-alone punctuation such as `-` or `***` is not a word.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().filter(|token| has_words(token)).count()
}
