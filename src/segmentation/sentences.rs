/*!
 * Sentence boundary detection.
 *
 * Boundary detection is punctuation and locale sensitive, so the segmenter
 * only talks to the `SentenceDetector` trait. The default implementation is
 * a punctuation scanner tuned for English prose.
 */

use std::fmt::Debug;

/// Detects sentence boundaries inside one paragraph.
///
/// Implementations receive a paragraph whose whitespace has already been
/// collapsed to single spaces. They must return borrowed, trimmed sentences in
/// order such that joining them with a single space reproduces the paragraph.
pub trait SentenceDetector: Send + Sync + Debug {
    /// Split the paragraph into sentences.
    fn sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str>;
}

/// Abbreviations that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "sr.", "jr.", "mt.", "vs.", "e.g.", "i.e.",
    "approx.", "no.", "int.", "ext.",
];

/// Characters that may close a sentence.
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Quotes and brackets that stay attached to the sentence they close.
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']' | '»')
}

/// Punctuation-driven sentence detector.
#[derive(Debug, Clone, Default)]
pub struct PunctuationSentenceDetector;

impl PunctuationSentenceDetector {
    pub fn new() -> Self {
        Self
    }

    /// Whether the word ending at a period is an abbreviation or an initial.
    fn is_abbreviation(word: &str) -> bool {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let lowered = word.to_lowercase();
        if ABBREVIATIONS.contains(&lowered.as_str()) {
            return true;
        }

        // Single capital initial such as the "J." in "J. Smith"
        let mut chars = word.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some('.'), None) if letter.is_uppercase()
        )
    }

    /// Whether the text after a candidate boundary continues the sentence.
    fn continues_sentence(rest: &str) -> bool {
        rest.chars()
            .find(|c| c.is_alphanumeric())
            .is_some_and(char::is_lowercase)
    }
}

impl SentenceDetector for PunctuationSentenceDetector {
    fn sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        let text = paragraph.trim();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !is_terminal(c) {
                continue;
            }

            let first_end = i + c.len_utf8();
            let mut end = first_end;
            while let Some(&(j, next)) = chars.peek() {
                if is_terminal(next) || is_closer(next) {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let rest = &text[end..];
            if !rest.starts_with(char::is_whitespace) {
                continue;
            }
            let next_sentence = rest.trim_start();
            if next_sentence.is_empty() {
                continue;
            }

            if c == '.' && end == first_end {
                let word = text[start..first_end]
                    .rsplit(char::is_whitespace)
                    .next()
                    .unwrap_or_default();
                if Self::is_abbreviation(word) {
                    continue;
                }
            }

            if Self::continues_sentence(next_sentence) {
                continue;
            }

            sentences.push(text[start..end].trim());
            start = text.len() - next_sentence.len();
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }
}
