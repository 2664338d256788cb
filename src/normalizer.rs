//! Text normalization
//!
//! Canonicalizes raw chat input so that keyword phrases and user messages
//! can be compared with plain substring containment:
//! - Lowercase conversion and trimming
//! - Thai digits (๐-๙) to ASCII digits
//! - Removal of emoji, symbols and combining marks
//! - Dash and quote variants folded to ASCII
//! - Whitespace runs collapsed to a single space
//!
//! Combining marks include the Thai vowel and tone marks, so "สวัสดี"
//! normalizes to "สวสด". Phrases go through the same function, which keeps
//! matching consistent.

use lazy_static::lazy_static;
use regex::Regex;

const THAI_DIGITS: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];

lazy_static! {
    /// Decorative and marking characters, removed outright
    static ref DECORATIVE: Regex = Regex::new(
        r"[\p{Emoji_Presentation}\p{Extended_Pictographic}\p{Symbol}\p{Mark}]"
    )
    .unwrap();

    /// Hyphen, non-breaking hyphen, figure dash, en dash, em dash, horizontal bar
    static ref DASHES: Regex = Regex::new(r"[\u{2010}-\u{2015}]").unwrap();

    static ref DOUBLE_QUOTES: Regex = Regex::new(r"[\u{201C}\u{201D}\u{00AB}\u{00BB}\u{201E}]").unwrap();

    static ref SINGLE_QUOTES: Regex = Regex::new(r"[\u{2018}\u{2019}\u{2039}\u{203A}]").unwrap();

    /// Unicode whitespace plus the byte order mark, minus NEL (U+0085)
    static ref WHITESPACE: Regex = Regex::new(r"[[\s\u{FEFF}]--\u{0085}]+").unwrap();
}

/// Whitespace as chat input sees it: the byte order mark counts, NEL does not.
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Map Thai native digits to their ASCII counterparts by position.
fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match THAI_DIGITS.iter().position(|d| *d == c) {
            Some(pos) => char::from(b'0' + pos as u8),
            None => c,
        })
        .collect()
}

/// Normalize text for keyword matching.
///
/// Total and pure: any input, including the empty string, yields a string.
/// Characters not covered by a rule pass through unchanged.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let trimmed = lowered.trim_matches(is_space);

    let digits = to_ascii_digits(trimmed);
    let stripped = DECORATIVE.replace_all(&digits, "");

    let dashed = DASHES.replace_all(&stripped, "-");
    let quoted = DOUBLE_QUOTES.replace_all(&dashed, "\"");
    let apostrophed = SINGLE_QUOTES.replace_all(&quoted, "'");

    WHITESPACE.replace_all(&apostrophed, " ").into_owned()
}

/// Remove every whitespace character, for spacing-insensitive comparison.
pub fn remove_spaces(text: &str) -> String {
    text.chars().filter(|c| !is_space(*c)).collect()
}
