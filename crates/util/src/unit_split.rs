//! # Unit Split Arithmetic
//!
//! A *unit* is a contiguous group of words. Splitting a document with a unit
//! size of `n` yields `ceil(total_words / n)` units, all of exactly `n` words
//! except possibly the last one.

use serde::Serialize;

/// Unit size the dialog starts from and returns to on reset.
pub const DEFAULT_UNIT_SIZE: usize = 50;

/// Textual form of [`DEFAULT_UNIT_SIZE`] shown in the input field.
pub const DEFAULT_UNIT_SIZE_INPUT: &str = "50";

/// One contiguous group of words produced by [`split_into_units`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// 1-based position of the unit in the document.
    pub index: usize,
    /// 0-based index of the unit's first word in the document.
    pub first_word: usize,
    /// Number of words in this unit.
    pub word_count: usize,
    /// Unit words joined by single spaces.
    pub text: String,
}

/// Parses user input into a positive unit size.
///
/// Leading whitespace is skipped, an optional sign is accepted and the
/// longest run of ASCII digits that follows is read; trailing characters are
/// ignored (`"30 words"` parses as 30, `"1.9"` as 1). Returns `None` when no
/// digits are present, when the value is zero or negative, or when it does
/// not fit in a `usize`.
///
/// # Example
/// ```rust
/// use wordsplit_util::parse_unit_size;
///
/// assert_eq!(parse_unit_size("50"), Some(50));
/// assert_eq!(parse_unit_size(" 12px"), Some(12));
/// assert_eq!(parse_unit_size("0"), None);
/// assert_eq!(parse_unit_size("-3"), None);
/// assert_eq!(parse_unit_size(""), None);
/// ```
pub fn parse_unit_size(input: &str) -> Option<usize> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &unsigned[..digits_len];
    if negative {
        // "-0", "-000" and every other negative value are all non-positive.
        return None;
    }

    match digits.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Number of units `total_words` splits into with the given unit size.
///
/// Ceiling division; a zero unit size yields zero units.
pub fn unit_count(total_words: usize, unit_size: usize) -> usize {
    if unit_size == 0 {
        return 0;
    }
    total_words.div_ceil(unit_size)
}

/// Counts whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits `text` into units of `unit_size` words.
///
/// Returns an empty vector for a zero unit size or a text without words.
pub fn split_into_units(text: &str, unit_size: usize) -> Vec<Unit> {
    if unit_size == 0 {
        return Vec::new();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(unit_size)
        .enumerate()
        .map(|(position, chunk)| Unit {
            index: position + 1,
            first_word: position * unit_size,
            word_count: chunk.len(),
            text: chunk.join(" "),
        })
        .collect()
}
