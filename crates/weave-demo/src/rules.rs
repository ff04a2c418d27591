//! The arithmetic and validation rules behind the demo screens.
//!
//! All of these are pure and total: bad numeric input counts as zero.

use unicode_segmentation::UnicodeSegmentation;

/// Integer value of a field, or 0 when the text is empty, not a whole
/// base-10 integer (`"12a"`, `" 1"`), or out of `i64` range.
pub fn parse_number(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// Sum of every field under `parse_number`. Accumulates in `i128` so any
/// realistic number of `i64` fields cannot overflow.
pub fn sum_numbers<S: AsRef<str>>(texts: &[S]) -> i128 {
    texts
        .iter()
        .map(|t| i128::from(parse_number(t.as_ref())))
        .sum()
}

/// Decimal string of `sum_numbers`, as shown in the result label.
pub fn sum_text<S: AsRef<str>>(texts: &[S]) -> String {
    sum_numbers(texts).to_string()
}

/// True when `text` has at least `min_len` user-perceived characters.
pub fn validate(text: &str, min_len: usize) -> bool {
    text.graphemes(true).count() >= min_len
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthRules {
    pub min_username: usize,
    pub min_password: usize,
}

impl Default for LengthRules {
    fn default() -> Self {
        Self {
            min_username: 5,
            min_password: 5,
        }
    }
}

/// Both fields valid.
pub fn gate(username: &str, password: &str, rules: LengthRules) -> bool {
    validate(username, rules.min_username) && validate(password, rules.min_password)
}

pub fn length_hint(subject: &str, min_len: usize) -> String {
    format!("{subject} has to be at least {min_len} characters")
}
