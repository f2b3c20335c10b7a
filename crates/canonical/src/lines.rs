//! Corpus line cleaning.
//!
//! Reference corpora are plain text or markdown tables. Each line becomes one
//! candidate answer once table delimiters and padding are removed:
//!
//! ```text
//! | Gen Z in Nashville | gaming | 42% |   ->   Gen Z in Nashville | gaming | 42%
//! ```
//!
//! Only the ends of a line are touched; inner `|` separators stay, since they
//! are separators to the tokenizer anyway.

/// Characters stripped from both ends of every corpus line.
pub const LINE_DELIMITERS: &[char] = &[' ', '|', '\r'];

/// Splits a corpus into candidate lines.
///
/// Lines are split on `\n`, trimmed of spaces, `|` and `\r` on both ends, and
/// dropped when nothing is left. Order is preserved.
///
/// ```rust
/// use canonical::clean_lines;
///
/// let corpus = "| Segment | Share |\n|  |\n\n  Millennials prefer outdoor activities  \n";
/// assert_eq!(
///     clean_lines(corpus),
///     vec!["Segment | Share", "Millennials prefer outdoor activities"]
/// );
/// ```
pub fn clean_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_matches(LINE_DELIMITERS))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
