use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// A normalized word or numeral with its UTF-8 byte span in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Lowercased token text. Only letters and digits.
    pub text: String,
    /// Byte offset (inclusive) in the original input.
    pub start: usize,
    /// Byte offset (exclusive) in the original input.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits arbitrary text into lowercase letter/digit runs.
///
/// Every character outside the Unicode letter (`L*`) and number (`N*`)
/// categories acts as a separator, so punctuation, symbols, whitespace and
/// combining marks never reach a token.
/// Separator runs collapse, and empty fields are discarded. Duplicates are
/// kept in input order.
///
/// Lowercasing happens before classification: a character whose lowercase
/// form expands into several characters contributes each of them, and any
/// non-letter character produced that way splits the token.
///
/// ```rust
/// use canonical::tokenize;
///
/// let tokens = tokenize("Hello, World! 42%");
/// let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(words, vec!["hello", "world", "42"]);
/// assert_eq!((tokens[1].start, tokens[1].end), (7, 12));
///
/// assert!(tokenize("  ?!  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity((text.len() / 5).saturating_add(1));
    let mut current = String::new();
    let mut start: Option<usize> = None;
    let mut end = 0;

    for (idx, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            if lower.is_letter() || lower.is_number() {
                if start.is_none() {
                    start = Some(idx);
                }
                current.push(lower);
                end = idx + ch.len_utf8();
            } else {
                finalize_token(&mut tokens, &mut current, &mut start, end);
            }
        }
    }

    finalize_token(&mut tokens, &mut current, &mut start, end);
    tokens
}

/// Same as [`tokenize`], returning only the token texts.
pub fn tokenize_words(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}

fn finalize_token(
    tokens: &mut Vec<Token>,
    current: &mut String,
    start: &mut Option<usize>,
    end: usize,
) {
    if let Some(token_start) = start.take() {
        tokens.push(Token {
            text: std::mem::take(current),
            start: token_start,
            end,
        });
    }
}
