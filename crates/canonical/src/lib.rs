//! lineqa canonical text layer.
//!
//! Turns raw text into the normalized tokens the relevance engine counts,
//! and turns a reference corpus into the candidate lines it scores.
//!
//! ## What we do
//!
//! - Lowercasing (locale-free Unicode lowercase)
//! - Splitting on anything that is not a letter or number (combining marks
//!   included)
//! - Byte offsets back into the original input for every token
//! - Corpus cleaning: table delimiters and blank lines removed
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text in, same tokens
//! out, on any machine and from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - Token text is never empty and contains only letters and numbers
//! - Re-tokenizing the space-joined tokens yields the same token texts
//! - `clean_lines` never returns an empty line

mod lines;
mod token;

pub use crate::lines::{clean_lines, LINE_DELIMITERS};
pub use crate::token::{tokenize, tokenize_words, Token};
