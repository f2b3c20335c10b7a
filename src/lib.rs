//! Workspace umbrella crate for lineqa.
//!
//! Ties the tokenizer, the relevance matcher and the corpus suppliers
//! together so callers can answer a question against a corpus with a single
//! entry point:
//!
//! ```rust
//! use lineqa::{answer, Matcher, StaticCorpus};
//!
//! let corpus = StaticCorpus::from_text(
//!     "Gen Z in Nashville loves gaming, 42% engagement\nMillennials prefer outdoor activities\n",
//! );
//! let outcome = answer(
//!     "What percentage of Gen Z in Nashville are interested in gaming?",
//!     &corpus,
//!     &Matcher::default(),
//! )?;
//! assert_eq!(outcome.line(), Some("Gen Z in Nashville loves gaming, 42% engagement"));
//! # Ok::<(), lineqa::LineqaError>(())
//! ```

pub use canonical::{Token, clean_lines, tokenize, tokenize_words};
pub use matcher::{
    DEFAULT_MIN_SCORE, MatchConfig, MatchError, MatchOutcome, Matcher, ScoredLine, TermVector,
    cosine_similarity, find_best_match,
};
pub use server::{CorpusError, CorpusSource, DEFAULT_FALLBACK_REPLY, FileCorpus, StaticCorpus};

use thiserror::Error;

/// Errors surfaced by the one-shot answer helpers.
#[derive(Debug, Error)]
pub enum LineqaError {
    #[error("corpus failure: {0}")]
    Corpus(#[from] CorpusError),
    #[error("matcher failure: {0}")]
    Match(#[from] MatchError),
}

/// Load `corpus` and return the best line for `query`.
///
/// Unlike the chat server, an unreadable corpus is an error here rather than
/// a silent "no match".
pub fn answer(
    query: &str,
    corpus: &dyn CorpusSource,
    matcher: &Matcher,
) -> Result<MatchOutcome, LineqaError> {
    let lines = corpus.load()?;
    tracing::debug!(corpus = %corpus.describe(), lines = lines.len(), "corpus loaded");
    Ok(matcher.find_best_match(query, &lines))
}

/// Load `corpus` and return up to `limit` lines scoring above the threshold,
/// best first.
pub fn rank(
    query: &str,
    corpus: &dyn CorpusSource,
    matcher: &Matcher,
    limit: usize,
) -> Result<Vec<ScoredLine>, LineqaError> {
    let lines = corpus.load()?;
    Ok(matcher.rank(query, &lines, limit))
}

/// Build a matcher for `min_score`, validating the threshold.
pub fn matcher_with_min_score(min_score: f64) -> Result<Matcher, LineqaError> {
    Ok(Matcher::new(MatchConfig::with_min_score(min_score))?)
}
