//! # lineqa Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the relevance engine behind lineqa. Given a free-text query
//! and a small corpus of candidate lines, it finds the line that shares the
//! most vocabulary with the query, or reports that nothing is close enough.
//!
//! The pipeline for one call:
//! 1. Tokenize the query once (`canonical::tokenize`) and count tokens into a
//!    sparse [`TermVector`].
//! 2. For each candidate, in order, build its vector and compute
//!    [`cosine_similarity`] against the query vector.
//! 3. Keep the first candidate with the highest score.
//! 4. Report it only if the score is strictly above the threshold
//!    ([`DEFAULT_MIN_SCORE`] unless configured otherwise).
//!
//! ## Core Types
//!
//! - [`TermVector`]: token → occurrence count for one text.
//! - [`MatchConfig`]: the selection threshold.
//! - [`Matcher`]: validated config + selection and ranking operations.
//! - [`MatchOutcome`]: `Matched { line, score, index }` or `NoMatch`.
//! - [`ScoredLine`]: one ranked candidate.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{find_best_match, MatchConfig, MatchOutcome, Matcher};
//!
//! let corpus = vec![
//!     "Gen Z in Nashville loves gaming, 42% engagement".to_string(),
//!     "Millennials prefer outdoor activities".to_string(),
//! ];
//!
//! let (line, found) = find_best_match("Do Millennials like outdoor activities?", &corpus)
//!     .into_answer();
//! assert!(found);
//! assert_eq!(line, "Millennials prefer outdoor activities");
//!
//! let strict = Matcher::new(MatchConfig::with_min_score(0.9)).expect("valid threshold");
//! assert_eq!(
//!     strict.find_best_match("Do Millennials like outdoor activities?", &corpus),
//!     MatchOutcome::NoMatch
//! );
//! ```
//!
//! ## Failure model
//!
//! Matching itself never fails: empty queries, empty corpora and text without
//! letters or digits all map to [`MatchOutcome::NoMatch`]. Corpus retrieval
//! belongs to the caller, which should treat an unavailable corpus as no
//! match before calling in.
//!
//! ## Observability
//!
//! The engine emits `tracing` events only (`debug` per call, `trace` per
//! candidate). It holds no global state; callers that want latency or outcome
//! metrics time the call themselves.

pub mod engine;
pub mod similarity;
pub mod types;
pub mod vector;

pub use crate::engine::{find_best_match, Matcher};
pub use crate::similarity::cosine_similarity;
pub use crate::types::{MatchConfig, MatchError, MatchOutcome, ScoredLine, DEFAULT_MIN_SCORE};
pub use crate::vector::TermVector;
