use crate::similarity::cosine_similarity;
use crate::types::{MatchConfig, MatchError, MatchOutcome, ScoredLine};
use crate::vector::TermVector;


/// Selects the candidate line most similar to a query.
///
/// A `Matcher` holds nothing but its validated config, so it is `Copy` and
/// can be shared freely between threads. Every call builds its own vectors
/// from the inputs it is given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from an explicit config.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the best candidate for `query`, or [`MatchOutcome::NoMatch`].
    ///
    /// Candidates are scored in order and the running best is replaced only on
    /// a strictly greater score, so the earliest line wins ties. The best line
    /// is reported only when its score exceeds `min_score`.
    pub fn find_best_match<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> MatchOutcome {
        let outcome = self.select(query, candidates);

        tracing::debug!(
            candidates = candidates.len(),
            matched = outcome.is_match(),
            score = outcome.score().unwrap_or(0.0),
            "match selection finished"
        );

        outcome
    }

    fn select<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> MatchOutcome {
        if candidates.is_empty() {
            return MatchOutcome::NoMatch;
        }

        let query_vec = TermVector::from_text(query);
        // Every score would be zero, which never clears a non-negative threshold.
        if query_vec.is_empty() {
            return MatchOutcome::NoMatch;
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = cosine_similarity(&query_vec, &TermVector::from_text(candidate.as_ref()));
            tracing::trace!(index, score, "scored candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) if score > self.config.min_score => MatchOutcome::Matched {
                line: candidates[index].as_ref().to_string(),
                score,
                index,
            },
            _ => MatchOutcome::NoMatch,
        }
    }

    /// Scores every candidate against `query`, in input order.
    pub fn score_all<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<f64> {
        let query_vec = TermVector::from_text(query);
        candidates
            .iter()
            .map(|c| cosine_similarity(&query_vec, &TermVector::from_text(c.as_ref())))
            .collect()
    }

    /// Candidates scoring above the threshold, best first, at most `limit`.
    ///
    /// Equal scores keep input order, so the head of a non-empty ranking is the
    /// line [`find_best_match`](Self::find_best_match) returns.
    pub fn rank<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
        limit: usize,
    ) -> Vec<ScoredLine> {
        let mut ranked: Vec<ScoredLine> = self
            .score_all(query, candidates)
            .into_iter()
            .enumerate()
            .filter(|(_, score)| *score > self.config.min_score)
            .map(|(index, score)| ScoredLine {
                index,
                line: candidates[index].as_ref().to_string(),
                score,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }
}

/// [`Matcher::find_best_match`] with the default threshold.
///
/// ```rust
/// use matcher::find_best_match;
///
/// let corpus = [
///     "Gen Z in Nashville loves gaming, 42% engagement",
///     "Millennials prefer outdoor activities",
/// ];
/// let outcome = find_best_match(
///     "What percentage of Gen Z in Nashville are interested in gaming?",
///     &corpus,
/// );
/// assert_eq!(outcome.line(), Some(corpus[0]));
/// ```
pub fn find_best_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> MatchOutcome {
    Matcher::default().find_best_match(query, candidates)
}
