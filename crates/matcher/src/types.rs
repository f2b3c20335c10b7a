use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum similarity a line must exceed to be reported as an answer.
pub const DEFAULT_MIN_SCORE: f64 = 0.1;

/// Tuning knobs for a [`Matcher`](crate::Matcher).
///
/// `MatchConfig` is cheap to copy and serde-friendly so it can be embedded in
/// higher-level service configs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Exclusive lower bound on the best score. A best score equal to this
    /// value is still "no match".
    #[serde(default = "MatchConfig::default_min_score")]
    pub min_score: f64,
}

impl MatchConfig {
    pub(crate) fn default_min_score() -> f64 {
        DEFAULT_MIN_SCORE
    }

    /// Config with an explicit threshold.
    pub fn with_min_score(min_score: f64) -> Self {
        Self { min_score }
    }

    /// Validate the configuration.
    ///
    /// The threshold must lie in `[0.0, 1.0)`: a negative threshold would
    /// report lines with no lexical overlap, and no score can exceed `1.0`.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..1.0).contains(&self.min_score) {
            return Err(MatchError::InvalidConfig(format!(
                "min_score must be in [0.0, 1.0), got {}",
                self.min_score
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: Self::default_min_score(),
        }
    }
}

/// Result of selecting the best line for a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The best-scoring candidate cleared the threshold.
    Matched {
        /// The winning candidate line, verbatim.
        line: String,
        /// Its cosine similarity to the query.
        score: f64,
        /// Position of the line in the candidate set.
        index: usize,
    },
    /// Empty corpus, or no candidate scored above the threshold.
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn line(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched { line, .. } => Some(line.as_str()),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            MatchOutcome::Matched { score, .. } => Some(*score),
            MatchOutcome::NoMatch => None,
        }
    }

    /// Flattens into `(line, found)`. The line is empty when nothing matched.
    pub fn into_answer(self) -> (String, bool) {
        match self {
            MatchOutcome::Matched { line, .. } => (line, true),
            MatchOutcome::NoMatch => (String::new(), false),
        }
    }
}

/// One candidate line with its score, as returned by
/// [`Matcher::rank`](crate::Matcher::rank).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredLine {
    pub index: usize,
    pub line: String,
    pub score: f64,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_score, DEFAULT_MIN_SCORE);
    }

    #[test]
    fn out_of_range_thresholds_rejected() {
        for min_score in [-0.01, 1.0, 1.5, f64::NAN] {
            let err = MatchConfig::with_min_score(min_score)
                .validate()
                .expect_err("config should be invalid");
            match err {
                MatchError::InvalidConfig(msg) => assert!(msg.contains("min_score")),
            }
        }
    }

    #[test]
    fn zero_threshold_is_allowed() {
        assert!(MatchConfig::with_min_score(0.0).validate().is_ok());
    }

    #[test]
    fn missing_min_score_uses_default() {
        let cfg: MatchConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(cfg, MatchConfig::default());
    }

    #[test]
    fn outcome_accessors() {
        let hit = MatchOutcome::Matched {
            line: "Gen Z loves gaming".into(),
            score: 0.5,
            index: 3,
        };
        assert!(hit.is_match());
        assert_eq!(hit.line(), Some("Gen Z loves gaming"));
        assert_eq!(hit.score(), Some(0.5));
        assert_eq!(hit.into_answer(), ("Gen Z loves gaming".to_string(), true));

        let miss = MatchOutcome::NoMatch;
        assert!(!miss.is_match());
        assert_eq!(miss.line(), None);
        assert_eq!(miss.into_answer(), (String::new(), false));
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(MatchOutcome::NoMatch).expect("serialize");
        assert_eq!(json, serde_json::json!({ "outcome": "no_match" }));
    }
}
