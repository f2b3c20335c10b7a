//! Sparse term-frequency vectors.
//!
//! A [`TermVector`] maps every distinct token of one text to the number of
//! times it occurs. Tokens that never occur have no entry and weigh zero, so a
//! vector only costs as much as the text it was built from, no matter how
//! large the open vocabulary grows.

use canonical::tokenize;
use fxhash::FxHashMap;

/// Token → occurrence count for a single text.
///
/// Weights are stored as `f64` so scoring needs no conversions, but every
/// stored weight is a strictly positive whole number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: FxHashMap<String, f64>,
}

impl TermVector {
    /// Tokenizes `text` and counts each distinct token.
    ///
    /// ```rust
    /// use matcher::TermVector;
    ///
    /// let vec = TermVector::from_text("Hello, hello world!");
    /// assert_eq!(vec.weight("hello"), 2.0);
    /// assert_eq!(vec.weight("world"), 1.0);
    /// assert_eq!(vec.weight("absent"), 0.0);
    /// assert_eq!(vec.total_weight(), 3.0);
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Counts already-normalized tokens. Empty tokens are ignored.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut weights = FxHashMap::default();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            *weights.entry(token.to_string()).or_insert(0.0) += 1.0;
        }
        Self { weights }
    }

    /// Weight of `term`, zero when absent.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights, i.e. the token count of the source text.
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Sum of squared weights.
    pub fn norm_squared(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Dot product, summed over the tokens of `self`.
    pub fn dot(&self, other: &TermVector) -> f64 {
        self.weights
            .iter()
            .map(|(term, weight)| weight * other.weight(term))
            .sum()
    }

    /// Iterates `(token, weight)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(term, w)| (term.as_str(), *w))
    }
}

impl<S: AsRef<str>> FromIterator<S> for TermVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_punctuation_do_not_change_the_vector() {
        assert_eq!(
            TermVector::from_text("Hello, World!"),
            TermVector::from_text("hello world")
        );
    }

    #[test]
    fn total_weight_equals_token_count() {
        let texts = [
            "",
            "one",
            "the cat and the hat and the bat",
            "Gen Z in Nashville loves gaming, 42% engagement",
        ];
        for text in texts {
            let vec = TermVector::from_text(text);
            assert_eq!(vec.total_weight(), tokenize(text).len() as f64, "{text:?}");
        }
    }

    #[test]
    fn weights_are_positive_counts() {
        let vec = TermVector::from_text("a a a b c c");
        assert_eq!(vec.len(), 3);
        for (_, weight) in vec.iter() {
            assert!(weight >= 1.0);
            assert_eq!(weight.fract(), 0.0);
        }
        assert_eq!(vec.weight("a"), 3.0);
        assert_eq!(vec.weight("c"), 2.0);
    }

    #[test]
    fn empty_text_builds_empty_vector() {
        let vec = TermVector::from_text("  ... ");
        assert!(vec.is_empty());
        assert_eq!(vec.norm(), 0.0);
    }

    #[test]
    fn norm_and_dot() {
        let a = TermVector::from_text("x x y");
        let b = TermVector::from_text("x z");
        assert_eq!(a.norm_squared(), 5.0);
        assert_eq!(a.dot(&b), 2.0);
        assert_eq!(b.dot(&a), 2.0);
        assert!((a.norm() - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn collects_from_token_iterator() {
        let vec: TermVector = ["cat", "dog", "cat", ""].into_iter().collect();
        assert_eq!(vec.weight("cat"), 2.0);
        assert_eq!(vec.len(), 2);
    }
}
