use crate::vector::TermVector;

/// Cosine similarity between two term-frequency vectors.
///
/// Returns a value in `[0.0, 1.0]`. When either vector has zero length (empty
/// text, or text without letters or digits) the similarity is `0.0`.
///
/// The square root is taken once over the product of the squared norms.
/// Squared norms of count vectors are exact integers, so a vector compared
/// with itself scores exactly `1.0`.
///
/// ```rust
/// use matcher::{cosine_similarity, TermVector};
///
/// let a = TermVector::from_text("cat dog");
/// let b = TermVector::from_text("dog cat");
/// assert_eq!(cosine_similarity(&a, &b), 1.0);
///
/// let empty = TermVector::from_text("");
/// assert_eq!(cosine_similarity(&a, &empty), 0.0);
/// ```
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm_squared();
    let norm_b = b.norm_squared();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let score = a.dot(b) / (norm_a * norm_b).sqrt();
    score.clamp(0.0, 1.0)
}
