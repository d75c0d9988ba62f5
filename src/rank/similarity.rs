//! Cosine similarity between term vectors.

use super::tfidf::TermVector;

/// Cosine of the angle between `a` and `b`.
///
/// Returns 0 when either vector has zero magnitude. TF-IDF weights are
/// non-negative, so the result is clamped to `[0, 1]` to absorb rounding.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let denominator = a.magnitude() * b.magnitude();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(0.0, 1.0)
}
