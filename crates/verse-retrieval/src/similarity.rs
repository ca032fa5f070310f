//! Cosine similarity between embeddings.

/// Cosine similarity between two vectors, in `[-1, 1]`.
///
/// Returns 0.0 when the lengths differ, either vector has zero magnitude, or
/// a non-finite component makes the ratio undefined.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    let score = dot / (mag_a.sqrt() * mag_b.sqrt());
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(-1.0, 1.0)
}
