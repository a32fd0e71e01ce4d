//! Allocation helpers (probabilities, softmax, categorical draws).

use rand::Rng;

/// Numerically stable softmax.
///
/// - Subtracts the maximum before exponentiating, so large preferences never
///   overflow.
/// - Falls back to uniform when the input has no finite maximum (all `-inf`,
///   all NaN) or the normalizer degenerates.
/// - Returns an empty vector for empty input; otherwise sums to 1.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let n = scores.len();
    let uniform = || vec![1.0 / n as f64; n];

    let max_score = scores
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max_score.is_finite() {
        return uniform();
    }

    let mut out: Vec<f64> = scores
        .iter()
        .map(|&v| if v.is_nan() { 0.0 } else { (v - max_score).exp() })
        .collect();
    let denom: f64 = out.iter().sum();
    if denom <= 0.0 || !denom.is_finite() {
        return uniform();
    }
    for p in &mut out {
        *p /= denom;
    }
    out
}

/// Draw an index according to `probs`.
///
/// Robust to small floating-point error: if the CDF undershoots the draw, the
/// last index is returned.
pub fn sample_index<R: Rng + ?Sized>(rng: &mut R, probs: &[f64]) -> usize {
    let r: f64 = rng.random();
    let mut cdf = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cdf += p;
        if r < cdf {
            return i;
        }
    }
    probs.len().saturating_sub(1)
}
