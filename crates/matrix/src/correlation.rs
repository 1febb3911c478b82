//! Pairwise-complete Pearson correlation over sparse vectors.
//!
//! The matrix stores ratings as maps, so "pairwise-complete observations"
//! falls out naturally: the statistic is computed over the intersection of
//! the two key sets only. Absent keys are excluded, never zero-filled.

use std::collections::HashMap;
use std::hash::Hash;

/// Variance below this is treated as zero (constant sequence)
const VARIANCE_EPSILON: f64 = 1e-12;

/// Pearson correlation between two sparse vectors, using only keys present
/// in both.
///
/// Returns `None` when the correlation is undefined: fewer than two shared
/// keys, or either side constant over the shared keys. Callers must drop
/// such pairs, not map them to 0.0.
pub fn pearson_sparse<K>(a: &HashMap<K, f32>, b: &HashMap<K, f32>) -> Option<f64>
where
    K: Eq + Hash,
{
    // Iterate the smaller map when probing the intersection
    let (probe, other) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (key, &x) in probe {
        if let Some(&y) = other.get(key) {
            xs.push(x as f64);
            ys.push(y as f64);
        }
    }

    let n = xs.len();
    if n < 2 {
        return None;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x < VARIANCE_EPSILON || var_y < VARIANCE_EPSILON {
        return None;
    }

    Some(cov / (var_x * var_y).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(u32, f32)]) -> HashMap<u32, f32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_identical_vectors_correlate_perfectly() {
        let a = vector(&[(1, 5.0), (2, 3.0), (3, 1.0)]);
        let b = vector(&[(1, 5.0), (2, 3.0), (3, 1.0)]);

        let r = pearson_sparse(&a, &b).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_opposite_vectors_anticorrelate() {
        let a = vector(&[(1, 1.0), (2, 3.0), (3, 5.0)]);
        let b = vector(&[(1, 5.0), (2, 3.0), (3, 1.0)]);

        let r = pearson_sparse(&a, &b).unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_uses_only_shared_keys() {
        // Keys 10 and 20 are shared; each side has a private key that would
        // flip the sign if it were zero-filled instead of excluded.
        let a = vector(&[(10, 1.0), (20, 2.0), (30, 5.0)]);
        let b = vector(&[(10, 2.0), (20, 4.0), (40, 0.5)]);

        let r = pearson_sparse(&a, &b).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_overlap_is_undefined() {
        let a = vector(&[(1, 5.0), (2, 3.0)]);
        let b = vector(&[(2, 4.0), (3, 1.0)]);

        // Only one shared key
        assert!(pearson_sparse(&a, &b).is_none());
    }

    #[test]
    fn test_zero_variance_is_undefined() {
        let constant = vector(&[(1, 4.0), (2, 4.0), (3, 4.0)]);
        let varied = vector(&[(1, 1.0), (2, 3.0), (3, 5.0)]);

        assert!(pearson_sparse(&constant, &varied).is_none());
        assert!(pearson_sparse(&varied, &constant).is_none());
    }

    #[test]
    fn test_disjoint_vectors_are_undefined() {
        let a = vector(&[(1, 5.0), (2, 3.0)]);
        let b = vector(&[(3, 4.0), (4, 1.0)]);

        assert!(pearson_sparse(&a, &b).is_none());
    }

    #[test]
    fn test_symmetry() {
        let a = vector(&[(1, 2.0), (2, 4.5), (3, 3.0), (4, 5.0)]);
        let b = vector(&[(1, 1.0), (2, 5.0), (3, 2.5), (4, 4.0)]);

        let ab = pearson_sparse(&a, &b).unwrap();
        let ba = pearson_sparse(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
    }
}
