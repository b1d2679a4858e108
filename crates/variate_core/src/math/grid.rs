//! Equally spaced evaluation grids.

/// Returns `n` equally spaced points from `a` to `b` inclusive.
///
/// Each point is computed from its index rather than by repeated addition,
/// so rounding does not accumulate and the last point equals `b` exactly.
///
/// - `n == 0` gives an empty vector
/// - `n == 1` gives `[a]`
///
/// # Examples
///
/// ```
/// use variate_core::math::linspace;
///
/// let xs = linspace(0.0, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let last = n - 1;
            let h = (b - a) / last as f64;
            let mut xs: Vec<f64> = (0..last).map(|i| a + h * i as f64).collect();
            xs.push(b);
            xs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn test_end_points_are_exact() {
        let xs = linspace(0.0, 1.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[999], 1.0);
    }

    #[test]
    fn test_uniform_spacing() {
        let xs = linspace(-2.0, 2.0, 9);
        for pair in xs.windows(2) {
            assert_abs_diff_eq!(pair[1] - pair[0], 0.5, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_descending_range() {
        let xs = linspace(1.0, 0.0, 3);
        assert_eq!(xs, vec![1.0, 0.5, 0.0]);
    }
}
