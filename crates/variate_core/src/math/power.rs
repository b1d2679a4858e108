//! Integer powers for generic floats.

use num_traits::Float;

/// Raises `x` to the non-negative integer power `p`.
///
/// Uses binary exponentiation, so the cost is `O(log p)` multiplications.
/// `powi(x, 0)` is one for every `x`, including zero and NaN.
///
/// # Examples
///
/// ```
/// use variate_core::math::powi;
///
/// assert_eq!(powi(3.0_f64, 0), 1.0);
/// assert_eq!(powi(3.0_f64, 1), 3.0);
/// assert_eq!(powi(3.0_f64, 2), 9.0);
/// assert_eq!(powi(2.0_f32, 10), 1024.0);
/// ```
#[inline]
pub fn powi<T: Float>(x: T, p: u32) -> T {
    let mut result = T::one();
    let mut base = x;
    let mut exp = p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base;
        }
        exp >>= 1;
        if exp > 0 {
            base = base * base;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_exponent_zero_is_one() {
        assert_eq!(powi(0.0_f64, 0), 1.0);
        assert_eq!(powi(-7.5_f64, 0), 1.0);
        assert_eq!(powi(f64::NAN, 0), 1.0);
    }

    #[test]
    fn test_exponent_one_is_identity() {
        assert_eq!(powi(2.5_f64, 1), 2.5);
        assert_eq!(powi(-4.0_f64, 1), -4.0);
        assert_eq!(powi(0.0_f64, 1), 0.0);
    }

    #[test]
    fn test_exponent_two_squares() {
        assert_eq!(powi(2.5_f64, 2), 6.25);
        assert_eq!(powi(-4.0_f64, 2), 16.0);
        assert_eq!(powi(3.0_f32, 2), 9.0);
    }

    #[test]
    fn test_higher_exponents() {
        assert_eq!(powi(2.0_f64, 10), 1024.0);
        assert_eq!(powi(-2.0_f64, 3), -8.0);
        assert_relative_eq!(powi(1.1_f64, 7), 1.1_f64.powi(7), max_relative = 1e-14);
    }

    proptest! {
        #[test]
        fn test_matches_std_powi(x in -10.0_f64..10.0, p in 0_u32..16) {
            let expected = x.powi(p as i32);
            let actual = powi(x, p);
            prop_assert!(
                (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                "powi({}, {}) = {} but f64::powi gives {}",
                x, p, actual, expected
            );
        }
    }
}
