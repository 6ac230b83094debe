//! Floating-point closeness tests.

use eco_core::Real;

/// Default absolute tolerance for [`close`].
pub const EPSILON: Real = 1e-10;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `a` and `b` differ by at most `n` machine epsilons
/// relative to `max(|a|, |b|)`.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = a.abs().max(b.abs()) * Real::EPSILON * Real::from(n);
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_tolerance() {
        assert!(close(1.0, 1.0 + 1e-11, EPSILON));
        assert!(!close(1.0, 1.0 + 1e-9, EPSILON));
        assert!(close(-3.0, -3.5, 0.5));
    }

    #[test]
    fn relative_tolerance() {
        assert!(close_enough(1.0, 1.0, 0));
        assert!(close_enough(1e6, 1e6 * (1.0 + 4.0 * Real::EPSILON), 10));
        assert!(!close_enough(1.0, 1.0 + 1e-12, 10));
        assert!(close_enough(Real::INFINITY, Real::INFINITY, 1));
    }
}
