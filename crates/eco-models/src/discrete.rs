//! Shared machinery for the discrete families: lattice membership and the
//! inverse of a right-continuous step cdf.

use eco_core::{ensure_domain, fail, Real, Result};

/// Largest upper search bound tried before a quantile search gives up.
const MAX_SEARCH: Real = 9.007_199_254_740_992e15; // 2^53

/// `true` when `x` is a non-negative integer, i.e. a point of the support of
/// an untruncated family.
#[inline]
pub(crate) fn on_lattice(x: Real) -> bool {
    x >= 0.0 && x.is_finite() && x.fract() == 0.0
}

/// Check that `q` is a probability.
pub(crate) fn check_probability(q: Real) -> Result<()> {
    ensure_domain!((0.0..=1.0).contains(&q), "quantile level must lie in [0, 1], got {q}");
    Ok(())
}

/// Smallest non-negative integer `x` with `cdf(x) >= q`.
///
/// `upper` bounds the support (truncated families); `guess` seeds the
/// bracket. Conventions at the ends of the unit interval: `ppf(0) = -1`,
/// `ppf(1) = upper` (or `+∞`).
pub(crate) fn discrete_ppf<F>(cdf: F, q: Real, upper: Option<Real>, guess: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    check_probability(q)?;
    if q == 0.0 {
        return Ok(-1.0);
    }
    if q == 1.0 {
        return Ok(upper.unwrap_or(Real::INFINITY));
    }
    if cdf(0.0) >= q {
        return Ok(0.0);
    }

    let limit = upper.unwrap_or(MAX_SEARCH);
    let mut lo = 0.0;
    let seed = if guess.is_finite() { guess.ceil().max(1.0) } else { 1.0 };
    let mut hi = seed.min(limit);
    while cdf(hi) < q {
        if hi >= limit {
            if upper.is_some() {
                // the step cdf reaches 1 at the bound; rounding kept it below q
                return Ok(limit);
            }
            fail!("quantile search for q = {q} exceeded {limit}");
        }
        lo = hi;
        hi = (2.0 * hi).min(limit);
    }

    // invariant: cdf(lo) < q <= cdf(hi)
    while hi - lo > 1.0 {
        let mid = ((lo + hi) / 2.0).floor();
        if cdf(mid) >= q {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::Error;

    fn uniform_cdf(n: Real) -> impl Fn(Real) -> Real {
        move |x: Real| {
            if x < 0.0 {
                0.0
            } else {
                ((x.floor() + 1.0) / n).min(1.0)
            }
        }
    }

    #[test]
    fn lattice_membership() {
        assert!(on_lattice(0.0));
        assert!(on_lattice(12.0));
        assert!(!on_lattice(1.5));
        assert!(!on_lattice(-1.0));
        assert!(!on_lattice(f64::INFINITY));
    }

    #[test]
    fn ppf_inverts_step_cdf() {
        let cdf = uniform_cdf(10.0);
        // cdf(x) = (x + 1) / 10 on 0..=9
        assert_eq!(discrete_ppf(&cdf, 0.05, Some(9.0), 3.0).unwrap(), 0.0);
        assert_eq!(discrete_ppf(&cdf, 0.35, Some(9.0), 3.0).unwrap(), 3.0);
        assert_eq!(discrete_ppf(&cdf, 0.3, Some(9.0), 100.0).unwrap(), 2.0);
        assert_eq!(discrete_ppf(&cdf, 0.95, Some(9.0), 0.0).unwrap(), 9.0);
    }

    #[test]
    fn ppf_end_conventions() {
        let cdf = uniform_cdf(10.0);
        assert_eq!(discrete_ppf(&cdf, 0.0, Some(9.0), 1.0).unwrap(), -1.0);
        assert_eq!(discrete_ppf(&cdf, 1.0, Some(9.0), 1.0).unwrap(), 9.0);
        assert_eq!(discrete_ppf(&cdf, 1.0, None, 1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn ppf_rejects_out_of_range_levels() {
        let cdf = uniform_cdf(10.0);
        assert!(matches!(discrete_ppf(&cdf, 1.5, None, 1.0), Err(Error::Domain(_))));
        assert!(matches!(discrete_ppf(&cdf, f64::NAN, None, 1.0), Err(Error::Domain(_))));
    }
}
