//! Upper-truncated exponential distribution on `[0, b]`.
//!
//! Every evaluation is forwarded to a bounded [`Exponential`]; this type only
//! adds the `(lam, b)` shape signature and the bounded fit.

use eco_core::{sample, Real, Result};
use rand::Rng;

use crate::distribution::Distribution;
use crate::expon::Exponential;
use crate::fitting::{resolve_upper_bound, FitOptions};

/// Exponential distribution truncated above at `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedExponential {
    inner: Exponential,
    b: Real,
}

impl TruncatedExponential {
    /// Create a truncated exponential with rate `lam > 0` and bound `b > 0`.
    pub fn new(lam: Real, b: Real) -> Result<Self> {
        Ok(Self {
            inner: Exponential::bounded(lam, b)?,
            b,
        })
    }

    /// Rate parameter.
    pub fn lam(&self) -> Real {
        self.inner.lam()
    }

    /// Upper bound.
    pub fn b(&self) -> Real {
        self.b
    }

    /// Maximum-likelihood `(lam, b)`: `lam = 1 / mean` and `b` is the
    /// caller's bound or, when absent, the sample sum.
    pub fn fit_mle(data: &[Real], opts: &FitOptions) -> Result<(Real, Real)> {
        sample::check_non_negative(data)?;
        let b = resolve_upper_bound(data, opts)?;
        let lam = Exponential::fit_mle(data)?;
        Ok((lam, b))
    }

    /// Differential entropy of the truncated density.
    pub fn entropy(&self) -> Real {
        self.inner.entropy()
    }
}

impl Distribution for TruncatedExponential {
    fn is_discrete(&self) -> bool {
        false
    }

    fn ln_density(&self, x: Real) -> Real {
        self.inner.ln_density(x)
    }

    fn cdf(&self, x: Real) -> Real {
        self.inner.cdf(x)
    }

    fn ppf(&self, q: Real) -> Result<Real> {
        self.inner.ppf(q)
    }

    fn mean(&self) -> Real {
        self.inner.mean()
    }

    fn variance(&self) -> Option<Real> {
        self.inner.variance()
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        self.inner.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eco_core::Error;

    #[test]
    fn delegates_to_bounded_exponential() {
        let t = TruncatedExponential::new(0.4, 6.0).unwrap();
        let e = Exponential::bounded(0.4, 6.0).unwrap();
        for x in [0.0, 1.0, 3.3, 6.0, 7.0] {
            assert_eq!(t.density(x), e.density(x));
            assert_eq!(t.cdf(x), e.cdf(x));
        }
        assert_eq!(t.mean(), e.mean());
        assert_eq!(t.entropy(), e.entropy());
    }

    #[test]
    fn large_bound_approaches_untruncated() {
        let t = TruncatedExponential::new(1.0, 200.0).unwrap();
        assert_abs_diff_eq!(t.mean(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.variance().unwrap(), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(t.entropy(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fit_uses_sum_as_default_bound() {
        let data = [0.5, 1.5, 4.0];
        let (lam, b) = TruncatedExponential::fit_mle(&data, &FitOptions::new()).unwrap();
        assert_eq!(b, 6.0);
        assert_abs_diff_eq!(lam, 0.5, epsilon = 1e-15);

        let fixed = FitOptions::new().with_upper_bound(10.0);
        assert_eq!(TruncatedExponential::fit_mle(&data, &fixed).unwrap().1, 10.0);
    }

    #[test]
    fn fit_rejects_bound_below_sample() {
        let opts = FitOptions::new().with_upper_bound(3.0);
        let r = TruncatedExponential::fit_mle(&[0.5, 1.5, 4.0], &opts);
        assert!(matches!(r, Err(Error::Input(_))));
    }
}
