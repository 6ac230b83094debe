//! Exponential distribution, optionally truncated above.
//!
//! f(x) = λ e^(−λx) / Z,  Z = 1 − e^(−λb)
//!
//! on `0 <= x <= b`. Without a bound `Z = 1` and the support is `[0, ∞)`.
//! The truncated family in [`crate::expon_uptrunc`] wraps a bounded
//! instance of this type.

use eco_core::{ensure, ensure_domain, sample, Real, Result};
use rand::Rng;
use rand_distr::{Distribution as _, Exp};

use crate::discrete::check_probability;
use crate::distribution::Distribution;
use crate::fitting::sample_mean;

/// Exponential distribution with rate `lam` and an optional upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    lam: Real,
    upper: Option<Real>,
}

impl Exponential {
    /// Create an untruncated exponential with rate `lam > 0`.
    pub fn new(lam: Real) -> Result<Self> {
        ensure_domain!(lam.is_finite() && lam > 0.0, "expon: lam must be positive, got {lam}");
        Ok(Self { lam, upper: None })
    }

    /// Create an exponential with rate `lam > 0` restricted to `[0, b]`.
    pub fn bounded(lam: Real, b: Real) -> Result<Self> {
        ensure_domain!(b.is_finite() && b > 0.0, "expon: upper bound must be positive, got {b}");
        Ok(Self { upper: Some(b), ..Self::new(lam)? })
    }

    /// Rate parameter.
    pub fn lam(&self) -> Real {
        self.lam
    }

    /// Upper bound of the support, if truncated.
    pub fn upper_bound(&self) -> Option<Real> {
        self.upper
    }

    /// Rate `lam` for an untruncated distribution with mean `mu`.
    pub fn lam_from_mean(mu: Real) -> Result<Real> {
        ensure!(mu.is_finite() && mu > 0.0, "expon: mean must be positive, got {mu}");
        Ok(1.0 / mu)
    }

    /// Maximum-likelihood rate from a non-negative sample: `1 / mean`.
    pub fn fit_mle(data: &[Real]) -> Result<Real> {
        sample::check_non_negative(data)?;
        Self::lam_from_mean(sample_mean(data))
    }

    /// Differential entropy −∫ f ln f.
    pub fn entropy(&self) -> Real {
        self.ln_norm() - self.lam.ln() + self.lam * self.mean()
    }

    /// ln Z
    fn ln_norm(&self) -> Real {
        match self.upper {
            Some(b) => (-(-self.lam * b).exp_m1()).ln(),
            None => 0.0,
        }
    }

    fn in_support(&self, x: Real) -> bool {
        x >= 0.0 && self.upper.map_or(true, |b| x <= b)
    }
}

impl Distribution for Exponential {
    fn is_discrete(&self) -> bool {
        false
    }

    fn ln_density(&self, x: Real) -> Real {
        if !self.in_support(x) || x.is_infinite() {
            return Real::NEG_INFINITY;
        }
        self.lam.ln() - self.lam * x - self.ln_norm()
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        if self.upper.is_some_and(|b| x >= b) {
            return 1.0;
        }
        (-(-self.lam * x).exp_m1() / self.ln_norm().exp()).min(1.0)
    }

    fn ppf(&self, q: Real) -> Result<Real> {
        check_probability(q)?;
        if q == 1.0 {
            return Ok(self.upper.unwrap_or(Real::INFINITY));
        }
        let z = self.ln_norm().exp();
        Ok(-(-q * z).ln_1p() / self.lam)
    }

    fn mean(&self) -> Real {
        let m = 1.0 / self.lam;
        match self.upper {
            Some(b) => m - b / (self.lam * b).exp_m1(),
            None => m,
        }
    }

    fn variance(&self) -> Option<Real> {
        let lam = self.lam;
        let Some(b) = self.upper else {
            return Some(1.0 / (lam * lam));
        };
        // E[X²] = (2/λ² − e^(−λb)(b² + 2b/λ + 2/λ²)) / Z
        let tail = (-lam * b).exp() * (b * b + 2.0 * b / lam + 2.0 / (lam * lam));
        let second = (2.0 / (lam * lam) - tail) / self.ln_norm().exp();
        let mean = self.mean();
        Some(second - mean * mean)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        if self.upper.is_some() {
            return self.ppf(rng.gen::<Real>());
        }
        let exp = Exp::new(self.lam)
            .map_err(|e| eco_core::Error::Domain(format!("expon sampler: {e}")))?;
        Ok(exp.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use eco_core::Error;
    use rand::{rngs::StdRng, SeedableRng};

    /// Midpoint rule over `[0, b]`.
    fn integrate(f: impl Fn(Real) -> Real, b: Real) -> Real {
        let n = 200_000;
        let h = b / n as Real;
        (0..n).map(|i| f((i as Real + 0.5) * h)).sum::<Real>() * h
    }

    #[test]
    fn untruncated_closed_forms() {
        let d = Exponential::new(2.0).unwrap();
        assert_abs_diff_eq!(d.density(0.5), 2.0 * (-1.0_f64).exp(), epsilon = 1e-14);
        assert_abs_diff_eq!(d.cdf(0.5), 1.0 - (-1.0_f64).exp(), epsilon = 1e-14);
        assert_eq!(d.mean(), 0.5);
        assert_eq!(d.variance(), Some(0.25));
        assert_abs_diff_eq!(d.entropy(), 1.0 - 2.0_f64.ln(), epsilon = 1e-14);
        assert_eq!(d.density(-1.0), 0.0);
        assert_eq!(d.ppf(1.0).unwrap(), Real::INFINITY);
    }

    #[test]
    fn truncated_density_is_normalized() {
        let d = Exponential::bounded(0.3, 5.0).unwrap();
        assert_abs_diff_eq!(integrate(|x| d.density(x), 5.0), 1.0, epsilon = 1e-8);
        assert_eq!(d.density(5.5), 0.0);
        assert_eq!(d.cdf(5.0), 1.0);
        assert_abs_diff_eq!(d.cdf(4.999_999), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn truncated_moments_match_quadrature() {
        let d = Exponential::bounded(0.7, 3.0).unwrap();
        let mean = integrate(|x| x * d.density(x), 3.0);
        let second = integrate(|x| x * x * d.density(x), 3.0);
        assert_relative_eq!(d.mean(), mean, max_relative = 1e-8);
        assert_relative_eq!(d.variance().unwrap(), second - mean * mean, max_relative = 1e-7);
        let h = integrate(|x| -d.density(x) * d.ln_density(x), 3.0);
        assert_relative_eq!(d.entropy(), h, max_relative = 1e-7);
    }

    #[test]
    fn ppf_inverts_cdf() {
        for d in [Exponential::new(1.5).unwrap(), Exponential::bounded(0.2, 4.0).unwrap()] {
            for q in [0.0, 0.1, 0.5, 0.9, 0.999] {
                let x = d.ppf(q).unwrap();
                assert_abs_diff_eq!(d.cdf(x), q, epsilon = 1e-12);
            }
        }
        assert_eq!(Exponential::bounded(0.2, 4.0).unwrap().ppf(1.0).unwrap(), 4.0);
    }

    #[test]
    fn bounded_samples_stay_in_support() {
        let d = Exponential::bounded(0.05, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let x = d.sample(&mut rng).unwrap();
            assert!((0.0..=2.0).contains(&x));
        }
    }

    #[test]
    fn fit_is_reciprocal_mean() {
        assert_abs_diff_eq!(Exponential::fit_mle(&[0.0, 1.0, 2.0, 5.0]).unwrap(), 0.5, epsilon = 1e-15);
        assert!(matches!(Exponential::fit_mle(&[1.0, -2.0]), Err(Error::Input(_))));
        assert!(matches!(Exponential::fit_mle(&[0.0, 0.0]), Err(Error::Input(_))));
    }

    #[test]
    fn domain_checked() {
        assert!(matches!(Exponential::new(0.0), Err(Error::Domain(_))));
        assert!(matches!(Exponential::bounded(1.0, 0.0), Err(Error::Domain(_))));
    }
}
