//! Geometric distribution with support `0, 1, 2, …`.
//!
//! P(x) = (1 − p)^x · p

use eco_core::{ensure, ensure_domain, sample, Real, Result};
use rand::Rng;
use rand_distr::Distribution as _;

use crate::discrete::{discrete_ppf, on_lattice};
use crate::distribution::Distribution;
use crate::fitting::sample_mean;

/// Geometric distribution counting failures before the first success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: Real,
}

impl Geometric {
    /// Create a geometric distribution with success probability `p` in (0, 1].
    pub fn new(p: Real) -> Result<Self> {
        ensure_domain!(p > 0.0 && p <= 1.0, "geom: p must lie in (0, 1], got {p}");
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    /// Shape parameter `p` for a distribution with mean `mu`: p = 1 / (mu + 1).
    pub fn p_from_mean(mu: Real) -> Result<Real> {
        ensure!(mu.is_finite() && mu >= 0.0, "geom: mean must be finite and non-negative, got {mu}");
        Ok(1.0 / (mu + 1.0))
    }

    /// Maximum-likelihood `p` from an abundance sample.
    pub fn fit_mle(data: &[Real]) -> Result<Real> {
        sample::check_abundances(data)?;
        Self::p_from_mean(sample_mean(data))
    }

    /// ln(1 − p)
    fn ln_q(&self) -> Real {
        (-self.p).ln_1p()
    }
}

impl Distribution for Geometric {
    fn is_discrete(&self) -> bool {
        true
    }

    fn ln_density(&self, x: Real) -> Real {
        if !on_lattice(x) {
            return Real::NEG_INFINITY;
        }
        if x == 0.0 {
            return self.p.ln();
        }
        x * self.ln_q() + self.p.ln()
    }

    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        -((x.floor() + 1.0) * self.ln_q()).exp_m1()
    }

    fn ppf(&self, q: Real) -> Result<Real> {
        let guess = (-q).ln_1p() / self.ln_q() - 1.0;
        discrete_ppf(|x| self.cdf(x), q, None, guess)
    }

    fn mean(&self) -> Real {
        (1.0 - self.p) / self.p
    }

    fn variance(&self) -> Option<Real> {
        Some((1.0 - self.p) / (self.p * self.p))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        let dist = rand_distr::Geometric::new(self.p)
            .map_err(|e| eco_core::Error::Domain(format!("geom sampler: {e}")))?;
        Ok(dist.sample(rng) as Real)
    }
}
