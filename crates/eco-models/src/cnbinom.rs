//! Conditional negative binomial distribution on `0, 1, …, b`.
//!
//! The number of individuals of a species falling in one cell, given that
//! `b` individuals are spread over the whole plot with aggregation `k_agg`
//! (Conlisk et al. 2007; Zillio & He 2010). With `a = mu / b`:
//!
//! p(x) = C(x + k − 1, x) · C(b − x + k/a − k − 1, b − x) / C(b + k/a − 1, b)
//!
//! where `C` is the binomial coefficient extended to real arguments through
//! the gamma function.

use eco_core::{ensure, ensure_domain, sample, Real, Result};
use eco_math::{grid_argmin, ln_choose};
use rand::Rng;

use crate::discrete::{check_probability, on_lattice};
use crate::distribution::Distribution;
use crate::fitting::{report_k_search, resolve_count_bound, sample_mean, FitOptions};

/// Negative binomial conditioned on a total of `b` individuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalNegativeBinomial {
    mu: Real,
    k_agg: Real,
    b: Real,
}

impl ConditionalNegativeBinomial {
    /// Create a conditional negative binomial with `0 < mu < b`, `k_agg > 0`
    /// and integral `b`.
    pub fn new(mu: Real, k_agg: Real, b: Real) -> Result<Self> {
        ensure_domain!(
            b.is_finite() && b >= 1.0 && b.fract() == 0.0,
            "cnbinom: b must be a positive integer, got {b}"
        );
        ensure_domain!(
            mu.is_finite() && mu > 0.0 && mu < b,
            "cnbinom: mu must lie in (0, b) = (0, {b}), got {mu}"
        );
        ensure_domain!(
            k_agg.is_finite() && k_agg > 0.0,
            "cnbinom: k_agg must be positive, got {k_agg}"
        );
        Ok(Self { mu, k_agg, b })
    }

    /// Mean parameter.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// Aggregation parameter.
    pub fn k_agg(&self) -> Real {
        self.k_agg
    }

    /// Upper bound (total abundance).
    pub fn b(&self) -> Real {
        self.b
    }

    /// Maximum-likelihood `(mu, k_agg, b)`.
    ///
    /// `mu` is the sample mean, `b` the caller's bound or the sample sum, and
    /// `k_agg` the first minimizer of the negative log-likelihood over
    /// `opts.k_range`.
    pub fn fit_mle(data: &[Real], opts: &FitOptions) -> Result<(Real, Real, Real)> {
        sample::check_abundances(data)?;
        let mu = sample_mean(data);
        let b = resolve_count_bound(data, opts)?;
        ensure!(
            mu < b,
            "cnbinom: sample mean {mu} must be below the upper bound {b}"
        );
        let min = grid_argmin(&opts.k_range, |k| {
            Self::new(mu, k, b).map_or(Real::NAN, |d| d.nll(data))
        })?;
        report_k_search("cnbinom", &min, &opts.k_range);
        Ok((mu, min.x, b))
    }

    /// pmf terms `x = 0, 1, …, b` in order.
    fn masses(&self) -> impl Iterator<Item = Real> + '_ {
        (0..=self.b as u64).map(|x| self.density(x as Real))
    }
}

impl Distribution for ConditionalNegativeBinomial {
    fn is_discrete(&self) -> bool {
        true
    }

    fn ln_density(&self, x: Real) -> Real {
        if !on_lattice(x) || x > self.b {
            return Real::NEG_INFINITY;
        }
        let (k, b) = (self.k_agg, self.b);
        let k_over_a = k * b / self.mu;
        ln_choose(x + k - 1.0, x) + ln_choose(b - x + k_over_a - k - 1.0, b - x)
            - ln_choose(b + k_over_a - 1.0, b)
    }

    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        if x >= self.b {
            return 1.0;
        }
        let top = x.floor() as usize;
        self.masses().take(top + 1).sum::<Real>().min(1.0)
    }

    /// Accumulates the pmf from zero; the support is finite.
    fn ppf(&self, q: Real) -> Result<Real> {
        check_probability(q)?;
        if q == 0.0 {
            return Ok(-1.0);
        }
        if q == 1.0 {
            return Ok(self.b);
        }
        let mut total = 0.0;
        for (x, mass) in self.masses().enumerate() {
            total += mass;
            if total >= q {
                return Ok(x as Real);
            }
        }
        Ok(self.b)
    }

    fn mean(&self) -> Real {
        self.mu
    }

    fn variance(&self) -> Option<Real> {
        let (mu, k, b) = (self.mu, self.k_agg, self.b);
        Some((1.0 - mu / b) * mu * (k + mu) / (k + mu / b))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        self.ppf(1.0 - rng.gen::<Real>())
    }
}
