//! Negative binomial distribution in the ecological (mean, aggregation)
//! parameterization.
//!
//! p(x) = Γ(k + x) / (Γ(k) x!) · (k / (k + μ))^k · (μ / (k + μ))^x
//!
//! In the classical parameterization `n = k_agg` and `p = k_agg / (k_agg + mu)`.

use eco_core::{ensure_domain, sample, Real, Result};
use eco_math::{grid_argmin, incomplete_beta, ln_gamma};
use rand::Rng;
use rand_distr::{Distribution as _, Gamma, Poisson};

use crate::discrete::{discrete_ppf, on_lattice};
use crate::distribution::Distribution;
use crate::fitting::{report_k_search, sample_mean, FitOptions};

/// Negative binomial with mean `mu` and aggregation (clustering) `k_agg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    mu: Real,
    k_agg: Real,
}

impl NegativeBinomial {
    /// Create a negative binomial with `mu > 0` and `k_agg > 0`.
    pub fn new(mu: Real, k_agg: Real) -> Result<Self> {
        ensure_domain!(mu.is_finite() && mu > 0.0, "nbinom: mu must be positive, got {mu}");
        ensure_domain!(
            k_agg.is_finite() && k_agg > 0.0,
            "nbinom: k_agg must be positive, got {k_agg}"
        );
        Ok(Self { mu, k_agg })
    }

    /// Mean parameter.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// Aggregation parameter.
    pub fn k_agg(&self) -> Real {
        self.k_agg
    }

    /// Classical success probability `k_agg / (k_agg + mu)`.
    pub fn p(&self) -> Real {
        self.k_agg / (self.k_agg + self.mu)
    }

    /// Maximum-likelihood `(mu, k_agg)`: `mu` is the sample mean and `k_agg`
    /// the first minimizer of the negative log-likelihood over
    /// `opts.k_range`.
    pub fn fit_mle(data: &[Real], opts: &FitOptions) -> Result<(Real, Real)> {
        sample::check_abundances(data)?;
        let mu = sample_mean(data);
        let min = grid_argmin(&opts.k_range, |k| {
            Self::new(mu, k).map_or(Real::NAN, |d| d.nll(data))
        })?;
        report_k_search("nbinom", &min, &opts.k_range);
        Ok((mu, min.x))
    }
}

impl Distribution for NegativeBinomial {
    fn is_discrete(&self) -> bool {
        true
    }

    fn ln_density(&self, x: Real) -> Real {
        if !on_lattice(x) {
            return Real::NEG_INFINITY;
        }
        let k = self.k_agg;
        let ln_p = k.ln() - (k + self.mu).ln();
        let ln_q = self.mu.ln() - (k + self.mu).ln();
        let coeff = ln_gamma(k + x) - ln_gamma(x + 1.0) - ln_gamma(k);
        coeff + k * ln_p + x * ln_q
    }

    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        incomplete_beta(self.k_agg, x.floor() + 1.0, self.p()).clamp(0.0, 1.0)
    }

    fn ppf(&self, q: Real) -> Result<Real> {
        discrete_ppf(|x| self.cdf(x), q, None, self.mu)
    }

    fn mean(&self) -> Real {
        self.mu
    }

    fn variance(&self) -> Option<Real> {
        Some(self.mu + self.mu * self.mu / self.k_agg)
    }

    /// Gamma–Poisson mixture: λ ~ Gamma(k_agg, mu / k_agg), x ~ Poisson(λ).
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        let gamma = Gamma::new(self.k_agg, self.mu / self.k_agg)
            .map_err(|e| eco_core::Error::Domain(format!("nbinom sampler: {e}")))?;
        let lambda: Real = gamma.sample(rng);
        if lambda <= 0.0 {
            return Ok(0.0);
        }
        let poisson = Poisson::new(lambda)
            .map_err(|e| eco_core::Error::Domain(format!("nbinom sampler: {e}")))?;
        Ok(poisson.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eco_core::{Error, GridRange};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn k_one_is_geometric() {
        // k_agg = 1 reduces to the geometric with p = 1 / (1 + mu)
        let d = NegativeBinomial::new(3.0, 1.0).unwrap();
        let p = 0.25;
        for x in 0..10 {
            let expected = (1.0 - p as Real).powi(x) * p;
            assert_abs_diff_eq!(d.density(x as Real), expected, epsilon = 1e-13);
        }
    }

    #[test]
    fn pmf_sums_to_one_and_has_mean_mu() {
        let d = NegativeBinomial::new(4.0, 0.7).unwrap();
        let xs = 0..2000;
        let total: Real = xs.clone().map(|x| d.density(x as Real)).sum();
        let mean: Real = xs.map(|x| x as Real * d.density(x as Real)).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(mean, 4.0, epsilon = 1e-8);
    }

    #[test]
    fn cdf_matches_partial_sums() {
        let d = NegativeBinomial::new(2.5, 1.7).unwrap();
        let mut running = 0.0;
        for x in 0..30 {
            running += d.density(x as Real);
            assert_abs_diff_eq!(d.cdf(x as Real + 0.5), running, epsilon = 1e-10);
        }
        assert_eq!(d.cdf(-1.0), 0.0);
        assert_eq!(d.cdf(Real::INFINITY), 1.0);
    }

    #[test]
    fn ppf_inverts_cdf() {
        let d = NegativeBinomial::new(10.0, 0.5).unwrap();
        for q in [0.05, 0.3, 0.5, 0.9, 0.995] {
            let x = d.ppf(q).unwrap();
            assert!(d.cdf(x) >= q);
            assert!(x == 0.0 || d.cdf(x - 1.0) < q);
        }
    }

    #[test]
    fn fit_recovers_k_agg_within_one_grid_step() {
        // mu large enough that zero draws are negligible (P(0) ~ 6e-6)
        let truth = NegativeBinomial::new(50.0, 5.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let data: Vec<Real> = std::iter::repeat_with(|| truth.sample(&mut rng).unwrap())
            .filter(|&x| x > 0.0)
            .take(4000)
            .collect();
        let step = 0.5;
        let opts = FitOptions::new().with_k_range(GridRange::new(0.5, 15.0, step).unwrap());
        let (mu, k) = NegativeBinomial::fit_mle(&data, &opts).unwrap();
        assert_abs_diff_eq!(mu, sample_mean(&data), epsilon = 1e-12);
        assert!((k - 5.0).abs() <= step, "k_agg = {k}");
    }

    #[test]
    fn fit_rejects_non_positive_values() {
        let r = NegativeBinomial::fit_mle(&[3.0, -1.0, 2.0], &FitOptions::new());
        assert!(matches!(r, Err(Error::Input(_))));
    }

    #[test]
    fn domain_checked() {
        assert!(matches!(NegativeBinomial::new(0.0, 1.0), Err(Error::Domain(_))));
        assert!(matches!(NegativeBinomial::new(1.0, 0.0), Err(Error::Domain(_))));
    }
}
