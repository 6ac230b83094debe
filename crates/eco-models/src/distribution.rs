//! The capability interface shared by every family.

use eco_core::{Real, Result};
use rand::Rng;

/// Evaluation capabilities of a distribution with fixed, validated shape
/// parameters.
///
/// Implementors are constructed through a checked constructor, so every
/// method here may assume the parameters pass the family's domain check.
pub trait Distribution {
    /// `true` for probability mass functions, `false` for densities.
    fn is_discrete(&self) -> bool;

    /// Natural log of the pmf (discrete) or pdf (continuous) at `x`.
    ///
    /// Outside the support the result is `-∞`.
    fn ln_density(&self, x: Real) -> Real;

    /// pmf or pdf at `x`.
    fn density(&self, x: Real) -> Real {
        self.ln_density(x).exp()
    }

    /// P(X <= x). Discrete families evaluate at `floor(x)`.
    fn cdf(&self, x: Real) -> Real;

    /// Inverse cdf at probability level `q`.
    fn ppf(&self, q: Real) -> Result<Real>;

    /// Distribution mean.
    fn mean(&self) -> Real;

    /// Distribution variance, when a closed form is available.
    fn variance(&self) -> Option<Real>;

    /// Draw one random variate.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real>;

    /// Negative log-likelihood of `data`.
    fn nll(&self, data: &[Real]) -> Real {
        -data.iter().map(|&x| self.ln_density(x)).sum::<Real>()
    }

    /// Predicted rank-abundance distribution of `n` values, most abundant
    /// first: element `i` is `ppf((n - i - 0.5) / n)`.
    fn rank(&self, n: usize) -> Result<Vec<Real>> {
        (0..n)
            .map(|i| self.ppf(((n - i) as Real - 0.5) / n as Real))
            .collect()
    }
}
