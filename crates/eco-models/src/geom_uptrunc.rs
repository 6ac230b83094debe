//! Upper-truncated geometric distribution on `0, 1, …, b`.
//!
//! P(x) = (1 − p)^x · p / (1 − (1 − p)^(b+1))
//!
//! Known in the maximum-entropy theory of ecology as the Pi distribution,
//! with `1 − p = exp(−λ)`. Unlike the untruncated geometric, `p` may be
//! negative (the pmf then increases with `x`); `p = 0` is the uniform limit
//! 1 / (b + 1).
//!
//! Internally everything is expressed through the ratio `r = 1 − p` between
//! successive terms, evaluated in log space so that large `b` neither
//! overflows nor cancels.

use eco_core::{ensure, ensure_domain, sample, Real, Result, SolverSettings};
use eco_math::{brent, close};
use rand::Rng;

use crate::discrete::{discrete_ppf, on_lattice};
use crate::distribution::Distribution;
use crate::fitting::{resolve_count_bound, sample_mean, FitOptions};

/// Open bracket searched for the ratio `r = 1 − p`.
const RATIO_BRACKET: (Real, Real) = (1e-9, 20.0);

/// Geometric distribution truncated above at `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedGeometric {
    p: Real,
    b: Real,
}

/// ln |1 − r^m| given ln r.
fn ln_one_minus_pow(ln_r: Real, m: Real) -> Real {
    let t = m * ln_r;
    if t < 0.0 {
        (-t.exp_m1()).ln()
    } else {
        t + (-(-t).exp_m1()).ln()
    }
}

/// Below this `|(b + 1) ln r|` the mean is taken from its expansion about
/// `r = 1`.
const UNIFORM_LIMIT: Real = 1e-4;

/// Mean of the truncated geometric with ratio `r` and bound `b`:
///
/// r / (1 − r) − (b + 1) / (r^−(b+1) − 1)
///
/// Near `r = 1` the two terms cancel; there the mean is
/// `b / 2 + ln r · b (b + 2) / 12`, exact to third order in `ln r`.
fn mean_from_ratio(r: Real, b: Real) -> Real {
    let ln_r = r.ln();
    let m = b + 1.0;
    if close(m * ln_r, 0.0, UNIFORM_LIMIT) {
        return b / 2.0 + ln_r * b * (b + 2.0) / 12.0;
    }
    let tail = (-m * ln_r).exp_m1();
    r / (1.0 - r) - m / tail
}

impl TruncatedGeometric {
    /// Create a truncated geometric with shape `p <= 1` and integral bound
    /// `b >= 0`.
    pub fn new(p: Real, b: Real) -> Result<Self> {
        ensure_domain!(p.is_finite() && p <= 1.0, "geom_uptrunc: p must be finite and <= 1, got {p}");
        ensure_domain!(
            b.is_finite() && b >= 0.0 && b.fract() == 0.0,
            "geom_uptrunc: b must be a non-negative integer, got {b}"
        );
        Ok(Self { p, b })
    }

    /// Shape parameter `p`.
    pub fn p(&self) -> Real {
        self.p
    }

    /// Upper bound `b`.
    pub fn b(&self) -> Real {
        self.b
    }

    /// Solve the shape parameter `p` giving mean `mu` under bound `b`.
    ///
    /// The mean is monotonic in `r = 1 − p`; Brent's method searches
    /// `r ∈ (1e-9, 20)` and `p = 1 − r` is returned. A mean outside
    /// `(0, b)` is rejected up front; a bracket without a sign change is a
    /// [`eco_core::Error::NumericFailure`].
    pub fn solve_p(mu: Real, b: Real, settings: &SolverSettings) -> Result<Real> {
        ensure!(b.is_finite() && b > 0.0, "geom_uptrunc: b must be positive, got {b}");
        ensure!(
            mu > 0.0 && mu < b,
            "geom_uptrunc: mean must lie in (0, b) = (0, {b}), got {mu}"
        );
        let (lo, hi) = RATIO_BRACKET;
        let r = brent(|r| mean_from_ratio(r, b) - mu, lo, hi, settings)?;
        Ok(1.0 - r)
    }

    /// Maximum-likelihood `(p, b)` from an abundance sample. `b` is the
    /// caller's bound or, when absent, the sample sum.
    pub fn fit_mle(data: &[Real], opts: &FitOptions) -> Result<(Real, Real)> {
        sample::check_abundances(data)?;
        let b = resolve_count_bound(data, opts)?;
        let p = Self::solve_p(sample_mean(data), b, &opts.solver)?;
        Ok((p, b))
    }

    fn ln_r(&self) -> Real {
        (-self.p).ln_1p()
    }
}

impl Distribution for TruncatedGeometric {
    fn is_discrete(&self) -> bool {
        true
    }

    fn ln_density(&self, x: Real) -> Real {
        if !on_lattice(x) || x > self.b {
            return Real::NEG_INFINITY;
        }
        if self.p == 0.0 {
            return -(self.b + 1.0).ln();
        }
        let ln_r = self.ln_r();
        let head = if x == 0.0 { 0.0 } else { x * ln_r };
        head + self.p.abs().ln() - ln_one_minus_pow(ln_r, self.b + 1.0)
    }

    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        let k = x.floor();
        if k >= self.b {
            return 1.0;
        }
        if self.p == 0.0 {
            return (k + 1.0) / (self.b + 1.0);
        }
        let ln_r = self.ln_r();
        (ln_one_minus_pow(ln_r, k + 1.0) - ln_one_minus_pow(ln_r, self.b + 1.0))
            .exp()
            .min(1.0)
    }

    fn ppf(&self, q: Real) -> Result<Real> {
        discrete_ppf(|x| self.cdf(x), q, Some(self.b), self.mean())
    }

    fn mean(&self) -> Real {
        mean_from_ratio(1.0 - self.p, self.b)
    }

    fn variance(&self) -> Option<Real> {
        None
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        // inverse transform on (0, 1]
        self.ppf(1.0 - rng.gen::<Real>())
    }
}
