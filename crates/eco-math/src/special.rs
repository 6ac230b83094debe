//! Log-space special functions.
//!
//! Thin wrappers over `statrs` plus the log binomial coefficient with
//! real-valued (gamma-extended) arguments used by the conditional negative
//! binomial.

use eco_core::{errors::Error, Real, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// The natural logarithm of the Gamma function: ln Γ(z).
pub fn ln_gamma(z: Real) -> Real {
    statrs::function::gamma::ln_gamma(z)
}

/// Log binomial coefficient ln C(n, k) with gamma-extended factorials:
///
/// ln Γ(n + 1) − ln Γ(k + 1) − ln Γ(n − k + 1).
///
/// `n` and `k` may be non-integer; the result is only meaningful when
/// `k + 1` and `n − k + 1` are positive.
pub fn ln_choose(n: Real, k: Real) -> Real {
    ln_gamma(n + 1.0) - (ln_gamma(k + 1.0) + ln_gamma(n - k + 1.0))
}

/// The regularized incomplete beta function I_x(a, b).
///
/// Requires `a > 0`, `b > 0` and `0 <= x <= 1`.
pub fn incomplete_beta(a: Real, b: Real, x: Real) -> Real {
    statrs::function::beta::beta_reg(a, b, x)
}

/// Survival function P(X > x) of a chi-square variable with `df` degrees of
/// freedom.
pub fn chi_square_sf(x: Real, df: Real) -> Result<Real> {
    let dist = ChiSquared::new(df)
        .map_err(|e| Error::Input(format!("chi-square degrees of freedom {df}: {e}")))?;
    if x <= 0.0 {
        return Ok(1.0);
    }
    Ok(dist.sf(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ln_choose_integers() {
        // C(10, 3) = 120
        assert_abs_diff_eq!(ln_choose(10.0, 3.0), 120.0_f64.ln(), epsilon = 1e-10);
        assert_abs_diff_eq!(ln_choose(5.0, 0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ln_choose(5.0, 5.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ln_choose_symmetric() {
        assert_abs_diff_eq!(ln_choose(7.5, 2.0), ln_choose(7.5, 5.5), epsilon = 1e-10);
    }

    #[test]
    fn ln_gamma_factorials() {
        assert_abs_diff_eq!(ln_gamma(5.0), 24.0_f64.ln(), epsilon = 1e-10);
        assert_abs_diff_eq!(ln_gamma(1.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn chi_square_sf_df2() {
        // For df = 2, sf(x) = exp(-x/2)
        let x = 3.0;
        assert_abs_diff_eq!(chi_square_sf(x, 2.0).unwrap(), (-x / 2.0).exp(), epsilon = 1e-10);
        assert_abs_diff_eq!(chi_square_sf(0.0, 2.0).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn chi_square_sf_rejects_bad_df() {
        assert!(matches!(chi_square_sf(1.0, 0.0), Err(Error::Input(_))));
    }

    #[test]
    fn incomplete_beta_uniform() {
        // I_x(1, 1) = x
        assert_abs_diff_eq!(incomplete_beta(1.0, 1.0, 0.3), 0.3, epsilon = 1e-12);
    }
}
