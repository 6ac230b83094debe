//! Negative log-likelihood and the likelihood ratio test for nested models.

use eco_core::{sample, Real, Result};
use eco_math::chi_square_sf;
use eco_models::FittedModel;

/// Outcome of a likelihood ratio test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LikelihoodRatio {
    /// G² = −2 (ln L_null − ln L_alt).
    pub statistic: Real,
    /// Degrees of freedom of the reference chi-square distribution.
    pub df: Real,
    /// P(χ²_df > G²).
    pub p_value: Real,
}

/// Negative log-likelihood −Σ ln f(x) of `sample` under `model`.
///
/// Uses the log pmf for discrete families and the log pdf for continuous
/// ones, as declared by the family.
pub fn nll(sample: &[Real], model: &FittedModel) -> Result<Real> {
    sample::check_finite(sample)?;
    let family = model.family();
    let params = model.params();
    let ln_f = if family.is_discrete() {
        family.logpmf(sample, params)?
    } else {
        family.logpdf(sample, params)?
    };
    Ok(-ln_f.iter().sum::<Real>())
}

/// Likelihood ratio test of `null` nested in `alt`.
///
/// `df` defaults to the difference in parameter counts `k_alt − k_null`,
/// which must then be positive. A small p-value is evidence for the
/// alternative. The chi-square approximation is asymptotic and unreliable
/// for small samples.
pub fn likelihood_ratio_test(
    sample: &[Real],
    null: &FittedModel,
    alt: &FittedModel,
    df: Option<Real>,
) -> Result<LikelihoodRatio> {
    let ll_null = -nll(sample, null)?;
    let ll_alt = -nll(sample, alt)?;
    let statistic = -2.0 * (ll_null - ll_alt);
    let df = df.unwrap_or(alt.k() as Real - null.k() as Real);
    let p_value = chi_square_sf(statistic, df)?;
    Ok(LikelihoodRatio {
        statistic,
        df,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eco_core::Error;
    use eco_models::{Family, ShapeParameters};

    fn fitted(family: Family, values: &[Real], n: usize) -> FittedModel {
        FittedModel::new(ShapeParameters::new(family, values.to_vec()).unwrap(), n)
    }

    #[test]
    fn nll_matches_closed_form() {
        // geom p = 0.5: ln pmf(x) = (x + 1) ln 0.5
        let m = fitted(Family::Geom, &[0.5], 3);
        let value = nll(&[0.0, 1.0, 3.0], &m).unwrap();
        assert_abs_diff_eq!(value, 7.0 * 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn nll_zero_for_certain_outcomes() {
        // geom p = 1 puts all mass on zero
        let m = fitted(Family::Geom, &[1.0], 4);
        assert_eq!(nll(&[0.0, 0.0, 0.0, 0.0], &m).unwrap(), 0.0);
        let sure = nll(&[0.0, 0.0], &fitted(Family::Geom, &[0.9], 2)).unwrap();
        assert!(sure > 0.0);
    }

    #[test]
    fn nll_uses_density_for_continuous_families() {
        let m = fitted(Family::Expon, &[2.0], 2);
        let value = nll(&[0.5, 1.0], &m).unwrap();
        // −Σ (ln 2 − 2x)
        assert_abs_diff_eq!(value, -2.0 * 2.0_f64.ln() + 3.0, epsilon = 1e-12);
    }

    #[test]
    fn nll_propagates_invalid_parameters() {
        let m = fitted(Family::Geom, &[1.5], 1);
        assert!(matches!(nll(&[1.0], &m), Err(Error::Domain(_))));
    }

    #[test]
    fn lrt_statistic_and_default_df() {
        let data = [1.0, 1.0, 2.0, 3.0, 7.0, 15.0];
        let null = fitted(Family::Geom, &[0.2], data.len());
        let alt = fitted(Family::Nbinom, &[4.0, 0.8], data.len());
        let out = likelihood_ratio_test(&data, &null, &alt, None).unwrap();
        let expected = 2.0 * (nll(&data, &null).unwrap() - nll(&data, &alt).unwrap());
        assert_abs_diff_eq!(out.statistic, expected, epsilon = 1e-12);
        assert_eq!(out.df, 1.0);
        assert!((0.0..=1.0).contains(&out.p_value));
    }

    #[test]
    fn lrt_explicit_df_and_known_p_value() {
        // identical models: G² = 0, p = 1
        let m = fitted(Family::Nbinom, &[3.0, 1.0], 4);
        let out = likelihood_ratio_test(&[1.0, 2.0, 3.0, 6.0], &m, &m, Some(2.0)).unwrap();
        assert_eq!(out.statistic, 0.0);
        assert_eq!(out.p_value, 1.0);
    }

    #[test]
    fn lrt_rejects_non_positive_df() {
        let m = fitted(Family::Geom, &[0.3], 2);
        let r = likelihood_ratio_test(&[1.0, 2.0], &m, &m, None);
        assert!(matches!(r, Err(Error::Input(_))));
    }
}
