//! Ordinary least-squares fit of `y = intercept + slope · x`.
//!
//! The two-column design matrix `[1, x]` is solved through an SVD, with
//! singular values below `max(n, 2) · ε · σ_max` treated as zero, mirroring
//! the general linear least-squares solver this fit specializes.

use eco_core::{
    errors::{Error, Result},
    ensure, Real,
};
use nalgebra::{DMatrix, DVector};

/// Result of a straight-line least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Fitted intercept.
    pub intercept: Real,
    /// Fitted slope.
    pub slope: Real,
    /// Coefficient of determination of the fit.
    pub r_squared: Real,
}

impl LinearFit {
    /// Fit `y` against `x` by least squares.
    ///
    /// Fails with [`Error::Input`] for mismatched or too-short series and
    /// with [`Error::StatisticUndefined`] when either series is constant
    /// (R² is 0/0 there).
    pub fn fit(x: &[Real], y: &[Real]) -> Result<Self> {
        let n = x.len();
        ensure!(
            n == y.len(),
            "x and y must have the same length ({n} vs {})",
            y.len()
        );
        ensure!(n >= 2, "a line fit needs at least two points, got {n}");

        let y_mean = y.iter().sum::<Real>() / n as Real;
        let ss_tot: Real = y.iter().map(|v| (v - y_mean).powi(2)).sum();
        let x_mean = x.iter().sum::<Real>() / n as Real;
        let ss_x: Real = x.iter().map(|v| (v - x_mean).powi(2)).sum();
        if ss_tot == 0.0 || ss_x == 0.0 {
            return Err(Error::StatisticUndefined(
                "R² of a line fit is undefined for a constant series".into(),
            ));
        }

        let a = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
        let y_vec = DVector::from_column_slice(y);
        let svd = a.clone().svd(true, true);
        let sv_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
        let threshold = n.max(2) as Real * f64::EPSILON * sv_max;
        let beta = svd
            .solve(&y_vec, threshold)
            .map_err(|e| Error::NumericFailure(format!("least-squares solve failed: {e}")))?;

        let residuals = &y_vec - &a * &beta;
        let ss_res = residuals.norm_squared();

        Ok(Self {
            intercept: beta[0],
            slope: beta[1],
            r_squared: 1.0 - ss_res / ss_tot,
        })
    }
}
