//! Pearson's chi-square test of homogeneity over two or more distributions.
//!
//! Each distribution is one row of a contingency table; entries at the same
//! position must describe the same category (a species, a Preston octave).
//! Expected frequencies come from the table's marginals. No continuity
//! correction is applied.

use eco_core::{ensure, Real, Result, Size};
use eco_math::chi_square_sf;
use nalgebra::DMatrix;

/// Outcome of a chi-square contingency test.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquared {
    /// Σ (observed − expected)² / expected over every cell.
    pub statistic: Real,
    /// P(χ²_df > statistic).
    pub p_value: Real,
    /// Degrees of freedom, (rows − 1)(columns − 1).
    pub df: Size,
    /// Expected frequencies under homogeneity, same shape as the table.
    pub expected: DMatrix<Real>,
}

/// Chi-square test that the distributions in `dists` share one underlying
/// distribution.
///
/// `dists` needs at least two rows of equal, non-zero length holding
/// finite non-negative counts, and no row or column may sum to zero. With
/// a single column the test is degenerate: statistic 0 and p-value 1.
///
/// The approximation is poor when many expected frequencies are below 5.
pub fn chi_squared(dists: &[Vec<Real>]) -> Result<ChiSquared> {
    ensure!(
        dists.len() > 1,
        "chi-square test needs at least two distributions, got {}",
        dists.len()
    );
    let cols = dists[0].len();
    ensure!(cols > 0, "distributions must not be empty");
    ensure!(
        dists.iter().all(|d| d.len() == cols),
        "all distributions must have length {cols}"
    );
    ensure!(
        dists.iter().flatten().all(|x| x.is_finite() && *x >= 0.0),
        "contingency table entries must be finite and non-negative"
    );

    let rows = dists.len();
    let observed = DMatrix::from_fn(rows, cols, |i, j| dists[i][j]);
    let row_sums: Vec<Real> = observed.row_iter().map(|r| r.sum()).collect();
    let col_sums: Vec<Real> = observed.column_iter().map(|c| c.sum()).collect();
    ensure!(
        row_sums.iter().chain(&col_sums).all(|&s| s > 0.0),
        "every row and column of the contingency table needs a positive total"
    );
    let total = observed.sum();

    let expected = DMatrix::from_fn(rows, cols, |i, j| row_sums[i] * col_sums[j] / total);
    let statistic = observed
        .iter()
        .zip(expected.iter())
        .map(|(o, e)| (o - e).powi(2) / e)
        .sum::<Real>();
    let df = (rows - 1) * (cols - 1);
    let p_value = if df == 0 {
        1.0
    } else {
        chi_square_sf(statistic, df as Real)?
    };

    log::debug!("chi-square {rows}x{cols}: statistic = {statistic}, df = {df}, p = {p_value}");
    Ok(ChiSquared {
        statistic,
        p_value,
        df,
        expected,
    })
}
