//! Empirical cumulative distribution functions.

use eco_core::{sample, Real, Result};

fn sorted(data: &[Real]) -> Result<Vec<Real>> {
    sample::check_finite(data)?;
    let mut values = data.to_vec();
    values.sort_by(Real::total_cmp);
    Ok(values)
}

/// Empirical cdf as `(value, fraction of the sample <= value)` pairs, one
/// per distinct value in ascending order.
pub fn empirical_cdf(data: &[Real]) -> Result<Vec<(Real, Real)>> {
    let values = sorted(data)?;
    let n = values.len() as Real;
    let mut points: Vec<(Real, Real)> = Vec::new();
    for (i, &x) in values.iter().enumerate() {
        let fraction = (i + 1) as Real / n;
        match points.last_mut() {
            Some(last) if last.0 == x => last.1 = fraction,
            _ => points.push((x, fraction)),
        }
    }
    Ok(points)
}

/// Empirical cdf evaluated at every observation of the ascending-sorted
/// sample; tied observations share the same value.
pub fn empirical_cdf_per_observation(data: &[Real]) -> Result<Vec<Real>> {
    let values = sorted(data)?;
    let n = values.len() as Real;
    Ok(values
        .iter()
        .map(|x| values.partition_point(|v| v <= x) as Real / n)
        .collect())
}
