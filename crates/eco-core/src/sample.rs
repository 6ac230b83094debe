//! Validation of empirical samples.
//!
//! Samples arrive pre-cleaned from a data-loading layer, but the numeric
//! routines still refuse values that would make a fit meaningless: empty
//! samples, non-finite entries, and (for abundance data) counts that are
//! zero, negative or fractional. Each check runs before any computation on
//! the sample.

use crate::{ensure, errors::Result, Real};

/// Check that `data` is non-empty and every value is finite.
pub fn check_finite(data: &[Real]) -> Result<()> {
    ensure!(!data.is_empty(), "sample is empty");
    if let Some(bad) = data.iter().find(|x| !x.is_finite()) {
        return Err(crate::Error::Input(format!(
            "sample contains a non-finite value ({bad})"
        )));
    }
    Ok(())
}

/// Check that `data` is a valid abundance sample: non-empty, finite, and
/// made of strictly positive integer counts.
pub fn check_abundances(data: &[Real]) -> Result<()> {
    check_finite(data)?;
    if let Some(bad) = data.iter().find(|&&x| x <= 0.0) {
        return Err(crate::Error::Input(format!(
            "abundance sample contains a zero or negative value ({bad})"
        )));
    }
    if let Some(bad) = data.iter().find(|x| x.fract() != 0.0) {
        return Err(crate::Error::Input(format!(
            "abundance sample contains a non-integer count ({bad})"
        )));
    }
    Ok(())
}

/// Check that an upper bound `b` is a finite integer no smaller than the
/// largest observation.
pub fn check_count_bound(b: Real, data: &[Real]) -> Result<()> {
    ensure!(
        b.is_finite() && b.fract() == 0.0,
        "upper bound b must be a finite integer, got {b}"
    );
    let max = maximum(data).unwrap_or(0.0);
    ensure!(b >= max, "upper bound b = {b} is below the largest observation {max}");
    Ok(())
}

/// Check that `data` is non-empty, finite, and contains no negative values.
pub fn check_non_negative(data: &[Real]) -> Result<()> {
    check_finite(data)?;
    if let Some(bad) = data.iter().find(|&&x| x < 0.0) {
        return Err(crate::Error::Input(format!(
            "sample contains a negative value ({bad})"
        )));
    }
    Ok(())
}

/// Largest value of a non-empty sample.
pub fn maximum(data: &[Real]) -> Option<Real> {
    data.iter().copied().reduce(Real::max)
}
