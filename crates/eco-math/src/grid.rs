//! Inclusive grid generation and profile search.
//!
//! Nuisance shape parameters without a closed-form estimator are located by
//! evaluating an objective at every point of a [`GridRange`] and keeping the
//! first minimum met while scanning upwards. Each evaluation is independent;
//! the reduction only replaces the incumbent on a strictly smaller value, so
//! ties resolve to the lowest grid value.

use eco_core::{ensure, fail, GridRange, Real, Result};

/// The located grid minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMinimum {
    /// Grid value at which the objective is smallest.
    pub x: Real,
    /// Objective value at `x`.
    pub value: Real,
    /// Zero-based position of `x` in the grid.
    pub index: usize,
    /// Number of grid points scanned.
    pub len: usize,
}

impl GridMinimum {
    /// `true` when the minimum sits on the first or last grid point, i.e. the
    /// optimum may lie outside the searched range.
    pub fn on_boundary(&self) -> bool {
        self.len > 1 && (self.index == 0 || self.index + 1 == self.len)
    }
}

/// Materialize the grid `start, start + step, …` up to and including `stop`.
///
/// Points are computed as `start + i * step` rather than by accumulation, so
/// rounding error does not grow along the grid.
pub fn grid_points(range: &GridRange) -> Result<Vec<Real>> {
    range.validate()?;
    let n = range.len();
    Ok((0..n).map(|i| range.start + i as Real * range.step).collect())
}

/// Scan `range` in ascending order and return the first point minimizing
/// `objective`.
///
/// NaN objective values never become the incumbent. If no grid point yields
/// a finite value the search fails rather than reporting a grid point.
pub fn grid_argmin<F>(range: &GridRange, objective: F) -> Result<GridMinimum>
where
    F: Fn(Real) -> Real,
{
    let points = grid_points(range)?;
    ensure!(!points.is_empty(), "grid range {range:?} contains no points");

    let mut best: Option<(usize, Real, Real)> = None;
    for (i, &x) in points.iter().enumerate() {
        let v = objective(x);
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, _, incumbent)) if v >= incumbent => {}
            _ => best = Some((i, x, v)),
        }
    }

    match best {
        Some((index, x, value)) if value.is_finite() => Ok(GridMinimum {
            x,
            value,
            index,
            len: points.len(),
        }),
        Some((_, _, value)) => fail!("objective is {value} at every point of grid {range:?}"),
        None => fail!("objective is NaN at every point of grid {range:?}"),
    }
}
