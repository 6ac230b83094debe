//! Typed configuration for the numeric kernels.
//!
//! Nothing here is global: every fit receives its own [`GridRange`] and
//! [`SolverSettings`] by value, so concurrent fits never observe each other's
//! configuration.

use crate::{ensure, errors::Result, Real};

/// An inclusive, evenly spaced search grid `start, start + step, …, stop`.
///
/// The last point is included when `stop` lies on the grid (up to a relative
/// tolerance of `1e-9` steps).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRange {
    /// First grid value.
    pub start: Real,
    /// Last admissible grid value.
    pub stop: Real,
    /// Spacing between consecutive grid values.
    pub step: Real,
}

impl GridRange {
    /// Create a validated grid range.
    pub fn new(start: Real, stop: Real, step: Real) -> Result<Self> {
        let range = Self { start, stop, step };
        range.validate()?;
        Ok(range)
    }

    /// Check that the range describes at least one grid point.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.start.is_finite() && self.stop.is_finite() && self.step.is_finite(),
            "grid range must be finite, got ({}, {}, {})",
            self.start,
            self.stop,
            self.step
        );
        ensure!(self.step > 0.0, "grid step must be positive, got {}", self.step);
        ensure!(
            self.start <= self.stop,
            "grid start {} exceeds stop {}",
            self.start,
            self.stop
        );
        Ok(())
    }

    /// Number of grid points, including both ends.
    pub fn len(&self) -> usize {
        let span = (self.stop - self.start) / self.step;
        (span + 1e-9).floor() as usize + 1
    }

    /// Always `false` for a validated range.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GridRange {
    fn default() -> Self {
        Self {
            start: 0.1,
            stop: 100.0,
            step: 0.1,
        }
    }
}

/// Tolerance and evaluation cap for the bounded root-finder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverSettings {
    /// Absolute accuracy on the root.
    pub accuracy: Real,
    /// Maximum number of function evaluations before giving up.
    pub max_evaluations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            accuracy: 1e-12,
            max_evaluations: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_grid_matches_k_agg_search() {
        let g = GridRange::default();
        assert_eq!(g.len(), 1000);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn grid_len_is_inclusive() {
        assert_eq!(GridRange::new(1.0, 2.0, 0.5).unwrap().len(), 3);
        assert_eq!(GridRange::new(1.0, 2.2, 0.5).unwrap().len(), 3);
        assert_eq!(GridRange::new(3.0, 3.0, 1.0).unwrap().len(), 1);
    }

    #[test]
    fn last_point_reaches_stop_despite_rounding() {
        // 0.1 * 999 is not exactly 99.9
        let g = GridRange::new(0.1, 100.0, 0.1).unwrap();
        let last = g.start + (g.len() - 1) as Real * g.step;
        assert_abs_diff_eq!(last, 100.0, epsilon = 1e-10);

        let g = GridRange::new(0.25, 10.0, 0.25).unwrap();
        assert_eq!(g.len(), 40);
        assert_abs_diff_eq!(g.start + 39.0 * g.step, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_grids_rejected() {
        assert!(GridRange::new(1.0, 0.5, 0.1).is_err());
        assert!(GridRange::new(0.0, 1.0, 0.0).is_err());
        assert!(GridRange::new(0.0, f64::INFINITY, 1.0).is_err());
    }
}
