//! Options and sufficient statistics shared by the `fit_mle` routines.

use eco_core::{
    ensure, sample, GridRange, Real, Result, SolverSettings,
};
use eco_math::GridMinimum;
use statrs::statistics::Statistics;

/// Structural parameters and search configuration for a fit.
///
/// Only typed values are accepted; there is no string-valued argument
/// binding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitOptions {
    /// Upper truncation bound `b`. Defaults to the sample sum when `None`.
    pub upper_bound: Option<Real>,
    /// Inclusive search grid for the aggregation parameter `k_agg`.
    pub k_range: GridRange,
    /// Root-finder configuration for implicit parameter equations.
    pub solver: SolverSettings,
}

impl FitOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the upper truncation bound.
    pub fn with_upper_bound(mut self, b: Real) -> Self {
        self.upper_bound = Some(b);
        self
    }

    /// Replace the `k_agg` search grid.
    pub fn with_k_range(mut self, k_range: GridRange) -> Self {
        self.k_range = k_range;
        self
    }

    /// Replace the root-finder configuration.
    pub fn with_solver(mut self, solver: SolverSettings) -> Self {
        self.solver = solver;
        self
    }
}

/// Sample mean of a validated, non-empty sample.
pub(crate) fn sample_mean(data: &[Real]) -> Real {
    Statistics::mean(data)
}

/// Resolve the upper bound `b` for a fit: the caller's value when given
/// (which must cover every observation), otherwise the sample sum.
pub(crate) fn resolve_upper_bound(data: &[Real], opts: &FitOptions) -> Result<Real> {
    let max = sample::maximum(data).unwrap_or(0.0);
    match opts.upper_bound {
        Some(b) => {
            ensure!(b.is_finite(), "upper bound b must be finite, got {b}");
            ensure!(
                b >= max,
                "upper bound b = {b} is below the largest observation {max}"
            );
            Ok(b)
        }
        None => Ok(data.iter().sum()),
    }
}

/// [`resolve_upper_bound`] for count data: an explicit `b` must also be an
/// integer.
pub(crate) fn resolve_count_bound(data: &[Real], opts: &FitOptions) -> Result<Real> {
    match opts.upper_bound {
        Some(b) => {
            sample::check_count_bound(b, data)?;
            Ok(b)
        }
        None => Ok(data.iter().sum()),
    }
}

/// Log the outcome of a profile search over `k_agg`.
pub(crate) fn report_k_search(family: &str, min: &GridMinimum, range: &GridRange) {
    if min.on_boundary() {
        log::warn!(
            "{family}: k_agg = {} lies on the edge of the search grid [{}, {}]; \
             the likelihood optimum may be outside the range",
            min.x,
            range.start,
            range.stop
        );
    }
    log::debug!("{family}: k_agg = {} (nll = {})", min.x, min.value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::Error;

    #[test]
    fn upper_bound_defaults_to_sum() {
        let data = [1.0, 2.0, 7.0];
        assert_eq!(resolve_upper_bound(&data, &FitOptions::new()).unwrap(), 10.0);
    }

    #[test]
    fn explicit_upper_bound_must_cover_sample() {
        let data = [1.0, 2.0, 7.0];
        let ok = FitOptions::new().with_upper_bound(50.0);
        assert_eq!(resolve_upper_bound(&data, &ok).unwrap(), 50.0);
        let bad = FitOptions::new().with_upper_bound(5.0);
        assert!(matches!(resolve_upper_bound(&data, &bad), Err(Error::Input(_))));
    }

    #[test]
    fn count_bound_rejects_fractional_b() {
        let data = [1.0, 2.0, 4.0];
        let frac = FitOptions::new().with_upper_bound(10.5);
        assert!(matches!(resolve_count_bound(&data, &frac), Err(Error::Input(_))));
        // continuous families keep a fractional bound
        assert_eq!(resolve_upper_bound(&data, &frac).unwrap(), 10.5);
        assert_eq!(resolve_count_bound(&data, &FitOptions::new()).unwrap(), 7.0);
    }

    #[test]
    fn builder_sets_fields() {
        let range = GridRange::new(0.5, 5.0, 0.5).unwrap();
        let opts = FitOptions::new().with_k_range(range).with_upper_bound(3.0);
        assert_eq!(opts.k_range, range);
        assert_eq!(opts.upper_bound, Some(3.0));
    }
}
