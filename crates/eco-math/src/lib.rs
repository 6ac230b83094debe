//! # eco-math
//!
//! Numeric kernels shared by the distribution families and the comparison
//! engine: a bounded 1D root-finder, log-space special functions (via
//! statrs), inclusive grid search, float comparison, and a least-squares
//! line fit (over nalgebra).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point closeness tests.
pub mod comparison;

/// Inclusive grid generation and first-minimum search.
pub mod grid;

/// Ordinary least-squares fit of a straight line.
pub mod regression;

/// 1D root-finding.
pub mod solvers1d;

/// Log-space special functions.
pub mod special;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use grid::{grid_argmin, grid_points, GridMinimum};
pub use regression::LinearFit;
pub use solvers1d::brent;
pub use special::{chi_square_sf, incomplete_beta, ln_choose, ln_gamma};
