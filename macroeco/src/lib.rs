//! # macroeco
//!
//! Parametric distributions for species-abundance and energy data, with
//! maximum-likelihood fitting and model comparison.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `eco-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use macroeco::compare::compare_models;
//! use macroeco::models::{Family, FitOptions};
//!
//! let abundances = [1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 21.0, 60.0];
//! let opts = FitOptions::new();
//! let fits = [Family::Geom, Family::Nbinom]
//!     .into_iter()
//!     .map(|f| f.fit(&abundances, &opts))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let scores = compare_models(&abundances, &fits).unwrap();
//! let total: f64 = scores.iter().map(|s| s.weight).sum();
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, configuration values, and error definitions.
pub use eco_core as core;

/// Numeric kernels: root-finding, special functions, grid search, least squares.
pub use eco_math as math;

/// Distribution families, the family registry, and fitting.
pub use eco_models as models;

/// Model comparison: likelihood, information criteria, goodness of fit, binning.
pub use eco_compare as compare;
