//! # eco-models
//!
//! Parametric distribution families for species-abundance and energy data.
//!
//! Each family is a validated struct implementing [`Distribution`] with its
//! own `fit_mle`. [`Family`] is the registry over the closed set of families
//! and [`Model`] the tagged variant used when the family is only known at
//! run time.
//!
//! ```
//! use eco_models::{Family, FitOptions};
//!
//! let data = [1.0, 1.0, 2.0, 4.0, 9.0];
//! let fit = Family::Geom.fit(&data, &FitOptions::new()).unwrap();
//! let p = fit.params().get("p").unwrap();
//! assert!((p - 1.0 / 4.4).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Conditional negative binomial.
pub mod cnbinom;

mod discrete;

/// The `Distribution` capability trait.
pub mod distribution;

/// Exponential, optionally bounded above.
pub mod expon;

/// Upper-truncated exponential.
pub mod expon_uptrunc;

/// Registry of families and family-level operations.
pub mod family;

/// Fit configuration.
pub mod fitting;

/// Geometric.
pub mod geom;

/// Upper-truncated geometric.
pub mod geom_uptrunc;

/// Tagged union over every family.
pub mod model;

/// Negative binomial.
pub mod nbinom;

/// Shape, user and fitted parameter records.
pub mod params;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cnbinom::ConditionalNegativeBinomial;
pub use distribution::Distribution;
pub use expon::Exponential;
pub use expon_uptrunc::TruncatedExponential;
pub use family::Family;
pub use fitting::FitOptions;
pub use geom::Geometric;
pub use geom_uptrunc::TruncatedGeometric;
pub use model::{Model, Moments};
pub use nbinom::NegativeBinomial;
pub use params::{FittedModel, ShapeParameters, UserParameters};
