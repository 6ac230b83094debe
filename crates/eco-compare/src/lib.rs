//! # eco-compare
//!
//! Stateless functions scoring fitted models against data: negative
//! log-likelihood and the likelihood ratio test, AIC/AICc with Akaike
//! weights, chi-square contingency tests, sum of squares and R², empirical
//! cdfs, log2 histograms (including Preston's binning), and rank-abundance
//! summaries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Log2 and Preston histograms.
pub mod binning;

/// Chi-square test of homogeneity.
pub mod contingency;

/// Empirical cumulative distribution functions.
pub mod ecdf;

/// Observed-versus-predicted goodness of fit.
pub mod goodness;

/// Information criteria and Akaike weights.
pub mod information;

/// Likelihood-based comparison.
pub mod likelihood;

/// Summaries of observed and predicted rank-abundance distributions.
pub mod summary;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use binning::{log2_bin, preston_bin, Histogram};
pub use contingency::{chi_squared, ChiSquared};
pub use ecdf::{empirical_cdf, empirical_cdf_per_observation};
pub use goodness::{r_squared, sum_of_squares};
pub use information::{aic, aic_compare, aic_for, aicc, compare_models, AicWeights, ComparisonResult};
pub use likelihood::{likelihood_ratio_test, nll, LikelihoodRatio};
pub use summary::{nmax, rarity, ObservedPredicted};
