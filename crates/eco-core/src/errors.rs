//! Error types for macroeco-rs.
//!
//! Every fallible operation in the workspace returns [`Result`]. Failures are
//! grouped by what went wrong rather than by where: invalid shape parameters,
//! missing capabilities, numeric breakdowns, bad inputs, and statistics that
//! are undefined for the given sizes. The `ensure!`, `ensure_domain!` and
//! `fail!` macros cover the common early-return patterns.

use thiserror::Error;

/// The top-level error type used throughout macroeco-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Shape parameters fall outside the family's valid domain.
    #[error("invalid shape parameters: {0}")]
    Domain(String),

    /// The family has no implementation of the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A numeric routine failed to bracket, converge, or search.
    #[error("numeric failure: {0}")]
    NumericFailure(String),

    /// The caller supplied an invalid sample or structural parameter.
    #[error("invalid input: {0}")]
    Input(String),

    /// A statistic is undefined for the given inputs (e.g. AICc with n <= k + 1).
    #[error("statistic undefined: {0}")]
    StatisticUndefined(String),
}

/// Shorthand `Result` type used throughout macroeco-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Input(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use eco_core::{ensure, errors::Error};
/// fn positive(x: f64) -> eco_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Input(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Input(format!($($msg)*)));
        }
    };
}

/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use eco_core::{ensure_domain, errors::Error};
/// fn probability(p: f64) -> eco_core::errors::Result<f64> {
///     ensure_domain!(p > 0.0 && p <= 1.0, "p must lie in (0, 1], got {p}");
///     Ok(p)
/// }
/// assert!(probability(0.5).is_ok());
/// assert!(matches!(probability(2.0), Err(Error::Domain(_))));
/// ```
#[macro_export]
macro_rules! ensure_domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(format!($($msg)*)));
        }
    };
}

/// Returns `Err(Error::NumericFailure(...))` immediately.
///
/// # Example
/// ```
/// use eco_core::{fail, errors::Error};
/// fn always_err() -> eco_core::errors::Result<()> {
///     fail!("solver diverged");
/// }
/// assert!(matches!(always_err(), Err(Error::NumericFailure(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NumericFailure(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: f64) -> Result<f64> {
        ensure!(x.is_finite(), "x must be finite, got {x}");
        ensure_domain!(x >= 0.0, "x must be non-negative, got {x}");
        Ok(x.sqrt())
    }

    #[test]
    fn macros_map_to_variants() {
        assert_eq!(checked(4.0), Ok(2.0));
        assert!(matches!(checked(f64::NAN), Err(Error::Input(_))));
        assert!(matches!(checked(-1.0), Err(Error::Domain(_))));
    }

    #[test]
    fn display_names_the_kind() {
        let e = Error::StatisticUndefined("AICc needs n > k + 1".into());
        assert_eq!(e.to_string(), "statistic undefined: AICc needs n > k + 1");
        let e = Error::Unsupported("translate_args for expon_uptrunc".into());
        assert!(e.to_string().starts_with("unsupported operation"));
    }
}
