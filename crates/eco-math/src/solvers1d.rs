//! Bounded 1D root-finding.
//!
//! The implicit parameter equations of the truncated families are solved with
//! Brent's method inside a caller-supplied bracket. The solver never widens
//! the bracket and never returns a guess: if the endpoints do not straddle a
//! sign change, or the evaluation cap in [`SolverSettings`] is exhausted, the
//! call fails with [`Error::NumericFailure`].

use std::cell::Cell;

use eco_core::{
    errors::{Error, Result},
    fail, Real, SolverSettings,
};

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Combines bisection, secant, and inverse quadratic interpolation. Both
/// endpoint evaluations count towards `settings.max_evaluations`.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, settings: &SolverSettings) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = if settings.accuracy > 0.0 {
        settings.accuracy
    } else {
        SolverSettings::default().accuracy
    };
    let evaluations = Cell::new(0usize);
    let eval = |x: Real| -> Result<Real> {
        evaluations.set(evaluations.get() + 1);
        let y = f(x);
        if y.is_nan() {
            fail!("Brent: objective is NaN at x = {x}");
        }
        Ok(y)
    };

    let mut a = x_min;
    let mut b = x_max;
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    if fa * fb > 0.0 {
        return Err(Error::NumericFailure(format!(
            "Brent: f({a}) = {fa} and f({b}) = {fb} do not bracket a root"
        )));
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    while evaluations.get() < settings.max_evaluations {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            log::debug!(
                "Brent converged to {b} after {} evaluations",
                evaluations.get()
            );
            return Ok(b);
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (p, q) = if a == c {
                let p = 2.0 * xm * s;
                let q = 1.0 - s;
                (p, q)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                let p = s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0));
                let q = (q - 1.0) * (r - 1.0) * (s - 1.0);
                (p, q)
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = eval(b)?;
    }
    fail!(
        "Brent: no convergence within {} evaluations",
        settings.max_evaluations
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn brent_sqrt2() {
        let root = brent(|x| x * x - 2.0, 0.0, 2.0, &SolverSettings::default()).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn brent_decreasing_function() {
        let root = brent(|x| 1.0 - x.exp(), -3.0, 2.0, &SolverSettings::default()).unwrap();
        assert!(root.abs() < 1e-10, "got {root}");
    }

    #[test]
    fn brent_non_bracketing_is_numeric_failure() {
        let r = brent(|x| x, 1.0, 2.0, &SolverSettings::default());
        assert!(matches!(r, Err(Error::NumericFailure(_))));
    }

    #[test]
    fn brent_respects_evaluation_cap() {
        let settings = SolverSettings {
            accuracy: 1e-15,
            max_evaluations: 3,
        };
        let r = brent(|x| x.powi(3) - 0.3, 0.0, 10.0, &settings);
        assert!(matches!(r, Err(Error::NumericFailure(_))));
    }

    #[test]
    fn brent_nan_objective_fails() {
        let f = |x: Real| if x > 0.5 { f64::NAN } else { x - 1.0 };
        let r = brent(f, 0.0, 2.0, &SolverSettings::default());
        assert!(matches!(r, Err(Error::NumericFailure(_))));
    }

    #[test]
    fn brent_exact_endpoint_root() {
        let root = brent(|x| x - 1.0, 1.0, 3.0, &SolverSettings::default()).unwrap();
        assert_eq!(root, 1.0);
    }

    proptest! {
        #[test]
        fn brent_cube_root_within_accuracy(c in 1e-3..1e3f64) {
            let settings = SolverSettings::default();
            let root = brent(|x| x.powi(3) - c, 0.0, 11.0, &settings).unwrap();
            prop_assert!((root - c.cbrt()).abs() < 1e-10, "root {} for c = {}", root, c);
        }
    }
}
