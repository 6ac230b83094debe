//! Goodness of fit between observed and predicted values.

use eco_core::{ensure, Error, Real, Result};
use eco_math::LinearFit;

fn check_paired(obs: &[Real], pred: &[Real]) -> Result<()> {
    ensure!(
        obs.len() == pred.len(),
        "observed and predicted lengths differ ({} vs {})",
        obs.len(),
        pred.len()
    );
    ensure!(!obs.is_empty(), "observed and predicted series are empty");
    Ok(())
}

/// Σ (obs − pred)².
pub fn sum_of_squares(obs: &[Real], pred: &[Real]) -> Result<Real> {
    check_paired(obs, pred)?;
    Ok(squared_error(obs, pred))
}

fn squared_error(obs: &[Real], pred: &[Real]) -> Real {
    obs.iter().zip(pred).map(|(o, p)| (o - p).powi(2)).sum()
}

/// R² between observed and predicted values.
///
/// With `one_to_one` the fit is measured against the line `pred = obs`:
/// R² = 1 − SS(obs, pred) / SS(obs, mean(obs)), which can be negative
/// (White et al. 2012). Otherwise it is the R² of a least-squares regression
/// of `pred` on `obs`. With `log_trans` both series are log transformed
/// first, so every value must be positive.
pub fn r_squared(obs: &[Real], pred: &[Real], one_to_one: bool, log_trans: bool) -> Result<Real> {
    check_paired(obs, pred)?;
    let (obs, pred): (Vec<Real>, Vec<Real>) = if log_trans {
        if let Some(bad) = obs.iter().chain(pred).find(|&&v| v <= 0.0) {
            return Err(Error::Input(format!(
                "log-transformed R² needs positive values, got {bad}"
            )));
        }
        (obs.iter().map(|v| v.ln()).collect(), pred.iter().map(|v| v.ln()).collect())
    } else {
        (obs.to_vec(), pred.to_vec())
    };

    if one_to_one {
        let mean = obs.iter().sum::<Real>() / obs.len() as Real;
        let ss_tot: Real = obs.iter().map(|o| (o - mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return Err(Error::StatisticUndefined(
                "one-to-one R² is undefined for constant observations".into(),
            ));
        }
        Ok(1.0 - squared_error(&obs, &pred) / ss_tot)
    } else {
        Ok(LinearFit::fit(&obs, &pred)?.r_squared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sum_of_squares_value() {
        assert_eq!(sum_of_squares(&[1.0, 2.0, 3.0], &[1.0, 4.0, 0.0]).unwrap(), 13.0);
        assert!(matches!(sum_of_squares(&[1.0], &[1.0, 2.0]), Err(Error::Input(_))));
    }

    #[test]
    fn perfect_prediction() {
        let obs = [1.0, 3.0, 8.0, 20.0];
        assert_abs_diff_eq!(r_squared(&obs, &obs, true, false).unwrap(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r_squared(&obs, &obs, false, true).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn one_to_one_penalizes_bias_regression_does_not() {
        let obs = [1.0, 2.0, 3.0, 4.0];
        let pred = [3.0, 5.0, 7.0, 9.0];
        // pred = 2 obs + 1 is a perfect line but far from one-to-one
        assert_abs_diff_eq!(r_squared(&obs, &pred, false, false).unwrap(), 1.0, epsilon = 1e-12);
        // SS(obs, pred) = 4 + 9 + 16 + 25, SS(obs, mean) = 5
        assert_abs_diff_eq!(r_squared(&obs, &pred, true, false).unwrap(), 1.0 - 54.0 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn log_transform_requires_positive_values() {
        let r = r_squared(&[1.0, 0.0], &[1.0, 2.0], true, true);
        assert!(matches!(r, Err(Error::Input(_))));
        let r = r_squared(&[1.0, 2.0], &[1.0, -2.0], false, true);
        assert!(matches!(r, Err(Error::Input(_))));
    }

    #[test]
    fn constant_observations_undefined() {
        let r = r_squared(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], true, false);
        assert!(matches!(r, Err(Error::StatisticUndefined(_))));
    }
}
