//! Simple summaries comparing an observed species-abundance distribution with
//! a predicted one.

use eco_core::{sample, Error, Real, Result, Size};

/// A statistic computed on the observed and the predicted distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservedPredicted<T> {
    /// Value on the observed distribution.
    pub observed: T,
    /// Value on the predicted distribution.
    pub predicted: T,
}

fn check_no_zeros(data: &[Real], what: &str) -> Result<()> {
    sample::check_finite(data)?;
    if data.contains(&0.0) {
        return Err(Error::Input(format!("{what} abundances cannot contain zeros")));
    }
    Ok(())
}

/// Number of rare species, those with abundance below `threshold`.
pub fn rarity(obs: &[Real], pred: &[Real], threshold: Real) -> Result<ObservedPredicted<Size>> {
    check_no_zeros(obs, "observed")?;
    check_no_zeros(pred, "predicted")?;
    let rare = |data: &[Real]| data.iter().filter(|&&x| x < threshold).count();
    Ok(ObservedPredicted {
        observed: rare(obs),
        predicted: rare(pred),
    })
}

/// Abundance of the most abundant species.
pub fn nmax(obs: &[Real], pred: &[Real]) -> Result<ObservedPredicted<Real>> {
    check_no_zeros(obs, "observed")?;
    check_no_zeros(pred, "predicted")?;
    Ok(ObservedPredicted {
        observed: obs.iter().copied().fold(Real::NEG_INFINITY, Real::max),
        predicted: pred.iter().copied().fold(Real::NEG_INFINITY, Real::max),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_rare_species() {
        let r = rarity(&[1.0, 3.0, 12.0, 40.0], &[2.0, 9.0, 10.0, 30.0], 10.0).unwrap();
        assert_eq!(r, ObservedPredicted { observed: 2, predicted: 2 });
    }

    #[test]
    fn most_abundant() {
        let m = nmax(&[5.0, 40.0, 2.0], &[33.5, 1.0]).unwrap();
        assert_eq!(m, ObservedPredicted { observed: 40.0, predicted: 33.5 });
    }

    #[test]
    fn zeros_rejected() {
        assert!(matches!(rarity(&[0.0, 1.0], &[1.0], 10.0), Err(Error::Input(_))));
        assert!(matches!(nmax(&[1.0], &[1.0, 0.0]), Err(Error::Input(_))));
    }
}
