//! Akaike information criteria and model weights.
//!
//! References: Burnham & Anderson (2002), *Model Selection and Multimodel
//! Inference*, p. 66.

use eco_core::{ensure, Error, Real, Result, Size};
use eco_models::{Family, FittedModel};

use crate::likelihood::nll;

/// AIC = 2k + 2·nll.
pub fn aic(nll: Real, k: Size) -> Real {
    2.0 * k as Real + 2.0 * nll
}

/// Small-sample corrected AICc = AIC + 2k(k + 1) / (n − k − 1).
///
/// Undefined, and an [`Error::StatisticUndefined`], when `n <= k + 1`.
pub fn aicc(nll: Real, k: Size, n: Size) -> Result<Real> {
    if n <= k + 1 {
        return Err(Error::StatisticUndefined(format!(
            "AICc needs more observations than parameters + 1 (n = {n}, k = {k})"
        )));
    }
    let (kf, nf) = (k as Real, n as Real);
    Ok(aic(nll, k) + 2.0 * kf * (kf + 1.0) / (nf - kf - 1.0))
}

/// AIC (or AICc when `corrected`) of `model` on `sample`, with the
/// parameter count taken from the model and `n` from the sample.
pub fn aic_for(sample: &[Real], model: &FittedModel, corrected: bool) -> Result<Real> {
    let value = nll(sample, model)?;
    if corrected {
        aicc(value, model.k(), sample.len())
    } else {
        Ok(aic(value, model.k()))
    }
}

/// Differences from the best score and the normalized Akaike weights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AicWeights {
    /// AIC_i − min AIC, parallel to the input.
    pub delta: Vec<Real>,
    /// exp(−delta_i / 2) normalized to sum to one, parallel to the input.
    pub weights: Vec<Real>,
}

/// Delta AIC and Akaike weights for a set of candidate models.
///
/// A weight is the probability that the corresponding model is the best of
/// the set.
pub fn aic_compare(aic_values: &[Real]) -> Result<AicWeights> {
    ensure!(!aic_values.is_empty(), "no AIC values to compare");
    if let Some(bad) = aic_values.iter().find(|v| !v.is_finite()) {
        return Err(Error::Input(format!("AIC values must be finite, got {bad}")));
    }
    let best = aic_values.iter().copied().fold(Real::INFINITY, Real::min);
    let delta: Vec<Real> = aic_values.iter().map(|v| v - best).collect();
    let raw: Vec<Real> = delta.iter().map(|d| (-d / 2.0).exp()).collect();
    let total: Real = raw.iter().sum();
    let weights = raw.into_iter().map(|w| w / total).collect();
    Ok(AicWeights { delta, weights })
}

/// Per-model comparison record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    /// Family of the scored model.
    pub family: Family,
    /// Negative log-likelihood.
    pub nll: Real,
    /// AIC.
    pub aic: Real,
    /// AICc.
    pub aicc: Real,
    /// AICc minus the smallest AICc in the set.
    pub delta: Real,
    /// Akaike weight computed from AICc.
    pub weight: Real,
}

/// Score every model in `models` against one `sample`.
///
/// Deltas and weights are computed from AICc. Output order follows
/// `models`.
pub fn compare_models(sample: &[Real], models: &[FittedModel]) -> Result<Vec<ComparisonResult>> {
    let n = sample.len();
    let mut scores = Vec::with_capacity(models.len());
    for model in models {
        let value = nll(sample, model)?;
        scores.push((model.family(), value, aic(value, model.k()), aicc(value, model.k(), n)?));
    }
    let corrected: Vec<Real> = scores.iter().map(|s| s.3).collect();
    let AicWeights { delta, weights } = aic_compare(&corrected)?;

    let results: Vec<ComparisonResult> = scores
        .into_iter()
        .zip(delta.into_iter().zip(weights))
        .map(|((family, nll, aic, aicc), (delta, weight))| ComparisonResult {
            family,
            nll,
            aic,
            aicc,
            delta,
            weight,
        })
        .collect();
    if let Some(best) = results.iter().find(|r| r.delta == 0.0) {
        log::debug!(
            "compared {} models on {n} observations; best is {} (weight {:.3})",
            results.len(),
            best.family,
            best.weight
        );
    }
    Ok(results)
}
