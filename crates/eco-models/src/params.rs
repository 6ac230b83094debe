//! Parameter value types: family shape parameters, user-facing parameters,
//! and the record produced by a fit.

use eco_core::{ensure, Real, Result, Size};

use crate::family::Family;
use crate::model::Model;

/// Ordered shape parameters bound to a family.
///
/// The value vector always has one entry per name in
/// [`Family::shape_names`], in the same order. Domain validity is checked
/// separately by [`Family::argcheck`] / [`Model::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawShapeParameters"))]
pub struct ShapeParameters {
    family: Family,
    values: Vec<Real>,
}

/// Unchecked wire form; deserialization goes through [`ShapeParameters::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawShapeParameters {
    family: Family,
    values: Vec<Real>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawShapeParameters> for ShapeParameters {
    type Error = eco_core::Error;

    fn try_from(raw: RawShapeParameters) -> Result<Self> {
        Self::new(raw.family, raw.values)
    }
}

impl ShapeParameters {
    /// Bind `values` to `family`. The length must match the family's shape
    /// signature.
    pub fn new(family: Family, values: Vec<Real>) -> Result<Self> {
        let names = family.shape_names();
        ensure!(
            values.len() == names.len(),
            "{family} takes {} shape parameter(s) ({}), got {}",
            names.len(),
            names.join(", "),
            values.len()
        );
        Ok(Self { family, values })
    }

    /// Owning family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Values in shape-signature order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Value of the shape parameter called `name`.
    pub fn get(&self, name: &str) -> Option<Real> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// `(name, value)` pairs in shape-signature order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Real)> + '_ {
        self.family
            .shape_names()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// Interpretable parameters translated into shape parameters by
/// [`Family::translate_args`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserParameters {
    /// Distribution mean.
    pub mu: Real,
    /// Aggregation parameter, for the negative binomial families.
    pub k_agg: Option<Real>,
    /// Upper bound, for the truncated and conditional families.
    pub b: Option<Real>,
}

impl UserParameters {
    /// Parameters with only a mean.
    pub fn new(mu: Real) -> Self {
        Self { mu, k_agg: None, b: None }
    }

    /// Set the aggregation parameter.
    pub fn with_k_agg(mut self, k_agg: Real) -> Self {
        self.k_agg = Some(k_agg);
        self
    }

    /// Set the upper bound.
    pub fn with_b(mut self, b: Real) -> Self {
        self.b = Some(b);
        self
    }
}

/// Result of fitting a family to a sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedModel {
    params: ShapeParameters,
    n: Size,
    k: Size,
}

impl FittedModel {
    /// Record a fit of `params` to a sample of size `n`. The parameter count
    /// is the number of shape parameters.
    pub fn new(params: ShapeParameters, n: Size) -> Self {
        let k = params.values().len();
        Self { params, n, k }
    }

    /// Fitted family.
    pub fn family(&self) -> Family {
        self.params.family()
    }

    /// Fitted shape parameters.
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Sample size the model was fitted to.
    pub fn n(&self) -> Size {
        self.n
    }

    /// Number of parameters counted by information criteria.
    pub fn k(&self) -> Size {
        self.k
    }

    /// Distribution object for evaluation.
    pub fn model(&self) -> Result<Model> {
        Model::new(&self.params)
    }
}
