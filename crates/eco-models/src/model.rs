//! A validated distribution of any family, selected by tag.

use eco_core::{Error, Real, Result};
use rand::Rng;

use crate::cnbinom::ConditionalNegativeBinomial;
use crate::distribution::Distribution;
use crate::expon::Exponential;
use crate::expon_uptrunc::TruncatedExponential;
use crate::family::Family;
use crate::geom::Geometric;
use crate::geom_uptrunc::TruncatedGeometric;
use crate::nbinom::NegativeBinomial;
use crate::params::ShapeParameters;

/// Mean and, where a closed form exists, variance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    /// Distribution mean.
    pub mean: Real,
    /// Distribution variance.
    pub variance: Option<Real>,
}

/// One distribution from the closed set of families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    /// Geometric.
    Geom(Geometric),
    /// Upper-truncated geometric.
    GeomUptrunc(TruncatedGeometric),
    /// Negative binomial.
    Nbinom(NegativeBinomial),
    /// Conditional negative binomial.
    Cnbinom(ConditionalNegativeBinomial),
    /// Exponential.
    Expon(Exponential),
    /// Upper-truncated exponential.
    ExponUptrunc(TruncatedExponential),
}

macro_rules! dispatch {
    ($model:expr, $d:ident => $body:expr) => {
        match $model {
            Model::Geom($d) => $body,
            Model::GeomUptrunc($d) => $body,
            Model::Nbinom($d) => $body,
            Model::Cnbinom($d) => $body,
            Model::Expon($d) => $body,
            Model::ExponUptrunc($d) => $body,
        }
    };
}

impl Model {
    /// Build the distribution described by `params`, failing with
    /// [`Error::Domain`] when the values are outside the family's domain.
    ///
    /// A value vector of the wrong length is an [`Error::Input`].
    pub fn new(params: &ShapeParameters) -> Result<Self> {
        let family = params.family();
        Ok(match (family, params.values()) {
            (Family::Geom, &[p]) => Model::Geom(Geometric::new(p)?),
            (Family::GeomUptrunc, &[p, b]) => Model::GeomUptrunc(TruncatedGeometric::new(p, b)?),
            (Family::Nbinom, &[mu, k]) => Model::Nbinom(NegativeBinomial::new(mu, k)?),
            (Family::Cnbinom, &[mu, k, b]) => {
                Model::Cnbinom(ConditionalNegativeBinomial::new(mu, k, b)?)
            }
            (Family::Expon, &[lam]) => Model::Expon(Exponential::new(lam)?),
            (Family::ExponUptrunc, &[lam, b]) => {
                Model::ExponUptrunc(TruncatedExponential::new(lam, b)?)
            }
            (_, values) => {
                return Err(Error::Input(format!(
                    "{family} takes {} shape parameter(s), got {}",
                    family.shape_names().len(),
                    values.len()
                )))
            }
        })
    }

    /// Family tag.
    pub fn family(&self) -> Family {
        match self {
            Model::Geom(_) => Family::Geom,
            Model::GeomUptrunc(_) => Family::GeomUptrunc,
            Model::Nbinom(_) => Family::Nbinom,
            Model::Cnbinom(_) => Family::Cnbinom,
            Model::Expon(_) => Family::Expon,
            Model::ExponUptrunc(_) => Family::ExponUptrunc,
        }
    }

    /// Mean and variance.
    pub fn moments(&self) -> Moments {
        Moments {
            mean: self.mean(),
            variance: self.variance(),
        }
    }

    /// Differential entropy; defined for the exponential families only.
    pub fn entropy(&self) -> Result<Real> {
        match self {
            Model::Expon(d) => Ok(d.entropy()),
            Model::ExponUptrunc(d) => Ok(d.entropy()),
            other => Err(Error::Unsupported(format!(
                "entropy is not implemented for {}",
                other.family()
            ))),
        }
    }
}

impl Distribution for Model {
    fn is_discrete(&self) -> bool {
        dispatch!(self, d => d.is_discrete())
    }

    fn ln_density(&self, x: Real) -> Real {
        dispatch!(self, d => d.ln_density(x))
    }

    fn density(&self, x: Real) -> Real {
        dispatch!(self, d => d.density(x))
    }

    fn cdf(&self, x: Real) -> Real {
        dispatch!(self, d => d.cdf(x))
    }

    fn ppf(&self, q: Real) -> Result<Real> {
        dispatch!(self, d => d.ppf(q))
    }

    fn mean(&self) -> Real {
        dispatch!(self, d => d.mean())
    }

    fn variance(&self) -> Option<Real> {
        dispatch!(self, d => d.variance())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Real> {
        dispatch!(self, d => d.sample(rng))
    }
}
