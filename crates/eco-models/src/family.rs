//! The registry of distribution families.
//!
//! [`Family`] is the closed set of supported families. Each variant knows its
//! registry name, its ordered shape-parameter names and whether it is
//! discrete, and exposes the family-level operations: parameter translation,
//! maximum-likelihood fitting, and vectorized evaluation over
//! [`ShapeParameters`].

use std::fmt;
use std::str::FromStr;

use eco_core::{ensure, Error, Real, Result, SolverSettings};
use rand::Rng;

use crate::cnbinom::ConditionalNegativeBinomial;
use crate::distribution::Distribution;
use crate::expon::Exponential;
use crate::expon_uptrunc::TruncatedExponential;
use crate::fitting::FitOptions;
use crate::geom::Geometric;
use crate::geom_uptrunc::TruncatedGeometric;
use crate::model::{Model, Moments};
use crate::nbinom::NegativeBinomial;
use crate::params::{FittedModel, ShapeParameters, UserParameters};

/// A distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Family {
    /// Geometric, shape `(p)`.
    Geom,
    /// Upper-truncated geometric, shape `(p, b)`.
    GeomUptrunc,
    /// Negative binomial, shape `(mu, k_agg)`.
    Nbinom,
    /// Conditional negative binomial, shape `(mu, k_agg, b)`.
    Cnbinom,
    /// Exponential, shape `(lam)`.
    Expon,
    /// Upper-truncated exponential, shape `(lam, b)`.
    ExponUptrunc,
}

impl Family {
    /// Every registered family.
    pub const ALL: [Family; 6] = [
        Family::Geom,
        Family::GeomUptrunc,
        Family::Nbinom,
        Family::Cnbinom,
        Family::Expon,
        Family::ExponUptrunc,
    ];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Family::Geom => "geom",
            Family::GeomUptrunc => "geom_uptrunc",
            Family::Nbinom => "nbinom",
            Family::Cnbinom => "cnbinom",
            Family::Expon => "expon",
            Family::ExponUptrunc => "expon_uptrunc",
        }
    }

    /// Look a family up by registry name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::Input(format!("unknown distribution family '{name}'")))
    }

    /// Ordered shape-parameter names.
    pub fn shape_names(self) -> &'static [&'static str] {
        match self {
            Family::Geom => &["p"],
            Family::GeomUptrunc => &["p", "b"],
            Family::Nbinom => &["mu", "k_agg"],
            Family::Cnbinom => &["mu", "k_agg", "b"],
            Family::Expon => &["lam"],
            Family::ExponUptrunc => &["lam", "b"],
        }
    }

    /// `true` when the family has a pmf rather than a pdf.
    pub fn is_discrete(self) -> bool {
        !matches!(self, Family::Expon | Family::ExponUptrunc)
    }

    /// Bind shape-parameter values to this family.
    pub fn params(self, values: &[Real]) -> Result<ShapeParameters> {
        ShapeParameters::new(self, values.to_vec())
    }

    // ── Parameter translation ───────────────────────────────────────────────

    /// Shape parameters for the distribution with the given mean (and,
    /// where required, aggregation and bound).
    ///
    /// The upper-truncated exponential has no translation and fails with
    /// [`Error::Unsupported`].
    pub fn translate_args(self, user: &UserParameters) -> Result<ShapeParameters> {
        let mu = user.mu;
        let values = match self {
            Family::Geom => vec![Geometric::p_from_mean(mu)?],
            Family::GeomUptrunc => {
                let b = self.required(user.b, "b")?;
                vec![TruncatedGeometric::solve_p(mu, b, &SolverSettings::default())?, b]
            }
            Family::Nbinom => vec![mu, self.required(user.k_agg, "k_agg")?],
            Family::Cnbinom => vec![
                mu,
                self.required(user.k_agg, "k_agg")?,
                self.required(user.b, "b")?,
            ],
            Family::Expon => vec![Exponential::lam_from_mean(mu)?],
            Family::ExponUptrunc => {
                return Err(Error::Unsupported(
                    "expon_uptrunc: translation of mu to lam is not implemented".into(),
                ))
            }
        };
        ShapeParameters::new(self, values)
    }

    /// [`translate_args`](Self::translate_args) for several means sharing
    /// the remaining user parameters.
    pub fn translate_args_many(
        self,
        mus: &[Real],
        shared: &UserParameters,
    ) -> Result<Vec<ShapeParameters>> {
        mus.iter()
            .map(|&mu| self.translate_args(&UserParameters { mu, ..*shared }))
            .collect()
    }

    fn required(self, value: Option<Real>, name: &str) -> Result<Real> {
        value.ok_or_else(|| Error::Input(format!("{self}: translation requires '{name}'")))
    }

    // ── Fitting ─────────────────────────────────────────────────────────────

    /// Maximum-likelihood shape parameters for `data`.
    pub fn fit_mle(self, data: &[Real], opts: &FitOptions) -> Result<ShapeParameters> {
        let values = match self {
            Family::Geom => vec![Geometric::fit_mle(data)?],
            Family::GeomUptrunc => {
                let (p, b) = TruncatedGeometric::fit_mle(data, opts)?;
                vec![p, b]
            }
            Family::Nbinom => {
                let (mu, k) = NegativeBinomial::fit_mle(data, opts)?;
                vec![mu, k]
            }
            Family::Cnbinom => {
                let (mu, k, b) = ConditionalNegativeBinomial::fit_mle(data, opts)?;
                vec![mu, k, b]
            }
            Family::Expon => vec![Exponential::fit_mle(data)?],
            Family::ExponUptrunc => {
                let (lam, b) = TruncatedExponential::fit_mle(data, opts)?;
                vec![lam, b]
            }
        };
        ShapeParameters::new(self, values)
    }

    /// Fit `data` and record the sample size and parameter count.
    pub fn fit(self, data: &[Real], opts: &FitOptions) -> Result<FittedModel> {
        let params = self.fit_mle(data, opts)?;
        log::debug!("{self}: fitted {:?} to {} observations", params.values(), data.len());
        Ok(FittedModel::new(params, data.len()))
    }

    // ── Evaluation ──────────────────────────────────────────────────────────

    /// `true` when `params` belongs to this family and lies in its domain.
    pub fn argcheck(self, params: &ShapeParameters) -> bool {
        params.family() == self && Model::new(params).is_ok()
    }

    fn model(self, params: &ShapeParameters) -> Result<Model> {
        ensure!(
            params.family() == self,
            "{} parameters passed to {self}",
            params.family()
        );
        Model::new(params)
    }

    fn require_discrete(self, discrete: bool, op: &str) -> Result<()> {
        if self.is_discrete() != discrete {
            return Err(Error::Unsupported(format!(
                "{op} is not defined for the {} family {self}",
                if self.is_discrete() { "discrete" } else { "continuous" }
            )));
        }
        Ok(())
    }

    /// Log pmf at each of `xs`. Discrete families only.
    pub fn logpmf(self, xs: &[Real], params: &ShapeParameters) -> Result<Vec<Real>> {
        self.require_discrete(true, "logpmf")?;
        let m = self.model(params)?;
        Ok(xs.iter().map(|&x| m.ln_density(x)).collect())
    }

    /// pmf at each of `xs`. Discrete families only.
    pub fn pmf(self, xs: &[Real], params: &ShapeParameters) -> Result<Vec<Real>> {
        self.require_discrete(true, "pmf")?;
        let m = self.model(params)?;
        Ok(xs.iter().map(|&x| m.density(x)).collect())
    }

    /// Log pdf at each of `xs`. Continuous families only.
    pub fn logpdf(self, xs: &[Real], params: &ShapeParameters) -> Result<Vec<Real>> {
        self.require_discrete(false, "logpdf")?;
        let m = self.model(params)?;
        Ok(xs.iter().map(|&x| m.ln_density(x)).collect())
    }

    /// pdf at each of `xs`. Continuous families only.
    pub fn pdf(self, xs: &[Real], params: &ShapeParameters) -> Result<Vec<Real>> {
        self.require_discrete(false, "pdf")?;
        let m = self.model(params)?;
        Ok(xs.iter().map(|&x| m.density(x)).collect())
    }

    /// cdf at each of `xs`.
    pub fn cdf(self, xs: &[Real], params: &ShapeParameters) -> Result<Vec<Real>> {
        let m = self.model(params)?;
        Ok(xs.iter().map(|&x| m.cdf(x)).collect())
    }

    /// Quantiles at each probability level in `qs`.
    pub fn ppf(self, qs: &[Real], params: &ShapeParameters) -> Result<Vec<Real>> {
        let m = self.model(params)?;
        qs.iter().map(|&q| m.ppf(q)).collect()
    }

    /// Predicted rank-abundance distribution of `n` values, most abundant
    /// first.
    pub fn rank(self, n: usize, params: &ShapeParameters) -> Result<Vec<Real>> {
        self.model(params)?.rank(n)
    }

    /// Mean and variance.
    pub fn stats(self, params: &ShapeParameters) -> Result<Moments> {
        Ok(self.model(params)?.moments())
    }

    /// Differential entropy (exponential families).
    pub fn entropy(self, params: &ShapeParameters) -> Result<Real> {
        self.model(params)?.entropy()
    }

    /// `n` random variates.
    pub fn rvs<R: Rng + ?Sized>(
        self,
        n: usize,
        params: &ShapeParameters,
        rng: &mut R,
    ) -> Result<Vec<Real>> {
        let m = self.model(params)?;
        (0..n).map(|_| m.sample(&mut *rng)).collect()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
