//! Combination of independent distributions across model kinds.
//!
//! Each family has its own typed `combine`. [`Model`] and [`Operand`] cover
//! the case where the operands' kinds are only known at runtime (CLI input,
//! heterogeneous collections): every pairing without a closed-form sum,
//! including a plain number, is an [`Error::UnsupportedOperation`].

use std::fmt;

use pd_core::{Distribution, Error, Result, Summary};

use crate::bernoulli::BernoulliModel;
use crate::binomial::BinomialModel;
use crate::gaussian::GaussianModel;

/// Any model of this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// `Binom(n, p)`
    Binomial(BinomialModel),
    /// `Bernoulli(p)`
    Bernoulli(BernoulliModel),
    /// `N(mean, std)`
    Gaussian(GaussianModel),
}

/// Right-hand side of a combination.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Another model
    Model(Model),
    /// A plain number
    Scalar(f64),
}

impl Model {
    /// Family name of the wrapped model.
    pub fn family(&self) -> &'static str {
        match self {
            Model::Binomial(m) => m.family(),
            Model::Bernoulli(m) => m.family(),
            Model::Gaussian(m) => m.family(),
        }
    }

    /// Mean of the wrapped model.
    pub fn mean(&self) -> f64 {
        match self {
            Model::Binomial(m) => m.mean(),
            Model::Bernoulli(m) => m.mean(),
            Model::Gaussian(m) => m.mean(),
        }
    }

    /// Standard deviation of the wrapped model.
    pub fn std(&self) -> f64 {
        match self {
            Model::Binomial(m) => m.std(),
            Model::Bernoulli(m) => m.std(),
            Model::Gaussian(m) => m.std(),
        }
    }

    /// PMF or PDF at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        match self {
            Model::Binomial(m) => m.evaluate(x),
            Model::Bernoulli(m) => m.evaluate(x),
            Model::Gaussian(m) => m.evaluate(x),
        }
    }

    /// Serializable snapshot.
    pub fn summary(&self) -> Summary {
        match self {
            Model::Binomial(m) => m.summary(),
            Model::Bernoulli(m) => m.summary(),
            Model::Gaussian(m) => m.summary(),
        }
    }

    /// Distribution of the sum of `self` and an independent `other`.
    pub fn combine(&self, other: &Operand) -> Result<Model> {
        match (self, other) {
            (Model::Binomial(a), Operand::Model(Model::Binomial(b))) => {
                a.combine(b).map(Model::Binomial)
            }
            (Model::Gaussian(a), Operand::Model(Model::Gaussian(b))) => {
                a.combine(b).map(Model::Gaussian)
            }
            (Model::Bernoulli(_), _) => Err(Error::UnsupportedOperation(
                "combination is not supported for bernoulli models".to_string(),
            )),
            (lhs, Operand::Model(rhs)) => Err(Error::UnsupportedOperation(format!(
                "cannot combine a {} model with a {} model",
                lhs.family(),
                rhs.family()
            ))),
            (lhs, Operand::Scalar(v)) => Err(Error::UnsupportedOperation(format!(
                "cannot combine a {} model with the number {}",
                lhs.family(),
                v
            ))),
        }
    }
}

/// `lhs.combine(rhs)` for anything convertible into an [`Operand`].
pub fn combine(lhs: &Model, rhs: impl Into<Operand>) -> Result<Model> {
    lhs.combine(&rhs.into())
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Binomial(m) => fmt::Display::fmt(m, f),
            Model::Bernoulli(m) => fmt::Display::fmt(m, f),
            Model::Gaussian(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<BinomialModel> for Model {
    fn from(m: BinomialModel) -> Self {
        Model::Binomial(m)
    }
}

impl From<BernoulliModel> for Model {
    fn from(m: BernoulliModel) -> Self {
        Model::Bernoulli(m)
    }
}

impl From<GaussianModel> for Model {
    fn from(m: GaussianModel) -> Self {
        Model::Gaussian(m)
    }
}

impl From<Model> for Operand {
    fn from(m: Model) -> Self {
        Operand::Model(m)
    }
}

impl From<BinomialModel> for Operand {
    fn from(m: BinomialModel) -> Self {
        Operand::Model(m.into())
    }
}

impl From<BernoulliModel> for Operand {
    fn from(m: BernoulliModel) -> Self {
        Operand::Model(m.into())
    }
}

impl From<GaussianModel> for Operand {
    fn from(m: GaussianModel) -> Self {
        Operand::Model(m.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binom(n: u64, p: f64) -> BinomialModel {
        BinomialModel::new(n, p).unwrap()
    }

    fn gauss(mean: f64, std: f64) -> GaussianModel {
        GaussianModel::new(mean, std).unwrap()
    }

    #[test]
    fn test_same_family_sums() {
        let sum = combine(&binom(20, 0.4).into(), binom(60, 0.4)).unwrap();
        match sum {
            Model::Binomial(b) => {
                assert_eq!(b.n(), 80);
                assert_eq!(b.p(), 0.4);
                assert!(b.data().is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }

        let sum = combine(&gauss(25.0, 3.0).into(), gauss(30.0, 4.0)).unwrap();
        assert_eq!(sum.mean(), 55.0);
        assert_eq!(sum.std(), 5.0);
        assert_eq!(sum.family(), "gaussian");
    }

    #[test]
    fn test_mismatched_parameters() {
        let err = combine(&binom(20, 0.5).into(), binom(60, 0.4)).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_mismatched_kinds() {
        let g: Model = gauss(0.0, 1.0).into();
        let b: Model = binom(10, 0.5).into();
        assert!(combine(&g, b.clone()).unwrap_err().is_unsupported());
        assert!(combine(&b, g.clone()).unwrap_err().is_unsupported());
        assert!(combine(&g, 5.0).unwrap_err().is_unsupported());
        assert!(combine(&b, 5.0).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_bernoulli_never_combines() {
        let a: Model = BernoulliModel::new(0.4).unwrap().into();
        assert!(combine(&a, BernoulliModel::new(0.4).unwrap()).unwrap_err().is_unsupported());
        assert!(combine(&a, binom(3, 0.4)).unwrap_err().is_unsupported());
        let b: Model = binom(3, 0.4).into();
        assert!(combine(&b, BernoulliModel::new(0.4).unwrap()).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_dispatch() {
        let m: Model = binom(20, 0.5).into();
        assert_eq!(m.to_string(), "Mean: 10 - Standard Deviation: 2.23606797749979");
        assert_eq!(m.summary().family, "binomial");
        assert!(m.evaluate(0.5).unwrap_err().is_invalid_parameter());
        let g: Model = gauss(25.0, 2.0).into();
        assert_eq!(g.evaluate(25.0).unwrap(), gauss(25.0, 2.0).pdf(25.0));
    }
}
