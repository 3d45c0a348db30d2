//! Bernoulli model: a single trial, i.e. a binomial with `n = 1`.
//!
//! Wraps a [`BinomialModel`] rather than extending it. Estimation from data
//! and combination are rejected here with [`Error::UnsupportedOperation`]
//! instead of being inherited.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use pd_core::{Distribution, Error, Moments, Result};

use crate::binomial::{BinaryOutcome, BinomialModel, integral_point};

/// Bernoulli distribution with success probability `p`.
#[derive(Debug, Clone, PartialEq)]
pub struct BernoulliModel {
    inner: BinomialModel,
}

impl BernoulliModel {
    /// Single-trial model with success probability `p ∈ [0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self { inner: BinomialModel::new(1, p)? })
    }

    /// Not available for a single trial.
    pub fn from_binary_data<T: BinaryOutcome>(_dataset: &[T]) -> Result<Self> {
        Err(unsupported("estimation from a dataset"))
    }

    /// Not available for a single trial.
    pub fn from_file<P: AsRef<Path>>(_path: P) -> Result<Self> {
        Err(unsupported("estimation from a file"))
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.inner.p()
    }

    /// Failure probability `1 - p`.
    pub fn q(&self) -> f64 {
        self.inner.q()
    }

    /// Always `1`.
    pub fn n(&self) -> u64 {
        1
    }

    /// `p` for `k == 1`, `q` for `k == 0`.
    pub fn pmf(&self, k: i64) -> Result<f64> {
        match k {
            1 => Ok(self.p()),
            0 => Ok(self.q()),
            _ => Err(Error::InvalidParameter(format!(
                "k must be 0 (failure) or 1 (success), got {}",
                k
            ))),
        }
    }

    /// Probability of a success (`true`) or a failure (`false`).
    pub fn probability(&self, is_success: bool) -> f64 {
        if is_success { self.p() } else { self.q() }
    }

    /// Not available: a sum of Bernoulli trials is a binomial, build that instead.
    pub fn combine(&self, _other: &BernoulliModel) -> Result<BernoulliModel> {
        Err(unsupported("combination"))
    }

    /// The underlying `Binom(1, p)`.
    pub fn as_binomial(&self) -> &BinomialModel {
        &self.inner
    }
}

fn unsupported(what: &str) -> Error {
    Error::UnsupportedOperation(format!("{} is not supported for bernoulli models", what))
}

impl Distribution for BernoulliModel {
    type Sample = u8;

    fn family(&self) -> &'static str {
        "bernoulli"
    }

    fn mean(&self) -> f64 {
        self.inner.mean()
    }

    fn std(&self) -> f64 {
        self.inner.std()
    }

    fn data(&self) -> &[u8] {
        self.inner.data()
    }

    fn parameters(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([("p".to_string(), self.p())])
    }

    fn evaluate(&self, x: f64) -> Result<f64> {
        self.pmf(integral_point(x)?)
    }
}

impl fmt::Display for BernoulliModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Moments::new(self.mean(), self.std()))
    }
}
