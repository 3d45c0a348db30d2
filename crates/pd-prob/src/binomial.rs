//! Binomial model: `n` independent trials with success probability `p`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use pd_core::{Distribution, Error, Moments, Result};

use crate::dataset::load_values;
use crate::math::{choose_exact, ln_choose};

/// A single observed trial outcome that can be read as `0` or `1`.
pub trait BinaryOutcome: Copy + fmt::Debug {
    /// `Some(0)`/`Some(1)` for failure/success, `None` for anything else.
    fn outcome(self) -> Option<u8>;
}

impl BinaryOutcome for bool {
    fn outcome(self) -> Option<u8> {
        Some(u8::from(self))
    }
}

macro_rules! impl_integer_outcome {
    ($($t:ty),*) => {
        $(
            impl BinaryOutcome for $t {
                fn outcome(self) -> Option<u8> {
                    match self {
                        0 => Some(0),
                        1 => Some(1),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_integer_outcome!(u8, u32, u64, usize, i32, i64);

macro_rules! impl_float_outcome {
    ($($t:ty),*) => {
        $(
            impl BinaryOutcome for $t {
                fn outcome(self) -> Option<u8> {
                    if self == 0.0 {
                        Some(0)
                    } else if self == 1.0 {
                        Some(1)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_float_outcome!(f32, f64);

/// Binomial distribution `Binom(n, p)`.
///
/// `mean` and `std` are always derived from `(n, p)`; they are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialModel {
    n: u64,
    p: f64,
    data: Vec<u8>,
}

impl BinomialModel {
    /// Parametric model with `n >= 1` trials and success probability `p ∈ [0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        Self::build(n, p, Vec::new())
    }

    fn build(n: u64, p: f64, data: Vec<u8>) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidParameter(format!(
                "n must be a positive integer, got {}",
                n
            )));
        }
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameter(format!("p must be finite and in [0,1], got {}", p)));
        }
        Ok(Self { n, p, data })
    }

    /// Estimate `n` and `p` from a sample of 0/1 (or false/true) outcomes.
    ///
    /// `n` is the sample length and `p` the fraction of successes. The stored
    /// sample is the input coerced to `0`/`1`, in order.
    pub fn from_binary_data<T: BinaryOutcome>(dataset: &[T]) -> Result<Self> {
        if dataset.is_empty() {
            return Err(Error::InvalidParameter(
                "binary dataset must have at least one element".to_string(),
            ));
        }
        let data = dataset
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                x.outcome().ok_or_else(|| {
                    Error::InvalidParameter(format!(
                        "binary dataset expected (only 0/1 or false/true), element {} is {:?}",
                        i, x
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        let n = data.len() as u64;
        let successes = data.iter().filter(|&&x| x == 1).count();
        let p = successes as f64 / n as f64;
        tracing::debug!(n, p, "binomial fitted from binary data");
        Self::build(n, p, data)
    }

    /// Load a one-value-per-line file and estimate from it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_binary_data(&load_values(path)?)
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Failure probability `1 - p`.
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }

    /// Probability of exactly `x` successes.
    ///
    /// The binomial coefficient is computed exactly in integers.
    pub fn pmf(&self, x: i64) -> Result<f64> {
        let k = u64::try_from(x)
            .ok()
            .filter(|&k| k <= self.n)
            .ok_or_else(|| {
                Error::InvalidParameter(format!("x must be in 0..={}, got {}", self.n, x))
            })?;
        Ok(self.mass(k))
    }

    /// Probability of exactly `k` successes in `n` trials (same as [`Self::pmf`]).
    pub fn probability(&self, k: i64) -> Result<f64> {
        self.pmf(k)
    }

    fn mass(&self, k: u64) -> f64 {
        let (p, q) = (self.p, self.q());
        let failures = self.n - k;
        match choose_exact(self.n, k) {
            Some(c) => c as f64 * p.powf(k as f64) * q.powf(failures as f64),
            None => {
                // Coefficient overflowed u128: fall back to log space.
                if p == 0.0 {
                    return if k == 0 { 1.0 } else { 0.0 };
                }
                if p == 1.0 {
                    return if k == self.n { 1.0 } else { 0.0 };
                }
                (ln_choose(self.n, k) + k as f64 * p.ln() + failures as f64 * q.ln()).exp()
            }
        }
    }

    /// Sum of two independent binomials with the same `p`.
    ///
    /// Different success probabilities have no binomial sum and yield
    /// [`Error::UnsupportedOperation`].
    pub fn combine(&self, other: &BinomialModel) -> Result<BinomialModel> {
        if self.p != other.p {
            return Err(Error::UnsupportedOperation(format!(
                "binomial sum needs equal success probabilities, got {} and {}",
                self.p, other.p
            )));
        }
        let n = self.n.checked_add(other.n).ok_or_else(|| {
            Error::InvalidParameter("combined number of trials overflows".to_string())
        })?;
        BinomialModel::new(n, self.p)
    }

    /// `(k, pmf(k))` for every `k in 0..=n`. Requires a loaded dataset.
    pub fn pmf_curve(&self) -> Result<Vec<(u64, f64)>> {
        self.require_data()?;
        Ok((0..=self.n).map(|k| (k, self.mass(k))).collect())
    }

    /// Expected `[failures, successes]` over the `n` trials. Requires a loaded dataset.
    pub fn outcome_counts(&self) -> Result<[f64; 2]> {
        self.require_data()?;
        Ok([self.q() * self.n as f64, self.mean()])
    }
}

impl Distribution for BinomialModel {
    type Sample = u8;

    fn family(&self) -> &'static str {
        "binomial"
    }

    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn std(&self) -> f64 {
        (self.n as f64 * self.p * self.q()).sqrt()
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn parameters(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([("n".to_string(), self.n as f64), ("p".to_string(), self.p)])
    }

    fn evaluate(&self, x: f64) -> Result<f64> {
        self.pmf(integral_point(x)?)
    }
}

impl fmt::Display for BinomialModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Moments::new(self.mean(), self.std()))
    }
}

/// Read a real evaluation point as a count, rejecting fractional or
/// non-finite values.
pub(crate) fn integral_point(x: f64) -> Result<i64> {
    if !x.is_finite() || x.fract() != 0.0 || x.abs() > i64::MAX as f64 {
        return Err(Error::InvalidParameter(format!("x must be an integer, got {}", x)));
    }
    Ok(x as i64)
}
