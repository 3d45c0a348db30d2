//! Gaussian (normal) model.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::path::Path;

use pd_core::{Distribution, Error, Moments, Result};

use crate::dataset::load_values;
use crate::math::{FRAC_1_SQRT_2PI, mean_of, variance_of};
use crate::quadrature::{QuadOptions, quad};

/// Beyond this many standard deviations `φ(z)` is below `1e-300`; bounds
/// past it are integrated as `±∞`.
const Z_TAIL_CUTOFF: f64 = 40.0;

/// Normal distribution `N(mean, std)` with `std > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianModel {
    mean: f64,
    std: f64,
    data: Vec<f64>,
}

impl GaussianModel {
    /// Parametric model. `std` must be finite and strictly positive.
    pub fn new(mean: f64, std: f64) -> Result<Self> {
        Self::build(mean, std, Vec::new())
    }

    fn build(mean: f64, std: f64, data: Vec<f64>) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!("mean must be finite, got {}", mean)));
        }
        if !std.is_finite() || std <= 0.0 {
            return Err(Error::InvalidParameter(format!("std must be finite and > 0, got {}", std)));
        }
        Ok(Self { mean, std, data })
    }

    /// Estimate mean and standard deviation from a sample.
    ///
    /// `is_sample` selects the Bessel-corrected divisor `len - 1`; otherwise
    /// the population divisor `len` is used. A single value with
    /// `is_sample == true`, and a dataset with no spread, are rejected.
    pub fn from_dataset(dataset: &[f64], is_sample: bool) -> Result<Self> {
        if dataset.is_empty() {
            return Err(Error::InvalidParameter(
                "dataset must have at least one element".to_string(),
            ));
        }
        if let Some((i, x)) = dataset.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "dataset values must be finite, element {} is {}",
                i, x
            )));
        }
        let ddof = usize::from(is_sample);
        if dataset.len() <= ddof {
            return Err(Error::InvalidParameter(
                "sample standard deviation needs at least two values".to_string(),
            ));
        }

        let mean = mean_of(dataset);
        let std = variance_of(dataset, mean, ddof).sqrt();
        if std == 0.0 {
            return Err(Error::InvalidParameter(
                "dataset has zero spread; a gaussian needs std > 0".to_string(),
            ));
        }
        tracing::debug!(n = dataset.len(), mean, std, is_sample, "gaussian fitted from dataset");
        Self::build(mean, std, dataset.to_vec())
    }

    /// Load a one-value-per-line file and estimate from it.
    pub fn from_file<P: AsRef<Path>>(path: P, is_sample: bool) -> Result<Self> {
        Self::from_dataset(&load_values(path)?, is_sample)
    }

    /// Distance of `x` from the mean in units of standard deviation.
    pub fn z_score(&self, x: f64) -> f64 {
        (x - self.mean) / self.std
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        standard_density(self.z_score(x)) / self.std
    }

    /// Probability mass on `[min(a, b), max(a, b)]`.
    ///
    /// The whole real line is exactly `1` and a single point exactly `0`,
    /// neither of which integrates. Everything else integrates the density
    /// adaptively.
    pub fn probability(&self, a: f64, b: f64) -> Result<f64> {
        if a.is_nan() || b.is_nan() {
            return Err(Error::InvalidParameter(format!(
                "probability bounds must not be NaN, got [{}, {}]",
                a, b
            )));
        }
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        if a == f64::NEG_INFINITY && b == f64::INFINITY {
            return Ok(1.0);
        }
        if a == b {
            return Ok(0.0);
        }

        // Substitute x = mean + std * z so pdf(x) dx becomes φ(z) dz; split at the mean.
        // Far bounds become infinite so a wide interval cannot step over the peak.
        let (za, zb) = (tail_bound(self.z_score(a)), tail_bound(self.z_score(b)));
        let pieces = if za < 0.0 && zb > 0.0 { vec![(za, 0.0), (0.0, zb)] } else { vec![(za, zb)] };
        let options = QuadOptions::default();

        let mut total = 0.0;
        for (lo, hi) in pieces {
            total += quad(standard_density, lo, hi, &options)?.value;
        }
        Ok(total)
    }

    /// [`Self::probability`] over a range; open ends mean `∓∞`, so
    /// `probability_within(..)` is `1`.
    pub fn probability_within<R: RangeBounds<f64>>(&self, range: R) -> Result<f64> {
        let lo = match range.start_bound() {
            Bound::Included(&x) | Bound::Excluded(&x) => x,
            Bound::Unbounded => f64::NEG_INFINITY,
        };
        let hi = match range.end_bound() {
            Bound::Included(&x) | Bound::Excluded(&x) => x,
            Bound::Unbounded => f64::INFINITY,
        };
        self.probability(lo, hi)
    }

    /// Sum of two independent gaussians.
    pub fn combine(&self, other: &GaussianModel) -> Result<GaussianModel> {
        GaussianModel::new(self.mean + other.mean, self.std.hypot(other.std))
    }

    /// `n_spaces` evenly spaced `(x, pdf(x))` points starting at the sample
    /// minimum, stepping by `(max - min) / n_spaces`. Requires a loaded dataset.
    pub fn density_curve(&self, n_spaces: usize) -> Result<Vec<(f64, f64)>> {
        let data = self.require_data()?;
        if n_spaces == 0 {
            return Err(Error::InvalidParameter("n_spaces must be >= 1".to_string()));
        }
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let step = (max - min) / n_spaces as f64;
        Ok((0..n_spaces)
            .map(|i| {
                let x = min + step * i as f64;
                (x, self.pdf(x))
            })
            .collect())
    }
}

fn tail_bound(z: f64) -> f64 {
    if z > Z_TAIL_CUTOFF {
        f64::INFINITY
    } else if z < -Z_TAIL_CUTOFF {
        f64::NEG_INFINITY
    } else {
        z
    }
}

/// Standard normal density `φ(z)`.
fn standard_density(z: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

impl Distribution for GaussianModel {
    type Sample = f64;

    fn family(&self) -> &'static str {
        "gaussian"
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn std(&self) -> f64 {
        self.std
    }

    fn data(&self) -> &[f64] {
        &self.data
    }

    fn parameters(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([("mean".to_string(), self.mean), ("std".to_string(), self.std)])
    }

    fn evaluate(&self, x: f64) -> Result<f64> {
        Ok(self.pdf(x))
    }
}

impl fmt::Display for GaussianModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Moments::new(self.mean, self.std))
    }
}
