//! Core traits for probdist
//!
//! Every model exposes the same minimal contract: its first two moments, the
//! sample it was fitted from (possibly empty), and a point evaluation
//! (PMF for discrete families, PDF for continuous ones).

use std::collections::BTreeMap;

use crate::{Error, Result, Summary};

/// Common contract of all distribution models.
pub trait Distribution {
    /// Element type of the backing sample.
    type Sample: Copy;

    /// Family name (e.g. "binomial").
    fn family(&self) -> &'static str;

    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Standard deviation of the distribution (always `>= 0`).
    fn std(&self) -> f64;

    /// Sample the parameters were estimated from; empty for parametric models.
    fn data(&self) -> &[Self::Sample];

    /// Named parameters, in a stable order.
    fn parameters(&self) -> BTreeMap<String, f64>;

    /// PMF or PDF at `x`.
    fn evaluate(&self, x: f64) -> Result<f64>;

    /// Variance (`std^2`).
    fn variance(&self) -> f64 {
        let s = self.std();
        s * s
    }

    /// Whether a dataset backs this model.
    fn has_data(&self) -> bool {
        !self.data().is_empty()
    }

    /// Borrow the backing sample, failing when none was loaded.
    fn require_data(&self) -> Result<&[Self::Sample]> {
        let data = self.data();
        if data.is_empty() {
            return Err(Error::PreconditionNotMet(format!(
                "{} model has no dataset; build it from data first",
                self.family()
            )));
        }
        Ok(data)
    }

    /// Serializable snapshot.
    fn summary(&self) -> Summary {
        Summary {
            family: self.family().to_string(),
            mean: self.mean(),
            std: self.std(),
            n_samples: self.data().len(),
            parameters: self.parameters(),
        }
    }
}
