//! Common data types for probdist

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean and standard deviation, rendered as
/// `Mean: <mean> - Standard Deviation: <std>`.
///
/// Whole-number floats print without a fractional part (`25`, not `25.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Mean
    pub mean: f64,
    /// Standard deviation
    pub std: f64,
}

impl Moments {
    /// Create a new pair of moments
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }
}

impl fmt::Display for Moments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mean: {} - Standard Deviation: {}", self.mean, self.std)
    }
}

/// Snapshot of a fitted or parametric model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Family name ("binomial", "bernoulli", "gaussian")
    pub family: String,

    /// Mean
    pub mean: f64,

    /// Standard deviation
    pub std: f64,

    /// Number of samples backing the model (0 for parametric models)
    pub n_samples: usize,

    /// Family parameters by name
    pub parameters: BTreeMap<String, f64>,
}

impl Summary {
    /// Mean and standard deviation of this snapshot
    pub fn moments(&self) -> Moments {
        Moments::new(self.mean, self.std)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.moments(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moments_display() {
        assert_eq!(Moments::new(8.0, 2.5).to_string(), "Mean: 8 - Standard Deviation: 2.5");
        assert_eq!(Moments::new(25.0, 3.0).to_string(), "Mean: 25 - Standard Deviation: 3");
    }

    #[test]
    fn test_summary_json() {
        let s = Summary {
            family: "gaussian".into(),
            mean: 25.0,
            std: 2.0,
            n_samples: 0,
            parameters: BTreeMap::from([("mean".into(), 25.0), ("std".into(), 2.0)]),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["family"], "gaussian");
        assert_eq!(json["parameters"]["std"], 2.0);
        let back: Summary = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
        assert_eq!(s.to_string(), "Mean: 25 - Standard Deviation: 2");
    }
}
