//! Probability models for probdist.
//!
//! - [`binomial`] / [`bernoulli`]: discrete trial models with exact PMFs
//! - [`gaussian`]: normal model with closed-form PDF and interval probability
//! - [`combine`]: sums of independent models, checked across kinds
//! - [`quadrature`], [`dataset`], [`math`]: numeric and I/O helpers

pub mod bernoulli;
pub mod binomial;
pub mod combine;
pub mod dataset;
pub mod gaussian;
pub mod math;
pub mod quadrature;

pub use bernoulli::BernoulliModel;
pub use binomial::{BinaryOutcome, BinomialModel};
pub use combine::{Model, Operand};
pub use gaussian::GaussianModel;
