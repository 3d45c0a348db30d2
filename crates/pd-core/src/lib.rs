//! Core types for probdist.
//!
//! Shared by every model crate:
//! - the [`Error`] taxonomy and [`Result`] alias
//! - the [`Distribution`] contract (moments, backing sample, point evaluation)
//! - serializable [`Summary`] snapshots used by the CLI

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::Distribution;
pub use types::{Moments, Summary};
