//! Error types raised while configuring the similarity scorer.
#![forbid(unsafe_code)]

use citymatch_core::Dimension;
use thiserror::Error;

/// Errors raised when scorer configuration is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerConfigError {
    /// A dimension weight was negative or not finite.
    #[error("weight {value} for {dimension} must be finite and non-negative")]
    InvalidWeight {
        /// Dimension carrying the weight.
        dimension: Dimension,
        /// Rejected weight.
        value: f32,
    },
    /// A distance mode name was not recognised.
    #[error("unknown distance mode {name:?} (expected \"raw\" or \"normalised\")")]
    UnknownDistanceMode {
        /// Rejected name.
        name: String,
    },
}
