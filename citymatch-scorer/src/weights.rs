//! Public configuration types for similarity scoring.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use citymatch_core::{Dimension, DimensionKind};
use crate::ScorerConfigError;

/// Per-dimension multipliers applied to raw distances.
///
/// Dimensions without an explicit weight use
/// [`DimensionWeights::DEFAULT_WEIGHT`]. For membership dimensions the weight
/// is the penalty added when the city and the user share no category.
///
/// # Examples
/// ```
/// use citymatch_core::Dimension;
/// use citymatch_scorer::DimensionWeights;
///
/// let weights = DimensionWeights::new()
///     .with_weight(Dimension::Safety, 0.5)
///     .with_membership_penalty(2.0);
/// assert_eq!(weights.weight(Dimension::Safety), 0.5);
/// assert_eq!(weights.weight(Dimension::Lifestyle), 2.0);
/// assert_eq!(weights.weight(Dimension::Climate), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DimensionWeights {
    weights: HashMap<Dimension, f32>,
}

impl DimensionWeights {
    /// Weight used for dimensions without an explicit entry.
    pub const DEFAULT_WEIGHT: f32 = 1.0;

    /// Construct weights where every dimension uses the default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the weight for a dimension.
    #[must_use]
    pub fn weight(&self, dimension: Dimension) -> f32 {
        self.weights
            .get(&dimension)
            .copied()
            .unwrap_or(Self::DEFAULT_WEIGHT)
    }

    /// Insert or update a dimension weight.
    ///
    /// Values are not checked here; [`DimensionWeights::validate`] rejects
    /// unusable weights before scoring.
    pub fn set_weight(&mut self, dimension: Dimension, weight: f32) {
        self.weights.insert(dimension, weight);
    }

    /// Add a dimension weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, dimension: Dimension, weight: f32) -> Self {
        self.set_weight(dimension, weight);
        self
    }

    /// Set the disjoint-set penalty for every membership dimension.
    #[must_use]
    pub fn with_membership_penalty(mut self, penalty: f32) -> Self {
        for dimension in Dimension::ALL {
            if dimension.kind() == DimensionKind::Membership {
                self.set_weight(dimension, penalty);
            }
        }
        self
    }

    /// Validate the weights and return them.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeight`] for the first weight
    /// that is negative or not finite.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        for dimension in Dimension::ALL {
            let value = self.weight(dimension);
            if !value.is_finite() || value < 0.0_f32 {
                return Err(ScorerConfigError::InvalidWeight { dimension, value });
            }
        }
        Ok(self)
    }
}

/// How raw per-dimension distances are scaled before weighting.
///
/// `Raw` keeps absolute gaps, so a numeric dimension (gap up to 9) carries
/// more weight than an ordinal one (gap up to 2). `Normalised` divides each
/// gap by its maximum so every dimension contributes at most its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMode {
    /// Absolute gaps on each dimension's own scale.
    #[default]
    Raw,
    /// Gaps divided by the dimension's largest possible gap.
    Normalised,
}

impl DistanceMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Normalised => "normalised",
        }
    }
}

impl std::fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DistanceMode {
    type Err = ScorerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "normalised" | "normalized" => Ok(Self::Normalised),
            _ => Err(ScorerConfigError::UnknownDistanceMode { name: s.to_owned() }),
        }
    }
}
