//! Similarity scoring and ranking for citymatch.
//!
//! The crate provides two complementary capabilities:
//! - **Per-city dissimilarity scoring.** [`SimilarityScorer`] compares a city
//!   with a [`PreferenceProfile`] dimension by dimension: ordinal levels and
//!   numeric ratings contribute their absolute gap, membership dimensions
//!   contribute a penalty when the two category sets are disjoint. Each
//!   distance is multiplied by its [`DimensionWeights`] entry and the results
//!   are summed. It implements the [`Scorer`] trait so callers can plug it
//!   into [`rank`](citymatch_core::rank).
//! - **Request-level recommendation.** [`SimilarityEngine`] validates a
//!   [`RecommendRequest`](citymatch_core::RecommendRequest), categorises the
//!   preferences, and returns the stable top-K ranking via the
//!   [`Recommender`](citymatch_core::Recommender) trait.
//!
//! # Examples
//!
//! ```
//! use citymatch_core::{Catalog, RecommendRequest, Recommender, UserPreferences};
//! use citymatch_core::test_support::CityBuilder;
//! use citymatch_scorer::SimilarityEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new(vec![CityBuilder::new("Samara").build()])?;
//! let engine = SimilarityEngine::with_defaults();
//! let request = RecommendRequest::new(UserPreferences::default());
//!
//! let recommendation = engine.recommend(&catalog, &request)?;
//! assert_eq!(recommendation.best().map(|entry| entry.score), Some(0.0));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use citymatch_core::{AttributeValue, City, Dimension, PreferenceProfile, Scorer};

mod breakdown;
mod engine;
mod error;
mod weights;

pub use breakdown::{Contribution, ScoreBreakdown};
pub use engine::SimilarityEngine;
pub use error::ScorerConfigError;
pub use weights::{DimensionWeights, DistanceMode};

/// Largest possible gap between two levels.
const ORDINAL_SPAN: f32 = 2.0;
/// Largest possible gap between two ratings.
const NUMERIC_SPAN: f32 = 9.0;

/// Scorer summing weighted per-dimension distances.
///
/// A city identical to the profile on every dimension scores `0.0`. With the
/// default configuration every weight is `1.0` and distances are raw, so the
/// score is the plain sum of absolute gaps plus one per disjoint membership
/// dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityScorer {
    weights: DimensionWeights,
    mode: DistanceMode,
}

impl SimilarityScorer {
    /// Construct a scorer from validated weights and a distance mode.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeight`] when a weight is
    /// negative or not finite.
    pub fn new(weights: DimensionWeights, mode: DistanceMode) -> Result<Self, ScorerConfigError> {
        let validated = weights.validate()?;
        Ok(Self {
            weights: validated,
            mode,
        })
    }

    /// Borrow the configured weights.
    #[must_use]
    pub const fn weights(&self) -> &DimensionWeights {
        &self.weights
    }

    /// Return the configured distance mode.
    #[must_use]
    pub const fn mode(&self) -> DistanceMode {
        self.mode
    }

    /// Explain a score dimension by dimension.
    #[must_use]
    pub fn breakdown(&self, city: &City, profile: &PreferenceProfile) -> ScoreBreakdown {
        ScoreBreakdown::new(self.contributions(city, profile).collect())
    }

    fn contributions<'a>(
        &'a self,
        city: &'a City,
        profile: &'a PreferenceProfile,
    ) -> impl Iterator<Item = Contribution> + 'a {
        Dimension::ALL.into_iter().map(move |dimension| {
            let distance = self.distance(city.attribute(dimension), profile.attribute(dimension));
            self.weigh(dimension, distance)
        })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "contributions multiply a distance by its weight"
    )]
    fn weigh(&self, dimension: Dimension, distance: f32) -> Contribution {
        let weight = self.weights.weight(dimension);
        Contribution {
            dimension,
            distance,
            weight,
            value: distance * weight,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "normalised mode divides gaps by their span"
    )]
    fn distance(&self, city: AttributeValue<'_>, user: AttributeValue<'_>) -> f32 {
        let (gap, span) = match (city, user) {
            (AttributeValue::Level(left), AttributeValue::Level(right)) => {
                (f32::from(left.distance(right)), ORDINAL_SPAN)
            }
            (AttributeValue::Rating(left), AttributeValue::Rating(right)) => {
                (f32::from(left.distance(right)), NUMERIC_SPAN)
            }
            (AttributeValue::Categories(offered), AttributeValue::Categories(wanted)) => {
                // An empty selection expresses no preference.
                let disjoint = !wanted.is_empty() && !offered.intersects(wanted);
                return if disjoint { 1.0_f32 } else { 0.0_f32 };
            }
            // Both sides read the same dimension, so kinds always agree.
            _ => return 0.0_f32,
        };
        match self.mode {
            DistanceMode::Raw => gap,
            DistanceMode::Normalised => gap / span,
        }
    }
}

impl Scorer for SimilarityScorer {
    fn score(&self, city: &City, profile: &PreferenceProfile) -> f32 {
        let total: f32 = self
            .contributions(city, profile)
            .map(|entry| entry.value)
            .sum();
        <Self as Scorer>::sanitise(total)
    }
}
