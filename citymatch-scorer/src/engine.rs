//! Request-level recommendation on top of [`SimilarityScorer`].
#![forbid(unsafe_code)]

use citymatch_core::{
    Catalog, PreferenceProfile, RecommendError, RecommendRequest, Recommendation, Recommender,
    ScoredCity, rank,
};

use crate::{DimensionWeights, DistanceMode, ScoreBreakdown, ScorerConfigError, SimilarityScorer};

/// Recommender that ranks a catalog with a [`SimilarityScorer`].
///
/// The engine holds only configuration; the catalog and the preferences
/// arrive with each call, so one engine can serve concurrent requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityEngine {
    scorer: SimilarityScorer,
}

impl SimilarityEngine {
    /// Construct an engine with unit weights and raw distances.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Construct an engine around an existing scorer.
    #[must_use]
    pub const fn new(scorer: SimilarityScorer) -> Self {
        Self { scorer }
    }

    /// Construct an engine from weights and a distance mode.
    ///
    /// # Errors
    /// Propagates [`ScorerConfigError`] from [`SimilarityScorer::new`].
    pub fn from_config(
        weights: DimensionWeights,
        mode: DistanceMode,
    ) -> Result<Self, ScorerConfigError> {
        SimilarityScorer::new(weights, mode).map(Self::new)
    }

    /// Borrow the underlying scorer.
    #[must_use]
    pub const fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Explain one ranked entry against the profile it was scored with.
    #[must_use]
    pub fn explain(&self, entry: &ScoredCity<'_>, profile: &PreferenceProfile) -> ScoreBreakdown {
        self.scorer.breakdown(entry.city, profile)
    }
}

impl Recommender for SimilarityEngine {
    fn recommend<'a>(
        &self,
        catalog: &'a Catalog,
        request: &RecommendRequest,
    ) -> Result<Recommendation<'a>, RecommendError> {
        request.validate()?;
        let profile = request.preferences.profile();
        let matches = rank(&self.scorer, catalog, &profile, request.options);
        if matches.is_empty() {
            log::warn!(
                "no matches among {} cities (max score {:?})",
                catalog.len(),
                request.options.max_score
            );
        }
        Ok(Recommendation { matches })
    }
}
