//! Ranking: turn per-city scores into an ordered top-K list.
//!
//! [`rank`] is the shared ranking routine; [`Recommender`] is the
//! request-level entry point that engines implement on top of it.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::{Catalog, City, PreferenceError, PreferenceProfile, Scorer, UserPreferences};

/// Number of matches returned when a request does not say otherwise.
pub const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

/// Options controlling how many scored cities survive ranking.
///
/// # Examples
/// ```rust
/// use std::num::NonZeroUsize;
/// use citymatch_core::{DEFAULT_LIMIT, RankOptions};
///
/// let options = RankOptions::default();
/// assert_eq!(options.limit, DEFAULT_LIMIT);
/// assert!(options.max_score.is_none());
///
/// let top_three = RankOptions::with_limit(NonZeroUsize::MIN.saturating_add(2));
/// assert_eq!(top_three.limit.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Maximum number of entries returned.
    pub limit: NonZeroUsize,
    /// Drop entries scoring above this value.
    pub max_score: Option<f32>,
}

impl RankOptions {
    /// Options returning at most `limit` entries with no score cut-off.
    #[must_use]
    pub const fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            limit,
            max_score: None,
        }
    }

    /// Return a copy that drops entries scoring above `max_score`.
    #[must_use]
    pub const fn with_max_score(mut self, max_score: f32) -> Self {
        self.max_score = Some(max_score);
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

/// A city paired with its dissimilarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCity<'a> {
    /// The scored city, borrowed from the catalog.
    pub city: &'a City,
    /// Dissimilarity score; lower is better.
    pub score: f32,
}

/// Score every city, stable-sort ascending, filter, and keep the first
/// `options.limit` entries.
///
/// Cities with equal scores keep their catalog order. An empty catalog, or
/// a cut-off that excludes everything, yields an empty list.
///
/// # Examples
/// ```rust
/// use citymatch_core::{Catalog, PreferenceProfile, RankOptions, Scorer, UserPreferences, rank};
/// # use citymatch_core::{City, CityRecord, Codes};
/// # fn city(name: &str, climate: i64) -> City {
/// #     let record = CityRecord {
/// #         name: name.to_owned(),
/// #         climate,
/// #         population: 1,
/// #         city_rhythm: 1,
/// #         weather_stability: 1,
/// #         infrastructure: 2,
/// #         greenery: 2,
/// #         safety: 5,
/// #         cultural_activities: 5,
/// #         work_mode: Codes::Many(vec![1, 2]),
/// #         lifestyle: Codes::One(2),
/// #         preferred_objects: Codes::Many(vec![1, 3]),
/// #         green_preference: Codes::One(1),
/// #     };
/// #     City::try_from(record).expect("valid city")
/// # }

/// struct ClimateGap;
///
/// impl Scorer for ClimateGap {
///     fn score(&self, city: &City, profile: &PreferenceProfile) -> f32 {
///         f32::from(city.climate.distance(profile.climate))
///     }
/// }
///
/// let catalog = Catalog::new(vec![city("Omsk", 3), city("Perm", 1)])?;
/// let profile = UserPreferences::default().profile();
///
/// let ranked = rank(&ClimateGap, &catalog, &profile, RankOptions::default());
/// assert_eq!(ranked[0].city.name, "Perm");
/// assert_eq!(ranked[1].score, 2.0);
/// # Ok::<(), citymatch_core::CatalogError>(())
/// ```
pub fn rank<'a, S>(
    scorer: &S,
    catalog: &'a Catalog,
    profile: &PreferenceProfile,
    options: RankOptions,
) -> Vec<ScoredCity<'a>>
where
    S: Scorer + ?Sized,
{
    let mut scored: Vec<ScoredCity<'a>> = catalog
        .iter()
        .map(|city| ScoredCity {
            city,
            score: scorer.score(city, profile),
        })
        .collect();
    // `sort_by` is stable, so ties keep catalog order.
    scored.sort_by(|left, right| left.score.total_cmp(&right.score));
    if let Some(max_score) = options.max_score {
        scored.retain(|entry| entry.score <= max_score);
    }
    scored.truncate(options.limit.get());
    log::debug!(
        "ranked {} cities, kept {} (limit {})",
        catalog.len(),
        scored.len(),
        options.limit
    );
    scored
}

/// A single recommendation request.
///
/// The request carries everything the engine needs; nothing is read from
/// ambient or session state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    /// The user's submitted preferences.
    pub preferences: UserPreferences,
    /// Ranking limit and cut-off.
    pub options: RankOptions,
}

impl RecommendRequest {
    /// Build a request with default ranking options.
    #[must_use]
    pub fn new(preferences: UserPreferences) -> Self {
        Self {
            preferences,
            options: RankOptions::default(),
        }
    }

    /// Replace the ranking options.
    #[must_use]
    pub const fn with_options(mut self, options: RankOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate the request before scoring.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidPreferences`] for malformed
    /// preferences and [`RecommendError::InvalidMaxScore`] for a negative or
    /// non-finite cut-off.
    pub fn validate(&self) -> Result<(), RecommendError> {
        self.preferences.validate()?;
        if let Some(value) = self.options.max_score
            && (!value.is_finite() || value < 0.0)
        {
            return Err(RecommendError::InvalidMaxScore { value });
        }
        Ok(())
    }
}

/// Ranked output of a request, best match first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recommendation<'a> {
    /// Matches in ascending score order.
    pub matches: Vec<ScoredCity<'a>>,
}

impl<'a> Recommendation<'a> {
    /// Report the "no matches" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Best match, if any.
    #[must_use]
    pub fn best(&self) -> Option<&ScoredCity<'a>> {
        self.matches.first()
    }

    /// Iterate over matches in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCity<'a>> {
        self.matches.iter()
    }
}

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The submitted preferences failed validation.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferenceError),
    /// The score cut-off was negative or not finite.
    #[error("max score {value} must be finite and non-negative")]
    InvalidMaxScore {
        /// Rejected cut-off.
        value: f32,
    },
}

/// Produce ranked city recommendations for a request.
///
/// Implementations should validate the request and return
/// [`RecommendError`] rather than panicking. An empty result is a valid
/// outcome, not an error. Recommenders must be `Send + Sync` so one
/// instance can serve concurrent requests over a shared catalog.
pub trait Recommender: Send + Sync {
    /// Rank `catalog` against the request's preferences.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the request fails validation.
    fn recommend<'a>(
        &self,
        catalog: &'a Catalog,
        request: &RecommendRequest,
    ) -> Result<Recommendation<'a>, RecommendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CityBuilder, FixedScorer};
    use crate::{CategorySet, ValueError};
    use rstest::{fixture, rstest};

    struct DummyRecommender(FixedScorer);

    impl Recommender for DummyRecommender {
        fn recommend<'a>(
            &self,
            catalog: &'a Catalog,
            request: &RecommendRequest,
        ) -> Result<Recommendation<'a>, RecommendError> {
            request.validate()?;
            let profile = request.preferences.profile();
            Ok(Recommendation {
                matches: rank(&self.0, catalog, &profile, request.options),
            })
        }
    }

    #[fixture]
    fn ten_cities() -> Catalog {
        let cities = (0..10)
            .map(|index| CityBuilder::new(&format!("City{index}")).build())
            .collect();
        Catalog::new(cities).expect("valid catalog")
    }

    fn names<'a>(ranked: &'a [ScoredCity<'_>]) -> Vec<&'a str> {
        ranked.iter().map(|entry| entry.city.name.as_str()).collect()
    }

    #[rstest]
    fn rank_sorts_ascending(ten_cities: Catalog) {
        let scorer = FixedScorer::new()
            .with_score("City3", 0.5)
            .with_score("City7", 0.25)
            .with_fallback(4.0);
        let profile = UserPreferences::default().profile();

        let ranked = rank(&scorer, &ten_cities, &profile, RankOptions::default());

        assert_eq!(&names(&ranked)[..2], ["City7", "City3"]);
        assert!(ranked.windows(2).all(|pair| pair[0].score <= pair[1].score));
    }

    #[rstest]
    fn rank_truncates_to_limit(ten_cities: Catalog) {
        let profile = UserPreferences::default().profile();
        let ranked = rank(
            &FixedScorer::new(),
            &ten_cities,
            &profile,
            RankOptions::default(),
        );
        assert_eq!(ranked.len(), 5);
    }

    #[rstest]
    fn rank_keeps_catalog_order_for_ties(ten_cities: Catalog) {
        let profile = UserPreferences::default().profile();
        let scorer = FixedScorer::new()
            .with_score("City8", 1.0)
            .with_score("City2", 1.0)
            .with_score("City5", 1.0)
            .with_fallback(2.0);

        let ranked = rank(&scorer, &ten_cities, &profile, RankOptions::default());

        assert_eq!(
            names(&ranked),
            ["City2", "City5", "City8", "City0", "City1"]
        );
    }

    #[rstest]
    fn rank_applies_max_score_before_limit(ten_cities: Catalog) {
        let profile = UserPreferences::default().profile();
        let scorer = FixedScorer::new()
            .with_score("City4", 1.0)
            .with_fallback(3.0);
        let options = RankOptions::default().with_max_score(1.5);

        let ranked = rank(&scorer, &ten_cities, &profile, options);

        assert_eq!(names(&ranked), ["City4"]);
    }

    #[rstest]
    fn rank_of_empty_catalog_is_empty() {
        let empty = Catalog::default();
        let profile = UserPreferences::default().profile();
        let ranked = rank(
            &FixedScorer::new(),
            &empty,
            &profile,
            RankOptions::default(),
        );
        assert!(ranked.is_empty());
    }

    #[rstest]
    fn recommender_returns_empty_recommendation_without_error() {
        let recommender = DummyRecommender(FixedScorer::new());
        let empty = Catalog::default();
        let request = RecommendRequest::new(UserPreferences::default());
        let recommendation = recommender
            .recommend(&empty, &request)
            .expect("empty catalog is not an error");
        assert!(recommendation.is_empty());
        assert_eq!(recommendation.len(), 0);
        assert!(recommendation.best().is_none());
    }

    #[rstest]
    fn recommender_returns_the_top_five(ten_cities: Catalog) {
        let scorer = FixedScorer::new()
            .with_score("City9", 0.0)
            .with_fallback(1.0);
        let recommender = DummyRecommender(scorer);
        let recommendation = recommender
            .recommend(&ten_cities, &RecommendRequest::new(UserPreferences::default()))
            .expect("valid request");
        assert_eq!(recommendation.len(), 5);
        assert_eq!(
            recommendation.best().map(|entry| entry.city.name.as_str()),
            Some("City9")
        );
    }

    #[rstest]
    fn recommender_rejects_invalid_preferences(ten_cities: Catalog) {
        let recommender = DummyRecommender(FixedScorer::new());
        let preferences = UserPreferences {
            work_mode: CategorySet::from_codes([4], 4).expect("valid for four codes"),
            ..UserPreferences::default()
        };
        let err = recommender
            .recommend(&ten_cities, &RecommendRequest::new(preferences))
            .expect_err("work mode code 4 is unknown");
        assert!(matches!(
            err,
            RecommendError::InvalidPreferences(PreferenceError::InvalidField {
                source: ValueError::CategoryOutOfRange { value: 4, max: 3 },
                ..
            })
        ));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn request_rejects_bad_max_score(#[case] value: f32) {
        let request = RecommendRequest::new(UserPreferences::default())
            .with_options(RankOptions::default().with_max_score(value));
        assert!(matches!(
            request.validate(),
            Err(RecommendError::InvalidMaxScore { .. })
        ));
    }
}
