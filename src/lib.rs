//! Facade crate for the citymatch recommendation engine.
//!
//! This crate re-exports the core domain types and the similarity engine so
//! applications depend on a single crate.

#![forbid(unsafe_code)]

pub use citymatch_core::{
    Catalog, CatalogError, CategorySet, City, CityRecord, Dimension, Level, PreferenceProfile,
    PreferenceRecord, RankOptions, Rating, RecommendError, RecommendRequest, Recommendation,
    Recommender, ScoredCity, Scorer, UserPreferences, categorize, rank,
};
pub use citymatch_scorer::{
    Contribution, DimensionWeights, DistanceMode, ScoreBreakdown, ScorerConfigError,
    SimilarityEngine, SimilarityScorer,
};
