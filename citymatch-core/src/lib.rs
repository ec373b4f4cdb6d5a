//! Core domain types for the citymatch engine.
//!
//! These models validate on construction so downstream components can
//! assume in-range values:
//! - [`Level`], [`Rating`] and [`CategorySet`] hold attribute values.
//! - [`City`] and [`Catalog`] describe what is ranked.
//! - [`UserPreferences`] is a user's submission; [`PreferenceProfile`] is
//!   its categorised form, produced by the [`Categorizer`].
//! - [`Scorer`], [`rank`] and [`Recommender`] turn a profile and a catalog
//!   into an ordered top-K list.
//!
//! Raw records ([`CityRecord`], [`PreferenceRecord`]) accept loosely typed
//! input and convert into domain types with `TryFrom`, naming the offending
//! field on failure.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod categories;
mod categorize;
mod city;
mod dimension;
mod preferences;
mod recommend;
mod record;
mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod value;

pub use categories::CategorySet;
pub use categorize::{
    Categorizer, CategorizerError, categorize, categorize_greenery, categorize_infrastructure,
};
pub use city::{Catalog, CatalogError, City, CityValidationError};
pub use dimension::{AttributeValue, Dimension, DimensionKind};
pub use preferences::{PreferenceError, PreferenceProfile, UserPreferences};
pub use recommend::{
    DEFAULT_LIMIT, RankOptions, RecommendError, RecommendRequest, Recommendation, Recommender,
    ScoredCity, rank,
};
pub use record::{CityRecord, Codes, PreferenceRecord};
pub use scorer::Scorer;
pub use value::{Level, Rating, ValueError};
