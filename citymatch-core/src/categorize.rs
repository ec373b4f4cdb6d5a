//! Bucketing of `1..=10` slider values into three-step levels.
//!
//! Catalog data stores infrastructure and greenery as levels, while users
//! report them on a finer slider. Categorisation brings both onto the same
//! scale before comparison.

use thiserror::Error;

use crate::{Level, Rating};

/// Errors returned by [`Categorizer::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategorizerError {
    /// Boundaries were not strictly increasing inside the rating scale.
    #[error("boundaries must satisfy 1 <= low_max ({low_max}) < medium_max ({medium_max}) < 10")]
    InvalidBoundaries {
        /// Requested upper bound of the low bucket.
        low_max: u8,
        /// Requested upper bound of the medium bucket.
        medium_max: u8,
    },
}

/// Bucket boundaries for one slider.
///
/// Values up to `low_max` map to [`Level::Low`], values up to `medium_max`
/// map to [`Level::Medium`], and anything above maps to [`Level::High`].
///
/// # Examples
/// ```
/// use citymatch_core::{Categorizer, Level};
///
/// assert_eq!(Categorizer::INFRASTRUCTURE.categorize(3), Level::Low);
/// assert_eq!(Categorizer::INFRASTRUCTURE.categorize(4), Level::Medium);
/// assert_eq!(Categorizer::GREENERY.categorize(8), Level::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categorizer {
    low_max: u8,
    medium_max: u8,
}

impl Categorizer {
    /// Boundaries applied to the infrastructure slider.
    pub const INFRASTRUCTURE: Self = Self {
        low_max: 3,
        medium_max: 7,
    };

    /// Boundaries applied to the greenery slider.
    pub const GREENERY: Self = Self {
        low_max: 3,
        medium_max: 7,
    };

    /// Validate and construct custom boundaries.
    ///
    /// # Errors
    /// Returns [`CategorizerError::InvalidBoundaries`] unless
    /// `1 <= low_max < medium_max < 10`.
    pub const fn new(low_max: u8, medium_max: u8) -> Result<Self, CategorizerError> {
        if low_max < Rating::MIN || low_max >= medium_max || medium_max >= Rating::MAX {
            return Err(CategorizerError::InvalidBoundaries {
                low_max,
                medium_max,
            });
        }
        Ok(Self {
            low_max,
            medium_max,
        })
    }

    /// Map any integer to a level, clamping it into `1..=10` first.
    #[must_use]
    pub fn categorize(self, value: i64) -> Level {
        self.categorize_rating(Rating::clamped(value))
    }

    /// Map a validated rating to a level.
    #[must_use]
    pub const fn categorize_rating(self, rating: Rating) -> Level {
        let value = rating.get();
        if value <= self.low_max {
            Level::Low
        } else if value <= self.medium_max {
            Level::Medium
        } else {
            Level::High
        }
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::INFRASTRUCTURE
    }
}

/// Categorise a slider value with the default boundaries.
///
/// Inputs outside `1..=10` are clamped.
#[must_use]
pub fn categorize(value: i64) -> Level {
    Categorizer::default().categorize(value)
}

/// Categorise an infrastructure slider.
#[must_use]
pub const fn categorize_infrastructure(rating: Rating) -> Level {
    Categorizer::INFRASTRUCTURE.categorize_rating(rating)
}

/// Categorise a greenery slider.
#[must_use]
pub const fn categorize_greenery(rating: Rating) -> Level {
    Categorizer::GREENERY.categorize_rating(rating)
}
