//! Scalar attribute values: three-step ordinal levels and 1–10 ratings.
//!
//! Both types validate on construction so a [`City`](crate::City) or
//! [`UserPreferences`](crate::UserPreferences) can never hold an
//! out-of-range value.

use thiserror::Error;

/// Errors raised when a raw integer does not fit an attribute's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An ordinal level was outside `1..=3`.
    #[error("level {value} is outside 1..=3")]
    LevelOutOfRange {
        /// Rejected value.
        value: i64,
    },
    /// A rating was outside `1..=10`.
    #[error("rating {value} is outside 1..=10")]
    RatingOutOfRange {
        /// Rejected value.
        value: i64,
    },
    /// A category code was outside `1..=max`.
    #[error("category code {value} is outside 1..={max}")]
    CategoryOutOfRange {
        /// Rejected value.
        value: i64,
        /// Largest code accepted by the dimension.
        max: u8,
    },
}

/// A coarse ordinal bucket shared by city attributes and categorised
/// preferences.
///
/// # Examples
/// ```
/// use citymatch_core::Level;
///
/// assert_eq!(Level::Low.distance(Level::High), 2);
/// assert_eq!(Level::try_from(2_i64), Ok(Level::Medium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub enum Level {
    /// Code `1`.
    Low,
    /// Code `2`.
    Medium,
    /// Code `3`.
    High,
}

impl Level {
    /// Return the numeric code (`1`, `2` or `3`).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Absolute ordinal gap between two levels, in `0..=2`.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.code().abs_diff(other.code())
    }
}

impl TryFrom<i64> for Level {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            _ => Err(ValueError::LevelOutOfRange { value }),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.code()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A value on the `1..=10` slider scale.
///
/// # Examples
/// ```
/// use citymatch_core::Rating;
///
/// let rating = Rating::new(7)?;
/// assert_eq!(rating.get(), 7);
/// assert_eq!(Rating::clamped(42).get(), 10);
/// # Ok::<(), citymatch_core::ValueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct Rating(u8);

impl Rating {
    /// Smallest accepted rating.
    pub const MIN: u8 = 1;
    /// Largest accepted rating.
    pub const MAX: u8 = 10;

    /// Validate and wrap a rating.
    ///
    /// # Errors
    /// Returns [`ValueError::RatingOutOfRange`] outside `1..=10`.
    pub const fn new(value: u8) -> Result<Self, ValueError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ValueError::RatingOutOfRange {
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    /// Force any integer into `1..=10`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(bounded).unwrap_or(Self::MAX))
    }

    /// Return the wrapped value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Absolute gap between two ratings, in `0..=9`.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|narrow| Self::new(narrow).ok())
            .ok_or(ValueError::RatingOutOfRange { value })
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Level::Low)]
    #[case(2, Level::Medium)]
    #[case(3, Level::High)]
    fn level_parses_codes(#[case] raw: i64, #[case] expected: Level) {
        assert_eq!(Level::try_from(raw), Ok(expected));
        assert_eq!(i64::from(expected.code()), raw);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(-1)]
    fn level_rejects_out_of_range(#[case] raw: i64) {
        assert_eq!(
            Level::try_from(raw),
            Err(ValueError::LevelOutOfRange { value: raw })
        );
    }

    #[rstest]
    fn level_distance_is_symmetric() {
        assert_eq!(Level::Low.distance(Level::High), 2);
        assert_eq!(Level::High.distance(Level::Low), 2);
        assert_eq!(Level::Medium.distance(Level::Medium), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(-3)]
    #[case(300)]
    fn rating_rejects_out_of_range(#[case] raw: i64) {
        assert_eq!(
            Rating::try_from(raw),
            Err(ValueError::RatingOutOfRange { value: raw })
        );
    }

    #[rstest]
    #[case(-5, 1)]
    #[case(0, 1)]
    #[case(6, 6)]
    #[case(99, 10)]
    fn rating_clamps(#[case] raw: i64, #[case] expected: u8) {
        assert_eq!(Rating::clamped(raw).get(), expected);
    }

    #[rstest]
    fn rating_distance_spans_scale() {
        let low = Rating::new(1).expect("valid rating");
        let high = Rating::new(10).expect("valid rating");
        assert_eq!(low.distance(high), 9);
    }
}
