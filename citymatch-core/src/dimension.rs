//! Dimensions along which a city is compared with a user's preferences.
//!
//! The enum offers compile-time safety for weight lookups and score
//! breakdowns.
//!
//! # Examples
//! ```
//! use citymatch_core::{Dimension, DimensionKind};
//!
//! assert_eq!(Dimension::CityRhythm.as_str(), "city_rhythm");
//! assert_eq!(Dimension::Safety.kind(), DimensionKind::Numeric);
//! assert_eq!(Dimension::Climate.label(3), Some("hot"));
//! ```

use crate::{CategorySet, Level, Rating};

/// How a dimension's values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    /// Three-step level compared by absolute gap.
    Ordinal,
    /// `1..=10` rating compared by absolute gap.
    Numeric,
    /// Category set compared by overlap.
    Membership,
}

/// A single comparable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Cold, moderate or hot.
    Climate,
    /// City size bracket.
    Population,
    /// Pace of city life.
    CityRhythm,
    /// Tolerance for weather swings.
    WeatherStability,
    /// Availability of infrastructure, categorised from a slider.
    Infrastructure,
    /// Amount of greenery, categorised from a slider.
    Greenery,
    /// Safety rating.
    Safety,
    /// Social and cultural activity rating.
    CulturalActivities,
    /// Supported or accepted work arrangements.
    WorkMode,
    /// Lifestyle categories.
    Lifestyle,
    /// Kinds of amenities that matter.
    PreferredObjects,
    /// Where greenery matters most.
    GreenPreference,
}

impl Dimension {
    /// Every dimension in scoring order.
    pub const ALL: [Self; 12] = [
        Self::Climate,
        Self::Population,
        Self::CityRhythm,
        Self::WeatherStability,
        Self::Infrastructure,
        Self::Greenery,
        Self::Safety,
        Self::CulturalActivities,
        Self::WorkMode,
        Self::Lifestyle,
        Self::PreferredObjects,
        Self::GreenPreference,
    ];

    /// Return the dimension as a `snake_case` `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Population => "population",
            Self::CityRhythm => "city_rhythm",
            Self::WeatherStability => "weather_stability",
            Self::Infrastructure => "infrastructure",
            Self::Greenery => "greenery",
            Self::Safety => "safety",
            Self::CulturalActivities => "cultural_activities",
            Self::WorkMode => "work_mode",
            Self::Lifestyle => "lifestyle",
            Self::PreferredObjects => "preferred_objects",
            Self::GreenPreference => "green_preference",
        }
    }

    /// Return how values along this dimension are compared.
    #[must_use]
    pub const fn kind(self) -> DimensionKind {
        match self {
            Self::Climate
            | Self::Population
            | Self::CityRhythm
            | Self::WeatherStability
            | Self::Infrastructure
            | Self::Greenery => DimensionKind::Ordinal,
            Self::Safety | Self::CulturalActivities => DimensionKind::Numeric,
            Self::WorkMode | Self::Lifestyle | Self::PreferredObjects | Self::GreenPreference => {
                DimensionKind::Membership
            }
        }
    }

    /// Largest code or rating accepted along this dimension.
    #[must_use]
    pub const fn max_code(self) -> u8 {
        match self {
            Self::Safety | Self::CulturalActivities => 10,
            Self::PreferredObjects => 4,
            _ => 3,
        }
    }

    /// Human-readable label for a code, where the dimension has one.
    ///
    /// Numeric dimensions have no labels.
    #[must_use]
    pub fn label(self, code: u8) -> Option<&'static str> {
        let labels: &[&'static str] = match self {
            Self::Climate => &["cold", "moderate", "hot"],
            Self::Population => &["under 500k", "500k to 1M", "over 1M"],
            Self::CityRhythm => &["calm", "moderate", "lively"],
            Self::WeatherStability => &["not important", "average", "avoid swings"],
            Self::Infrastructure | Self::Greenery => &["low", "medium", "high"],
            Self::WorkMode => &["remote", "employed", "own business"],
            Self::Lifestyle => &["active", "sedentary", "mixed"],
            Self::PreferredObjects => &["basic services", "culture", "transport", "healthcare"],
            Self::GreenPreference => &["central parks", "countryside nature", "overall ecology"],
            Self::Safety | Self::CulturalActivities => &[],
        };
        let index = usize::from(code).checked_sub(1)?;
        labels.get(index).copied()
    }
}

/// A borrowed attribute value read from a city or a preference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    /// Value of an ordinal dimension.
    Level(Level),
    /// Value of a numeric dimension.
    Rating(Rating),
    /// Value of a membership dimension.
    Categories(&'a CategorySet),
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == wanted)
            .ok_or_else(|| format!("unknown dimension '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Dimension::WorkMode.to_string(), Dimension::WorkMode.as_str());
    }

    #[test]
    fn parsing_accepts_kebab_case() {
        assert_eq!(
            Dimension::from_str("cultural-activities"),
            Ok(Dimension::CulturalActivities)
        );
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Dimension::from_str("nightlife").unwrap_err();
        assert!(err.contains("unknown dimension"));
    }

    #[test]
    fn labels_cover_every_code() {
        for dimension in Dimension::ALL {
            if dimension.kind() == DimensionKind::Numeric {
                assert!(dimension.label(1).is_none());
                continue;
            }
            for code in 1..=dimension.max_code() {
                assert!(dimension.label(code).is_some(), "{dimension} code {code}");
            }
            assert!(dimension.label(0).is_none());
            assert!(dimension.label(dimension.max_code() + 1).is_none());
        }
    }
}
