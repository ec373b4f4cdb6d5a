//! Raw, loosely typed records as they arrive from catalog files or request
//! payloads, and their validation into domain types.
//!
//! Integers are kept as `i64` so out-of-range values surface as
//! [`ValueError`]s naming the offending field rather than as opaque decode
//! failures.

use crate::{
    CategorySet, City, CityValidationError, Dimension, Level, PreferenceError, Rating,
    UserPreferences, ValueError,
};

/// One category code or a list of them.
///
/// Catalog files store single-choice fields such as `green_preference` as a
/// bare integer and multi-choice fields as arrays; both forms are accepted
/// everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Codes {
    /// A single code.
    One(i64),
    /// Several codes.
    Many(Vec<i64>),
}

impl Codes {
    fn into_set(self, dimension: Dimension) -> Result<CategorySet, ValueError> {
        match self {
            Self::One(code) => CategorySet::from_codes([code], dimension.max_code()),
            Self::Many(codes) => CategorySet::from_codes(codes, dimension.max_code()),
        }
    }
}

impl From<&CategorySet> for Codes {
    fn from(set: &CategorySet) -> Self {
        Self::Many(set.iter().map(i64::from).collect())
    }
}

/// A catalog entry before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CityRecord {
    /// City name.
    pub name: String,
    /// Climate code.
    pub climate: i64,
    /// Population code.
    pub population: i64,
    /// Rhythm code.
    pub city_rhythm: i64,
    /// Weather stability code.
    pub weather_stability: i64,
    /// Infrastructure level code.
    pub infrastructure: i64,
    /// Greenery level code.
    pub greenery: i64,
    /// Safety rating.
    pub safety: i64,
    /// Cultural activity rating.
    pub cultural_activities: i64,
    /// Work mode codes.
    pub work_mode: Codes,
    /// Lifestyle codes.
    pub lifestyle: Codes,
    /// Preferred object codes.
    pub preferred_objects: Codes,
    /// Green preference code or codes.
    pub green_preference: Codes,
}

impl TryFrom<CityRecord> for City {
    type Error = CityValidationError;

    fn try_from(record: CityRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(CityValidationError::EmptyName);
        }
        let name = record.name;
        let field = |dimension: Dimension| {
            let city = name.clone();
            move |source: ValueError| CityValidationError::InvalidField {
                city,
                field: dimension,
                source,
            }
        };
        let city = Self {
            climate: level(record.climate).map_err(field(Dimension::Climate))?,
            population: level(record.population).map_err(field(Dimension::Population))?,
            city_rhythm: level(record.city_rhythm).map_err(field(Dimension::CityRhythm))?,
            weather_stability: level(record.weather_stability)
                .map_err(field(Dimension::WeatherStability))?,
            infrastructure: level(record.infrastructure)
                .map_err(field(Dimension::Infrastructure))?,
            greenery: level(record.greenery).map_err(field(Dimension::Greenery))?,
            safety: Rating::try_from(record.safety).map_err(field(Dimension::Safety))?,
            cultural_activities: Rating::try_from(record.cultural_activities)
                .map_err(field(Dimension::CulturalActivities))?,
            work_mode: record
                .work_mode
                .into_set(Dimension::WorkMode)
                .map_err(field(Dimension::WorkMode))?,
            lifestyle: record
                .lifestyle
                .into_set(Dimension::Lifestyle)
                .map_err(field(Dimension::Lifestyle))?,
            preferred_objects: record
                .preferred_objects
                .into_set(Dimension::PreferredObjects)
                .map_err(field(Dimension::PreferredObjects))?,
            green_preference: record
                .green_preference
                .into_set(Dimension::GreenPreference)
                .map_err(field(Dimension::GreenPreference))?,
            name,
        };
        Ok(city)
    }
}

fn level(raw: i64) -> Result<Level, ValueError> {
    Level::try_from(raw)
}

/// A preference payload before validation.
///
/// Omitted fields take the values of [`UserPreferences::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreferenceRecord {
    /// Climate code.
    pub climate: i64,
    /// Population code.
    pub population: i64,
    /// Rhythm code.
    pub city_rhythm: i64,
    /// Weather stability code.
    pub weather_stability: i64,
    /// Infrastructure slider, `1..=10`.
    pub infrastructure: i64,
    /// Greenery slider, `1..=10`.
    pub greenery: i64,
    /// Safety rating.
    pub safety: i64,
    /// Cultural activity rating.
    pub cultural_activities: i64,
    /// Work mode codes.
    pub work_mode: Codes,
    /// Lifestyle codes.
    pub lifestyle: Codes,
    /// Preferred object codes.
    pub preferred_objects: Codes,
    /// Green preference code.
    pub green_preference: Codes,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self::from(&UserPreferences::default())
    }
}

impl From<&UserPreferences> for PreferenceRecord {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            climate: i64::from(preferences.climate.code()),
            population: i64::from(preferences.population.code()),
            city_rhythm: i64::from(preferences.city_rhythm.code()),
            weather_stability: i64::from(preferences.weather_stability.code()),
            infrastructure: i64::from(preferences.infrastructure.get()),
            greenery: i64::from(preferences.greenery.get()),
            safety: i64::from(preferences.safety.get()),
            cultural_activities: i64::from(preferences.cultural_activities.get()),
            work_mode: Codes::from(&preferences.work_mode),
            lifestyle: Codes::from(&preferences.lifestyle),
            preferred_objects: Codes::from(&preferences.preferred_objects),
            green_preference: Codes::from(&preferences.green_preference),
        }
    }
}

impl TryFrom<PreferenceRecord> for UserPreferences {
    type Error = PreferenceError;

    fn try_from(record: PreferenceRecord) -> Result<Self, Self::Error> {
        let field = |dimension: Dimension| {
            move |source: ValueError| PreferenceError::InvalidField {
                field: dimension,
                source,
            }
        };
        Ok(Self {
            climate: level(record.climate).map_err(field(Dimension::Climate))?,
            population: level(record.population).map_err(field(Dimension::Population))?,
            city_rhythm: level(record.city_rhythm).map_err(field(Dimension::CityRhythm))?,
            weather_stability: level(record.weather_stability)
                .map_err(field(Dimension::WeatherStability))?,
            infrastructure: slider(record.infrastructure, Dimension::Infrastructure),
            greenery: slider(record.greenery, Dimension::Greenery),
            safety: slider(record.safety, Dimension::Safety),
            cultural_activities: slider(record.cultural_activities, Dimension::CulturalActivities),
            work_mode: record
                .work_mode
                .into_set(Dimension::WorkMode)
                .map_err(field(Dimension::WorkMode))?,
            lifestyle: record
                .lifestyle
                .into_set(Dimension::Lifestyle)
                .map_err(field(Dimension::Lifestyle))?,
            preferred_objects: record
                .preferred_objects
                .into_set(Dimension::PreferredObjects)
                .map_err(field(Dimension::PreferredObjects))?,
            green_preference: record
                .green_preference
                .into_set(Dimension::GreenPreference)
                .map_err(field(Dimension::GreenPreference))?,
        })
    }
}

/// Clamp a slider into `1..=10`, logging any adjustment.
fn slider(raw: i64, dimension: Dimension) -> Rating {
    let rating = Rating::clamped(raw);
    if i64::from(rating.get()) != raw {
        log::warn!("clamped {dimension} slider from {raw} to {rating}");
    }
    rating
}
