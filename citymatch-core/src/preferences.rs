//! User preferences: the raw form input and its categorised profile.
//!
//! [`UserPreferences`] mirrors what a user submits, with infrastructure and
//! greenery still on the `1..=10` slider scale. [`PreferenceProfile`] is the
//! normalised record the scorer compares against cities.

use thiserror::Error;

use crate::{
    AttributeValue, CategorySet, Dimension, Level, Rating, ValueError,
    categorize_greenery, categorize_infrastructure, city::check_codes,
};

/// Errors raised when preference input fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A field was outside its valid range.
    #[error("preference {field} is invalid")]
    InvalidField {
        /// Offending attribute.
        field: Dimension,
        /// Underlying range violation.
        #[source]
        source: ValueError,
    },
}

/// Preferences submitted by a user for a single request.
///
/// [`Default`] reproduces the form's initial state: every level at its
/// lowest code, every slider at 5, remote or employed work, a sedentary
/// lifestyle, basic services and transport, and central parks.
///
/// # Examples
/// ```
/// use citymatch_core::{Level, UserPreferences};
///
/// let preferences = UserPreferences::default();
/// let profile = preferences.profile();
/// assert_eq!(profile.infrastructure, Level::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserPreferences {
    /// Preferred climate.
    pub climate: Level,
    /// Preferred city size.
    pub population: Level,
    /// Preferred pace of life.
    pub city_rhythm: Level,
    /// Importance of stable weather.
    pub weather_stability: Level,
    /// Infrastructure slider.
    pub infrastructure: Rating,
    /// Greenery slider.
    pub greenery: Rating,
    /// Desired safety rating.
    pub safety: Rating,
    /// Desired cultural activity rating.
    pub cultural_activities: Rating,
    /// Acceptable work arrangements.
    pub work_mode: CategorySet,
    /// Lifestyle categories.
    pub lifestyle: CategorySet,
    /// Amenity kinds that matter.
    pub preferred_objects: CategorySet,
    /// Where greenery matters most.
    pub green_preference: CategorySet,
}

impl Default for UserPreferences {
    fn default() -> Self {
        let slider = Rating::clamped(5);
        Self {
            climate: Level::Low,
            population: Level::Low,
            city_rhythm: Level::Low,
            weather_stability: Level::Low,
            infrastructure: slider,
            greenery: slider,
            safety: slider,
            cultural_activities: slider,
            work_mode: codes(&[1, 2], Dimension::WorkMode),
            lifestyle: codes(&[2], Dimension::Lifestyle),
            preferred_objects: codes(&[1, 3], Dimension::PreferredObjects),
            green_preference: codes(&[1], Dimension::GreenPreference),
        }
    }
}

fn codes(raw: &[i64], dimension: Dimension) -> CategorySet {
    CategorySet::from_codes(raw.iter().copied(), dimension.max_code()).unwrap_or_default()
}

impl UserPreferences {
    /// Check that every category set respects its dimension's range.
    ///
    /// # Errors
    /// Returns [`PreferenceError::InvalidField`] for the first offending set.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        let sets = [
            (Dimension::WorkMode, &self.work_mode),
            (Dimension::Lifestyle, &self.lifestyle),
            (Dimension::PreferredObjects, &self.preferred_objects),
            (Dimension::GreenPreference, &self.green_preference),
        ];
        for (dimension, set) in sets {
            check_codes(dimension, set).map_err(|source| PreferenceError::InvalidField {
                field: dimension,
                source,
            })?;
        }
        Ok(())
    }

    /// Categorise the sliders and produce the profile used for scoring.
    #[must_use]
    pub fn profile(&self) -> PreferenceProfile {
        PreferenceProfile {
            climate: self.climate,
            population: self.population,
            city_rhythm: self.city_rhythm,
            weather_stability: self.weather_stability,
            infrastructure: categorize_infrastructure(self.infrastructure),
            greenery: categorize_greenery(self.greenery),
            safety: self.safety,
            cultural_activities: self.cultural_activities,
            work_mode: self.work_mode.clone(),
            lifestyle: self.lifestyle.clone(),
            preferred_objects: self.preferred_objects.clone(),
            green_preference: self.green_preference.clone(),
        }
    }
}

/// Normalised preferences, on the same scales as a [`City`](crate::City).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PreferenceProfile {
    /// Preferred climate.
    pub climate: Level,
    /// Preferred city size.
    pub population: Level,
    /// Preferred pace of life.
    pub city_rhythm: Level,
    /// Importance of stable weather.
    pub weather_stability: Level,
    /// Categorised infrastructure preference.
    pub infrastructure: Level,
    /// Categorised greenery preference.
    pub greenery: Level,
    /// Desired safety rating.
    pub safety: Rating,
    /// Desired cultural activity rating.
    pub cultural_activities: Rating,
    /// Acceptable work arrangements.
    pub work_mode: CategorySet,
    /// Lifestyle categories.
    pub lifestyle: CategorySet,
    /// Amenity kinds that matter.
    pub preferred_objects: CategorySet,
    /// Where greenery matters most.
    pub green_preference: CategorySet,
}

impl PreferenceProfile {
    /// Return the value stored for `dimension`.
    #[must_use]
    pub const fn attribute(&self, dimension: Dimension) -> AttributeValue<'_> {
        match dimension {
            Dimension::Climate => AttributeValue::Level(self.climate),
            Dimension::Population => AttributeValue::Level(self.population),
            Dimension::CityRhythm => AttributeValue::Level(self.city_rhythm),
            Dimension::WeatherStability => AttributeValue::Level(self.weather_stability),
            Dimension::Infrastructure => AttributeValue::Level(self.infrastructure),
            Dimension::Greenery => AttributeValue::Level(self.greenery),
            Dimension::Safety => AttributeValue::Rating(self.safety),
            Dimension::CulturalActivities => AttributeValue::Rating(self.cultural_activities),
            Dimension::WorkMode => AttributeValue::Categories(&self.work_mode),
            Dimension::Lifestyle => AttributeValue::Categories(&self.lifestyle),
            Dimension::PreferredObjects => AttributeValue::Categories(&self.preferred_objects),
            Dimension::GreenPreference => AttributeValue::Categories(&self.green_preference),
        }
    }
}

impl From<&UserPreferences> for PreferenceProfile {
    fn from(preferences: &UserPreferences) -> Self {
        preferences.profile()
    }
}
