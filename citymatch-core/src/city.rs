//! Cities and the read-only catalog they are ranked from.

use std::collections::HashSet;

use thiserror::Error;

use crate::{AttributeValue, CategorySet, Dimension, Level, Rating, ValueError};

/// A city and its comparable attributes.
///
/// Coded attributes use the same scales as
/// [`PreferenceProfile`](crate::PreferenceProfile): infrastructure and
/// greenery are already stored as levels.
///
/// # Examples
/// ```
/// use citymatch_core::{CategorySet, City, Level, Rating};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let city = City {
///     name: "Kazan".into(),
///     climate: Level::Medium,
///     population: Level::High,
///     city_rhythm: Level::Medium,
///     weather_stability: Level::Medium,
///     infrastructure: Level::High,
///     greenery: Level::Medium,
///     safety: Rating::new(7)?,
///     cultural_activities: Rating::new(8)?,
///     work_mode: CategorySet::from_codes([1, 2, 3], 3)?,
///     lifestyle: CategorySet::from_codes([1, 3], 3)?,
///     preferred_objects: CategorySet::from_codes([1, 2, 3], 4)?,
///     green_preference: CategorySet::from_codes([1], 3)?,
/// };
/// city.validate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct City {
    /// Unique display name.
    pub name: String,
    /// Climate level.
    pub climate: Level,
    /// Population bracket.
    pub population: Level,
    /// Pace of life.
    pub city_rhythm: Level,
    /// Weather stability.
    pub weather_stability: Level,
    /// Infrastructure level.
    pub infrastructure: Level,
    /// Greenery level.
    pub greenery: Level,
    /// Safety rating.
    pub safety: Rating,
    /// Social and cultural activity rating.
    pub cultural_activities: Rating,
    /// Work arrangements the city supports.
    pub work_mode: CategorySet,
    /// Lifestyles the city suits.
    pub lifestyle: CategorySet,
    /// Amenity kinds the city offers.
    pub preferred_objects: CategorySet,
    /// Where the city's greenery is concentrated.
    pub green_preference: CategorySet,
}

impl City {
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

    /// Check the invariants the type system cannot express.
    ///
    /// # Errors
    /// Returns [`CityValidationError::EmptyName`] for a blank name and
    /// [`CityValidationError::InvalidField`] when a category set holds a
    /// code beyond its dimension's range.
    pub fn validate(&self) -> Result<(), CityValidationError> {
        if self.name.trim().is_empty() {
            return Err(CityValidationError::EmptyName);
        }
        for dimension in Dimension::ALL {
            let AttributeValue::Categories(set) = self.attribute(dimension) else {
                continue;
            };
            check_codes(dimension, set).map_err(|source| CityValidationError::InvalidField {
                city: self.name.clone(),
                field: dimension,
                source,
            })?;
        }
        Ok(())
    }
}

/// Reject sets holding a code beyond the dimension's range.
pub(crate) fn check_codes(dimension: Dimension, set: &CategorySet) -> Result<(), ValueError> {
    let max = dimension.max_code();
    match set.max_code() {
        Some(code) if code > max => Err(ValueError::CategoryOutOfRange {
            value: i64::from(code),
            max,
        }),
        _ => Ok(()),
    }
}

/// Errors raised while validating a single city.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityValidationError {
    /// The name was empty or whitespace.
    #[error("city name must not be empty")]
    EmptyName,
    /// An attribute was outside its valid range.
    #[error("city {city:?} has an invalid {field}")]
    InvalidField {
        /// Name of the offending city.
        city: String,
        /// Offending attribute.
        field: Dimension,
        /// Underlying range violation.
        #[source]
        source: ValueError,
    },
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A city failed validation.
    #[error("city at position {index} failed validation")]
    InvalidCity {
        /// Zero-based position in the input.
        index: usize,
        /// Validation failure.
        #[source]
        source: CityValidationError,
    },
    /// Two cities share a name.
    #[error("city name {name:?} appears more than once")]
    DuplicateName {
        /// Repeated name.
        name: String,
    },
}

/// An ordered, validated, read-only list of cities.
///
/// Catalog order is significant: it breaks ties between equally scored
/// cities.
///
/// # Examples
/// ```
/// use citymatch_core::Catalog;
///
/// let catalog = Catalog::new(Vec::new())?;
/// assert!(catalog.is_empty());
/// # Ok::<(), citymatch_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    cities: Vec<City>,
}

impl Catalog {
    /// Validate every city and reject duplicate names.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidCity`] for the first invalid city and
    /// [`CatalogError::DuplicateName`] for the first repeated name.
    pub fn new(cities: Vec<City>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(cities.len());
        for (index, city) in cities.iter().enumerate() {
            city.validate()
                .map_err(|source| CatalogError::InvalidCity { index, source })?;
            if !seen.insert(city.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: city.name.clone(),
                });
            }
        }
        Ok(Self { cities })
    }

    /// Iterate over the cities in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    /// Look a city up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name == name)
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether the catalog holds no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
