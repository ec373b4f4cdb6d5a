//! Builders and scorers shared by unit, behaviour and property tests.

use std::collections::HashMap;

use crate::{CategorySet, City, Level, PreferenceProfile, Rating, Scorer, UserPreferences};

/// Fluent builder for [`City`] values.
///
/// Cities start out matching the default preference profile exactly, so a
/// test only states the attributes it cares about.
#[derive(Debug, Clone)]
pub struct CityBuilder {
    city: City,
}

impl CityBuilder {
    /// Start from a city that matches [`UserPreferences::default`].
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::matching(name, &UserPreferences::default().profile())
    }

    /// Start from a city whose every attribute equals `profile`'s.
    #[must_use]
    pub fn matching(name: &str, profile: &PreferenceProfile) -> Self {
        Self {
            city: City {
                name: name.to_owned(),
                climate: profile.climate,
                population: profile.population,
                city_rhythm: profile.city_rhythm,
                weather_stability: profile.weather_stability,
                infrastructure: profile.infrastructure,
                greenery: profile.greenery,
                safety: profile.safety,
                cultural_activities: profile.cultural_activities,
                work_mode: profile.work_mode.clone(),
                lifestyle: profile.lifestyle.clone(),
                preferred_objects: profile.preferred_objects.clone(),
                green_preference: profile.green_preference.clone(),
            },
        }
    }

    /// Set the climate level.
    #[must_use]
    pub const fn climate(mut self, level: Level) -> Self {
        self.city.climate = level;
        self
    }

    /// Set the population level.
    #[must_use]
    pub const fn population(mut self, level: Level) -> Self {
        self.city.population = level;
        self
    }

    /// Set the infrastructure level.
    #[must_use]
    pub const fn infrastructure(mut self, level: Level) -> Self {
        self.city.infrastructure = level;
        self
    }

    /// Set the safety rating, clamping into `1..=10`.
    #[must_use]
    pub fn safety(mut self, rating: i64) -> Self {
        self.city.safety = Rating::clamped(rating);
        self
    }

    /// Set the cultural activity rating, clamping into `1..=10`.
    #[must_use]
    pub fn cultural_activities(mut self, rating: i64) -> Self {
        self.city.cultural_activities = Rating::clamped(rating);
        self
    }

    /// Replace the work mode set.
    #[must_use]
    pub fn work_mode(mut self, codes: CategorySet) -> Self {
        self.city.work_mode = codes;
        self
    }

    /// Replace the green preference set.
    #[must_use]
    pub fn green_preference(mut self, codes: CategorySet) -> Self {
        self.city.green_preference = codes;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> City {
        self.city
    }
}

/// `Scorer` returning preset scores keyed by city name.
///
/// Cities without a preset score receive the fallback, `0.0` by default.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f32>,
    fallback: f32,
}

impl FixedScorer {
    /// Construct a scorer that scores every city `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the score for one city.
    #[must_use]
    pub fn with_score(mut self, name: &str, score: f32) -> Self {
        self.scores.insert(name.to_owned(), score);
        self
    }

    /// Set the score used for cities without a preset.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Scorer for FixedScorer {
    fn score(&self, city: &City, _profile: &PreferenceProfile) -> f32 {
        self.scores.get(&city.name).copied().unwrap_or(self.fallback)
    }
}
