//! Score cities against a user's preference profile.
//!
//! The `Scorer` trait assigns a dissimilarity score to a
//! [`City`](crate::City) given a normalised
//! [`PreferenceProfile`](crate::PreferenceProfile).

use crate::{City, PreferenceProfile};

/// Calculate how far a city is from a user's preferences.
///
/// Lower scores indicate a better match; `0.0` means the city agrees with
/// the profile on every comparable dimension. Implementations must be
/// thread-safe (`Send` + `Sync`) so one scorer can serve concurrent
/// requests against a shared catalog.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use citymatch_core::{PreferenceProfile, Scorer, UserPreferences};
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
///
/// struct ClimateGap;
///
/// impl Scorer for ClimateGap {
///     fn score(&self, city: &City, profile: &PreferenceProfile) -> f32 {
///         f32::from(city.climate.distance(profile.climate))
///     }
/// }
///
/// let profile = UserPreferences::default().profile();
/// let city = city("Sochi", 1);
/// assert_eq!(ClimateGap.score(&city, &profile), 0.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a dissimilarity score for `city` according to `profile`.
    fn score(&self, city: &City, profile: &PreferenceProfile) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `f32::MAX` for non-finite values, so broken scores rank last,
    /// and clamps negatives to `0.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return f32::MAX;
        }
        score.max(0.0)
    }
}
