//! JSON report printed by `recommend`.

use citymatch_core::{City, Dimension, Level, PreferenceProfile, Rating, Recommendation};
use citymatch_scorer::{ScoreBreakdown, SimilarityEngine};
use serde::Serialize;

/// Ranked matches as written to stdout.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendationReport<'a> {
    pub(crate) matches: Vec<MatchReport<'a>>,
}

/// One ranked city.
#[derive(Debug, Serialize)]
pub(crate) struct MatchReport<'a> {
    /// One-based position.
    pub(crate) rank: usize,
    pub(crate) name: &'a str,
    pub(crate) score: f32,
    pub(crate) summary: CitySummary,
    pub(crate) contributions: ScoreBreakdown,
}

/// Human-readable attributes shown next to each match.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct CitySummary {
    pub(crate) population: &'static str,
    pub(crate) climate: &'static str,
    pub(crate) infrastructure: String,
    pub(crate) greenery: String,
    pub(crate) safety: String,
    pub(crate) culture: String,
}

impl<'a> RecommendationReport<'a> {
    pub(crate) fn new(
        recommendation: &Recommendation<'a>,
        engine: &SimilarityEngine,
        profile: &PreferenceProfile,
    ) -> Self {
        let matches = (1..)
            .zip(recommendation.iter())
            .map(|(rank, entry)| MatchReport {
                rank,
                name: entry.city.name.as_str(),
                score: entry.score,
                summary: CitySummary::from(entry.city),
                contributions: engine.explain(entry, profile),
            })
            .collect();
        Self { matches }
    }
}

impl From<&City> for CitySummary {
    fn from(city: &City) -> Self {
        Self {
            population: label(Dimension::Population, city.population),
            climate: label(Dimension::Climate, city.climate),
            infrastructure: out_of_three(city.infrastructure),
            greenery: out_of_three(city.greenery),
            safety: out_of_ten(city.safety),
            culture: out_of_ten(city.cultural_activities),
        }
    }
}

fn label(dimension: Dimension, level: Level) -> &'static str {
    dimension.label(level.code()).unwrap_or("unknown")
}

fn out_of_three(level: Level) -> String {
    format!("{} / {}", level.code(), Level::High.code())
}

fn out_of_ten(rating: Rating) -> String {
    format!("{} / {}", rating.get(), Rating::MAX)
}
