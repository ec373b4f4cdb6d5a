//! Per-dimension explanation of a similarity score.
#![forbid(unsafe_code)]

use citymatch_core::Dimension;
use serde::Serialize;

/// One dimension's share of a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    /// Dimension compared.
    pub dimension: Dimension,
    /// Scaled distance before weighting.
    pub distance: f32,
    /// Weight applied to the distance.
    pub weight: f32,
    /// `distance * weight`.
    pub value: f32,
}

/// All contributions to one city's score, in [`Dimension::ALL`] order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ScoreBreakdown {
    contributions: Vec<Contribution>,
}

impl ScoreBreakdown {
    pub(crate) const fn new(contributions: Vec<Contribution>) -> Self {
        Self { contributions }
    }

    /// Sum of every contribution; equals the scorer's score.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.contributions.iter().map(|entry| entry.value).sum()
    }

    /// Return the contribution for `dimension`.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<&Contribution> {
        self.contributions
            .iter()
            .find(|entry| entry.dimension == dimension)
    }

    /// Iterate over contributions in dimension order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contribution> {
        self.contributions.iter()
    }

    /// Iterate over the dimensions that moved the score away from zero.
    pub fn mismatches(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(|entry| entry.value > 0.0_f32)
    }
}
