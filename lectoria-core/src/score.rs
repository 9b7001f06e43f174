//! Score shapes and the [`Scorer`] trait.
//!
//! A scorer assigns a [`ScoreBreakdown`] and composite score to a
//! [`BookCandidate`](crate::BookCandidate) given a reader's
//! [`ReaderContext`](crate::ReaderContext). Scoring is infallible: absent or
//! malformed optional book fields degrade to neutral defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BookCandidate, ReaderContext};

/// Per-axis score breakdown, each value in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreBreakdown {
    /// How well the genre and tags match the reader's interests.
    pub interest_match: f32,
    /// How well the difficulty suits the reader's proficiency.
    pub difficulty_match: f32,
    /// Affinity between the book and the reader's mood and intent.
    pub mood_match: f32,
}

impl ScoreBreakdown {
    /// Construct a breakdown, clamping each axis into `0.0..=1.0`.
    ///
    /// Non-finite inputs collapse to `0.0`.
    pub fn new(interest_match: f32, difficulty_match: f32, mood_match: f32) -> Self {
        Self {
            interest_match: clamp_unit(interest_match),
            difficulty_match: clamp_unit(difficulty_match),
            mood_match: clamp_unit(mood_match),
        }
    }
}

fn clamp_unit(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// A candidate together with its scores and the terms that drove them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredCandidate {
    /// The scored book.
    pub book: BookCandidate,
    /// Per-axis breakdown.
    pub breakdown: ScoreBreakdown,
    /// Weighted composite score in `0.0..=1.0`.
    pub score: f32,
    /// Matched genre/tag strings, deduplicated, genre match first. Used for
    /// tie-breaking, diversity bookkeeping, and justification.
    pub matched_terms: Vec<String>,
}

/// An ordered ranking of scored candidates.
pub type Ranking = Vec<ScoredCandidate>;

/// Calculate scores for one `(book, context)` pair.
///
/// Implementations must be thread-safe (`Send + Sync`) and side-effect free
/// per candidate so that scoring may run in any order, or in parallel,
/// without changing results. The method is infallible; implementers must
/// fall back to neutral values when information is missing.
///
/// Implementations must:
/// - Produce finite axis and composite values.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
pub trait Scorer: Send + Sync {
    /// Score `book` for `context`.
    fn score(&self, book: &BookCandidate, context: &ReaderContext) -> ScoredCandidate;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        clamp_unit(score)
    }
}
