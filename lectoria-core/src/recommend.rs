//! Final recommendation shapes returned by the orchestrator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScoreBreakdown;

/// One ranked recommendation as delivered to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecommendedBook {
    /// Identifier of the recommended book.
    pub book_id: String,
    /// Title shown to the reader.
    pub title: String,
    /// Author shown to the reader.
    pub author: String,
    /// Primary genre.
    pub genre: String,
    /// Weighted composite score in `0.0..=1.0`.
    pub score: f32,
    /// Per-axis breakdown behind the composite.
    pub score_breakdown: ScoreBreakdown,
    /// Human-readable justification text.
    pub justification: String,
    /// Short list of reasons behind the recommendation.
    pub key_reasons: Vec<String>,
}

/// Aggregate metadata for one orchestration run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunMetadata {
    /// Mean composite score across the returned items.
    pub total_score: f32,
    /// Wall-clock processing time for the whole run.
    pub processing_time_ms: u64,
    /// Pipeline stages executed, in order.
    pub agents_used: Vec<String>,
    /// Non-fatal errors accumulated along the way.
    pub errors: Vec<String>,
}

/// The complete result of one orchestration call.
///
/// Created once per call and never mutated after return.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecommendationResult {
    /// Identifier assigned by the persistence collaborator.
    pub recommendation_id: String,
    /// Ranked recommendations, best first.
    pub books: Vec<RecommendedBook>,
    /// Timing and diagnostic metadata.
    pub metadata: RunMetadata,
}
