//! Per-candidate scoring across the three axes.

use lectoria_core::{BookCandidate, ReaderContext, ScoreBreakdown, ScoredCandidate, Scorer};
use thiserror::Error;

use crate::tables;

/// Score granted per tag that overlaps an interest.
const TAG_OVERLAP_STEP: f32 = 0.3;
/// Ceiling for the tag-overlap interest score; below an exact genre match.
const TAG_OVERLAP_CAP: f32 = 0.8;
/// Bonus granted per tag affine to the reader's mood.
const MOOD_TAG_STEP: f32 = 0.06;
/// Ceiling for the accumulated mood tag bonus.
const MOOD_TAG_CAP: f32 = 0.18;
/// Neutral fallback for unlisted mood/genre pairs.
const NEUTRAL_AFFINITY: f32 = 0.5;

const WEIGHT_SUM_TOLERANCE: f32 = 1.0e-6;

/// Relative weighting of the three score axes.
///
/// The weights must sum to 1.0 so the composite stays in `0.0..=1.0`
/// without reclamping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier for the interest axis.
    pub interest: f32,
    /// Multiplier for the difficulty axis.
    pub difficulty: f32,
    /// Multiplier for the mood axis.
    pub mood: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-finite or negative,
    /// or when the weights do not sum to 1.0.
    pub const fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.sums_to_one()
    }

    const fn has_finite_values(self) -> bool {
        self.interest.is_finite() && self.difficulty.is_finite() && self.mood.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.interest >= 0.0_f32 && self.difficulty >= 0.0_f32 && self.mood >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the weights to check the unit total"
    )]
    const fn sums_to_one(self) -> bool {
        let total = self.interest + self.difficulty + self.mood;
        (total - 1.0_f32).abs() <= WEIGHT_SUM_TOLERANCE
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the composite is the weighted sum of the three axes"
    )]
    const fn composite(self, breakdown: ScoreBreakdown) -> f32 {
        self.interest * breakdown.interest_match
            + self.difficulty * breakdown.difficulty_match
            + self.mood * breakdown.mood_match
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            interest: 0.35_f32,
            difficulty: 0.25_f32,
            mood: 0.40_f32,
        }
    }
}

/// The provided weights were unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score weights must be finite, non-negative, and sum to 1.0")]
pub struct WeightsError;

/// Scores one `(book, context)` pair across interest, difficulty, and mood.
///
/// Pure per candidate: no shared mutable state, so candidates may be scored
/// in any order or in parallel with identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateScorer {
    weights: ScoreWeights,
}

impl CandidateScorer {
    /// Construct a scorer with the canonical 0.35/0.25/0.40 weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with explicit weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail validation.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, WeightsError> {
        let validated = weights.validate()?;
        Ok(Self { weights: validated })
    }

    /// The weights in effect.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl Scorer for CandidateScorer {
    fn score(&self, book: &BookCandidate, context: &ReaderContext) -> ScoredCandidate {
        let mut matched = MatchedTerms::new();

        let interest = interest_match(book, context, &mut matched);
        let difficulty =
            tables::difficulty_suitability(context.profile, book.difficulty_or_default());
        let mood = mood_match(book, context, &mut matched);

        let breakdown = ScoreBreakdown::new(interest, difficulty, mood);
        let score = <Self as Scorer>::sanitise(self.weights.composite(breakdown));

        ScoredCandidate {
            book: book.clone(),
            breakdown,
            score,
            matched_terms: matched.into_vec(),
        }
    }
}

/// Matched genre/tag strings, deduplicated case-insensitively while keeping
/// the casing of the first occurrence.
struct MatchedTerms {
    terms: Vec<String>,
}

impl MatchedTerms {
    const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    fn push(&mut self, term: &str) {
        let needle = term.to_lowercase();
        if !self
            .terms
            .iter()
            .any(|existing| existing.to_lowercase() == needle)
        {
            self.terms.push(term.to_owned());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

/// Interest axis: an exact genre hit is authoritative; tag overlap caps
/// below it.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tag overlap maps a small bounded count onto the unit range"
)]
fn interest_match(book: &BookCandidate, context: &ReaderContext, matched: &mut MatchedTerms) -> f32 {
    let genre_exact = context.has_interest(&book.genre);
    if genre_exact {
        matched.push(&book.genre);
    }

    let mut overlap_count: u32 = 0;
    for tag in &book.tags {
        if context.has_interest(tag) {
            overlap_count += 1;
            matched.push(tag);
        }
    }
    let overlap_score = (overlap_count as f32 * TAG_OVERLAP_STEP).min(TAG_OVERLAP_CAP);

    if genre_exact {
        1.0
    } else {
        overlap_score
    }
}

/// Mood axis: base genre affinity plus bounded tag and intent bonuses.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "mood scoring accumulates small bounded bonuses onto a base affinity"
)]
fn mood_match(book: &BookCandidate, context: &ReaderContext, matched: &mut MatchedTerms) -> f32 {
    let genre = book.genre.to_lowercase();
    let base = tables::mood_genre_affinity(context.mood, &genre).unwrap_or(NEUTRAL_AFFINITY);

    let mut affine_count: u32 = 0;
    for tag in &book.tags {
        if tag_is_mood_affine(tag, context.mood) {
            affine_count += 1;
            matched.push(tag);
        }
    }
    let tag_bonus = (affine_count as f32 * MOOD_TAG_STEP).min(MOOD_TAG_CAP);
    let intent_bonus = tables::intent_genre_bonus(context.intent, &genre);

    (base + tag_bonus + intent_bonus).min(1.0)
}

/// A tag matches a mood when it contains, or is contained in, one of the
/// mood's affine tags, ignoring case.
fn tag_is_mood_affine(tag: &str, mood: lectoria_core::Mood) -> bool {
    let tag_lower = tag.to_lowercase();
    tables::mood_affine_tags(mood).iter().any(|affine| {
        let affine_lower = affine.to_lowercase();
        tag_lower.contains(&affine_lower) || affine_lower.contains(&tag_lower)
    })
}
