//! Local justification builder.
//!
//! Used as the fallback when no external justification service is
//! configured or the service fails; derives short reasons from a score
//! breakdown without any I/O.

use lectoria_core::{
    Justification, JustificationError, JustificationProvider, ReaderContext, ScoredCandidate,
};

/// Axis threshold above which the interest reason fires.
const STRONG_INTEREST: f32 = 0.8;
/// Axis threshold above which the mood reason fires.
const STRONG_MOOD: f32 = 0.7;
/// Axis threshold above which the difficulty reason fires.
const STRONG_DIFFICULTY: f32 = 0.8;
/// Books published before this year read as classics.
const CLASSIC_BEFORE: i32 = 1900;
/// Books published after this year read as contemporary.
const CONTEMPORARY_AFTER: i32 = 2000;

const MAX_THEME_SUFFIX_TAGS: usize = 3;
const MAX_REASON_TAGS: usize = 2;

/// Infallible [`JustificationProvider`] backed by [`build_justification`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalJustifier;

impl JustificationProvider for LocalJustifier {
    fn justify(
        &self,
        context: &ReaderContext,
        candidates: &[ScoredCandidate],
    ) -> Result<Vec<Justification>, JustificationError> {
        Ok(candidates
            .iter()
            .map(|candidate| build_justification(candidate, context))
            .collect())
    }
}

/// Derive a justification from a candidate's scores and matched terms.
///
/// The text is the synopsis (empty when absent) followed by a short
/// "Temas: …" suffix naming up to three matched tags. At least one key
/// reason is always present; when no rule fires the fallback names the
/// reader's intent.
#[must_use]
pub fn build_justification(candidate: &ScoredCandidate, context: &ReaderContext) -> Justification {
    let tags = matched_tags(candidate);

    Justification {
        text: fallback_text(candidate, &tags),
        key_reasons: key_reasons(candidate, context, &tags),
    }
}

/// Matched terms that are tags rather than the genre itself.
fn matched_tags(candidate: &ScoredCandidate) -> Vec<String> {
    let genre = candidate.book.genre.to_lowercase();
    candidate
        .matched_terms
        .iter()
        .filter(|term| term.to_lowercase() != genre)
        .cloned()
        .collect()
}

fn fallback_text(candidate: &ScoredCandidate, tags: &[String]) -> String {
    let synopsis = candidate.book.synopsis.clone().unwrap_or_default();
    let mut shown = tags.iter().take(MAX_THEME_SUFFIX_TAGS).peekable();
    if shown.peek().is_none() {
        return synopsis;
    }
    let listed = shown.cloned().collect::<Vec<_>>().join(", ");
    if synopsis.is_empty() {
        format!("Temas: {listed}")
    } else {
        format!("{synopsis} Temas: {listed}")
    }
}

fn key_reasons(
    candidate: &ScoredCandidate,
    context: &ReaderContext,
    tags: &[String],
) -> Vec<String> {
    let mut reasons = Vec::new();
    let breakdown = candidate.breakdown;

    if breakdown.interest_match >= STRONG_INTEREST {
        reasons.push(format!(
            "El género {} está entre tus intereses",
            candidate.book.genre
        ));
    }
    if breakdown.mood_match >= STRONG_MOOD {
        reasons.push(format!(
            "Afinidad con tu estado de ánimo {}",
            context.mood
        ));
    }
    if breakdown.difficulty_match >= STRONG_DIFFICULTY {
        reasons.push(format!(
            "Nivel adecuado para un lector {}",
            context.profile
        ));
    }
    if !tags.is_empty() {
        let listed = tags
            .iter()
            .take(MAX_REASON_TAGS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        reasons.push(format!("Temas afines: {listed}"));
    }
    match candidate.book.publication_year {
        Some(year) if year < CLASSIC_BEFORE => {
            reasons.push("Una obra clásica".to_owned());
        }
        Some(year) if year > CONTEMPORARY_AFTER => {
            reasons.push("Una perspectiva contemporánea".to_owned());
        }
        _ => {}
    }

    if reasons.is_empty() {
        reasons.push(format!("Recomendado para {}", context.intent));
    }
    reasons
}
