//! Static affinity tables behind the three score axes.
//!
//! The tables are hand-authored, process-wide, and read-only; exhaustive
//! matches over the closed enums stand in for module-level constant maps.
//! Genre keys are lowercase; callers lowercase before lookup.

use lectoria_core::{Difficulty, Intent, Mood, ReaderProfile};

/// Suitability of a difficulty tier for a proficiency level.
pub(crate) const fn difficulty_suitability(
    profile: ReaderProfile,
    difficulty: Difficulty,
) -> f32 {
    use Difficulty::{Advanced, Beginner, Intermediate};
    use ReaderProfile::{Avanzado, Experto, Intermedio, Novato};
    match (profile, difficulty) {
        (Novato, Beginner) => 1.0,
        (Novato, Intermediate) => 0.5,
        (Novato, Advanced) => 0.2,
        (Intermedio, Beginner) => 0.7,
        (Intermedio, Intermediate) => 1.0,
        (Intermedio, Advanced) => 0.6,
        (Avanzado, Beginner) => 0.3,
        (Avanzado, Intermediate) => 0.8,
        (Avanzado, Advanced) => 1.0,
        (Experto, Beginner) => 0.1,
        (Experto, Intermediate) => 0.6,
        (Experto, Advanced) => 1.0,
    }
}

/// Base affinity between a mood and a genre, when the genre is listed.
pub(crate) fn mood_genre_affinity(mood: Mood, genre: &str) -> Option<f32> {
    let value = match (mood, genre) {
        (Mood::Feliz, "ficción") => 0.85,
        (Mood::Feliz, "romance") => 0.8,
        (Mood::Feliz, "aventura") => 0.8,
        (Mood::Feliz, "humor") => 0.9,
        (Mood::Triste, "ficción") => 0.6,
        (Mood::Triste, "filosofía") => 0.7,
        (Mood::Triste, "historia") => 0.6,
        (Mood::Triste, "poesía") => 0.75,
        (Mood::Reflexivo, "filosofía") => 0.9,
        (Mood::Reflexivo, "historia") => 0.8,
        (Mood::Reflexivo, "ensayo") => 0.8,
        (Mood::Reflexivo, "ciencia") => 0.7,
        (Mood::Ansioso, "ficción") => 0.5,
        (Mood::Ansioso, "desarrollo") => 0.7,
        (Mood::Ansioso, "tecnología") => 0.6,
        (Mood::Ansioso, "autoayuda") => 0.75,
        (Mood::Neutral, "ficción") => 0.7,
        (Mood::Neutral, "historia") => 0.7,
        (Mood::Neutral, "ciencia") => 0.7,
        _ => return None,
    };
    Some(value)
}

/// Tags that resonate with a mood; matched by case-insensitive substring
/// containment in either direction.
pub(crate) const fn mood_affine_tags(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Feliz => &["aventura", "humor", "optimismo", "amistad"],
        Mood::Triste => &["consuelo", "esperanza", "memoria", "pérdida"],
        Mood::Reflexivo => &["filosofía", "introspección", "ética", "laberintos"],
        Mood::Ansioso => &["calma", "mindfulness", "naturaleza"],
        Mood::Neutral => &["clásico", "divulgación"],
    }
}

/// Additive bonus for a genre that serves the reader's intent.
pub(crate) fn intent_genre_bonus(intent: Intent, genre: &str) -> f32 {
    match (intent, genre) {
        (Intent::Relax, "romance") => 0.08,
        (Intent::Relax, "humor") => 0.1,
        (Intent::Relax, "aventura") => 0.05,
        (Intent::Aprendizaje, "ciencia" | "tecnología") => 0.1,
        (Intent::Aprendizaje, "historia" | "ensayo" | "filosofía") => 0.08,
        (Intent::Evasion, "ficción" | "aventura") => 0.1,
        (Intent::Evasion, "fantasía") => 0.12,
        (Intent::Evasion, "ciencia ficción") => 0.1,
        _ => 0.0,
    }
}
