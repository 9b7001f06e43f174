//! Wire-format coverage for the boundary types.

use lectoria_core::{
    ContextDraft, Mood, RecommendedBook, RunMetadata, ScoreBreakdown,
};
use rstest::rstest;

#[rstest]
fn context_draft_accepts_camel_case_payload() {
    let draft: ContextDraft = serde_json::from_str(
        r#"{
            "mood": "feliz",
            "moodIntensity": 4,
            "profile": "novato",
            "interests": ["ficción"],
            "avoidedGenres": ["terror"],
            "intent": "evasión"
        }"#,
    )
    .expect("draft should deserialise");

    let context = draft.validate().expect("draft should validate");
    assert_eq!(context.mood, Mood::Feliz);
    assert_eq!(context.avoided_genres, vec!["terror".to_owned()]);
}

#[rstest]
fn context_draft_tolerates_missing_fields() {
    let draft: ContextDraft = serde_json::from_str(r#"{"mood": "triste"}"#)
        .expect("partial draft should deserialise");
    assert!(draft.validate().is_err());
}

#[rstest]
fn recommended_book_serialises_camel_case() {
    let book = RecommendedBook {
        book_id: "b1".into(),
        title: "Ficciones".into(),
        author: "Jorge Luis Borges".into(),
        genre: "Ficción".into(),
        score: 0.9,
        score_breakdown: ScoreBreakdown::new(1.0, 0.5, 0.85),
        justification: "Laberintos y espejos.".into(),
        key_reasons: vec!["El género Ficción está entre tus intereses".into()],
    };

    let value = serde_json::to_value(&book).expect("book should serialise");
    assert_eq!(value["bookId"], "b1");
    assert_eq!(value["scoreBreakdown"]["interestMatch"], 1.0);
    assert!(value["keyReasons"].is_array());
}

#[rstest]
fn run_metadata_serialises_camel_case() {
    let metadata = RunMetadata {
        total_score: 0.8,
        processing_time_ms: 12,
        agents_used: vec!["validation".into(), "search".into()],
        errors: Vec::new(),
    };

    let value = serde_json::to_value(&metadata).expect("metadata should serialise");
    assert_eq!(value["processingTimeMs"], 12);
    assert_eq!(value["agentsUsed"][0], "validation");
}
