//! Unit coverage for scoring, ranking, and local justification.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
#![expect(clippy::indexing_slicing, reason = "tests index fixed-size fixtures")]

use lectoria_core::test_support::{sample_book, sample_catalogue, sample_context};
use lectoria_core::{
    BookCandidate, Difficulty, Intent, Mood, ReaderContext, ReaderProfile, ScoreBreakdown,
    ScoredCandidate, Scorer,
};
use rstest::rstest;

use crate::{
    CandidateScorer, DEFAULT_TOP_N, GENRE_CAP, ScoreWeights, TIE_BAND, build_justification, rank,
};

fn neutral_context() -> ReaderContext {
    ReaderContext::new(Mood::Neutral, ReaderProfile::Intermedio, Intent::Relax)
        .with_interest("historia")
}

#[rstest]
fn all_axes_stay_within_unit_range() {
    let scorer = CandidateScorer::new();
    let contexts = [sample_context(), neutral_context()];
    for context in &contexts {
        for book in sample_catalogue() {
            let scored = scorer.score(&book, context);
            for axis in [
                scored.breakdown.interest_match,
                scored.breakdown.difficulty_match,
                scored.breakdown.mood_match,
                scored.score,
            ] {
                assert!((0.0..=1.0).contains(&axis), "axis out of range: {axis}");
            }
        }
    }
}

#[rstest]
fn scoring_is_idempotent() {
    let scorer = CandidateScorer::new();
    let context = sample_context();
    let book = sample_book();
    assert_eq!(scorer.score(&book, &context), scorer.score(&book, &context));
}

#[rstest]
fn exact_genre_match_always_scores_full_interest() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Neutral, ReaderProfile::Intermedio, Intent::Relax)
        .with_interest("ficción")
        .with_interest("aventura");
    let book = BookCandidate::new("b1", "Libro", "Autor", "FICCIÓN")
        .with_tags(vec!["aventura".into(), "ficción".into()]);

    let scored = scorer.score(&book, &context);
    assert_eq!(scored.breakdown.interest_match, 1.0);
}

#[rstest]
#[case(1, 0.3)]
#[case(2, 0.6)]
#[case(3, 0.8)]
#[case(4, 0.8)]
fn tag_overlap_caps_below_an_exact_match(#[case] overlaps: usize, #[case] expected: f32) {
    let scorer = CandidateScorer::new();
    let interests: Vec<String> = (0..overlaps).map(|n| format!("tema{n}")).collect();
    let context = ReaderContext::new(Mood::Neutral, ReaderProfile::Intermedio, Intent::Relax)
        .with_interests(interests.clone());
    let book = BookCandidate::new("b1", "Libro", "Autor", "terror").with_tags(interests);

    let scored = scorer.score(&book, &context);
    assert!(
        (scored.breakdown.interest_match - expected).abs() < 0.000_1,
        "expected {expected}, got {}",
        scored.breakdown.interest_match
    );
}

#[rstest]
fn happy_novice_fiction_scenario_meets_the_bar() {
    let scorer = CandidateScorer::new();
    let context = sample_context();
    let book = BookCandidate::new("b1", "Libro", "Autor", "Ficción")
        .with_tags(vec!["aventura".into()])
        .with_difficulty(Difficulty::Beginner);

    let scored = scorer.score(&book, &context);
    assert_eq!(scored.breakdown.interest_match, 1.0);
    assert_eq!(scored.breakdown.difficulty_match, 1.0);
    assert!(scored.breakdown.mood_match >= 0.85);
    assert!(scored.score >= 0.9);
}

#[rstest]
fn unlisted_genre_falls_back_to_neutral_mood() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Feliz, ReaderProfile::Intermedio, Intent::Aprendizaje)
        .with_interest("terror");
    let book = BookCandidate::new("b1", "Libro", "Autor", "terror");

    let scored = scorer.score(&book, &context);
    assert!((scored.breakdown.mood_match - 0.5).abs() < 0.000_1);
}

#[rstest]
fn mood_tag_bonus_is_capped() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Feliz, ReaderProfile::Intermedio, Intent::Relax)
        .with_interest("terror");
    // Four affine tags, but the bonus stops at 0.18 over the 0.5 base.
    let book = BookCandidate::new("b1", "Libro", "Autor", "terror").with_tags(vec![
        "aventura".into(),
        "humor".into(),
        "optimismo".into(),
        "amistad".into(),
    ]);

    let scored = scorer.score(&book, &context);
    assert!((scored.breakdown.mood_match - 0.68).abs() < 0.000_1);
}

#[rstest]
fn matched_terms_keep_genre_first_and_deduplicate() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Feliz, ReaderProfile::Novato, Intent::Evasion)
        .with_interest("ficción")
        .with_interest("Aventura");
    let book = BookCandidate::new("b1", "Libro", "Autor", "Ficción")
        .with_tags(vec!["Aventura".into(), "aventura".into()]);

    let scored = scorer.score(&book, &context);
    // "Aventura" overlaps an interest and is affine to the happy mood, yet
    // appears once, with the casing of its first occurrence.
    assert_eq!(
        scored.matched_terms,
        vec!["Ficción".to_owned(), "Aventura".to_owned()]
    );
}

#[rstest]
fn matched_terms_deduplicate_accented_case_pairs() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Neutral, ReaderProfile::Intermedio, Intent::Relax)
        .with_interest("ficción");
    let book =
        BookCandidate::new("b1", "Libro", "Autor", "Ficción").with_tags(vec!["FICCIÓN".into()]);

    let scored = scorer.score(&book, &context);
    assert_eq!(scored.breakdown.interest_match, 1.0);
    assert_eq!(scored.matched_terms, vec!["Ficción".to_owned()]);
}

#[rstest]
fn empty_candidate_list_yields_empty_ranking() {
    let scorer = CandidateScorer::new();
    let ranking = rank(&scorer, &[], &sample_context(), DEFAULT_TOP_N);
    assert!(ranking.is_empty());
}

#[rstest]
fn ranking_respects_top_n_and_input_size() {
    let scorer = CandidateScorer::new();
    let books = sample_catalogue();
    let ranking = rank(&scorer, &books, &sample_context(), 3);
    assert!(ranking.len() <= 3);

    let tiny = rank(&scorer, &books[..2], &sample_context(), DEFAULT_TOP_N);
    assert!(tiny.len() <= 2);
}

#[rstest]
fn ranking_is_sorted_modulo_tie_band() {
    let scorer = CandidateScorer::new();
    let ranking = rank(&scorer, &sample_catalogue(), &sample_context(), DEFAULT_TOP_N);
    for pair in ranking.windows(2) {
        assert!(pair[0].score >= pair[1].score - TIE_BAND);
    }
}

#[rstest]
fn genre_cap_limits_same_genre_entries() {
    let scorer = CandidateScorer::new();
    let mut books: Vec<BookCandidate> = (0..10)
        .map(|n| {
            BookCandidate::new(format!("m{n}"), format!("Misterio {n}"), "Autor", "Misterio")
                .with_tags(vec![format!("pista{n}")])
        })
        .collect();
    books.push(BookCandidate::new("f1", "Ficción Uno", "Autor", "Ficción"));
    books.push(BookCandidate::new("f2", "Ficción Dos", "Autor", "ficción"));
    books.push(BookCandidate::new("h1", "Historia Uno", "Autor", "Historia"));
    books.push(BookCandidate::new("r1", "Romance Uno", "Autor", "Romance"));

    let context = ReaderContext::new(Mood::Reflexivo, ReaderProfile::Avanzado, Intent::Aprendizaje)
        .with_interest("misterio");
    let ranking = rank(&scorer, &books, &context, DEFAULT_TOP_N);

    assert_eq!(ranking.len(), DEFAULT_TOP_N);
    let misterio_count = ranking
        .iter()
        .filter(|item| item.book.genre.eq_ignore_ascii_case("misterio"))
        .count();
    assert_eq!(misterio_count, GENRE_CAP);
}

#[rstest]
fn near_ties_prefer_the_better_explained_candidate() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Neutral, ReaderProfile::Intermedio, Intent::Relax)
        .with_interest("historia")
        .with_interest("aventura");
    let plain = BookCandidate::new("a", "Historia A", "Autor", "historia");
    let richer =
        BookCandidate::new("b", "Historia B", "Autor", "Historia").with_tags(vec!["aventura".into()]);

    let ranking = rank(&scorer, &[plain, richer], &context, DEFAULT_TOP_N);
    assert_eq!(ranking[0].book.id, "b");
    assert_eq!(ranking[1].book.id, "a");
}

/// Scores each book by a fixed `(score, matched term count)` table keyed on
/// the candidate id.
struct ScriptedScorer;

impl Scorer for ScriptedScorer {
    fn score(&self, book: &BookCandidate, _context: &ReaderContext) -> ScoredCandidate {
        let (score, term_count) = match book.id.as_str() {
            "a" => (0.80, 0),
            "b" => (0.794, 1),
            _ => (0.788, 2),
        };
        ScoredCandidate {
            book: book.clone(),
            breakdown: ScoreBreakdown::new(score, score, score),
            score,
            matched_terms: (0..term_count).map(|n| format!("tema{n}")).collect(),
        }
    }
}

#[rstest]
fn tie_bands_chain_across_adjacent_scores() {
    let books = [
        BookCandidate::new("a", "Libro A", "Autor", "historia"),
        BookCandidate::new("b", "Libro B", "Autor", "misterio"),
        BookCandidate::new("c", "Libro C", "Autor", "ciencia"),
    ];

    // 0.80 and 0.788 sit more than the band apart, but each adjacent pair
    // is within it, so all three share one band and the term counts decide.
    let ranking = rank(&ScriptedScorer, &books, &neutral_context(), DEFAULT_TOP_N);
    let ids: Vec<&str> = ranking.iter().map(|item| item.book.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[rstest]
fn full_ties_preserve_input_order() {
    let scorer = CandidateScorer::new();
    let context = neutral_context();
    let first = BookCandidate::new("a", "Historia A", "Autor", "historia");
    let second = BookCandidate::new("b", "Historia B", "Autor", "historia");

    let ranking = rank(&scorer, &[first, second], &context, DEFAULT_TOP_N);
    assert_eq!(ranking[0].book.id, "a");
    assert_eq!(ranking[1].book.id, "b");
}

#[rstest]
fn justification_defaults_to_the_intent_reason() {
    let scorer = CandidateScorer::new();
    let context = ReaderContext::new(Mood::Triste, ReaderProfile::Experto, Intent::Relax)
        .with_interest("historia");
    // No tags, no synopsis, no publication year, and weak scores everywhere.
    let book = BookCandidate::new("b1", "Libro", "Autor", "terror")
        .with_difficulty(Difficulty::Beginner);

    let scored = scorer.score(&book, &context);
    let justification = build_justification(&scored, &context);
    assert_eq!(justification.text, "");
    assert_eq!(
        justification.key_reasons,
        vec!["Recomendado para relax".to_owned()]
    );
}

#[rstest]
fn justification_lists_reasons_in_fixed_order() {
    let scorer = CandidateScorer::new();
    let context = sample_context();
    let scored = scorer.score(&sample_book(), &context);

    let justification = build_justification(&scored, &context);
    assert_eq!(
        justification.key_reasons,
        vec![
            "El género Ficción está entre tus intereses".to_owned(),
            "Afinidad con tu estado de ánimo feliz".to_owned(),
            "Nivel adecuado para un lector novato".to_owned(),
            "Temas afines: aventura".to_owned(),
            "Una obra clásica".to_owned(),
        ]
    );
    assert!(justification.text.ends_with("Temas: aventura"));
}

#[rstest]
fn theme_suffix_drops_the_genre_even_when_casing_differs() {
    let context = sample_context();
    let book = BookCandidate::new("b1", "Libro", "Autor", "ficción");
    let scored = ScoredCandidate {
        book,
        breakdown: ScoreBreakdown::new(1.0, 0.5, 0.5),
        score: 0.6,
        matched_terms: vec!["FICCIÓN".to_owned(), "aventura".to_owned()],
    };

    let justification = build_justification(&scored, &context);
    assert!(justification.text.ends_with("Temas: aventura"));
    assert!(
        justification
            .key_reasons
            .contains(&"Temas afines: aventura".to_owned())
    );
}

#[rstest]
fn justification_flags_contemporary_books() {
    let scorer = CandidateScorer::new();
    let context = neutral_context();
    let book = BookCandidate::new("b1", "Libro", "Autor", "terror").with_publication_year(2015);

    let scored = scorer.score(&book, &context);
    let justification = build_justification(&scored, &context);
    assert!(
        justification
            .key_reasons
            .contains(&"Una perspectiva contemporánea".to_owned())
    );
}

#[rstest]
fn default_weights_sum_to_one() {
    let weights = ScoreWeights::default().validate().expect("default weights");
    assert!((weights.interest + weights.difficulty + weights.mood - 1.0).abs() < 0.000_1);
}

#[rstest]
fn lopsided_weights_are_rejected() {
    let err = ScoreWeights {
        interest: 0.5,
        difficulty: 0.5,
        mood: 0.5,
    }
    .validate();
    assert!(err.is_err());

    let negative = ScoreWeights {
        interest: -0.1,
        difficulty: 0.6,
        mood: 0.5,
    }
    .validate();
    assert!(negative.is_err());
}

#[rstest]
fn custom_weights_drive_the_composite() {
    let scorer = CandidateScorer::with_weights(ScoreWeights {
        interest: 1.0,
        difficulty: 0.0,
        mood: 0.0,
    })
    .expect("valid weights");
    let scored = scorer.score(&sample_book(), &sample_context());
    assert!((scored.score - scored.breakdown.interest_match).abs() < 0.000_1);
}
