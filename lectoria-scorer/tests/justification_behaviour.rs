#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the local justification fallback.

use std::cell::RefCell;

use lectoria_core::{
    BookCandidate, Difficulty, Intent, Justification, Mood, ReaderContext, ReaderProfile, Scorer,
};
use lectoria_scorer::{CandidateScorer, build_justification};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    book: RefCell<Option<BookCandidate>>,
    reader: RefCell<Option<ReaderContext>>,
    justification: RefCell<Option<Justification>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        book: RefCell::new(None),
        reader: RefCell::new(None),
        justification: RefCell::new(None),
    }
}

#[given("a fiction classic matching the reader's interests")]
fn matching_classic(context: &TestContext) {
    *context.book.borrow_mut() = Some(
        BookCandidate::new("b1", "La Isla Misteriosa", "Julio Verne", "Ficción")
            .with_tags(vec!["aventura".into()])
            .with_difficulty(Difficulty::Beginner)
            .with_synopsis("Náufragos reconstruyen su mundo en una isla remota.")
            .with_publication_year(1875),
    );
    *context.reader.borrow_mut() = Some(
        ReaderContext::new(Mood::Feliz, ReaderProfile::Novato, Intent::Evasion)
            .with_interest("ficción"),
    );
}

#[given("a book with nothing in common with the reader")]
fn unrelated_book(context: &TestContext) {
    *context.book.borrow_mut() = Some(
        BookCandidate::new("b2", "Tratado Árido", "Anónimo", "terror")
            .with_difficulty(Difficulty::Beginner),
    );
    *context.reader.borrow_mut() = Some(
        ReaderContext::new(Mood::Triste, ReaderProfile::Experto, Intent::Relax)
            .with_interest("historia"),
    );
}

#[when("I build a local justification")]
fn build_local_justification(context: &TestContext) {
    let book = context
        .book
        .borrow()
        .clone()
        .expect("book must be initialised");
    let reader = context
        .reader
        .borrow()
        .clone()
        .expect("reader context must be initialised");
    let scored = CandidateScorer::new().score(&book, &reader);
    *context.justification.borrow_mut() = Some(build_justification(&scored, &reader));
}

#[then("the genre reason leads and the text names the themes")]
fn assert_rich_justification(context: &TestContext) {
    let justification = borrow_justification(context);
    let first = justification
        .key_reasons
        .first()
        .expect("at least one reason");
    assert_eq!(first, "El género Ficción está entre tus intereses");
    assert!(justification.text.ends_with("Temas: aventura"));
}

#[then("the intent fallback is the only reason")]
fn assert_fallback_reason(context: &TestContext) {
    let justification = borrow_justification(context);
    assert_eq!(
        justification.key_reasons,
        vec!["Recomendado para relax".to_owned()]
    );
}

fn borrow_justification(context: &TestContext) -> Justification {
    context
        .justification
        .borrow()
        .clone()
        .expect("justification should be recorded")
}

#[scenario(path = "tests/features/justification.feature", index = 0)]
fn strong_matches_are_explained(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/justification.feature", index = 1)]
fn weak_matches_fall_back_to_the_intent(context: TestContext) {
    let _ = context;
}
