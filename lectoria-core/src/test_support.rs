//! Shared fixtures for tests across the workspace.
//!
//! Enabled with the `test-support` feature so downstream crates can build
//! realistic contexts and catalogues without repeating themselves.

use crate::{BookCandidate, Difficulty, Intent, Mood, ReaderContext, ReaderProfile};

/// A happy novice escapist who likes fiction.
pub fn sample_context() -> ReaderContext {
    ReaderContext::new(Mood::Feliz, ReaderProfile::Novato, Intent::Evasion)
        .with_interest("ficción")
}

/// A beginner-friendly fiction candidate with an adventure tag.
pub fn sample_book() -> BookCandidate {
    BookCandidate::new("b1", "La Isla Misteriosa", "Julio Verne", "Ficción")
        .with_tags(vec!["aventura".into()])
        .with_difficulty(Difficulty::Beginner)
        .with_synopsis("Una expedición naufraga en una isla desconocida.")
        .with_publication_year(1875)
}

/// A small mixed-genre catalogue for ranking tests.
pub fn sample_catalogue() -> Vec<BookCandidate> {
    vec![
        sample_book(),
        BookCandidate::new("b2", "El Nombre de la Rosa", "Umberto Eco", "Misterio")
            .with_tags(vec!["historia".into(), "monasterio".into()])
            .with_difficulty(Difficulty::Advanced)
            .with_publication_year(1980),
        BookCandidate::new("b3", "Breves Respuestas", "Stephen Hawking", "Ciencia")
            .with_tags(vec!["divulgación".into(), "física".into()])
            .with_difficulty(Difficulty::Intermediate)
            .with_publication_year(2018),
        BookCandidate::new("b4", "Ficciones", "Jorge Luis Borges", "Ficción")
            .with_tags(vec!["laberintos".into(), "filosofía".into()])
            .with_difficulty(Difficulty::Advanced)
            .with_publication_year(1944),
        BookCandidate::new("b5", "Orgullo y Prejuicio", "Jane Austen", "Romance")
            .with_tags(vec!["clásico".into(), "sociedad".into()])
            .with_difficulty(Difficulty::Beginner)
            .with_publication_year(1813),
    ]
}
