//! Scoring engine for Lectoria book recommendations.
//!
//! The crate provides three request-time capabilities:
//! - **Candidate scoring** combines interest, difficulty, and mood axes into
//!   a weighted composite via [`CandidateScorer`], which implements the
//!   [`Scorer`](lectoria_core::Scorer) trait.
//! - **Ranking** sorts a scored candidate set, resolves near-ties in favour
//!   of the better-explained candidate, and enforces a per-genre diversity
//!   cap ([`rank`]).
//! - **Local justification** derives human-readable reasons from a score
//!   breakdown when no external justification service is available
//!   ([`LocalJustifier`]).
//!
//! All affinity data is static and hand-authored; the crate holds no state
//! between calls.
//!
//! # Examples
//!
//! ```
//! use lectoria_core::{BookCandidate, Intent, Mood, ReaderContext, ReaderProfile};
//! use lectoria_scorer::{CandidateScorer, DEFAULT_TOP_N, rank};
//!
//! let context = ReaderContext::new(Mood::Feliz, ReaderProfile::Novato, Intent::Evasion)
//!     .with_interest("ficción");
//! let books = vec![BookCandidate::new("b1", "Ficciones", "Borges", "Ficción")];
//!
//! let scorer = CandidateScorer::new();
//! let ranking = rank(&scorer, &books, &context, DEFAULT_TOP_N);
//! assert_eq!(ranking.len(), 1);
//! ```

#![forbid(unsafe_code)]

mod candidate;
mod justify;
mod rank;
mod tables;

pub use candidate::{CandidateScorer, ScoreWeights, WeightsError};
pub use justify::{LocalJustifier, build_justification};
pub use rank::{DEFAULT_TOP_N, GENRE_CAP, TIE_BAND, rank};

#[cfg(test)]
mod tests;
