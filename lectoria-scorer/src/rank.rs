//! Ranking: score, sort, tie-break, and apply the genre diversity cap.

use std::collections::HashMap;

use lectoria_core::{BookCandidate, Ranking, ReaderContext, ScoredCandidate, Scorer};

/// Default number of recommendations returned by [`rank`].
pub const DEFAULT_TOP_N: usize = 5;

/// Composite scores within this band are treated as tied.
pub const TIE_BAND: f32 = 0.01;

/// Maximum accepted candidates sharing one case-insensitive genre.
pub const GENRE_CAP: usize = 2;

/// Score `books` for `context` and return the diversified top `top_n`.
///
/// Candidates are sorted by composite score descending; within the
/// [`TIE_BAND`] the candidate with more matched terms wins, and full ties
/// keep their input order. Bands grow by adjacency: a run of candidates
/// whose consecutive scores each sit within the band forms one group even
/// when its endpoints are further apart. A greedy walk then skips any
/// candidate that
/// would put a third book of one genre into the ranking. Fewer than `top_n`
/// items are returned when the input or the cap does not allow more; an
/// empty candidate list yields an empty ranking.
#[must_use]
pub fn rank(
    scorer: &dyn Scorer,
    books: &[BookCandidate],
    context: &ReaderContext,
    top_n: usize,
) -> Ranking {
    let scored: Vec<ScoredCandidate> = books
        .iter()
        .map(|book| scorer.score(book, context))
        .collect();
    let ordered = order_candidates(scored);
    apply_genre_cap(ordered, top_n)
}

/// Stable composite-descending order with the tie-band refinement.
fn order_candidates(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut ordered = Vec::with_capacity(scored.len());
    for band in scored.chunk_by(adjacent_scores_tied) {
        let mut group = band.to_vec();
        group.sort_by(|a, b| b.matched_terms.len().cmp(&a.matched_terms.len()));
        ordered.append(&mut group);
    }
    ordered
}

#[expect(
    clippy::float_arithmetic,
    reason = "the tie band compares the distance between adjacent composites"
)]
fn adjacent_scores_tied(a: &ScoredCandidate, b: &ScoredCandidate) -> bool {
    (a.score - b.score).abs() <= TIE_BAND
}

/// Greedy walk enforcing the per-genre cap; skipped candidates are not
/// reordered.
fn apply_genre_cap(ordered: Vec<ScoredCandidate>, top_n: usize) -> Ranking {
    let mut genre_counts: HashMap<String, usize> = HashMap::new();
    let mut accepted = Vec::new();

    for candidate in ordered {
        if accepted.len() >= top_n {
            break;
        }
        let genre_key = candidate.book.genre.to_lowercase();
        let count = genre_counts.entry(genre_key).or_insert(0);
        if *count < GENRE_CAP {
            *count += 1;
            accepted.push(candidate);
        }
    }

    accepted
}
