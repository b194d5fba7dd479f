//! # Fallback Suggestions
//!
//! File: cli/src/responder/suggest.rs
//!
//! When no intent matches, the responder looks for the command hint closest
//! to what the user typed. Similarity is normalized Levenshtein
//! (`1 - distance / longer_length`); candidates scoring below
//! `SIMILARITY_CUTOFF` are ignored, and ties go to the earlier candidate.
//!
use tracing::trace;

/// Minimum similarity for a candidate to be suggested.
pub const SIMILARITY_CUTOFF: f64 = 0.6;

/// Returns the candidate most similar to `query`, if any clears the cutoff.
pub fn closest_match<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let score = strsim::normalized_levenshtein(query, candidate);
        trace!(candidate, score, "Scored suggestion candidate");
        if score < SIMILARITY_CUTOFF {
            continue;
        }
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}
