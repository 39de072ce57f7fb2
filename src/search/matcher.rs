//! Greedy left-to-right subsequence walk.
//!
//! The walk takes the first eligible candidate character for each query
//! character and never revisits that choice. Scores are calibrated against
//! this alignment, so it must stay greedy even though a later alignment can
//! sometimes score higher.

/// Locate query characters, in order, inside the candidate.
///
/// Both slices must already be case-folded. Returns the matched candidate
/// indices; the result is shorter than `query` when the candidate ran out
/// before the query was exhausted.
pub(crate) fn locate(candidate: &[char], query: &[char]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(candidate.len().min(query.len()));
    let (mut i, mut j) = (0, 0);

    while i < candidate.len() && j < query.len() {
        if candidate[i] == query[j] {
            positions.push(i);
            j += 1;
        }
        i += 1;
    }

    positions
}
