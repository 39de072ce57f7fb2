//! Prepared queries and the single-candidate match.

use crate::config::ScoringConfig;
use crate::search::matcher::locate;
use crate::search::scoring::score;
use crate::search::text::Chars;
use crate::types::MatchResult;

/// A query prepared for matching against many candidates.
///
/// The query is split into characters and case-folded once, so ranking a
/// collection does no per-candidate work on the query side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    chars: Chars,
}

impl Pattern {
    pub fn new(query: &str) -> Self {
        Self {
            chars: Chars::new(query),
        }
    }

    /// Length of the query in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Match one candidate.
    ///
    /// An empty query or empty candidate is never a match and carries
    /// `default_empty_score` instead of a computed score.
    pub fn match_candidate(&self, candidate: &str, config: &ScoringConfig) -> MatchResult {
        if self.is_empty() || candidate.is_empty() {
            return MatchResult::no_match(config.default_empty_score());
        }

        let candidate = Chars::new(candidate);
        let positions = locate(&candidate.folded, &self.chars.folded);
        let matched = positions.len() == self.len();
        let score = score(&positions, &candidate, &self.chars, config);

        MatchResult {
            matched,
            score,
            positions,
        }
    }
}

/// Match `query` against `candidate`.
///
/// ```
/// use fuzzy_rank::{ScoringConfig, fuzzy_match};
///
/// let result = fuzzy_match("Hello, world!", "hellw", &ScoringConfig::default());
/// assert!(result.matched);
/// assert_eq!(result.positions, vec![0, 1, 2, 3, 7]);
/// ```
pub fn fuzzy_match(candidate: &str, query: &str, config: &ScoringConfig) -> MatchResult {
    Pattern::new(query).match_candidate(candidate, config)
}
