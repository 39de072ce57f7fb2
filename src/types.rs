use serde::Serialize;

/// Outcome of matching one candidate against a query.
///
/// `positions` are character (not byte) indices into the candidate, strictly
/// increasing. `matched` is true only when every query character was located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub score: i32,
    pub positions: Vec<usize>,
}

impl MatchResult {
    /// A non-match with no positions, used for degenerate inputs.
    pub const fn no_match(score: i32) -> Self {
        Self {
            matched: false,
            score,
            positions: Vec::new(),
        }
    }

    /// Wrap each run of consecutive matched characters in `open`/`close`.
    ///
    /// ```
    /// use fuzzy_rank::{ScoringConfig, fuzzy_match};
    ///
    /// let result = fuzzy_match("src/main.rs", "smai", &ScoringConfig::default());
    /// assert_eq!(result.highlight("src/main.rs", "[", "]"), "[s]rc/[mai]n.rs");
    /// ```
    pub fn highlight(&self, candidate: &str, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(candidate.len() + self.positions.len() * 2);
        let mut positions = self.positions.iter().copied().peekable();
        let mut in_run = false;

        for (index, c) in candidate.chars().enumerate() {
            let is_match = positions.next_if_eq(&index).is_some();
            if is_match && !in_run {
                out.push_str(open);
                in_run = true;
            } else if !is_match && in_run {
                out.push_str(close);
                in_run = false;
            }
            out.push(c);
        }

        if in_run {
            out.push_str(close);
        }
        out
    }
}

/// Options for [`match_all`](crate::match_all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Drop items whose query was not fully matched.
    pub filter: bool,
    /// Reorder by score descending; equal scores keep input order.
    pub sort: bool,
    /// Keep the [`MatchResult`] alongside each item.
    pub metadata: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            filter: false,
            sort: false,
            metadata: true,
        }
    }
}

/// An item paired with its match metadata.
///
/// `result` is `None` when the pipeline ran with `metadata = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<T> {
    pub item: T,
    pub result: Option<MatchResult>,
}

impl<T> Ranked<T> {
    pub fn into_item(self) -> T {
        self.item
    }

    pub fn score(&self) -> Option<i32> {
        self.result.as_ref().map(|result| result.score)
    }
}

/// Strip the wrappers from a ranked list, keeping order.
pub fn into_items<T>(ranked: Vec<Ranked<T>>) -> Vec<T> {
    ranked.into_iter().map(Ranked::into_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn result_with(positions: Vec<usize>) -> MatchResult {
        MatchResult {
            matched: true,
            score: 0,
            positions,
        }
    }

    #[rstest]
    #[case(vec![0, 1, 2], "abcdef", "<abc>def")]
    #[case(vec![0, 2, 4], "abcdef", "<a>b<c>d<e>f")]
    #[case(vec![4, 5], "abcdef", "abcd<ef>")]
    #[case(vec![], "abcdef", "abcdef")]
    #[case(vec![1, 2], "日本語", "日<本語>")]
    fn test_highlight(#[case] positions: Vec<usize>, #[case] candidate: &str, #[case] expected: &str) {
        check!(result_with(positions).highlight(candidate, "<", ">") == expected);
    }

    #[test]
    fn test_default_options() {
        let options = MatchOptions::default();
        check!(!options.filter);
        check!(!options.sort);
        check!(options.metadata);
    }

    #[test]
    fn test_into_items_keeps_order() {
        let ranked = vec![
            Ranked { item: "b", result: None },
            Ranked { item: "a", result: Some(MatchResult::no_match(-1)) },
        ];
        check!(ranked[1].score() == Some(-1));
        check!(into_items(ranked) == vec!["b", "a"]);
    }
}
