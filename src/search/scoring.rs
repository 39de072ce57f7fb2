//! Match scoring.
//!
//! A score is `initial_score` plus seven independent terms, each derived only
//! from the matched positions, the two strings, and the [`ScoringConfig`]:
//!
//! - Leading-letter penalty: late first match, clamped at `max_leading_letter_penalty`
//! - Sequential bonus: per adjacent pair of matched positions
//! - Unmatched-letter penalty: per candidate character skipped between matches
//! - Neighbor bonus: match right after a separator or at a camelCase hump
//! - First-letter bonus: the candidate's first character was matched
//! - Case-match bonus: per matched character whose case agrees with the query
//! - String-match bonus: candidate and query are equal ignoring case

use crate::config::ScoringConfig;
use crate::search::text::Chars;

/// Score a set of matched positions. Pure and deterministic.
///
/// Terms are summed with saturation, so any validated config yields a score
/// clamped to the `i32` range.
pub(crate) fn score(
    positions: &[usize],
    candidate: &Chars,
    query: &Chars,
    config: &ScoringConfig,
) -> i32 {
    [
        leading_letter_penalty(positions, config),
        sequential_bonus(positions, config),
        unmatched_letter_penalty(positions, candidate.len(), config),
        neighbor_bonus(positions, &candidate.raw, config),
        first_letter_bonus(positions, config),
        case_match_bonus(positions, &candidate.raw, &query.raw, config),
        string_match_bonus(candidate, query, config),
    ]
    .into_iter()
    .fold(config.initial_score(), i32::saturating_add)
}

fn leading_letter_penalty(positions: &[usize], config: &ScoringConfig) -> i32 {
    match positions.first() {
        None => config.max_leading_letter_penalty(),
        Some(&first) => config
            .leading_letter_penalty()
            .saturating_mul(to_i32(first))
            .max(config.max_leading_letter_penalty()),
    }
}

fn sequential_bonus(positions: &[usize], config: &ScoringConfig) -> i32 {
    let runs = positions.windows(2).filter(|pair| pair[1] - pair[0] == 1).count();
    config.sequential_bonus().saturating_mul(to_i32(runs))
}

/// The trailing pair `(last, len - 1)` is included. When the last match is the
/// final character that pair has gap 0 and contributes `-1` to the skip count.
fn unmatched_letter_penalty(positions: &[usize], candidate_len: usize, config: &ScoringConfig) -> i32 {
    if positions.is_empty() {
        return config.unmatched_letter_penalty().saturating_mul(to_i32(candidate_len));
    }

    let tail = to_i32(candidate_len) - 1;
    let skipped: i32 = positions
        .iter()
        .map(|&p| to_i32(p))
        .zip(positions.iter().skip(1).map(|&p| to_i32(p)).chain([tail]))
        .map(|(from, to)| to - from)
        .filter(|&gap| gap != 1)
        .map(|gap| gap - 1)
        .fold(0, i32::saturating_add);

    config.unmatched_letter_penalty().saturating_mul(skipped)
}

fn neighbor_bonus(positions: &[usize], candidate: &[char], config: &ScoringConfig) -> i32 {
    positions
        .iter()
        .filter(|&&p| p > 0)
        .map(|&p| {
            let (prev, current) = (candidate[p - 1], candidate[p]);
            if config.is_separator(prev) {
                config.separator_bonus()
            } else if current.is_uppercase() && prev.is_lowercase() {
                config.camel_bonus()
            } else {
                0
            }
        })
        .fold(0, i32::saturating_add)
}

fn first_letter_bonus(positions: &[usize], config: &ScoringConfig) -> i32 {
    if positions.first() == Some(&0) {
        config.first_letter_bonus()
    } else {
        0
    }
}

fn case_match_bonus(positions: &[usize], candidate: &[char], query: &[char], config: &ScoringConfig) -> i32 {
    let exact = positions
        .iter()
        .zip(query)
        .filter(|&(&p, &q)| candidate[p] == q)
        .count();
    config.case_match_bonus().saturating_mul(to_i32(exact))
}

fn string_match_bonus(candidate: &Chars, query: &Chars, config: &ScoringConfig) -> i32 {
    if candidate.folded == query.folded {
        config.string_match_bonus()
    } else {
        0
    }
}

fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::matcher::locate;
    use assert2::check;
    use rstest::rstest;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    fn score_str(candidate: &str, query: &str) -> i32 {
        let (candidate, query) = (Chars::new(candidate), Chars::new(query));
        let positions = locate(&candidate.folded, &query.folded);
        score(&positions, &candidate, &query, &config())
    }

    #[rstest]
    #[case(&[], -25)]
    #[case(&[0], 0)]
    #[case(&[2, 3], -6)]
    #[case(&[8], -24)]
    #[case(&[9], -25)]
    #[case(&[400], -25)]
    fn test_leading_letter_penalty(#[case] positions: &[usize], #[case] expected: i32) {
        check!(leading_letter_penalty(positions, &config()) == expected);
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[4], 0)]
    #[case(&[0, 1, 2], 30)]
    #[case(&[0, 2, 3, 7], 15)]
    fn test_sequential_bonus(#[case] positions: &[usize], #[case] expected: i32) {
        check!(sequential_bonus(positions, &config()) == expected);
    }

    #[rstest]
    #[case(&[], 4, -4)]
    #[case(&[0], 4, -2)]
    #[case(&[0, 1, 2, 3], 4, 1)]
    #[case(&[0, 3], 6, -3)]
    #[case(&[2], 3, 1)]
    fn test_unmatched_letter_penalty(#[case] positions: &[usize], #[case] len: usize, #[case] expected: i32) {
        check!(unmatched_letter_penalty(positions, len, &config()) == expected);
    }

    #[rstest]
    #[case("snake_case", &[6], 30)]
    #[case("camelCase", &[5], 30)]
    #[case("CAMELCASE", &[5], 0)]
    #[case("plain", &[0, 1], 0)]
    #[case("a/b.c d", &[2, 4, 6], 90)]
    fn test_neighbor_bonus(#[case] candidate: &str, #[case] positions: &[usize], #[case] expected: i32) {
        let chars: Vec<char> = candidate.chars().collect();
        check!(neighbor_bonus(positions, &chars, &config()) == expected);
    }

    #[test]
    fn test_separator_wins_over_camel() {
        let chars: Vec<char> = "a_B".chars().collect();
        check!(neighbor_bonus(&[2], &chars, &config()) == 30);
        let custom = ScoringConfig::builder()
            .separator_bonus(7)
            .camel_bonus(100)
            .build()
            .unwrap();
        check!(neighbor_bonus(&[2], &chars, &custom) == 7);
    }

    #[test]
    fn test_first_letter_bonus() {
        check!(first_letter_bonus(&[0, 3], &config()) == 15);
        check!(first_letter_bonus(&[1, 3], &config()) == 0);
        check!(first_letter_bonus(&[], &config()) == 0);
    }

    #[test]
    fn test_case_match_bonus_is_case_sensitive() {
        let candidate: Vec<char> = "FooBar".chars().collect();
        let exact: Vec<char> = "FB".chars().collect();
        let lower: Vec<char> = "fb".chars().collect();
        check!(case_match_bonus(&[0, 3], &candidate, &exact, &config()) == 2);
        check!(case_match_bonus(&[0, 3], &candidate, &lower, &config()) == 0);
    }

    #[test]
    fn test_case_match_bonus_on_partial_positions() {
        let candidate: Vec<char> = "abc".chars().collect();
        let query: Vec<char> = "axz".chars().collect();
        check!(case_match_bonus(&[0], &candidate, &query, &config()) == 1);
    }

    #[test]
    fn test_string_match_bonus_ignores_case() {
        check!(string_match_bonus(&Chars::new("Food"), &Chars::new("fOOD"), &config()) == 20);
        check!(string_match_bonus(&Chars::new("Food"), &Chars::new("foo"), &config()) == 0);
    }

    #[rstest]
    #[case("Food", "f", 113)]
    #[case("Snack Food", "f", 110)]
    #[case("Hello, world!", "hellw", 187)]
    #[case("Hello, world!", "HELLO, WORLD!", 380)]
    #[case("abc", "axz", 115)]
    fn test_total_score(#[case] candidate: &str, #[case] query: &str, #[case] expected: i32) {
        check!(score_str(candidate, query) == expected);
    }

    #[test]
    fn test_string_match_bonus_uses_leading_fold_scalar() {
        // 'İ' lowercases to "i\u{307}"; only the leading 'i' is kept.
        check!(string_match_bonus(&Chars::new("İ"), &Chars::new("i"), &config()) == 20);
        check!(crate::search::fuzzy_match("İstanbul", "istanbul", &config()).matched);
    }

    #[test]
    fn test_huge_initial_score_saturates() {
        let config = ScoringConfig::builder().initial_score(i32::MAX).build().unwrap();
        let result = crate::search::fuzzy_match("ab", "ab", &config);
        check!(result.matched);
        check!(result.score == i32::MAX);
    }

    #[test]
    fn test_huge_separator_bonus_saturates() {
        let config = ScoringConfig::builder()
            .separator_bonus(i32::MAX)
            .initial_score(0)
            .build()
            .unwrap();
        let chars: Vec<char> = "a_b_c".chars().collect();
        check!(neighbor_bonus(&[0, 2, 4], &chars, &config) == i32::MAX);

        let result = crate::search::fuzzy_match("a_b_c", "abc", &config);
        check!(result.matched);
        check!(result.score == i32::MAX);
    }

    #[test]
    fn test_huge_penalties_saturate_low() {
        let config = ScoringConfig::builder()
            .initial_score(i32::MIN)
            .unmatched_letter_penalty(i32::MIN)
            .build()
            .unwrap();
        let result = crate::search::fuzzy_match("a-long-tail", "a", &config);
        check!(result.matched);
        // Clamped at the floor, then raised by the first-letter and case bonuses.
        check!(result.score == i32::MIN + config.first_letter_bonus() + config.case_match_bonus());
    }

    #[test]
    fn test_initial_score_shifts_total() {
        let (candidate, query) = (Chars::new("Food"), Chars::new("f"));
        let shifted = ScoringConfig::builder().initial_score(0).build().unwrap();
        check!(score(&[0], &candidate, &query, &shifted) == 13);
    }
}
