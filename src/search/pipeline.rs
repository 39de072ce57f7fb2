//! Ranking whole collections.
//!
//! These functions are thin compositions over [`Pattern::match_candidate`]:
//! match every item, optionally drop non-matches, optionally sort, optionally
//! strip the metadata. Sorting always happens after every item has been
//! matched and uses a stable sort, so equal scores keep their input order.

use crate::config::ScoringConfig;
use crate::search::pattern::Pattern;
use crate::types::{MatchOptions, MatchResult, Ranked, into_items};
use rayon::prelude::*;

/// Match every item in order, extracting the text to match with `accessor`.
///
/// ```
/// use fuzzy_rank::{MatchOptions, ScoringConfig, match_all};
///
/// let files = ["Snack Food", "Food", "Drinks"];
/// let options = MatchOptions { filter: true, sort: true, ..MatchOptions::default() };
/// let ranked = match_all(files, "f", |s| *s, options, &ScoringConfig::default());
///
/// let names: Vec<_> = ranked.iter().map(|r| r.item).collect();
/// assert_eq!(names, vec!["Food", "Snack Food"]);
/// ```
pub fn match_all<T, F>(
    items: impl IntoIterator<Item = T>,
    query: &str,
    accessor: F,
    options: MatchOptions,
    config: &ScoringConfig,
) -> Vec<Ranked<T>>
where
    F: Fn(&T) -> &str,
{
    let pattern = Pattern::new(query);
    let scored = items
        .into_iter()
        .map(|item| {
            let result = pattern.match_candidate(accessor(&item), config);
            (item, result)
        })
        .collect();

    finish(scored, options)
}

/// Like [`match_all`], but matches items on the rayon thread pool.
///
/// Output is identical to the sequential version for the same input.
pub fn par_match_all<T, F>(
    items: Vec<T>,
    query: &str,
    accessor: F,
    options: MatchOptions,
    config: &ScoringConfig,
) -> Vec<Ranked<T>>
where
    T: Send,
    F: Fn(&T) -> &str + Sync,
{
    let pattern = Pattern::new(query);
    let scored = items
        .into_par_iter()
        .map(|item| {
            let result = pattern.match_candidate(accessor(&item), config);
            (item, result)
        })
        .collect();

    finish(scored, options)
}

/// Keep only the strings that match `query`, in input order.
pub fn filter<T: AsRef<str>>(
    items: impl IntoIterator<Item = T>,
    query: &str,
    config: &ScoringConfig,
) -> Vec<T> {
    let options = MatchOptions {
        filter: true,
        sort: false,
        metadata: false,
    };
    into_items(match_all(items, query, |item| item.as_ref(), options, config))
}

/// Keep only the strings that match `query`, best match first.
pub fn rank<T: AsRef<str>>(
    items: impl IntoIterator<Item = T>,
    query: &str,
    config: &ScoringConfig,
) -> Vec<T> {
    let options = MatchOptions {
        filter: true,
        sort: true,
        metadata: false,
    };
    into_items(match_all(items, query, |item| item.as_ref(), options, config))
}

fn finish<T>(mut scored: Vec<(T, MatchResult)>, options: MatchOptions) -> Vec<Ranked<T>> {
    let evaluated = scored.len();

    if options.filter {
        scored.retain(|(_, result)| result.matched);
    }

    if options.sort {
        scored.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));
    }

    tracing::debug!(
        evaluated,
        retained = scored.len(),
        sorted = options.sort,
        "Ranked collection"
    );

    scored
        .into_iter()
        .map(|(item, result)| Ranked {
            item,
            result: options.metadata.then_some(result),
        })
        .collect()
}
