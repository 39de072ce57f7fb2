//! Sequential fuzzy matching for "go to file" style pickers.
//!
//! A query matches a candidate when its characters appear in order, ignoring
//! case. Matches are scored so that prefix matches, contiguous runs, word
//! starts, and case-exact characters rank higher.
//!
//! ```
//! use fuzzy_rank::{ScoringConfig, rank};
//!
//! let config = ScoringConfig::default();
//! let ranked = rank(["Snack Food", "XYZ", "Food"], "f", &config);
//! assert_eq!(ranked, vec!["Food", "Snack Food"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod sources;
pub mod types;

pub use config::{ScoringConfig, ScoringConfigBuilder};
pub use error::ConfigError;
pub use search::{Pattern, filter, fuzzy_match, match_all, par_match_all, rank};
pub use types::{MatchOptions, MatchResult, Ranked, into_items};
