//! Scoring weights for the fuzzy matcher.
//!
//! A [`ScoringConfig`] is built once per matching session and then shared
//! read-only by every match. All construction paths validate eagerly, so a
//! config that exists is always usable and matching itself never fails.

use crate::error::ConfigError;
use ahash::AHashSet;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SEQUENTIAL_BONUS: i32 = 15;
pub const DEFAULT_SEPARATOR_BONUS: i32 = 30;
pub const DEFAULT_CAMEL_BONUS: i32 = 30;
pub const DEFAULT_FIRST_LETTER_BONUS: i32 = 15;
pub const DEFAULT_LEADING_LETTER_PENALTY: i32 = -3;
pub const DEFAULT_MAX_LEADING_LETTER_PENALTY: i32 = -25;
pub const DEFAULT_UNMATCHED_LETTER_PENALTY: i32 = -1;
pub const DEFAULT_CASE_MATCH_BONUS: i32 = 1;
pub const DEFAULT_STRING_MATCH_BONUS: i32 = 20;
pub const DEFAULT_INITIAL_SCORE: i32 = 100;
pub const DEFAULT_EMPTY_SCORE: i32 = -10_000;
pub const DEFAULT_SEPARATORS: [char; 5] = ['_', ' ', '.', '/', ','];

/// Immutable set of weights used by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    sequential_bonus: i32,
    separator_bonus: i32,
    camel_bonus: i32,
    first_letter_bonus: i32,
    leading_letter_penalty: i32,
    max_leading_letter_penalty: i32,
    unmatched_letter_penalty: i32,
    case_match_bonus: i32,
    string_match_bonus: i32,
    separators: AHashSet<char>,
    initial_score: i32,
    default_empty_score: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sequential_bonus: DEFAULT_SEQUENTIAL_BONUS,
            separator_bonus: DEFAULT_SEPARATOR_BONUS,
            camel_bonus: DEFAULT_CAMEL_BONUS,
            first_letter_bonus: DEFAULT_FIRST_LETTER_BONUS,
            leading_letter_penalty: DEFAULT_LEADING_LETTER_PENALTY,
            max_leading_letter_penalty: DEFAULT_MAX_LEADING_LETTER_PENALTY,
            unmatched_letter_penalty: DEFAULT_UNMATCHED_LETTER_PENALTY,
            case_match_bonus: DEFAULT_CASE_MATCH_BONUS,
            string_match_bonus: DEFAULT_STRING_MATCH_BONUS,
            separators: DEFAULT_SEPARATORS.into_iter().collect(),
            initial_score: DEFAULT_INITIAL_SCORE,
            default_empty_score: DEFAULT_EMPTY_SCORE,
        }
    }
}

impl ScoringConfig {
    /// Start a builder seeded with the default weights.
    pub fn builder() -> ScoringConfigBuilder {
        ScoringConfigBuilder {
            config: Self::default(),
        }
    }

    /// Parse a TOML document. Every integer weight must be present.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawScoringConfig = toml::from_str(input)?;
        raw.try_into()
    }

    /// Parse a JSON document. Every integer weight must be present.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawScoringConfig = serde_json::from_str(input)?;
        raw.try_into()
    }

    /// Load a config file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        tracing::debug!("Loaded scoring config from {}", path.display());
        Ok(config)
    }

    pub const fn sequential_bonus(&self) -> i32 {
        self.sequential_bonus
    }

    pub const fn separator_bonus(&self) -> i32 {
        self.separator_bonus
    }

    pub const fn camel_bonus(&self) -> i32 {
        self.camel_bonus
    }

    pub const fn first_letter_bonus(&self) -> i32 {
        self.first_letter_bonus
    }

    pub const fn leading_letter_penalty(&self) -> i32 {
        self.leading_letter_penalty
    }

    pub const fn max_leading_letter_penalty(&self) -> i32 {
        self.max_leading_letter_penalty
    }

    pub const fn unmatched_letter_penalty(&self) -> i32 {
        self.unmatched_letter_penalty
    }

    pub const fn case_match_bonus(&self) -> i32 {
        self.case_match_bonus
    }

    pub const fn string_match_bonus(&self) -> i32 {
        self.string_match_bonus
    }

    pub const fn initial_score(&self) -> i32 {
        self.initial_score
    }

    /// Sentinel score returned for an empty query or candidate.
    pub const fn default_empty_score(&self) -> i32 {
        self.default_empty_score
    }

    /// Whether `c` counts as a word separator.
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Configured separators in ascending order.
    pub fn separators(&self) -> Vec<char> {
        let mut separators: Vec<char> = self.separators.iter().copied().collect();
        separators.sort_unstable();
        separators
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let penalties = [
            ("leading_letter_penalty", self.leading_letter_penalty),
            ("max_leading_letter_penalty", self.max_leading_letter_penalty),
            ("unmatched_letter_penalty", self.unmatched_letter_penalty),
        ];
        for (field, value) in penalties {
            if value > 0 {
                return Err(ConfigError::InvalidWeight {
                    field,
                    value,
                    expected: "a value <= 0",
                });
            }
        }

        let bonuses = [
            ("sequential_bonus", self.sequential_bonus),
            ("separator_bonus", self.separator_bonus),
            ("camel_bonus", self.camel_bonus),
            ("first_letter_bonus", self.first_letter_bonus),
            ("case_match_bonus", self.case_match_bonus),
            ("string_match_bonus", self.string_match_bonus),
        ];
        for (field, value) in bonuses {
            if value < 0 {
                return Err(ConfigError::InvalidWeight {
                    field,
                    value,
                    expected: "a value >= 0",
                });
            }
        }

        Ok(())
    }
}

/// Builder for [`ScoringConfig`]; unset fields keep their defaults.
#[derive(Debug, Clone)]
pub struct ScoringConfigBuilder {
    config: ScoringConfig,
}

impl ScoringConfigBuilder {
    pub fn sequential_bonus(mut self, value: i32) -> Self {
        self.config.sequential_bonus = value;
        self
    }

    pub fn separator_bonus(mut self, value: i32) -> Self {
        self.config.separator_bonus = value;
        self
    }

    pub fn camel_bonus(mut self, value: i32) -> Self {
        self.config.camel_bonus = value;
        self
    }

    pub fn first_letter_bonus(mut self, value: i32) -> Self {
        self.config.first_letter_bonus = value;
        self
    }

    pub fn leading_letter_penalty(mut self, value: i32) -> Self {
        self.config.leading_letter_penalty = value;
        self
    }

    pub fn max_leading_letter_penalty(mut self, value: i32) -> Self {
        self.config.max_leading_letter_penalty = value;
        self
    }

    pub fn unmatched_letter_penalty(mut self, value: i32) -> Self {
        self.config.unmatched_letter_penalty = value;
        self
    }

    pub fn case_match_bonus(mut self, value: i32) -> Self {
        self.config.case_match_bonus = value;
        self
    }

    pub fn string_match_bonus(mut self, value: i32) -> Self {
        self.config.string_match_bonus = value;
        self
    }

    pub fn initial_score(mut self, value: i32) -> Self {
        self.config.initial_score = value;
        self
    }

    pub fn default_empty_score(mut self, value: i32) -> Self {
        self.config.default_empty_score = value;
        self
    }

    /// Replace the separator set.
    pub fn separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.config.separators = separators.into_iter().collect();
        self
    }

    /// Validate and produce the config.
    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// On-disk form of the config. Weights have no serde default on purpose:
/// a missing weight must fail here rather than silently fall back.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScoringConfig {
    sequential_bonus: i32,
    separator_bonus: i32,
    camel_bonus: i32,
    first_letter_bonus: i32,
    leading_letter_penalty: i32,
    max_leading_letter_penalty: i32,
    unmatched_letter_penalty: i32,
    case_match_bonus: i32,
    string_match_bonus: i32,
    initial_score: i32,
    default_empty_score: i32,
    #[serde(default = "default_separators")]
    separators: Vec<char>,
}

fn default_separators() -> Vec<char> {
    DEFAULT_SEPARATORS.to_vec()
}

impl TryFrom<RawScoringConfig> for ScoringConfig {
    type Error = ConfigError;

    fn try_from(raw: RawScoringConfig) -> Result<Self, Self::Error> {
        ScoringConfig::builder()
            .sequential_bonus(raw.sequential_bonus)
            .separator_bonus(raw.separator_bonus)
            .camel_bonus(raw.camel_bonus)
            .first_letter_bonus(raw.first_letter_bonus)
            .leading_letter_penalty(raw.leading_letter_penalty)
            .max_leading_letter_penalty(raw.max_leading_letter_penalty)
            .unmatched_letter_penalty(raw.unmatched_letter_penalty)
            .case_match_bonus(raw.case_match_bonus)
            .string_match_bonus(raw.string_match_bonus)
            .initial_score(raw.initial_score)
            .default_empty_score(raw.default_empty_score)
            .separators(raw.separators)
            .build()
    }
}
