//! Sequential fuzzy matching and ranking.
//!
//! This module provides the character walk that locates a query inside a
//! candidate, the scorer that turns matched positions into a ranking score,
//! and the collection pipeline built on top of both.

// Module declarations
pub(crate) mod matcher;
pub(crate) mod pattern;
pub(crate) mod pipeline;
pub(crate) mod scoring;
pub(crate) mod text;

// Public re-exports (used via lib.rs)
pub use pattern::{Pattern, fuzzy_match};
pub use pipeline::{filter, match_all, par_match_all, rank};
