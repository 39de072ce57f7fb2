//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `config`: the built-in scoring weights
//! - `candidates`: a small mixed corpus of file paths, identifiers, and prose
//! - `project_tree`: a temporary directory laid out like a small project

use fuzzy_rank::ScoringConfig;
use rstest::fixture;
use std::path::Path;
use tempfile::TempDir;

/// Queries exercised against every candidate in property-style tests.
#[allow(dead_code)] // Used by a subset of the integration test crates
pub const QUERIES: &[&str] = &["f", "hellw", "src", "mr", "FB", "über", "zzz", "a/b", "日"];

#[allow(dead_code)]
#[fixture]
pub fn config() -> ScoringConfig {
    ScoringConfig::default()
}

#[allow(dead_code)]
#[fixture]
pub fn candidates() -> Vec<&'static str> {
    vec![
        "Hello, world!",
        "Snack Food",
        "Food",
        "src/main.rs",
        "src/search/matcher.rs",
        "README.md",
        "FooBar",
        "foo_bar",
        "Überweisung",
        "日本語.txt",
        "a/b/c",
        "XYZ",
    ]
}

/// A temporary directory laid out like a small project.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct ProjectTree {
    _temp: TempDir,
}

#[allow(dead_code)]
impl ProjectTree {
    pub fn path(&self) -> &Path {
        self._temp.path()
    }
}

#[allow(dead_code)]
#[fixture]
pub fn project_tree() -> ProjectTree {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let files = [
        "Cargo.toml",
        "src/main.rs",
        "src/lib.rs",
        "src/search/matcher.rs",
        "src/search/scoring.rs",
        "tests/match_test.rs",
        ".hidden/secret.txt",
        "target/debug/build.log",
    ];
    for file in files {
        let path = temp.path().join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "").unwrap();
    }
    std::fs::write(temp.path().join(".gitignore"), "target/\n").unwrap();
    ProjectTree { _temp: temp }
}
