//! Candidate sources for the command-line ranker.

use crate::error::Result;
use anyhow::Context;
use ignore::WalkBuilder;
use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

/// Read non-empty lines as candidates, trimming trailing `\r`.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read candidate line")?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Read candidates from a file, one per line.
pub fn read_lines_from_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open candidate file {}", path.display()))?;
    read_lines(std::io::BufReader::new(file))
}

/// Collect file paths under `root`, relative to it, using `/` separators.
///
/// Respects `.gitignore` and friends, inside or outside a git checkout.
/// Hidden files are skipped unless `include_hidden` is set. Output is sorted
/// so ranking ties are reproducible.
pub fn walk_files(root: &Path, include_hidden: bool) -> Result<Vec<String>> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let walker = WalkBuilder::new(root)
        .hidden(!include_hidden)
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if let Ok(rel_path) = entry.path().strip_prefix(root) {
            let parts: Vec<_> = rel_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            files.push(parts.join("/"));
        }
    }

    files.sort();
    tracing::debug!("Collected {} files under {}", files.len(), root.display());
    Ok(files)
}
