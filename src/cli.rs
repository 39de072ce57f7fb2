use crate::config::ScoringConfig;
use crate::error::Result;
use crate::search::{match_all, par_match_all};
use crate::sources::{expand_tilde, read_lines, read_lines_from_file, walk_files};
use crate::types::{MatchOptions, Ranked, into_items};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HIGHLIGHT_OPEN: &str = "\x1b[1m";
const HIGHLIGHT_CLOSE: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(name = "fuzzy-rank")]
#[command(about = "Rank strings or file paths against a fuzzy query", long_about = None)]
pub struct Cli {
    /// Scoring weights file (.toml or .json); built-in weights when omitted
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank lines read from a file or stdin
    Lines {
        query: String,
        /// Read candidates from this file instead of stdin
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Rank file paths under a directory (respects .gitignore)
    Files {
        query: String,
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Include hidden files and directories
        #[arg(long)]
        hidden: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Drop candidates that do not contain the whole query
    #[arg(long)]
    pub filter: bool,
    /// Order by score, best first
    #[arg(long)]
    pub sort: bool,
    /// Print at most this many results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Print candidates only, without scores
    #[arg(long)]
    pub no_metadata: bool,
    /// Embolden matched characters (text output only)
    #[arg(long)]
    pub highlight: bool,
    /// Match candidates on all cores
    #[arg(long)]
    pub parallel: bool,
}

impl OutputArgs {
    pub const fn match_options(&self) -> MatchOptions {
        MatchOptions {
            filter: self.filter,
            sort: self.sort,
            metadata: !self.no_metadata,
        }
    }
}

/// Execute a parsed command line, reading stdin only for `lines` without `--input`.
pub fn run(cli: &Cli, stdin: impl BufRead, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            let path = PathBuf::from(expand_tilde(path).as_ref());
            ScoringConfig::load(&path)
                .with_context(|| format!("Failed to load scoring config {}", path.display()))?
        }
        None => ScoringConfig::default(),
    };

    let (query, candidates, output) = match &cli.command {
        Commands::Lines {
            query,
            input,
            output,
        } => {
            let candidates = match input {
                Some(path) => read_lines_from_file(&PathBuf::from(expand_tilde(path).as_ref()))?,
                None => read_lines(stdin)?,
            };
            (query, candidates, output)
        }
        Commands::Files {
            query,
            root,
            hidden,
            output,
        } => {
            let root = PathBuf::from(expand_tilde(root).as_ref());
            (query, walk_files(&root, *hidden)?, output)
        }
    };

    tracing::debug!("Ranking {} candidates against {:?}", candidates.len(), query);

    let options = output.match_options();
    let mut ranked = if output.parallel {
        par_match_all(candidates, query, String::as_str, options, &config)
    } else {
        match_all(candidates, query, String::as_str, options, &config)
    };
    if let Some(limit) = output.limit {
        ranked.truncate(limit);
    }

    render(ranked, output, out)
}

/// Write ranked candidates as text lines or a JSON array.
pub fn render(ranked: Vec<Ranked<String>>, output: &OutputArgs, out: &mut impl Write) -> Result<()> {
    if output.json {
        if output.no_metadata {
            serde_json::to_writer_pretty(&mut *out, &into_items(ranked))?;
        } else {
            serde_json::to_writer_pretty(&mut *out, &ranked)?;
        }
        writeln!(out)?;
        return Ok(());
    }

    for entry in ranked {
        match &entry.result {
            Some(result) => {
                let text = if output.highlight {
                    result.highlight(&entry.item, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
                } else {
                    entry.item.clone()
                };
                writeln!(out, "{}\t{}", result.score, text)?;
            }
            None => writeln!(out, "{}", entry.item)?,
        }
    }
    Ok(())
}
