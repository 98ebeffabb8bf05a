//! Command-line argument definitions.

use clap::Parser;

/// Find the shortest co-star connection between two people.
#[derive(Debug, Parser)]
#[command(name = "degrees", version, about)]
pub struct Cli {
    /// Dataset directory containing people.csv, movies.csv and stars.csv.
    /// Overrides `degrees.toml` and `DEGREES_DATA_DIR`.
    pub directory: Option<String>,

    /// Source person name (prompts interactively when omitted).
    #[arg(long)]
    pub source: Option<String>,

    /// Target person name (prompts interactively when omitted).
    #[arg(long)]
    pub target: Option<String>,

    /// Maximum search depth in movie-hops.
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Emit the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Fail on ambiguous names instead of picking the first candidate
    /// (only meaningful with --source/--target).
    #[arg(long)]
    pub strict_names: bool,
}
