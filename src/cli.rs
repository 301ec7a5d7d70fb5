/// CLI argument definitions for the `rk` command.
///
/// Defines all subcommands and their arguments using the `clap`
/// derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "rk",
    version,
    about = "Structural complexity analysis for source code"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the directory analysis commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Directory to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Include test files and directories in analysis (excluded by default)
    #[arg(long)]
    pub include_tests: bool,

    /// Exclude files matching a glob pattern (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Score above which a function is problematic (default: 7)
    #[arg(long)]
    pub low: Option<f64>,

    /// Score above which a function is classified as an error (default: 12)
    #[arg(long)]
    pub high: Option<f64>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Per-function structural complexity for a directory tree
    #[command(long_about = "\
Per-function structural complexity for a directory tree.

Each function or method is scored over its parsed syntax tree: control
flow constructs (if/elif/else, loops, switch cases, boolean operators)
add 1, generic binary expressions add 0.5, and every function starts
from a baseline of 1 for its entry path.

Scores map to severities via two thresholds (defaults: 7 and 12):
  score <= low          info
  low < score <= high   warning
  score > high          error

Nested functions are scored independently, and their bodies also count
toward the enclosing function's score.")]
    Report {
        #[command(flatten)]
        common: CommonArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// List each function with its own score instead of per-file rows
        #[arg(long)]
        per_function: bool,

        /// Show only the top N files (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,

        /// Hide files whose highest function score is below this value
        #[arg(long, default_value = "0")]
        min_score: f64,

        /// Sort files by "max" or "avg" function score
        #[arg(long, default_value = "max")]
        sort_by: String,
    },

    /// Show the complexity of the function at a position in a file
    At {
        /// Source file to inspect
        file: PathBuf,

        /// Line of the position (1-based)
        #[arg(long)]
        line: usize,

        /// Column of the position (0-based)
        #[arg(long, default_value = "0")]
        column: usize,

        /// Score above which a function is problematic (default: 7)
        #[arg(long)]
        low: Option<f64>,

        /// Score above which a function is classified as an error (default: 12)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Flag problematic functions as compiler-style diagnostic lines
    Diagnostics {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
