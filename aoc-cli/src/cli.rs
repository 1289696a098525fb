//! CLI argument parsing using clap

use crate::puzzle::DEFAULT_PUZZLE;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code 2021 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2021 solvers", version)]
pub struct Args {
    /// Puzzle to run, e.g. `day_01`, `day_02_part2` or `2021/3/2`
    #[arg(default_value = DEFAULT_PUZZLE)]
    pub puzzle: String,

    /// Input file (defaults to `<INPUT_DIR>/day_DD/input.txt`)
    pub input: Option<PathBuf>,

    /// Base directory for default input files
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Only use solvers carrying every tag (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// List registered solvers and exit
    #[arg(short, long)]
    pub list: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
}
