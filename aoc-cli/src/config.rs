//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::input::InputLocator;
use crate::puzzle::PuzzleId;
use std::path::{Path, PathBuf};

/// What this invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the registered solvers
    List,
    /// Solve one puzzle part
    Run {
        puzzle: PuzzleId,
        /// Identifier as typed, for messages
        name: String,
        input_path: PathBuf,
    },
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Solver tags that must all be present
    pub tags: Vec<String>,
    /// Quiet mode
    pub quiet: bool,
    /// Default log directive when RUST_LOG is unset
    pub log_level: &'static str,
}

impl Config {
    /// Build config from CLI args, resolving the puzzle and its input path
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let log_level = match (args.quiet, args.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        };

        let mode = if args.list {
            Mode::List
        } else {
            let puzzle: PuzzleId =
                args.puzzle
                    .parse()
                    .map_err(|source| CliError::InvalidPuzzle {
                        name: args.puzzle.clone(),
                        source,
                    })?;

            let input_path = match args.input {
                Some(path) => expand_tilde(&path),
                None => InputLocator::new(expand_tilde(&args.input_dir)).default_path(&puzzle),
            };

            Mode::Run {
                puzzle,
                name: args.puzzle,
                input_path,
            }
        };

        Ok(Config {
            mode,
            tags: args.tags,
            quiet: args.quiet,
            log_level,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
