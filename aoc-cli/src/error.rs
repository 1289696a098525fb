//! Error types for the CLI

use crate::puzzle::PuzzleIdError;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// The identifier could not be parsed
    #[error("Unknown puzzle {name:?}: {source}. Specify a puzzle such as 'day_02' or 'day_01_part2'")]
    InvalidPuzzle {
        name: String,
        #[source]
        source: PuzzleIdError,
    },

    /// The identifier parsed but nothing can run it
    #[error("{name} is not yet implemented. Run with --list to see available puzzles")]
    UnknownPuzzle { name: String },

    /// Input file problem
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Input file errors
#[derive(Error, Debug)]
pub enum InputError {
    #[error("'{}' does not exist. Create it or pass another input file path as the second argument", .0.display())]
    Missing(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
