//! Runs a single puzzle part against the solver registry

use crate::error::CliError;
use crate::puzzle::PuzzleId;
use aoc_solver::{FactoryInfo, SolverRegistry};
use chrono::TimeDelta;
use tracing::{debug, info};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub puzzle: PuzzleId,
    pub answer: String,
    pub parse_duration: TimeDelta,
    pub solve_duration: TimeDelta,
}

/// Looks puzzles up in the registry and solves them
pub struct Executor {
    registry: SolverRegistry,
}

impl Executor {
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    /// Every registered solver, ordered by year then day
    pub fn available(&self) -> Vec<FactoryInfo> {
        self.registry.iter_info().collect()
    }

    /// Check that a solver exists for the puzzle and implements its part
    pub fn resolve(&self, puzzle: &PuzzleId, name: &str) -> Result<FactoryInfo, CliError> {
        self.registry
            .get_info(puzzle.year, puzzle.day)
            .filter(|info| puzzle.part <= info.parts)
            .ok_or_else(|| CliError::UnknownPuzzle {
                name: name.to_string(),
            })
    }

    /// Parse `input` and solve the puzzle's part
    pub fn run(&self, puzzle: &PuzzleId, input: &str) -> Result<SolverResult, CliError> {
        let mut solver = self.registry.create_solver(puzzle.year, puzzle.day, input)?;
        let parse_duration = solver.parse_duration();
        debug!(%puzzle, parse = ?parse_duration, "input parsed");

        let result = solver
            .solve(puzzle.part)
            .map_err(aoc_solver::SolverError::from)?;
        info!(%puzzle, answer = %result.answer, "solved");

        Ok(SolverResult {
            puzzle: *puzzle,
            solve_duration: result.duration(),
            answer: result.answer,
            parse_duration,
        })
    }
}
