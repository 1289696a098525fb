//! Sonar Sweep

use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021"])]
pub struct Solver;

/// Count windows of `window` consecutive depths whose sum is strictly
/// greater than the sum of the window starting one position earlier.
///
/// There are `depths.len() - window` comparisons; shorter inputs give 0.
pub fn count_increases(depths: &[i64], window: usize) -> Result<usize, SolveError> {
    if window == 0 {
        return Err(SolveError::failed("window length must be at least 1"));
    }

    let sums = depths
        .windows(window)
        .map(|w| w.iter().try_fold(0i64, |acc, &depth| acc.checked_add(depth)))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| SolveError::failed("window sum overflows i64"))?;

    let increases = sums
        .iter()
        .tuple_windows()
        .filter(|(previous, current)| current > previous)
        .count();

    debug!(window, depths = depths.len(), increases, "counted increases");
    Ok(increases)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                <i64 as FromStr>::from_str(line.trim())
                    .map_err(|e| anyhow!("(line {}) {:?}: {}", line_idx + 1, line, e))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count_increases(shared, 1).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count_increases(shared, 3).map(|n| n.to_string())
    }
}
