//! Dive!

use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021"])]
pub struct Solver;

static COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(forward|down|up)\s*(\d+)\s*$").expect("command pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub amount: i64,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COMMAND
            .captures(s)
            .ok_or_else(|| anyhow!("invalid command {:?}", s))?;

        let direction = match captures[1].to_ascii_lowercase().as_str() {
            "forward" => Direction::Forward,
            "down" => Direction::Down,
            "up" => Direction::Up,
            other => return Err(anyhow!("unknown direction {:?}", other)),
        };
        let amount = captures[2]
            .parse()
            .with_context(|| format!("amount out of range in {:?}", s))?;

        Ok(Command { direction, amount })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("position overflows i64 after {0:?}")]
    Overflow(Command),
    #[error("product of {0} and {1} overflows i64")]
    ProductOverflow(i64, i64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
    pub aim: i64,
}

impl Position {
    /// `down`/`up` move the depth directly
    pub fn apply(self, command: Command) -> Result<Self, NavigationError> {
        let amount = command.amount;
        let moved = match command.direction {
            Direction::Forward => self
                .horizontal
                .checked_add(amount)
                .map(|horizontal| Position { horizontal, ..self }),
            Direction::Down => self
                .depth
                .checked_add(amount)
                .map(|depth| Position { depth, ..self }),
            Direction::Up => self
                .depth
                .checked_sub(amount)
                .map(|depth| Position { depth, ..self }),
        };
        moved.ok_or(NavigationError::Overflow(command))
    }

    /// `down`/`up` steer the aim; `forward` dives by `amount * aim`
    pub fn apply_with_aim(self, command: Command) -> Result<Self, NavigationError> {
        let amount = command.amount;
        let moved = match command.direction {
            Direction::Forward => self.horizontal.checked_add(amount).and_then(|horizontal| {
                let depth = amount
                    .checked_mul(self.aim)
                    .and_then(|dive| self.depth.checked_add(dive))?;
                Some(Position {
                    horizontal,
                    depth,
                    ..self
                })
            }),
            Direction::Down => self
                .aim
                .checked_add(amount)
                .map(|aim| Position { aim, ..self }),
            Direction::Up => self
                .aim
                .checked_sub(amount)
                .map(|aim| Position { aim, ..self }),
        };
        moved.ok_or(NavigationError::Overflow(command))
    }

    pub fn product(self) -> Result<i64, NavigationError> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or(NavigationError::ProductOverflow(self.horizontal, self.depth))
    }
}

/// Run every command from the origin, with or without aim
pub fn navigate(commands: &[Command], use_aim: bool) -> Result<Position, NavigationError> {
    let position = commands
        .iter()
        .try_fold(Position::default(), |position, &command| {
            if use_aim {
                position.apply_with_aim(command)
            } else {
                position.apply(command)
            }
        })?;

    debug!(
        use_aim,
        horizontal = position.horizontal,
        depth = position.depth,
        "navigation finished"
    );
    Ok(position)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.parse::<Command>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        navigate(shared, false)
            .and_then(Position::product)
            .map(|answer| answer.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        navigate(shared, true)
            .and_then(Position::product)
            .map(|answer| answer.to_string())
            .map_err(SolveError::failed)
    }
}
