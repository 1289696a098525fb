//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parsing half of a puzzle solver
///
/// `SharedData` is built once from the raw input and handed to every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("199\n200").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to share.
    ///
    /// Owned data (`Vec<T>`, structs) is the common case; the lifetime allows
    /// borrowing straight from the input when no transformation is needed.
    type SharedData<'a>: 'a;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solving logic for part `N` of a puzzle.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut shared = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle and render the answer.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: parsing plus a fixed number of parts.
///
/// Usually implemented through `#[derive(AocSolver)]`, which forwards
/// `solve_part(shared, n)` to `PartSolver<n>`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sums;
///
/// impl AocParser for Sums {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Sums::parse("2\n3\n4").unwrap();
/// assert_eq!(Sums::solve_part(&mut shared, 1).unwrap(), "9");
/// assert_eq!(Sums::solve_part(&mut shared, 2).unwrap(), "24");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part (1-based)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by the solver instances.
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
