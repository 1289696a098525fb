//! Advent of Code Solver Library
//!
//! Traits and plumbing shared by every puzzle solver: input parsing, per-part
//! solving, a type-erased solver handle and a registry that maps a year/day to
//! the solver for it.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sonar;
//!
//! impl AocParser for Sonar {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sonar {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sonar {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Sonar>(2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n3\n2").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "1");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns raw input into `SharedData`.
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` wires the parts
//!   into a [`Solver`] with a fixed `PARTS` count.
//! - [`DynSolver`] is the handle the registry hands out; it owns the parsed
//!   data and times every call.
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//!   `inventory`, so a binary only needs to link the solutions crate.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder, BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code the derive macros generate
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
