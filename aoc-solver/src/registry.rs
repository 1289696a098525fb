//! Solver registry for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the registry accepts (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

#[inline]
fn valid_year_day(year: u16, day: u8) -> bool {
    (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Factory turning raw input into a parsed solver handle
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for a [`SolverRegistry`]
///
/// Registration is fallible: a second solver for the same year/day, or a
/// year/day outside the AoC calendar, is rejected.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl Solver for Lines {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Lines>(2021, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2021, 1, "a\nb\nc").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
pub struct SolverRegistryBuilder {
    entries: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a factory for a year/day with an explicit parts count
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !valid_year_day(year, day) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries.insert(
            (year, day),
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type for a year/day
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2021)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable year/day → solver factory lookup
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Metadata for every registered solver, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entries.get(&(year, day)).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Parsed solver, ready to solve parts
    /// * `Err(SolverError::NotFound)` - Nothing registered for this year/day
    /// * `Err(SolverError::ParseError)` - The input was rejected
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Object-safe registration hook, implemented for every [`Solver`]
///
/// `Solver` has associated types and cannot be stored as a trait object;
/// this trait can, which is what lets [`SolverPlugin`] hold `&'static dyn`.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Solver registration collected through `inventory`
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering (e.g. "2021", "bits")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
