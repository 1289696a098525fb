//! Binary Diagnostic
//!
//! Part 1 multiplies the gamma and epsilon rates (most and least common bit
//! per column). Part 2 multiplies the oxygen generator and CO2 scrubber
//! ratings, found by repeatedly filtering the report one column at a time.

use std::fmt;
use std::str::FromStr;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

/// Widest row that still fits a `u64`
pub const MAX_WIDTH: usize = u64::BITS as usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("diagnostic report is empty")]
    Empty,
    #[error("line {line}: expected {expected} columns, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {width} columns, at most 64 are supported")]
    TooWide { line: usize, width: usize },
    #[error("line {line}: unexpected character {found:?}, expected '0' or '1'")]
    InvalidBit { line: usize, found: char },
    #[error("column {column} has as many zeros as ones ({count} each)")]
    Tie { column: usize, count: usize },
    #[error("{rating} filtering left {remaining} rows after the last column")]
    Unresolved { rating: Rating, remaining: usize },
    #[error("product of {0} and {1} overflows")]
    Overflow(u64, u64),
}

impl From<DiagnosticError> for ParseError {
    fn from(err: DiagnosticError) -> Self {
        match err {
            DiagnosticError::Empty => ParseError::MissingData(err.to_string()),
            _ => ParseError::InvalidFormat(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    fn flip(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(c),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitRow(Vec<Bit>);

impl BitRow {
    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn bit(&self, column: usize) -> Bit {
        self.0[column]
    }

    /// Value with column 0 as the most significant bit
    pub fn value(&self) -> u64 {
        self.0
            .iter()
            .fold(0, |acc, bit| (acc << 1) | u64::from(*bit == Bit::One))
    }
}

impl FromStr for BitRow {
    type Err = char;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Bit::try_from).collect()
    }
}

impl FromIterator<Bit> for BitRow {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        BitRow(iter.into_iter().collect())
    }
}

impl fmt::Display for BitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|bit| write!(f, "{}", bit.as_char()))
    }
}

/// Non-empty list of rows that all have the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    rows: Vec<BitRow>,
    width: usize,
}

impl DiagnosticReport {
    pub fn new(rows: Vec<BitRow>) -> Result<Self, DiagnosticError> {
        let width = rows.first().ok_or(DiagnosticError::Empty)?.width();

        for (idx, row) in rows.iter().enumerate() {
            if row.width() != width || width == 0 {
                return Err(DiagnosticError::Ragged {
                    line: idx + 1,
                    expected: width.max(1),
                    found: row.width(),
                });
            }
        }
        if width > MAX_WIDTH {
            return Err(DiagnosticError::TooWide { line: 1, width });
        }

        Ok(Self { rows, width })
    }

    pub fn rows(&self) -> &[BitRow] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl FromStr for DiagnosticReport {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                let line = line.trim();
                let row = line.parse::<BitRow>().map_err(|found| DiagnosticError::InvalidBit {
                    line: idx + 1,
                    found,
                })?;
                if row.width() > MAX_WIDTH {
                    return Err(DiagnosticError::TooWide {
                        line: idx + 1,
                        width: row.width(),
                    });
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        DiagnosticReport::new(rows)
    }
}

/// Zero and one counts for a single column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnCount {
    pub zeros: usize,
    pub ones: usize,
}

impl ColumnCount {
    fn add(&mut self, bit: Bit) {
        match bit {
            Bit::Zero => self.zeros += 1,
            Bit::One => self.ones += 1,
        }
    }

    /// Strictly most common bit, `None` on a tie
    pub fn most_common(self) -> Option<Bit> {
        match self.zeros.cmp(&self.ones) {
            std::cmp::Ordering::Greater => Some(Bit::Zero),
            std::cmp::Ordering::Less => Some(Bit::One),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn count(self, bit: Bit) -> usize {
        match bit {
            Bit::Zero => self.zeros,
            Bit::One => self.ones,
        }
    }
}

/// Per-column bit counts over a set of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTally(Vec<ColumnCount>);

impl ColumnTally {
    /// Count every column of `rows`, all of which must be `width` wide.
    pub fn of<'r>(rows: impl IntoIterator<Item = &'r BitRow>, width: usize) -> Self {
        let mut counts = vec![ColumnCount::default(); width];
        for row in rows {
            for (count, &bit) in counts.iter_mut().zip(&row.0) {
                count.add(bit);
            }
        }
        ColumnTally(counts)
    }

    pub fn column(&self, column: usize) -> ColumnCount {
        self.0[column]
    }

    pub fn columns(&self) -> &[ColumnCount] {
        &self.0
    }
}

/// Gamma and epsilon rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerConsumption {
    pub gamma: u64,
    pub epsilon: u64,
}

impl PowerConsumption {
    pub fn product(self) -> Result<u64, DiagnosticError> {
        self.gamma
            .checked_mul(self.epsilon)
            .ok_or(DiagnosticError::Overflow(self.gamma, self.epsilon))
    }
}

/// Gamma takes the most common bit of each column, epsilon the least
/// common. A tied column has no answer.
pub fn power_consumption(report: &DiagnosticReport) -> Result<PowerConsumption, DiagnosticError> {
    let tally = ColumnTally::of(report.rows(), report.width());

    let gamma = tally
        .columns()
        .iter()
        .enumerate()
        .map(|(column, count)| {
            count.most_common().ok_or(DiagnosticError::Tie {
                column,
                count: count.zeros,
            })
        })
        .collect::<Result<BitRow, _>>()?;
    let epsilon: BitRow = gamma.0.iter().map(|bit| bit.flip()).collect();

    debug!(%gamma, %epsilon, "power consumption rates");

    Ok(PowerConsumption {
        gamma: gamma.value(),
        epsilon: epsilon.value(),
    })
}

/// Which bit criteria a filter pass applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Keep the most common bit, `1` on a tie
    OxygenGenerator,
    /// Keep the least common bit, `0` on a tie
    Co2Scrubber,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::OxygenGenerator => f.write_str("oxygen generator"),
            Rating::Co2Scrubber => f.write_str("CO2 scrubber"),
        }
    }
}

impl Rating {
    /// Bit that rows must have in a column of this count to survive.
    ///
    /// A column where every surviving row agrees keeps them all, so the
    /// candidate set never becomes empty.
    pub fn bit_to_keep(self, count: ColumnCount) -> Bit {
        let keep = match self {
            Rating::OxygenGenerator if count.ones >= count.zeros => Bit::One,
            Rating::OxygenGenerator => Bit::Zero,
            Rating::Co2Scrubber if count.zeros <= count.ones => Bit::Zero,
            Rating::Co2Scrubber => Bit::One,
        };
        if count.count(keep) == 0 { keep.flip() } else { keep }
    }

    /// Filter the full report column by column until one row remains.
    pub fn find<'r>(self, report: &'r DiagnosticReport) -> Result<&'r BitRow, DiagnosticError> {
        let mut candidates: Vec<&BitRow> = report.rows().iter().collect();

        for column in 0..report.width() {
            if candidates.len() <= 1 {
                break;
            }

            let count = ColumnTally::of(candidates.iter().copied(), report.width()).column(column);
            let keep = self.bit_to_keep(count);
            candidates.retain(|row| row.bit(column) == keep);

            debug!(
                rating = %self,
                column,
                zeros = count.zeros,
                ones = count.ones,
                keep = %keep.as_char(),
                remaining = candidates.len(),
                "filtered column"
            );
        }

        match candidates.as_slice() {
            [row] => Ok(*row),
            rows => Err(DiagnosticError::Unresolved {
                rating: self,
                remaining: rows.len(),
            }),
        }
    }
}

/// Oxygen generator and CO2 scrubber ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeSupport {
    pub oxygen_generator: u64,
    pub co2_scrubber: u64,
}

impl LifeSupport {
    pub fn product(self) -> Result<u64, DiagnosticError> {
        self.oxygen_generator
            .checked_mul(self.co2_scrubber)
            .ok_or(DiagnosticError::Overflow(
                self.oxygen_generator,
                self.co2_scrubber,
            ))
    }
}

pub fn life_support(report: &DiagnosticReport) -> Result<LifeSupport, DiagnosticError> {
    let oxygen = Rating::OxygenGenerator.find(report)?;
    let co2 = Rating::Co2Scrubber.find(report)?;

    debug!(%oxygen, %co2, "life support ratings");

    Ok(LifeSupport {
        oxygen_generator: oxygen.value(),
        co2_scrubber: co2.value(),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = DiagnosticReport;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.parse::<DiagnosticReport>()?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        power_consumption(shared)
            .and_then(PowerConsumption::product)
            .map(|answer| answer.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        life_support(shared)
            .and_then(LifeSupport::product)
            .map(|answer| answer.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const SAMPLE: &str = "00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    fn report(rows: &[&str]) -> DiagnosticReport {
        rows.join("\n").parse().unwrap()
    }

    #[test]
    fn sample_life_support_ratings() {
        let report: DiagnosticReport = SAMPLE.parse().unwrap();

        let oxygen = Rating::OxygenGenerator.find(&report).unwrap();
        let co2 = Rating::Co2Scrubber.find(&report).unwrap();
        assert_eq!(oxygen.to_string(), "10111");
        assert_eq!(co2.to_string(), "01010");

        let ratings = life_support(&report).unwrap();
        assert_eq!(ratings.oxygen_generator, 23);
        assert_eq!(ratings.co2_scrubber, 10);
        assert_eq!(ratings.product().unwrap(), 230);
    }

    #[test]
    fn sample_power_consumption() {
        let report: DiagnosticReport = SAMPLE.parse().unwrap();
        let power = power_consumption(&report).unwrap();
        assert_eq!(power, PowerConsumption { gamma: 22, epsilon: 9 });
        assert_eq!(power.product().unwrap(), 198);
    }

    #[test]
    fn sample_through_solver() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "198");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "230");
    }

    #[test]
    fn column_tally_counts_every_column() {
        let report: DiagnosticReport = SAMPLE.parse().unwrap();
        let tally = ColumnTally::of(report.rows(), report.width());

        assert_eq!(tally.columns().len(), 5);
        assert_eq!(tally.column(0), ColumnCount { zeros: 5, ones: 7 });
        assert_eq!(tally.column(1), ColumnCount { zeros: 7, ones: 5 });
        assert_eq!(tally.column(4), ColumnCount { zeros: 7, ones: 5 });
    }

    #[test]
    fn tie_keeps_one_for_oxygen_and_zero_for_co2() {
        let tie = ColumnCount { zeros: 2, ones: 2 };
        assert_eq!(Rating::OxygenGenerator.bit_to_keep(tie), Bit::One);
        assert_eq!(Rating::Co2Scrubber.bit_to_keep(tie), Bit::Zero);

        let report = report(&["10", "01"]);
        assert_eq!(Rating::OxygenGenerator.find(&report).unwrap().to_string(), "10");
        assert_eq!(Rating::Co2Scrubber.find(&report).unwrap().to_string(), "01");
    }

    #[test]
    fn unanimous_column_keeps_every_candidate() {
        // Every row starts with 1; the CO2 pass must not empty the set.
        let report = report(&["110", "101", "111"]);
        assert_eq!(Rating::Co2Scrubber.find(&report).unwrap().to_string(), "101");
        assert_eq!(Rating::OxygenGenerator.find(&report).unwrap().to_string(), "111");
    }

    #[test]
    fn single_row_is_both_ratings() {
        let report = report(&["1011"]);
        let ratings = life_support(&report).unwrap();
        assert_eq!(ratings.oxygen_generator, 11);
        assert_eq!(ratings.co2_scrubber, 11);
    }

    #[test]
    fn duplicate_rows_are_unresolved() {
        let report = report(&["101", "101"]);
        assert_eq!(
            Rating::OxygenGenerator.find(&report),
            Err(DiagnosticError::Unresolved {
                rating: Rating::OxygenGenerator,
                remaining: 2
            })
        );
    }

    #[test]
    fn power_consumption_rejects_tied_column() {
        let report = report(&["10", "01"]);
        assert_eq!(
            power_consumption(&report),
            Err(DiagnosticError::Tie { column: 0, count: 1 })
        );
    }

    #[test]
    fn invalid_reports_fail_fast() {
        assert_eq!("".parse::<DiagnosticReport>(), Err(DiagnosticError::Empty));
        assert_eq!("\n\n".parse::<DiagnosticReport>(), Err(DiagnosticError::Empty));
        assert_eq!(
            "101\n11\n".parse::<DiagnosticReport>(),
            Err(DiagnosticError::Ragged {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "101\n1x1".parse::<DiagnosticReport>(),
            Err(DiagnosticError::InvalidBit { line: 2, found: 'x' })
        );
        let wide = "1".repeat(MAX_WIDTH + 1);
        assert_eq!(
            wide.parse::<DiagnosticReport>(),
            Err(DiagnosticError::TooWide {
                line: 1,
                width: MAX_WIDTH + 1
            })
        );
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
        assert!(matches!(
            Solver::parse("10\n1"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn blank_line_inside_report_is_ragged() {
        assert_eq!(
            "101\n\n110".parse::<DiagnosticReport>(),
            Err(DiagnosticError::Ragged {
                line: 2,
                expected: 3,
                found: 0
            })
        );
    }

    fn distinct_rows() -> impl Strategy<Value = Vec<String>> {
        (1usize..=12).prop_flat_map(|width| {
            let max_rows = 40.min((1usize << width) / 2).max(1);
            prop::collection::btree_set(prop::collection::vec(prop::bool::ANY, width), 1..=max_rows)
                .prop_map(|rows| {
                    rows.into_iter()
                        .map(|bits| {
                            bits.iter()
                                .map(|&b| if b { '1' } else { '0' })
                                .collect::<String>()
                        })
                        .collect::<Vec<_>>()
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn filter_converges_to_one_report_row(rows in distinct_rows()) {
            let report: DiagnosticReport = rows.join("\n").parse().unwrap();

            for rating in [Rating::OxygenGenerator, Rating::Co2Scrubber] {
                let found = rating.find(&report).unwrap();
                prop_assert!(report.rows().contains(found));
            }
        }

        #[test]
        fn filter_is_deterministic(rows in distinct_rows()) {
            let report: DiagnosticReport = rows.join("\n").parse().unwrap();
            let first = life_support(&report).unwrap();
            let second = life_support(&report).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn oxygen_keeps_majority_bit_in_first_column(rows in distinct_rows()) {
            let report: DiagnosticReport = rows.join("\n").parse().unwrap();
            let count = ColumnTally::of(report.rows(), report.width()).column(0);
            let oxygen = Rating::OxygenGenerator.find(&report).unwrap();

            let expected = if count.ones >= count.zeros { Bit::One } else { Bit::Zero };
            prop_assert_eq!(oxygen.bit(0), expected);
        }

        #[test]
        fn ragged_reports_are_rejected(width in 1usize..10, extra in 1usize..5, rows in 1usize..10) {
            let mut lines = vec!["0".repeat(width); rows];
            lines.push("1".repeat(width + extra));
            let result = lines.join("\n").parse::<DiagnosticReport>();
            let is_ragged = matches!(result, Err(DiagnosticError::Ragged { .. }));
            prop_assert!(is_ragged);
        }
    }
}
