//! Puzzle identifiers such as `day_03_part2` or `2021/3/2`

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Year assumed when an identifier does not name one
pub const DEFAULT_YEAR: u16 = 2021;

/// Identifier used when none is given on the command line
pub const DEFAULT_PUZZLE: &str = "day_03_part2";

/// A single puzzle part to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleIdError {
    #[error("empty puzzle identifier")]
    Empty,
    #[error("unrecognized token {0:?}")]
    UnrecognizedToken(String),
    #[error("no day given")]
    MissingDay,
    #[error("{0} given more than once")]
    Repeated(&'static str),
    #[error("day {0} is outside 1-25")]
    DayOutOfRange(u32),
    #[error("part must be at least 1")]
    PartOutOfRange,
    #[error("year {0} is not an Advent of Code year")]
    YearOutOfRange(u32),
}

impl PuzzleId {
    /// Directory holding this day's default input, e.g. `day_03`
    pub fn day_dir(&self) -> String {
        format!("day_{:02}", self.day)
    }

    /// Label in the `day_DD` / `day_DD_partN` form
    pub fn label(&self) -> String {
        if self.part == 1 {
            self.day_dir()
        } else {
            format!("{}_part{}", self.day_dir(), self.part)
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02} Part {}", self.year, self.day, self.part)
    }
}

fn set_once(
    slot: &mut Option<u32>,
    value: u32,
    name: &'static str,
) -> Result<(), PuzzleIdError> {
    if slot.replace(value).is_some() {
        return Err(PuzzleIdError::Repeated(name));
    }
    Ok(())
}

fn number(token: &str) -> Result<u32, PuzzleIdError> {
    token
        .parse()
        .map_err(|_| PuzzleIdError::UnrecognizedToken(token.to_string()))
}

impl FromStr for PuzzleId {
    type Err = PuzzleIdError;

    /// Accepts `day3`, `day_03`, `day_03_part2`, `day3-part2`, `2021/3/2`,
    /// `2021-day03-part1` and similar, ignoring case. Without a part the
    /// identifier means part 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let mut tokens = lower
            .split(['_', '-', '/', ' '])
            .filter(|t| !t.is_empty())
            .peekable();
        if tokens.peek().is_none() {
            return Err(PuzzleIdError::Empty);
        }

        let mut year = None;
        let mut day = None;
        let mut part = None;
        let mut bare = Vec::new();

        while let Some(token) = tokens.next() {
            let (slot, name, rest) = if let Some(rest) = token.strip_prefix("day") {
                (&mut day, "day", rest)
            } else if let Some(rest) = token.strip_prefix("part") {
                (&mut part, "part", rest)
            } else {
                bare.push(number(token)?);
                continue;
            };

            // `day3` or `day` followed by `3`
            let value = if rest.is_empty() {
                let next = tokens
                    .next()
                    .ok_or_else(|| PuzzleIdError::UnrecognizedToken(token.to_string()))?;
                number(next)?
            } else {
                number(rest)?
            };
            set_once(slot, value, name)?;
        }

        // Untagged numbers fill year (if four digits), day and part in that order
        let mut bare = bare.into_iter().peekable();
        if let Some(&first) = bare.peek()
            && first >= 1000
        {
            year = bare.next();
        }
        for value in bare {
            if day.is_none() {
                day = Some(value);
            } else if part.is_none() {
                part = Some(value);
            } else {
                return Err(PuzzleIdError::UnrecognizedToken(value.to_string()));
            }
        }

        let year = year.unwrap_or(DEFAULT_YEAR as u32);
        let day = day.ok_or(PuzzleIdError::MissingDay)?;
        let part = part.unwrap_or(1);

        if !(2015..=2034).contains(&year) {
            return Err(PuzzleIdError::YearOutOfRange(year));
        }
        if !(1..=25).contains(&day) {
            return Err(PuzzleIdError::DayOutOfRange(day));
        }
        let part = u8::try_from(part)
            .ok()
            .filter(|&p| p >= 1)
            .ok_or(PuzzleIdError::PartOutOfRange)?;

        Ok(PuzzleId {
            year: year as u16,
            day: day as u8,
            part,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(year: u16, day: u8, part: u8) -> PuzzleId {
        PuzzleId { year, day, part }
    }

    #[test]
    fn day_labels() {
        assert_eq!("day_01".parse(), Ok(id(2021, 1, 1)));
        assert_eq!("day_01_part2".parse(), Ok(id(2021, 1, 2)));
        assert_eq!("day_03_part2".parse(), Ok(id(2021, 3, 2)));
        assert_eq!("day3".parse(), Ok(id(2021, 3, 1)));
        assert_eq!("Day3-Part2".parse(), Ok(id(2021, 3, 2)));
        assert_eq!("day 2 part 2".parse(), Ok(id(2021, 2, 2)));
    }

    #[test]
    fn year_qualified_forms() {
        assert_eq!("2021/3/2".parse(), Ok(id(2021, 3, 2)));
        assert_eq!("2021/3".parse(), Ok(id(2021, 3, 1)));
        assert_eq!("2021-day03-part1".parse(), Ok(id(2021, 3, 1)));
        assert_eq!("2020_day_25".parse(), Ok(id(2020, 25, 1)));
        assert_eq!("7".parse(), Ok(id(2021, 7, 1)));
    }

    #[test]
    fn default_puzzle_is_valid() {
        assert_eq!(DEFAULT_PUZZLE.parse(), Ok(id(2021, 3, 2)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<PuzzleId>(), Err(PuzzleIdError::Empty));
        assert_eq!("  _ ".parse::<PuzzleId>(), Err(PuzzleIdError::Empty));
        assert_eq!(
            "week_01".parse::<PuzzleId>(),
            Err(PuzzleIdError::UnrecognizedToken("week".into()))
        );
        assert_eq!("part2".parse::<PuzzleId>(), Err(PuzzleIdError::MissingDay));
        assert_eq!(
            "day_26".parse::<PuzzleId>(),
            Err(PuzzleIdError::DayOutOfRange(26))
        );
        assert_eq!(
            "day_00".parse::<PuzzleId>(),
            Err(PuzzleIdError::DayOutOfRange(0))
        );
        assert_eq!(
            "day_01_part0".parse::<PuzzleId>(),
            Err(PuzzleIdError::PartOutOfRange)
        );
        assert_eq!(
            "day1_day2".parse::<PuzzleId>(),
            Err(PuzzleIdError::Repeated("day"))
        );
        assert_eq!(
            "1999/3/1".parse::<PuzzleId>(),
            Err(PuzzleIdError::YearOutOfRange(1999))
        );
        assert!("day_".parse::<PuzzleId>().is_err());
    }

    #[test]
    fn labels_and_dirs() {
        assert_eq!(id(2021, 3, 1).label(), "day_03");
        assert_eq!(id(2021, 3, 2).label(), "day_03_part2");
        assert_eq!(id(2021, 12, 2).day_dir(), "day_12");
        assert_eq!(id(2021, 3, 2).to_string(), "2021/03 Part 2");
    }

    proptest! {
        #[test]
        fn label_parses_back(day in 1u8..=25, part in 1u8..=2) {
            let puzzle = id(DEFAULT_YEAR, day, part);
            prop_assert_eq!(puzzle.label().parse::<PuzzleId>(), Ok(puzzle));
        }
    }
}
