//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::FactoryInfo;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print_result(&self, result: &SolverResult) {
        println!("{}", self.format_result(result));
    }

    /// Answer line; just the answer in quiet mode
    pub fn format_result(&self, result: &SolverResult) -> String {
        if self.quiet {
            return result.answer.clone();
        }
        format!(
            "{}: {} (parse: {}, solve: {})",
            result.puzzle,
            result.answer,
            format_duration(result.parse_duration),
            format_duration(result.solve_duration)
        )
    }

    pub fn print_listing(&self, solvers: &[FactoryInfo]) {
        if solvers.is_empty() {
            println!("No solvers registered.");
            return;
        }
        for info in solvers {
            let parts = (1..=info.parts)
                .map(|part| {
                    if part == 1 {
                        format!("day_{:02}", info.day)
                    } else {
                        format!("day_{:02}_part{}", info.day, part)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            println!("{}/{:02}: {}", info.year, info.day, parts);
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleId;

    fn result() -> SolverResult {
        SolverResult {
            puzzle: PuzzleId {
                year: 2021,
                day: 3,
                part: 2,
            },
            answer: "230".into(),
            parse_duration: TimeDelta::microseconds(12),
            solve_duration: TimeDelta::microseconds(2_500),
        }
    }

    #[test]
    fn full_result_line() {
        assert_eq!(
            OutputFormatter::new(false).format_result(&result()),
            "2021/03 Part 2: 230 (parse: 12µs, solve: 2.50ms)"
        );
    }

    #[test]
    fn quiet_result_is_only_the_answer() {
        assert_eq!(OutputFormatter::new(true).format_result(&result()), "230");
    }

    #[test]
    fn durations_pick_a_unit() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(1_500)), "1.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
