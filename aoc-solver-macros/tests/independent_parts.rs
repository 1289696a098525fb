use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Depths;

impl AocParser for Depths {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for Depths {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Depths {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<Depths as Solver>::PARTS, 2);
}

#[test]
fn test_solve_part_dispatches_to_part_solvers() {
    let mut shared = Depths::parse("199\n200\n208").unwrap();

    assert_eq!(Depths::solve_part(&mut shared, 1).unwrap(), "607");
    assert_eq!(Depths::solve_part(&mut shared, 2).unwrap(), "208");
}

#[test]
fn test_part_out_of_range() {
    let mut shared = Depths::parse("1\n2\n3").unwrap();

    assert!(matches!(
        Depths::solve_part(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert!(matches!(
        Depths::solve_part(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

// Parts may mutate shared data; later parts see the result
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Memo;

#[derive(Debug, Default)]
struct MemoData {
    numbers: Vec<u32>,
    sorted: bool,
}

impl AocParser for Memo {
    type SharedData<'a> = MemoData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .split(',')
            .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.into())))
            .collect::<Result<_, _>>()?;
        Ok(MemoData {
            numbers,
            sorted: false,
        })
    }
}

impl PartSolver<1> for Memo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.numbers.sort_unstable();
        shared.sorted = true;
        Ok(shared.numbers[0].to_string())
    }
}

impl PartSolver<2> for Memo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.sorted {
            return Err(SolveError::failed("part 1 has not run"));
        }
        Ok(shared.numbers[shared.numbers.len() - 1].to_string())
    }
}

#[test]
fn test_parts_share_mutable_state() {
    let mut shared = Memo::parse("5,1,9,3").unwrap();

    assert!(matches!(
        Memo::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
    assert_eq!(Memo::solve_part(&mut shared, 1).unwrap(), "1");
    assert_eq!(Memo::solve_part(&mut shared, 2).unwrap(), "9");
}
