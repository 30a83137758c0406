use crate::error::Result;

/// This is the interface between puzzle solutions and the runner.
/// Solutions must implement this trait
pub trait AOCSolution {
    /// Input lines, without terminators. Blank lines are kept.
    fn aoc_part1(lines: &[&str]) -> Result<i64>;
    fn aoc_part2(lines: &[&str]) -> Result<i64>;
}
