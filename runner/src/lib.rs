//! Advent of Code 2022 solutions.
//!
//! Each puzzle implements [`AOCSolution`] over the input's lines; [`run`] is
//! what the runner binary and the benches call.

pub mod aocsoln;
pub mod calories;
pub mod days;
pub mod error;
pub mod rock_paper_scissors;

pub use aocsoln::AOCSolution;
pub use days::{Answers, Day};
pub use error::{ParseError, Result};

/// Solves both parts of `day` for the raw puzzle input.
pub fn run(day: Day, input: &str) -> Result<Answers> {
    let lines: Vec<&str> = input.lines().collect();
    day.solve(&lines)
}
