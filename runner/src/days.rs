use std::fmt;

use crate::aocsoln::AOCSolution;
use crate::calories::CalorieCounting;
use crate::error::{ParseError, Result};
use crate::rock_paper_scissors::RockPaperScissors;

/// Every puzzle this crate can solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Day {
    CalorieCounting,
    RockPaperScissors,
}

impl Day {
    pub const ALL: [Day; 2] = [Day::CalorieCounting, Day::RockPaperScissors];

    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Result<Day> {
        Self::ALL
            .into_iter()
            .find(|day| day.number() == number)
            .ok_or(ParseError::UnknownDay(number))
    }

    pub fn title(self) -> &'static str {
        match self {
            Day::CalorieCounting => "Calorie Counting",
            Day::RockPaperScissors => "Rock Paper Scissors",
        }
    }

    pub fn solve(self, lines: &[&str]) -> Result<Answers> {
        match self {
            Day::CalorieCounting => solve_with::<CalorieCounting>(lines),
            Day::RockPaperScissors => solve_with::<RockPaperScissors>(lines),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}: {}", self.number(), self.title())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    pub part1: i64,
    pub part2: i64,
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.part1, self.part2)
    }
}

fn solve_with<S: AOCSolution>(lines: &[&str]) -> Result<Answers> {
    Ok(Answers {
        part1: S::aoc_part1(lines)?,
        part2: S::aoc_part2(lines)?,
    })
}
