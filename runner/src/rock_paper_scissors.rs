//! Day 2: a strategy guide of rock/paper/scissors rounds, one per line.

use tracing::debug;

use crate::aocsoln::AOCSolution;
use crate::error::{Column, ParseError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    fn from_index(idx: usize) -> Shape {
        Self::ALL[idx % 3]
    }

    /// The shape this one defeats.
    pub fn beats(self) -> Shape {
        Self::from_index(self as usize + 2)
    }

    /// The shape that defeats this one.
    pub fn loses_to(self) -> Shape {
        Self::from_index(self as usize + 1)
    }

    pub fn score(self) -> i64 {
        self as i64 + 1
    }

    /// Result of playing `self` against `other`.
    pub fn against(self, other: Shape) -> Outcome {
        if self == other {
            Outcome::Draw
        } else if self.beats() == other {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    fn from_code(token: &str, codes: [&str; 3]) -> Option<Shape> {
        codes
            .iter()
            .position(|code| *code == token)
            .map(Self::from_index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Lose, Outcome::Draw, Outcome::Win];

    pub fn score(self) -> i64 {
        self as i64 * 3
    }

    /// The shape to play against `opponent` to get this outcome.
    pub fn response_to(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Lose => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.loses_to(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub opponent: Shape,
    pub response: Shape,
}

impl Round {
    pub fn outcome(&self) -> Outcome {
        self.response.against(self.opponent)
    }

    /// Always within `1..=9`.
    pub fn score(&self) -> i64 {
        self.response.score() + self.outcome().score()
    }
}

/// How the second column of the guide is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpretation {
    /// X, Y, Z name the shape to play.
    Shape,
    /// X, Y, Z name the outcome to aim for.
    Outcome,
}

const OPPONENT_CODES: [&str; 3] = ["A", "B", "C"];
const RESPONSE_CODES: [&str; 3] = ["X", "Y", "Z"];

pub struct RockPaperScissors;

impl AOCSolution for RockPaperScissors {
    fn aoc_part1(lines: &[&str]) -> Result<i64> {
        Ok(total_score(&parse(lines, Interpretation::Shape)?))
    }

    fn aoc_part2(lines: &[&str]) -> Result<i64> {
        Ok(total_score(&parse(lines, Interpretation::Outcome)?))
    }
}

#[inline]
pub fn parse(lines: &[&str], interpretation: Interpretation) -> Result<Vec<Round>> {
    let rounds = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_round(idx + 1, line, interpretation))
        .collect::<Result<Vec<_>>>()?;
    debug!(rounds = rounds.len(), ?interpretation, "parsed strategy guide");
    Ok(rounds)
}

fn parse_round(line_no: usize, line: &str, interpretation: Interpretation) -> Result<Round> {
    let mut tokens = line.split_whitespace();
    let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ParseError::TokenCount {
            line_no,
            line: line.to_owned(),
        });
    };

    let unknown = |column, token: &str| ParseError::UnknownToken {
        line_no,
        column,
        token: token.to_owned(),
    };

    let opponent =
        Shape::from_code(first, OPPONENT_CODES).ok_or_else(|| unknown(Column::Opponent, first))?;
    let response = match interpretation {
        Interpretation::Shape => Shape::from_code(second, RESPONSE_CODES)
            .ok_or_else(|| unknown(Column::Response, second))?,
        Interpretation::Outcome => RESPONSE_CODES
            .iter()
            .position(|code| *code == second)
            .map(|idx| Outcome::ALL[idx].response_to(opponent))
            .ok_or_else(|| unknown(Column::Outcome, second))?,
    };

    Ok(Round { opponent, response })
}

#[inline]
pub fn total_score(rounds: &[Round]) -> i64 {
    rounds.iter().map(Round::score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    const EXAMPLE: [&str; 3] = ["A Y", "B X", "C Z"];

    #[test]
    fn example_part_one() {
        assert_eq!(RockPaperScissors::aoc_part1(&EXAMPLE), Ok(15));
    }

    #[test]
    fn example_part_two() {
        assert_eq!(RockPaperScissors::aoc_part2(&EXAMPLE), Ok(12));
    }

    #[test]
    fn example_round_scores() {
        let by_shape = parse(&EXAMPLE, Interpretation::Shape).unwrap();
        let scores: Vec<i64> = by_shape.iter().map(Round::score).collect();
        assert_eq!(scores, vec![8, 1, 6]);

        let by_outcome = parse(&EXAMPLE, Interpretation::Outcome).unwrap();
        let scores: Vec<i64> = by_outcome.iter().map(Round::score).collect();
        assert_eq!(scores, vec![4, 1, 7]);
    }

    #[test]
    fn beats_cycle() {
        assert_eq!(Shape::Rock.beats(), Shape::Scissors);
        assert_eq!(Shape::Paper.beats(), Shape::Rock);
        assert_eq!(Shape::Scissors.beats(), Shape::Paper);
        for shape in Shape::ALL {
            assert_eq!(shape.loses_to().beats(), shape);
            assert_ne!(shape.beats(), shape.loses_to());
        }
    }

    #[test]
    fn empty_guide_scores_zero() {
        assert_eq!(RockPaperScissors::aoc_part1(&[]), Ok(0));
        assert_eq!(RockPaperScissors::aoc_part2(&[]), Ok(0));
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        assert_eq!(RockPaperScissors::aoc_part1(&["  A\tY  "]), Ok(8));
    }

    #[test]
    fn wrong_token_count() {
        for line in ["A", "", "A Y Z"] {
            assert_eq!(
                parse(&["A Y", line], Interpretation::Shape),
                Err(ParseError::TokenCount {
                    line_no: 2,
                    line: line.to_owned(),
                })
            );
        }
    }

    #[test]
    fn unknown_codes_name_their_column() {
        assert_eq!(
            parse(&["D X"], Interpretation::Shape),
            Err(ParseError::UnknownToken {
                line_no: 1,
                column: Column::Opponent,
                token: "D".to_owned(),
            })
        );

        let err = parse(&["A Y", "B W"], Interpretation::Outcome).unwrap_err();
        assert_eq!(err.to_string(), r#"line 2: unknown outcome code "W""#);

        let err = parse(&["a X"], Interpretation::Shape).unwrap_err();
        assert_eq!(err.to_string(), r#"line 1: unknown opponent code "a""#);
    }

    fn shape() -> impl Strategy<Value = Shape> {
        prop::sample::select(Shape::ALL.to_vec())
    }

    fn outcome() -> impl Strategy<Value = Outcome> {
        prop::sample::select(Outcome::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn round_score_in_range(opponent in shape(), response in shape()) {
            let score = Round { opponent, response }.score();
            prop_assert!((1..=9).contains(&score));
        }

        #[test]
        fn draw_directive_mirrors_opponent(opponent in shape()) {
            let response = Outcome::Draw.response_to(opponent);
            prop_assert_eq!(response, opponent);
            prop_assert_eq!(Round { opponent, response }.outcome().score(), 3);
        }

        #[test]
        fn directive_is_achieved(opponent in shape(), wanted in outcome()) {
            let response = wanted.response_to(opponent);
            prop_assert_eq!(response.against(opponent), wanted);
        }

        #[test]
        fn outcomes_are_antisymmetric(a in shape(), b in shape()) {
            let flipped = match a.against(b) {
                Outcome::Win => Outcome::Lose,
                Outcome::Draw => Outcome::Draw,
                Outcome::Lose => Outcome::Win,
            };
            prop_assert_eq!(b.against(a), flipped);
        }

        #[test]
        fn parsing_is_repeatable(codes in prop::collection::vec((0usize..3, 0usize..3), 0..20)) {
            let lines: Vec<String> = codes
                .iter()
                .map(|&(a, b)| format!("{} {}", OPPONENT_CODES[a], RESPONSE_CODES[b]))
                .collect();
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            for interpretation in [Interpretation::Shape, Interpretation::Outcome] {
                prop_assert_eq!(
                    parse(&lines, interpretation).unwrap(),
                    parse(&lines, interpretation).unwrap()
                );
            }
        }
    }
}
