use std::num::ParseIntError;

use thiserror::Error;

/// Malformed puzzle input. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line_no}: expected an integer, found {line:?}")]
    NotAnInteger {
        line_no: usize,
        line: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line_no}: expected two tokens, found {line:?}")]
    TokenCount { line_no: usize, line: String },

    #[error("line {line_no}: unknown {column} code {token:?}")]
    UnknownToken {
        line_no: usize,
        column: Column,
        token: String,
    },

    #[error("calorie total does not fit in 64 bits")]
    Overflow,

    #[error("no solution for day {0}")]
    UnknownDay(u8),
}

/// Which column of a two-token line a code was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Opponent,
    Response,
    Outcome,
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Column::Opponent => "opponent",
            Column::Response => "response",
            Column::Outcome => "outcome",
        })
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
