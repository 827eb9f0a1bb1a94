//! Error types shared by the scanner, parser and evaluator.

use thiserror::Error;

use crate::token::Token;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of a parse or evaluate call. None of these are recovered
/// internally; each aborts the call that raised it.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// The current token does not match what the grammar expects at this point.
    #[error("syntax error: expected {expected}, found {found}")]
    Syntax { expected: String, found: Token },

    /// An identifier was read before anything was assigned to it.
    #[error("name error: identifier not found: {0}")]
    Name(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Integer overflow, or real arithmetic that left the finite range.
    #[error("arithmetic overflow")]
    Overflow,

    /// Input nested deeper than the parser accepts.
    #[error("syntax error: nesting depth {depth} exceeds the maximum of {max_depth}")]
    MaxDepth { depth: usize, max_depth: usize },
}

/// Scanner failures, located by 1-based line and column.
#[derive(Debug, Error, PartialEq)]
pub enum LexError {
    #[error("unexpected character '{found}' at {line}:{column}")]
    UnexpectedChar {
        found: char,
        line: usize,
        column: usize,
    },

    #[error("unterminated comment starting at {line}:{column}")]
    UnterminatedComment { line: usize, column: usize },

    #[error("invalid number literal {literal} at {line}:{column}")]
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
    },
}

impl Error {
    pub(crate) fn syntax(expected: impl Into<String>, found: Token) -> Self {
        Error::Syntax {
            expected: expected.into(),
            found,
        }
    }
}
