use std::fmt;

use crate::core::lexer::LexerError;
use crate::core::parser::ParserError;

/// Every way a quadrature run can fail, from formula text to final sum.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    /// The formula text could not be tokenized or parsed.
    Parse { message: String, column: usize },
    /// f(x) is mathematically undefined at a concrete point. When the
    /// point came from a sample grid, `index` holds its position.
    Domain {
        x: f64,
        index: Option<usize>,
        reason: String,
    },
    /// Simpson's rule was asked for an odd subdivision count.
    InvalidSubdivision { n: usize },
    /// Bounds or subdivision counts that make no interval at all.
    InvalidInterval { message: String },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadError::Parse { message, column } => {
                write!(f, "parse error at column {}: {}", column, message)
            }
            QuadError::Domain { x, index: Some(i), reason } => {
                write!(f, "f(x) is undefined at sample {} (x = {}): {}", i, x, reason)
            }
            QuadError::Domain { x, index: None, reason } => {
                write!(f, "f(x) is undefined at x = {}: {}", x, reason)
            }
            QuadError::InvalidSubdivision { n } => {
                write!(f, "Simpson's rule requires an even number of subdivisions, got n = {}", n)
            }
            QuadError::InvalidInterval { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for QuadError {}

impl QuadError {
    pub fn parse(message: impl Into<String>, column: usize) -> Self {
        QuadError::Parse { message: message.into(), column }
    }
    pub fn domain(x: f64, reason: impl Into<String>) -> Self {
        QuadError::Domain { x, index: None, reason: reason.into() }
    }
    pub fn invalid_interval(message: impl Into<String>) -> Self {
        QuadError::InvalidInterval { message: message.into() }
    }

    /// Tags a domain error with the sample index it surfaced at.
    /// Other kinds pass through untouched.
    pub fn with_index(self, index: usize) -> Self {
        match self {
            QuadError::Domain { x, index: None, reason } => {
                QuadError::Domain { x, index: Some(index), reason }
            }
            other => other,
        }
    }
}

impl From<LexerError> for QuadError {
    fn from(err: LexerError) -> Self {
        match err {
            LexerError::UnexpectedCharacter(ch, column) => {
                QuadError::parse(format!("unexpected character '{}'", ch), column)
            }
            LexerError::InvalidNumber(text, column) => {
                QuadError::parse(format!("invalid number literal '{}'", text), column)
            }
        }
    }
}

impl From<ParserError> for QuadError {
    fn from(err: ParserError) -> Self {
        QuadError::Parse { message: err.message, column: err.column }
    }
}
