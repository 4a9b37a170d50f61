//! Error types for the fallible parts of the engine.
//!
//! Only the strict APIs surface these. The usability wrappers
//! ([`crate::expression::evaluate`] and [`crate::transforms::apply`]) recover
//! from them locally so a consumer always gets a renderable array.

use thiserror::Error;

/// Errors raised while parsing or evaluating a custom expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown name '{0}'")]
    UnknownName(String),

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("'{0}' is a function and must be called")]
    BareFunction(String),

    #[error("'{0}' is not callable")]
    NotCallable(String),

    #[error("{name}() takes {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("expression nests deeper than {0} levels")]
    TooDeep(usize),

    #[error("expression has {found} tokens, the limit is {max}")]
    TooLong { found: usize, max: usize },

    #[error("math domain error: {function}({value})")]
    Domain { function: &'static str, value: f64 },
}

/// Errors raised while building a [`crate::TimeGrid`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("time grid needs at least one sample")]
    Empty,

    #[error("discrete sample count {found} outside {min}..={max}")]
    SampleCount {
        found: usize,
        min: usize,
        max: usize,
    },

    #[error("time value at index {0} is not finite")]
    NonFinite(usize),

    #[error("time values must be non-decreasing (index {0})")]
    Unordered(usize),
}

/// Errors raised by the strict transform entry point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("{0} needs a second signal")]
    MissingOperand(crate::transforms::OperationKind),

    #[error("signal lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// A display label that names no known signal or operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {what}: '{label}'")]
pub struct UnknownLabel {
    pub what: &'static str,
    pub label: String,
}
