//! Sandboxed evaluation of user-written signal formulas.
//!
//! A formula is a single arithmetic expression in the time variable `t`. The
//! language is deliberately tiny:
//! - numeric literals, the constant `pi` and the variable `t`
//! - `+ - * /`, `**` for powers, unary signs and parentheses
//! - the functions `sin cos tan exp sqrt log abs sign heaviside`
//!
//! Anything else is rejected while parsing, so there is no path from a formula
//! to any other capability of the host program.
//!
//! [`evaluate`] is the entry point for live previews: it never fails, and a
//! formula that cannot be parsed or evaluated produces a flat line of zeros.

mod ast;
mod lexer;
mod parser;

use std::fmt;
use std::str::FromStr;

pub use ast::Function;
pub(crate) use ast::{heaviside, sign};
pub use parser::{MAX_DEPTH, MAX_TOKENS};

use crate::TimeGrid;
use crate::error::ExpressionError;

/// A parsed formula, ready to be evaluated at any instant.
///
/// # Examples
///
/// ```
/// use wavelab::expression::Expression;
///
/// let expr: Expression = "2 * t + 1".parse().unwrap();
/// assert_eq!(expr.eval_at(0.5).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: ast::Node,
}

impl Expression {
    /// Parses `source` into an expression.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntactic problem found, including any
    /// name outside the allow-list.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let tokens = lexer::tokenize(source)?;
        let root = parser::parse(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// The text this expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when the formula does not depend on `t`.
    pub fn is_constant(&self) -> bool {
        self.root.is_constant()
    }

    /// Evaluates the formula at a single instant.
    ///
    /// # Errors
    ///
    /// Fails on math domain errors such as the log of a negative number.
    /// Division by zero and overflow follow IEEE-754 instead.
    pub fn eval_at(&self, t: f64) -> Result<f64, ExpressionError> {
        self.root.eval(t)
    }

    /// Evaluates the formula at every instant of `grid`.
    ///
    /// A formula that ignores `t` yields its constant at every sample.
    ///
    /// # Errors
    ///
    /// Fails as soon as any sample fails.
    pub fn try_sample(&self, grid: &TimeGrid) -> Result<Vec<f64>, ExpressionError> {
        grid.iter().map(|&t| self.eval_at(t)).collect()
    }

    /// Like [`Expression::try_sample`], with failures replaced by zeros.
    pub fn sample(&self, grid: &TimeGrid) -> Vec<f64> {
        self.try_sample(grid).unwrap_or_else(|err| {
            log::debug!("formula '{}' failed, using zeros: {err}", self.source);
            vec![0.0; grid.len()]
        })
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses and evaluates `source` over `grid`, reporting any failure.
pub fn try_evaluate(source: &str, grid: &TimeGrid) -> Result<Vec<f64>, ExpressionError> {
    Expression::parse(source)?.try_sample(grid)
}

/// Parses and evaluates `source` over `grid`.
///
/// Never fails: any parse or evaluation error yields an all-zero array of the
/// grid's length.
///
/// # Examples
///
/// ```
/// use wavelab::{TimeGrid, expression::evaluate};
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 3).unwrap();
/// assert_eq!(evaluate("2 * t", &grid), vec![0.0, 1.0, 2.0]);
/// assert_eq!(evaluate("open('/etc/passwd')", &grid), vec![0.0; 3]);
/// ```
pub fn evaluate(source: &str, grid: &TimeGrid) -> Vec<f64> {
    try_evaluate(source, grid).unwrap_or_else(|err| {
        log::debug!("formula '{source}' rejected, using zeros: {err}");
        vec![0.0; grid.len()]
    })
}
