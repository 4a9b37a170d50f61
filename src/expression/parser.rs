//! Recursive-descent parser producing a [`Node`] tree.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | 't' | 'pi' | FUNCTION '(' args ')' | '(' expr ')'
//! ```

use std::f64::consts::PI;

use super::ast::{BinaryOp, Function, Node};
use super::lexer::{Token, TokenKind};
use crate::error::ExpressionError;

/// Deepest nesting accepted.
///
/// Each parenthesis pair, function call, unary sign and `**` exponent opens
/// one level, so `MAX_DEPTH` nested parentheses still parse.
pub const MAX_DEPTH: usize = 64;

/// Longest formula accepted, in tokens.
///
/// Flat operator chains build one tree level per operator; this bounds the
/// tree's depth for evaluation and drop.
pub const MAX_TOKENS: usize = 1024;

pub(crate) fn parse(tokens: &[Token]) -> Result<Node, ExpressionError> {
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }
    if tokens.len() > MAX_TOKENS {
        return Err(ExpressionError::TooLong {
            found: tokens.len(),
            max: MAX_TOKENS,
        });
    }
    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let node = parser.expr()?;
    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.cursor);
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|token| &token.kind == kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ExpressionError> {
        match self.next() {
            Some(token) if &token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(token)),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExpressionError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<Node, ExpressionError> {
        let mut node = self.term()?;
        loop {
            let op = if self.eat(&TokenKind::Plus) {
                BinaryOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                return Ok(node);
            };
            let rhs = self.term()?;
            node = binary(op, node, rhs);
        }
    }

    fn term(&mut self) -> Result<Node, ExpressionError> {
        let mut node = self.unary()?;
        loop {
            let op = if self.eat(&TokenKind::Star) {
                BinaryOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinaryOp::Div
            } else {
                return Ok(node);
            };
            let rhs = self.unary()?;
            node = binary(op, node, rhs);
        }
    }

    fn unary(&mut self) -> Result<Node, ExpressionError> {
        let negate = if self.eat(&TokenKind::Minus) {
            true
        } else if self.eat(&TokenKind::Plus) {
            false
        } else {
            return self.power();
        };
        self.descend()?;
        let inner = self.unary()?;
        self.ascend();
        Ok(if negate {
            Node::Neg(Box::new(inner))
        } else {
            inner
        })
    }

    fn power(&mut self) -> Result<Node, ExpressionError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Power) {
            // Right associative, and the exponent may carry its own sign.
            self.descend()?;
            let exponent = self.unary()?;
            self.ascend();
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ExpressionError> {
        let token = self.next().ok_or(ExpressionError::UnexpectedEnd)?.clone();
        match &token.kind {
            TokenKind::Number(value) => Ok(Node::Number(*value)),
            TokenKind::LParen => {
                self.descend()?;
                let inner = self.expr()?;
                self.expect(&TokenKind::RParen)?;
                self.ascend();
                Ok(inner)
            }
            TokenKind::Ident(name) => self.name(name),
            _ => Err(unexpected(&token)),
        }
    }

    fn name(&mut self, name: &str) -> Result<Node, ExpressionError> {
        let called = self.peek().is_some_and(|token| token.kind == TokenKind::LParen);
        let node = match name {
            "t" => Node::Time,
            "pi" => Node::Number(PI),
            _ => {
                let Some(function) = Function::from_name(name) else {
                    return Err(ExpressionError::UnknownName(name.to_string()));
                };
                if !called {
                    return Err(ExpressionError::BareFunction(name.to_string()));
                }
                return self.call(function);
            }
        };
        if called {
            return Err(ExpressionError::NotCallable(name.to_string()));
        }
        Ok(node)
    }

    fn call(&mut self, function: Function) -> Result<Node, ExpressionError> {
        self.descend()?;
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.eat(&TokenKind::RParen) {
            loop {
                args.push(self.expr()?);
                if self.eat(&TokenKind::Comma) {
                    continue;
                }
                self.expect(&TokenKind::RParen)?;
                break;
            }
        }
        if args.len() != function.arity() {
            return Err(ExpressionError::Arity {
                name: function.name(),
                expected: function.arity(),
                found: args.len(),
            });
        }
        self.ascend();
        Ok(Node::Call { function, args })
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(token: &Token) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        found: token.kind.describe(),
        pos: token.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::lexer::tokenize;

    fn parse_str(source: &str) -> Result<Node, ExpressionError> {
        parse(&tokenize(source)?)
    }

    fn eval_str(source: &str, t: f64) -> f64 {
        parse_str(source).unwrap().eval(t).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval_str("1 + 2 * 3", 0.0), 7.0);
        assert_eq!(eval_str("(1 + 2) * 3", 0.0), 9.0);
        assert_eq!(eval_str("8 / 4 / 2", 0.0), 1.0);
        assert_eq!(eval_str("10 - 4 - 3", 0.0), 3.0);
    }

    #[test]
    fn test_power_binds_tighter_than_negation() {
        assert_eq!(eval_str("-t**2", 3.0), -9.0);
        assert_eq!(eval_str("2**-1", 0.0), 0.5);
        assert_eq!(eval_str("2**3**2", 0.0), 512.0);
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(eval_str("--t", 2.0), 2.0);
        assert_eq!(eval_str("+t", 2.0), 2.0);
        assert_eq!(eval_str("2*-t", 2.0), -4.0);
    }

    #[test]
    fn test_constants_and_calls() {
        assert_eq!(eval_str("pi", 0.0), PI);
        assert_eq!(eval_str("abs(t)", -2.0), 2.0);
        assert_eq!(eval_str("heaviside(t, 1)", 0.0), 1.0);
        assert_eq!(eval_str("heaviside(t - 1, 0)", 0.5), 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(&[]), Err(ExpressionError::Empty));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            parse_str("__import__('os')"),
            Err(ExpressionError::UnexpectedChar { ch: '\'', pos: 11 })
        );
        assert_eq!(
            parse_str("__import__(t)"),
            Err(ExpressionError::UnknownName("__import__".into()))
        );
        assert_eq!(
            parse_str("np"),
            Err(ExpressionError::UnknownName("np".into()))
        );
        assert_eq!(parse_str("x + 1"), Err(ExpressionError::UnknownName("x".into())));
    }

    #[test]
    fn test_call_shape_errors() {
        assert_eq!(
            parse_str("sin"),
            Err(ExpressionError::BareFunction("sin".into()))
        );
        assert_eq!(parse_str("t(1)"), Err(ExpressionError::NotCallable("t".into())));
        assert_eq!(
            parse_str("heaviside(t)"),
            Err(ExpressionError::Arity {
                name: "heaviside",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_str("cos()"),
            Err(ExpressionError::Arity {
                name: "cos",
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_trailing_and_missing_tokens() {
        assert!(matches!(
            parse_str("t t"),
            Err(ExpressionError::UnexpectedToken { pos: 2, .. })
        ));
        assert_eq!(parse_str("(t + 1"), Err(ExpressionError::UnexpectedEnd));
        assert_eq!(parse_str("t *"), Err(ExpressionError::UnexpectedEnd));
        assert!(matches!(
            parse_str("1, 2"),
            Err(ExpressionError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}t{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(parse_str(&deep), Err(ExpressionError::TooDeep(MAX_DEPTH)));

        let negations = format!("{}t", "-".repeat(MAX_DEPTH * 2));
        assert_eq!(parse_str(&negations), Err(ExpressionError::TooDeep(MAX_DEPTH)));

        let shallow = format!("{}t{}", "(".repeat(8), ")".repeat(8));
        assert!(parse_str(&shallow).is_ok());
    }

    #[test]
    fn test_depth_counts_each_level_once() {
        let parens = format!("{}t{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse_str(&parens).is_ok());

        let calls = format!("{}t{}", "abs(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse_str(&calls).is_ok());
        let calls = format!("{}t{}", "abs(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(parse_str(&calls), Err(ExpressionError::TooDeep(MAX_DEPTH)));

        assert!(parse_str(&format!("{}t", "-".repeat(MAX_DEPTH))).is_ok());
    }

    #[test]
    fn test_power_chain_is_bounded() {
        let tower = format!("{}t", "t**".repeat(MAX_DEPTH + 1));
        assert_eq!(parse_str(&tower), Err(ExpressionError::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn test_token_limit() {
        // 2n + 1 tokens
        let within = format!("{}t", "t+".repeat((MAX_TOKENS - 1) / 2));
        assert_eq!(parse_str(&within).unwrap().eval(1.0), Ok(512.0));

        let chain = format!("{}t", "t+".repeat(MAX_TOKENS / 2));
        assert_eq!(
            parse_str(&chain),
            Err(ExpressionError::TooLong {
                found: MAX_TOKENS + 1,
                max: MAX_TOKENS
            })
        );
    }
}
