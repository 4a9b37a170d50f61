//! Syntax tree and tree-walking evaluator.

use crate::error::ExpressionError;

/// Functions callable from a formula. Nothing outside this list is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Sqrt,
    Log,
    Abs,
    Sign,
    /// `heaviside(x, h0)`: 0 below zero, 1 above, `h0` at zero
    Heaviside,
}

impl Function {
    pub const ALL: [Function; 9] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Exp,
        Function::Sqrt,
        Function::Log,
        Function::Abs,
        Function::Sign,
        Function::Heaviside,
    ];

    /// Looks up a function by its formula name, case-sensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Abs => "abs",
            Function::Sign => "sign",
            Function::Heaviside => "heaviside",
        }
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Function::Heaviside => 2,
            _ => 1,
        }
    }

    /// Applies the function; `args.len()` has already been checked against
    /// [`Function::arity`] by the parser.
    fn call(self, args: &[f64]) -> Result<f64, ExpressionError> {
        let x = args[0];
        let value = match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Exp => x.exp(),
            Function::Sqrt => {
                if x < 0.0 {
                    return Err(ExpressionError::Domain {
                        function: "sqrt",
                        value: x,
                    });
                }
                x.sqrt()
            }
            Function::Log => {
                if x < 0.0 {
                    return Err(ExpressionError::Domain {
                        function: "log",
                        value: x,
                    });
                }
                x.ln()
            }
            Function::Abs => x.abs(),
            Function::Sign => sign(x),
            Function::Heaviside => heaviside(x, args[1]),
        };
        Ok(value)
    }
}

/// Three-way sign with `sign(0) == 0`, unlike `f64::signum`.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        // 0.0 or NaN, both pass through
        x * 0.0
    }
}

/// Unit step with an explicit value at zero.
pub(crate) fn heaviside(x: f64, at_zero: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 0.0 {
        1.0
    } else if x == 0.0 {
        at_zero
    } else {
        f64::NAN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    /// The bound time variable `t`
    Time,
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        function: Function,
        args: Vec<Node>,
    },
}

impl Node {
    pub(crate) fn eval(&self, t: f64) -> Result<f64, ExpressionError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Time => Ok(t),
            Node::Neg(inner) => Ok(-inner.eval(t)?),
            Node::Binary { op, lhs, rhs } => {
                let a = lhs.eval(t)?;
                let b = rhs.eval(t)?;
                Ok(match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                })
            }
            Node::Call { function, args } => {
                let mut values = [0.0; 2];
                for (slot, arg) in values.iter_mut().zip(args) {
                    *slot = arg.eval(t)?;
                }
                function.call(&values[..args.len()])
            }
        }
    }

    /// True when the tree never reads `t`.
    pub(crate) fn is_constant(&self) -> bool {
        match self {
            Node::Number(_) => true,
            Node::Time => false,
            Node::Neg(inner) => inner.is_constant(),
            Node::Binary { lhs, rhs, .. } => lhs.is_constant() && rhs.is_constant(),
            Node::Call { args, .. } => args.iter().all(Node::is_constant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_lookup() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
        }
        assert_eq!(Function::from_name("eval"), None);
        assert_eq!(Function::from_name("Sin"), None);
    }

    #[test]
    fn test_sign_at_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(2.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_heaviside() {
        assert_eq!(heaviside(-1.0, 0.5), 0.0);
        assert_eq!(heaviside(0.0, 0.5), 0.5);
        assert_eq!(heaviside(3.0, 0.5), 1.0);
        assert!(heaviside(f64::NAN, 0.5).is_nan());
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            Function::Log.call(&[-1.0]),
            Err(ExpressionError::Domain {
                function: "log",
                value: -1.0
            })
        );
        assert!(Function::Sqrt.call(&[-4.0]).is_err());
        assert_eq!(Function::Log.call(&[0.0]), Ok(f64::NEG_INFINITY));
        assert_eq!(Function::Sqrt.call(&[4.0]), Ok(2.0));
    }

    #[test]
    fn test_eval_tree() {
        // 2 * t - 1
        let tree = Node::Binary {
            op: BinaryOp::Sub,
            lhs: Box::new(Node::Binary {
                op: BinaryOp::Mul,
                lhs: Box::new(Node::Number(2.0)),
                rhs: Box::new(Node::Time),
            }),
            rhs: Box::new(Node::Number(1.0)),
        };
        assert_eq!(tree.eval(0.75), Ok(0.5));
        assert!(!tree.is_constant());
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        let tree = Node::Binary {
            op: BinaryOp::Div,
            lhs: Box::new(Node::Number(1.0)),
            rhs: Box::new(Node::Time),
        };
        assert_eq!(tree.eval(0.0), Ok(f64::INFINITY));
        assert!(tree.eval(f64::NAN).unwrap().is_nan());
    }
}
