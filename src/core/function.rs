//! Integrand evaluation: the built-in session formulas plus compiled
//! user formulas, with domain guards instead of NaN/inf leaking out.
//!
//! Every evaluation path answers `Result<f64, QuadError>`. A returned
//! value is always finite; anything else becomes `QuadError::Domain`
//! carrying the x that triggered it.

use crate::core::ast::{BinaryOp, Expr, MathFn, UnaryOp};
use crate::core::error::QuadError;
use crate::core::lexer::Lexer;
use crate::core::parser::Parser;
use crate::debug_log;

/// Built-in default formulas, one per session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFormula {
    /// 1 / sqrt(0.5 * x + 1.5)
    InvSqrtLinear,
    /// log10(x^2 + 3) / (2 * x)
    LogQuotient,
    /// 1 / sqrt(x^2 + 0.6)
    InvSqrtSquare,
}

impl NamedFormula {
    pub fn label(self) -> &'static str {
        match self {
            NamedFormula::InvSqrtLinear => "1 / sqrt(0.5 * x + 1.5)",
            NamedFormula::LogQuotient => "log10(x^2 + 3) / (2 * x)",
            NamedFormula::InvSqrtSquare => "1 / sqrt(x^2 + 0.6)",
        }
    }

    pub fn eval(self, x: f64) -> Result<f64, QuadError> {
        match self {
            NamedFormula::InvSqrtLinear => {
                let t = 0.5 * x + 1.5;
                if t < 0.0 {
                    return Err(QuadError::domain(x, "square root of a negative number"));
                }
                if t == 0.0 {
                    return Err(QuadError::domain(x, "division by zero"));
                }
                Ok(1.0 / t.sqrt())
            }
            NamedFormula::LogQuotient => {
                if x == 0.0 {
                    return Err(QuadError::domain(x, "division by zero"));
                }
                // x^2 + 3 >= 3, the logarithm needs no guard
                Ok((x * x + 3.0).log10() / (2.0 * x))
            }
            NamedFormula::InvSqrtSquare => Ok(1.0 / (x * x + 0.6).sqrt()),
        }
    }
}

/// A user formula lexed and parsed once, evaluated many times.
#[derive(Debug, Clone)]
pub struct CompiledExpr {
    source: String,
    root: Expr,
}

impl CompiledExpr {
    pub fn compile(source: &str) -> Result<Self, QuadError> {
        let tokens = Lexer::new(source).tokenize()?;
        let root = Parser::new(tokens).parse()?;
        debug_log!("compiled '{}' into {:?}", source.trim(), root);
        Ok(Self { source: source.trim().to_string(), root })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn eval(&self, x: f64) -> Result<f64, QuadError> {
        eval_node(&self.root, x)
    }
}

/// What a session integrates: the built-in default or a parsed formula.
#[derive(Debug, Clone)]
pub enum Integrand {
    Named(NamedFormula),
    Expr(CompiledExpr),
}

impl Integrand {
    pub fn label(&self) -> &str {
        match self {
            Integrand::Named(named) => named.label(),
            Integrand::Expr(expr) => expr.source(),
        }
    }

    pub fn eval(&self, x: f64) -> Result<f64, QuadError> {
        let y = match self {
            Integrand::Named(named) => named.eval(x)?,
            Integrand::Expr(expr) => expr.eval(x)?,
        };
        if y.is_finite() {
            Ok(y)
        } else {
            Err(QuadError::domain(x, "result is not finite"))
        }
    }
}

fn eval_node(expr: &Expr, x: f64) -> Result<f64, QuadError> {
    match expr {
        Expr::Number(v) => Ok(*v),
        Expr::Var => Ok(x),
        Expr::Constant(c) => Ok(c.value()),
        Expr::Unary { op: UnaryOp::Neg, operand } => Ok(-eval_node(operand, x)?),
        Expr::Binary { op, lhs, rhs } => {
            let l = eval_node(lhs, x)?;
            let r = eval_node(rhs, x)?;
            match op {
                BinaryOp::Add => Ok(l + r),
                BinaryOp::Sub => Ok(l - r),
                BinaryOp::Mul => Ok(l * r),
                BinaryOp::Div => {
                    if r == 0.0 {
                        Err(QuadError::domain(x, "division by zero"))
                    } else {
                        Ok(l / r)
                    }
                }
                BinaryOp::Pow => {
                    let y = l.powf(r);
                    if y.is_finite() {
                        Ok(y)
                    } else if l == 0.0 && r < 0.0 {
                        Err(QuadError::domain(x, "zero raised to a negative power"))
                    } else if l < 0.0 {
                        Err(QuadError::domain(x, "fractional power of a negative base"))
                    } else {
                        Err(QuadError::domain(x, "result is not finite"))
                    }
                }
            }
        }
        Expr::Call { func, arg } => {
            let v = eval_node(arg, x)?;
            apply_fn(*func, v, x)
        }
    }
}

fn apply_fn(func: MathFn, v: f64, x: f64) -> Result<f64, QuadError> {
    let y = match func {
        MathFn::Sqrt => {
            if v < 0.0 {
                return Err(QuadError::domain(x, "square root of a negative number"));
            }
            v.sqrt()
        }
        MathFn::Cbrt => v.cbrt(),
        MathFn::Exp => v.exp(),
        MathFn::Ln => {
            log_guard(v, x)?;
            v.ln()
        }
        MathFn::Log10 => {
            log_guard(v, x)?;
            v.log10()
        }
        MathFn::Log2 => {
            log_guard(v, x)?;
            v.log2()
        }
        MathFn::Sin => v.sin(),
        MathFn::Cos => v.cos(),
        MathFn::Tan => v.tan(),
        MathFn::Asin => {
            if !(-1.0..=1.0).contains(&v) {
                return Err(QuadError::domain(x, "asin argument outside [-1, 1]"));
            }
            v.asin()
        }
        MathFn::Acos => {
            if !(-1.0..=1.0).contains(&v) {
                return Err(QuadError::domain(x, "acos argument outside [-1, 1]"));
            }
            v.acos()
        }
        MathFn::Atan => v.atan(),
        MathFn::Sinh => v.sinh(),
        MathFn::Cosh => v.cosh(),
        MathFn::Tanh => v.tanh(),
        MathFn::Abs => v.abs(),
        MathFn::Floor => v.floor(),
        MathFn::Ceil => v.ceil(),
        MathFn::Round => v.round(),
    };
    if y.is_finite() {
        Ok(y)
    } else {
        Err(QuadError::domain(x, "result is not finite"))
    }
}

fn log_guard(v: f64, x: f64) -> Result<(), QuadError> {
    if v == 0.0 {
        Err(QuadError::domain(x, "logarithm of zero"))
    } else if v < 0.0 {
        Err(QuadError::domain(x, "logarithm of a negative number"))
    } else {
        Ok(())
    }
}
