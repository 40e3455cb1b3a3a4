// src/core/ast.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Parsed integrand formula. `Var` is the integration variable `x`;
/// there are no other bindings, so evaluation needs no environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var,
    Constant(NamedConst),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: MathFn,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn new_unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary { op, operand: Box::new(operand) }
    }
    pub fn new_binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }
    pub fn new_call(func: MathFn, arg: Expr) -> Self {
        Expr::Call { func, arg: Box::new(arg) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Named mathematical constants usable in formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedConst {
    Pi,
    E,
}

impl NamedConst {
    pub fn lookup(name: &str) -> Option<NamedConst> {
        match name {
            "pi" => Some(NamedConst::Pi),
            "e" => Some(NamedConst::E),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            NamedConst::Pi => std::f64::consts::PI,
            NamedConst::E => std::f64::consts::E,
        }
    }
}

/// The closed set of callable functions. Every entry takes exactly one
/// argument; anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFn {
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    Log10,
    Log2,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Abs,
    Floor,
    Ceil,
    Round,
}

static MATH_FNS: Lazy<HashMap<&'static str, MathFn>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("sqrt", MathFn::Sqrt);
    m.insert("cbrt", MathFn::Cbrt);
    m.insert("exp", MathFn::Exp);
    m.insert("ln", MathFn::Ln);
    m.insert("log", MathFn::Ln); // natural log alias
    m.insert("log10", MathFn::Log10);
    m.insert("log2", MathFn::Log2);
    m.insert("sin", MathFn::Sin);
    m.insert("cos", MathFn::Cos);
    m.insert("tan", MathFn::Tan);
    m.insert("asin", MathFn::Asin);
    m.insert("acos", MathFn::Acos);
    m.insert("atan", MathFn::Atan);
    m.insert("sinh", MathFn::Sinh);
    m.insert("cosh", MathFn::Cosh);
    m.insert("tanh", MathFn::Tanh);
    m.insert("abs", MathFn::Abs);
    m.insert("floor", MathFn::Floor);
    m.insert("ceil", MathFn::Ceil);
    m.insert("round", MathFn::Round);
    m
});

impl MathFn {
    pub fn lookup(name: &str) -> Option<MathFn> {
        MATH_FNS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            MathFn::Sqrt => "sqrt",
            MathFn::Cbrt => "cbrt",
            MathFn::Exp => "exp",
            MathFn::Ln => "ln",
            MathFn::Log10 => "log10",
            MathFn::Log2 => "log2",
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Asin => "asin",
            MathFn::Acos => "acos",
            MathFn::Atan => "atan",
            MathFn::Sinh => "sinh",
            MathFn::Cosh => "cosh",
            MathFn::Tanh => "tanh",
            MathFn::Abs => "abs",
            MathFn::Floor => "floor",
            MathFn::Ceil => "ceil",
            MathFn::Round => "round",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_an_alias_for_ln() {
        assert_eq!(MathFn::lookup("log"), Some(MathFn::Ln));
        assert_eq!(MathFn::lookup("ln"), Some(MathFn::Ln));
        assert_eq!(MathFn::lookup("log").unwrap().name(), "ln");
    }

    #[test]
    fn unknown_names_miss_the_table() {
        assert_eq!(MathFn::lookup("sgrt"), None);
        assert_eq!(NamedConst::lookup("tau"), None);
    }

    #[test]
    fn constants_resolve() {
        assert_eq!(NamedConst::lookup("pi").unwrap().value(), std::f64::consts::PI);
        assert_eq!(NamedConst::lookup("e").unwrap().value(), std::f64::consts::E);
    }
}
