//! Recursive-descent parser for integrand formulas with spanned errors.
//!
//! Grammar, loosest to tightest binding:
//! `expr := term {(+|-) term}`, `term := unary {(*|/) unary}`,
//! `unary := (+|-) unary | power`, `power := primary [^ unary]`,
//! `primary := number | x | constant | fn '(' expr ')' | '(' expr ')'`.
//! Power is right-associative and binds tighter than unary minus, so
//! `-x^2` reads as `-(x^2)` and `2^-3` parses without parentheses.

use crate::core::ast::{BinaryOp, Expr, MathFn, NamedConst, UnaryOp};
use crate::core::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    pub message: String,
    pub column: usize,
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at column {}", self.message, self.column)
    }
}

impl std::error::Error for ParserError {}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create new parser instance; ensure trailing EOF token present
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = match tokens.last() {
            Some(t) => !matches!(t.kind, TokenKind::Eof),
            None => true,
        };
        if needs_eof {
            tokens.push(Token::new(TokenKind::Eof, 0));
        }
        Parser { tokens, pos: 0 }
    }

    /// Parses the token stream into a single expression and demands
    /// that nothing is left over.
    pub fn parse(&mut self) -> Result<Expr, ParserError> {
        let expr = self.parse_expression()?;
        if !self.is_at_end() {
            return Err(self.err_here(format!("unexpected {}", self.peek().kind)));
        }
        Ok(expr)
    }

    fn parse_expression(&mut self) -> Result<Expr, ParserError> {
        self.parse_term()
    }

    fn parse_term(&mut self) -> Result<Expr, ParserError> {
        let mut expr = self.parse_factor()?;
        while self.match_token(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = match self.previous().kind {
                TokenKind::Plus => BinaryOp::Add,
                _ => BinaryOp::Sub,
            };
            let right = self.parse_factor()?;
            expr = Expr::new_binary(op, expr, right);
        }
        Ok(expr)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParserError> {
        let mut expr = self.parse_unary()?;
        while self.match_token(&[TokenKind::Star, TokenKind::Slash]) {
            let op = match self.previous().kind {
                TokenKind::Star => BinaryOp::Mul,
                _ => BinaryOp::Div,
            };
            let right = self.parse_unary()?;
            expr = Expr::new_binary(op, expr, right);
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParserError> {
        if self.match_token(&[TokenKind::Minus]) {
            let right = self.parse_unary()?;
            return Ok(Expr::new_unary(UnaryOp::Neg, right));
        }
        // unary plus is a no-op, fold it away
        if self.match_token(&[TokenKind::Plus]) {
            return self.parse_unary();
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, ParserError> {
        let base = self.parse_primary()?;
        if self.match_token(&[TokenKind::Caret]) {
            let exponent = self.parse_unary()?;
            return Ok(Expr::new_binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParserError> {
        let tok = self.advance().clone();
        match tok.kind {
            TokenKind::Number(v) => Ok(Expr::Number(v)),
            TokenKind::Ident(name) => {
                if self.match_token(&[TokenKind::OpenParen]) {
                    let func = MathFn::lookup(&name).ok_or_else(|| {
                        self.err_at(format!("unknown function '{}'", name), tok.column)
                    })?;
                    let arg = self.parse_expression()?;
                    self.consume(TokenKind::CloseParen, "expected ')' after function argument")?;
                    Ok(Expr::new_call(func, arg))
                } else if name == "x" {
                    Ok(Expr::Var)
                } else if let Some(c) = NamedConst::lookup(&name) {
                    Ok(Expr::Constant(c))
                } else {
                    Err(self.err_at(format!("unknown identifier '{}'", name), tok.column))
                }
            }
            TokenKind::OpenParen => {
                let expr = self.parse_expression()?;
                self.consume(TokenKind::CloseParen, "expected ')'")?;
                Ok(expr)
            }
            _ => Err(self.err_at(
                format!("expected a number, 'x', or a function call, found {}", tok.kind),
                tok.column,
            )),
        }
    }

    /* ── Token utils ─────────────────────────────────────── */
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    fn previous(&self) -> &Token {
        if self.pos == 0 {
            &self.tokens[0]
        } else {
            &self.tokens[self.pos - 1]
        }
    }

    fn peek(&self) -> &Token {
        // Safe: we ensure there's always an EOF at the end
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && &self.peek().kind == kind
    }

    fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn consume(&mut self, kind: TokenKind, msg: &str) -> Result<&Token, ParserError> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(self.err_here(msg))
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn err_here(&self, msg: impl Into<String>) -> ParserError {
        self.err_at(msg, self.peek().column)
    }

    fn err_at(&self, msg: impl Into<String>, column: usize) -> ParserError {
        ParserError { message: msg.into(), column }
    }
}
