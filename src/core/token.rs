// src/core/token.rs

/// Token vocabulary for integrand formulas, e.g. `1 / sqrt(0.5 * x + 1.5)`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals and names
    Number(f64),
    Ident(String),

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Caret, // ^ (also lexed from `**`)

    // Delimiters
    OpenParen,  // (
    CloseParen, // )

    // Special
    Eof,
}

/// A token plus the 1-based column where it starts. Formulas are a
/// single line, so no line number is tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, column: usize) -> Self {
        Self { kind, column }
    }
}

// Display for TokenKind for better error messages
impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number(_) => write!(f, "number"),
            TokenKind::Ident(_) => write!(f, "identifier"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

// Display for full Token (kind plus payload snippet), used by --tokens dumps
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Number(v) => write!(f, "Number({}) @{}", v, self.column),
            TokenKind::Ident(name) => write!(f, "Ident('{}') @{}", name, self.column),
            other => write!(f, "{} @{}", other, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_names() {
        assert_eq!(format!("{}", TokenKind::Caret), "^");
        assert_eq!(format!("{}", TokenKind::Number(2.0)), "number");
        assert_eq!(format!("{}", TokenKind::Eof), "end of input");
    }

    #[test]
    fn token_display_carries_column() {
        let tok = Token::new(TokenKind::Ident("sqrt".into()), 5);
        assert_eq!(format!("{}", tok), "Ident('sqrt') @5");
    }
}
