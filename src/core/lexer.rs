// lexer.rs

use std::fmt;
use std::str::CharIndices;
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::core::token::{Token, TokenKind};

/// Lexer error types with the 1-based column where lexing stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum LexerError {
    UnexpectedCharacter(char, usize),
    InvalidNumber(String, usize),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::UnexpectedCharacter(ch, col) => {
                write!(f, "unexpected character '{}' at column {}", ch, col)
            }
            LexerError::InvalidNumber(text, col) => {
                write!(f, "invalid number literal '{}' at column {}", text, col)
            }
        }
    }
}

impl std::error::Error for LexerError {}

/// Single-line formula lexer. Tracks the current char and its column;
/// byte indices are kept so literals can be sliced out of the source.
pub struct Lexer<'a> {
    src: &'a str,
    chars: CharIndices<'a>,
    current: Option<(usize, char)>,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut chars = src.char_indices();
        let current = chars.next();
        Self { src, chars, current, column: 1 }
    }

    /// Tokenizes the whole formula. The returned stream always ends
    /// with a single `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let (idx, ch) = match self.current {
                Some(c) => c,
                None => {
                    tokens.push(Token::new(TokenKind::Eof, self.column));
                    return Ok(tokens);
                }
            };
            let column = self.column;
            let kind = match ch {
                '0'..='9' => self.lex_number(idx, column)?,
                '.' if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) => {
                    self.lex_number(idx, column)?
                }
                c if is_xid_start(c) => self.lex_identifier(idx),
                '+' => {
                    self.advance();
                    TokenKind::Plus
                }
                '-' => {
                    self.advance();
                    TokenKind::Minus
                }
                '*' => {
                    self.advance();
                    // `**` is accepted as a power alias for `^`
                    if self.current_char() == Some('*') {
                        self.advance();
                        TokenKind::Caret
                    } else {
                        TokenKind::Star
                    }
                }
                '/' => {
                    self.advance();
                    TokenKind::Slash
                }
                '^' => {
                    self.advance();
                    TokenKind::Caret
                }
                '(' => {
                    self.advance();
                    TokenKind::OpenParen
                }
                ')' => {
                    self.advance();
                    TokenKind::CloseParen
                }
                other => return Err(LexerError::UnexpectedCharacter(other, column)),
            };
            tokens.push(Token::new(kind, column));
        }
    }

    fn lex_number(&mut self, start: usize, start_column: usize) -> Result<TokenKind, LexerError> {
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.current_char() == Some('.') {
            self.advance();
            while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        // Exponent only when a digit actually follows, so `2e` stays
        // `2` + identifier `e` instead of half an exponent.
        if matches!(self.current_char(), Some('e') | Some('E')) && self.exponent_follows() {
            self.advance();
            if matches!(self.current_char(), Some('+') | Some('-')) {
                self.advance();
            }
            while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let text = &self.src[start..self.current_index()];
        let value: f64 = text
            .parse()
            .map_err(|_| LexerError::InvalidNumber(text.to_string(), start_column))?;
        Ok(TokenKind::Number(value))
    }

    fn lex_identifier(&mut self, start: usize) -> TokenKind {
        self.advance();
        while matches!(self.current_char(), Some(c) if is_xid_continue(c)) {
            self.advance();
        }
        TokenKind::Ident(self.src[start..self.current_index()].to_string())
    }

    fn exponent_follows(&self) -> bool {
        let mut probe = self.chars.clone();
        match probe.next() {
            Some((_, c)) if c.is_ascii_digit() => true,
            Some((_, '+')) | Some((_, '-')) => {
                matches!(probe.next(), Some((_, d)) if d.is_ascii_digit())
            }
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.current = self.chars.next();
        self.column += 1;
    }

    fn current_char(&self) -> Option<char> {
        self.current.map(|(_, c)| c)
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn current_index(&self) -> usize {
        self.current.map(|(i, _)| i).unwrap_or(self.src.len())
    }
}
