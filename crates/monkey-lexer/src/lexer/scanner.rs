//! The scanner that produces tokens from source text.

use super::{Span, Token, TokenKind};

/// A scanner that tokenizes Monkey source code.
///
/// The cursor only ever moves forward. `ch` is the character at `position`,
/// or `None` once the input is exhausted, and `read_position` always points
/// just past it.
pub struct Scanner<'a> {
    source: &'a str,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
        };
        scanner.read_char();
        scanner
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns an [`TokenKind::Eof`]
    /// token with empty text.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.position;

        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, &self.source[start..start], Span::new(start, start));
        };

        self.read_char();

        let kind = match ch {
            // Single-character tokens
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,

            // One or two characters
            '=' => self.scan_equal(),
            '!' => self.scan_bang(),

            // Integers
            '0'..='9' => self.scan_integer(),

            // Identifiers and keywords
            _ if is_ident_start(ch) => self.scan_identifier(start),

            _ => TokenKind::Illegal,
        };

        let end = self.position;
        Token::new(kind, &self.source[start..end], Span::new(start, end))
    }

    fn read_char(&mut self) {
        self.position = self.read_position;
        self.ch = self.source[self.read_position..].chars().next();
        if let Some(ch) = self.ch {
            self.read_position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    // The leading character is already consumed, so `ch` is the lookahead.

    fn scan_equal(&mut self) -> TokenKind {
        if self.ch == Some('=') {
            self.read_char();
            TokenKind::Equal
        } else {
            TokenKind::Assign
        }
    }

    fn scan_bang(&mut self) -> TokenKind {
        if self.ch == Some('=') {
            self.read_char();
            TokenKind::NotEqual
        } else {
            TokenKind::Bang
        }
    }

    fn scan_integer(&mut self) -> TokenKind {
        while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
            self.read_char();
        }
        TokenKind::Integer
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while self.ch.is_some_and(is_ident_continue) {
            self.read_char();
        }

        let name = &self.source[start..self.position];
        TokenKind::keyword(name).unwrap_or(TokenKind::Identifier)
    }
}

/// Checks if a character can start an identifier.
fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier.
fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() { None } else { Some(token) }
    }
}
