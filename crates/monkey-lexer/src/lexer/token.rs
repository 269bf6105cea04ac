//! Token definitions for the Monkey lexer.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the lexer.
///
/// `text` borrows the exact slice of source the token was scanned from.
/// It is empty only for [`TokenKind::Eof`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of the token
    pub text: &'a str,
    /// The span in the source code
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.text)
    }
}

/// The different kinds of tokens in Monkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// End of input
    Eof,
    /// Unrecognized character
    Illegal,

    // Identifiers and literals
    /// Identifier
    Identifier,
    /// Integer literal
    Integer,

    // Operators
    /// =
    Assign,
    /// +
    Plus,
    /// -
    Minus,
    /// !
    Bang,
    /// *
    Asterisk,
    /// /
    Slash,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// ==
    Equal,
    /// !=
    NotEqual,

    // Punctuation
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,

    // Keywords
    /// fn
    Function,
    /// let
    Let,
    /// true
    True,
    /// false
    False,
    /// if
    If,
    /// else
    Else,
    /// return
    Return,
}

impl TokenKind {
    /// Every keyword kind, in catalog order.
    pub const KEYWORDS: &'static [TokenKind] = &[
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    /// Looks up a keyword by its exact, case-sensitive text.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        match ident {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::True | TokenKind::False)
    }

    /// Returns true if this token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::Equal
                | TokenKind::NotEqual
        )
    }

    /// Returns the fixed source text of this kind, if it has one.
    ///
    /// Identifiers, integers, illegal characters and end of input have no
    /// canonical spelling.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Eof | TokenKind::Illegal | TokenKind::Identifier | TokenKind::Integer => {
                return None;
            }
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        };
        Some(symbol)
    }

    /// Returns the catalog name of this kind, as shown by token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            // Operators and punctuation are named by their symbol
            other => other.symbol().unwrap_or("?"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: &[TokenKind] = &[
        TokenKind::Eof,
        TokenKind::Illegal,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        let empty = Span::new(5, 5);
        let non_empty = Span::new(5, 10);

        assert!(empty.is_empty());
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn test_token_new() {
        let token = Token::new(TokenKind::Integer, "42", Span::new(0, 2));
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!(token.text, "42");
        assert_eq!(token.span, Span::new(0, 2));
        assert!(!token.is_eof());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Let, "let", Span::new(0, 3));
        assert_eq!(token.to_string(), "{Type:LET Literal:let}");

        let eof = Token::new(TokenKind::Eof, "", Span::new(3, 3));
        assert_eq!(eof.to_string(), "{Type:EOF Literal:}");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("fn"), Some(TokenKind::Function));
        assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::keyword("false"), Some(TokenKind::False));
        assert_eq!(TokenKind::keyword("if"), Some(TokenKind::If));
        assert_eq!(TokenKind::keyword("else"), Some(TokenKind::Else));
        assert_eq!(TokenKind::keyword("return"), Some(TokenKind::Return));
    }

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(TokenKind::keyword("Let"), None);
        assert_eq!(TokenKind::keyword("letter"), None);
        assert_eq!(TokenKind::keyword("le"), None);
        assert_eq!(TokenKind::keyword("function"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn test_keyword_list_matches_lookup() {
        let keywords: Vec<_> = ALL_KINDS.iter().filter(|k| k.is_keyword()).copied().collect();
        assert_eq!(keywords, TokenKind::KEYWORDS);

        for kind in TokenKind::KEYWORDS {
            let symbol = kind.symbol().unwrap();
            assert_eq!(TokenKind::keyword(symbol), Some(*kind));
        }
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::Integer.is_literal());
        assert!(TokenKind::True.is_literal());
        assert!(TokenKind::False.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::Let.is_literal());
        assert!(!TokenKind::Eof.is_literal());
    }

    #[test]
    fn test_categories_are_disjoint_for_operators() {
        for kind in ALL_KINDS {
            if kind.is_operator() {
                assert!(!kind.is_keyword(), "{kind:?}");
                assert!(!kind.is_literal(), "{kind:?}");
            }
        }
    }

    #[test]
    fn test_symbol_absent_for_variable_text() {
        assert_eq!(TokenKind::Eof.symbol(), None);
        assert_eq!(TokenKind::Illegal.symbol(), None);
        assert_eq!(TokenKind::Identifier.symbol(), None);
        assert_eq!(TokenKind::Integer.symbol(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::Identifier.name(), "IDENT");
        assert_eq!(TokenKind::Integer.name(), "INT");
        assert_eq!(TokenKind::Function.name(), "FUNCTION");
        assert_eq!(TokenKind::NotEqual.name(), "!=");
        assert_eq!(TokenKind::LeftBrace.to_string(), "{");
        for kind in ALL_KINDS {
            assert_ne!(kind.name(), "?");
        }
    }
}
