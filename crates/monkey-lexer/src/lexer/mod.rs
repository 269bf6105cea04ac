//! Lexical analysis (tokenization) for Monkey source code.
//!
//! The lexer transforms Monkey source text into a stream of tokens
//! that can be consumed by the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Span` definitions
//!
//! ## Documentation Submodules
//!
//! - `operators` - One- and two-character operator scanning
//! - `literals` - Integer and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use monkey_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let x = 42;");
//!
//! loop {
//!     let token = scanner.next_token();
//!     if token.kind == TokenKind::Eof {
//!         break;
//!     }
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! ```

mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
