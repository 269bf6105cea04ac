// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # monkey-lexer
//!
//! A lexical scanner for the Monkey programming language.
//!
//! ## Overview
//!
//! Monkey is a small, C-like scripting language. This crate turns Monkey
//! source text into an ordered sequence of typed tokens for a parser:
//! - Identifiers and the keywords `fn`, `let`, `true`, `false`, `if`,
//!   `else` and `return`
//! - Integer literals
//! - Operators, including the two-character `==` and `!=`
//! - Punctuation
//!
//! Scanning never fails. Unrecognized characters come back as
//! [`TokenKind::Illegal`] tokens and the end of input is an ordinary
//! [`TokenKind::Eof`] token, returned again on every later call.
//!
//! ## Quick Start
//!
//! ```rust
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.text, "let");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lexer;

// Re-exports for convenience
pub use lexer::{Scanner, Span, Token, TokenKind};
