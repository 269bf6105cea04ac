//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles integer literals, identifiers and keywords.
//!
//! ## Integer Literals
//!
//! Method: `scan_integer`
//!
//! ```text
//! 5         -> Integer("5")
//! 10        -> Integer("10")
//! 007       -> Integer("007")
//! ```
//!
//! The literal is the maximal run of ASCII digits. There is no sign,
//! fraction, exponent or radix prefix; `-5` is `Minus` then `Integer`, and
//! `1.5` is `Integer`, `Illegal(".")`, `Integer`. The text is kept as
//! written; converting it to a number is the parser's job.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: ASCII letter or `_`
//! - Continue: ASCII letter, ASCII digit or `_`
//!
//! The whole run is consumed before classification (maximal munch), then the
//! text is looked up with `TokenKind::keyword`:
//!
//! | Text | Kind |
//! |------|------|
//! | `fn` | `Function` |
//! | `let` | `Let` |
//! | `true` | `True` |
//! | `false` | `False` |
//! | `if` | `If` |
//! | `else` | `Else` |
//! | `return` | `Return` |
//!
//! Matching is exact and case-sensitive: `letter`, `Let` and `iff` are all
//! plain identifiers.

// This module serves as documentation. The actual implementation is in scanner.rs.
