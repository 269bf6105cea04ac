//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! Only `=` and `!` can begin a two-character token; every other operator
//! and punctuation character maps directly to its own kind.
//!
//! ## Operator Table
//!
//! | Char | Method | Variants |
//! |------|--------|----------|
//! | `=` | `scan_equal` | `=` (`Assign`), `==` (`Equal`) |
//! | `!` | `scan_bang` | `!` (`Bang`), `!=` (`NotEqual`) |
//! | `+` | - | `Plus` |
//! | `-` | - | `Minus` |
//! | `*` | - | `Asterisk` |
//! | `/` | - | `Slash` |
//! | `<` | - | `LessThan` |
//! | `>` | - | `GreaterThan` |
//!
//! ## Punctuation
//!
//! `,` `;` `(` `)` `{` `}` each produce exactly one token of one character.
//!
//! ## Lookahead Logic
//!
//! The scanner consumes the leading character first, so the character under
//! the cursor is the lookahead:
//!
//! ```text
//! // For input "=+"
//! next_token():
//!   consume '='
//!   scan_equal(): cursor is on '+'  -> not '=', emit Assign("=")
//! next_token():
//!   consume '+'                     -> emit Plus("+")
//! ```
//!
//! A two-character operator always wins over its one-character prefix, so
//! `===` scans as `==` followed by `=`.

// This module serves as documentation. The actual implementation is in scanner.rs.
