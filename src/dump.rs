// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token dumper: prints the token stream of a piece of Monkey source.

use monkey_lexer::{Scanner, Token, TokenKind};
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};
use std::process::ExitCode;

/// What a dump saw, so the caller can decide how to treat illegal input.
#[derive(Debug, Default)]
pub struct DumpSummary<'a> {
    /// Number of tokens written, not counting end of input
    pub tokens: usize,
    /// Every illegal token, in source order
    pub illegal: Vec<Token<'a>>,
}

impl DumpSummary<'_> {
    /// Returns true if the source scanned without illegal characters.
    pub fn is_clean(&self) -> bool {
        self.illegal.is_empty()
    }

    /// Process exit status for a file or inline dump: failure when any
    /// character was illegal.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Scan `source` and write one line per token to `out`.
pub fn dump_tokens<'a, W: Write>(
    source: &'a str,
    out: &mut W,
    color: bool,
) -> io::Result<DumpSummary<'a>> {
    let mut summary = DumpSummary::default();

    for token in Scanner::new(source) {
        writeln!(out, "{}", render_token(&token, color))?;
        summary.tokens += 1;
        if token.kind == TokenKind::Illegal {
            summary.illegal.push(token);
        }
    }

    tracing::debug!(
        tokens = summary.tokens,
        illegal = summary.illegal.len(),
        bytes = source.len(),
        "scanned source"
    );

    Ok(summary)
}

/// Format a token as `{Type:<NAME> Literal:<text>}`, optionally colored.
pub fn render_token(token: &Token<'_>, color: bool) -> String {
    if !color {
        return token.to_string();
    }

    let style = kind_style(token.kind);
    format!(
        "{{Type:{} Literal:{}}}",
        token.kind.style(style),
        token.text.style(style)
    )
}

/// Terminal style for each token category.
pub fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Illegal => Style::new().red().bold(),
        TokenKind::Eof => Style::new().dimmed(),
        TokenKind::Integer => Style::new().yellow(),
        TokenKind::True | TokenKind::False => Style::new().blue(),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::LeftBrace
        | TokenKind::RightBrace => Style::new().yellow(),
        k if k.is_keyword() => Style::new().magenta().bold(),
        k if k.is_operator() => Style::new().cyan(),
        _ => Style::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_plain(source: &str) -> (String, usize, Vec<String>) {
        let mut out = Vec::new();
        let summary = dump_tokens(source, &mut out, false).unwrap();
        let illegal = summary.illegal.iter().map(|t| t.text.to_string()).collect();
        (String::from_utf8(out).unwrap(), summary.tokens, illegal)
    }

    #[test]
    fn test_dump_let_statement() {
        let (output, count, illegal) = dump_plain("let five = 5;");
        assert_eq!(
            output,
            "{Type:LET Literal:let}\n\
             {Type:IDENT Literal:five}\n\
             {Type:= Literal:=}\n\
             {Type:INT Literal:5}\n\
             {Type:; Literal:;}\n"
        );
        assert_eq!(count, 5);
        assert!(illegal.is_empty());
    }

    #[test]
    fn test_dump_empty_source() {
        let (output, count, _) = dump_plain("   \n");
        assert!(output.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_dump_collects_illegal_tokens() {
        let (output, count, illegal) = dump_plain("1 @ 2 # 3");
        assert_eq!(count, 5);
        assert_eq!(illegal, vec!["@", "#"]);
        assert!(output.contains("{Type:ILLEGAL Literal:@}"));
        assert!(output.ends_with("{Type:INT Literal:3}\n"));
    }

    #[test]
    fn test_colored_render_keeps_text() {
        let mut scanner = Scanner::new("return");
        let token = scanner.next_token();
        let rendered = render_token(&token, true);
        assert!(rendered.contains("RETURN"));
        assert!(rendered.contains("return"));
        assert_ne!(rendered, render_token(&token, false));
    }

    #[test]
    fn test_summary_is_clean() {
        let mut out = Vec::new();
        assert!(dump_tokens("x + y", &mut out, false).unwrap().is_clean());
        assert!(!dump_tokens("x % y", &mut out, false).unwrap().is_clean());
    }

    #[test]
    fn test_exit_code_follows_illegal_tokens() {
        let mut out = Vec::new();

        let clean = dump_tokens("let five = 5;", &mut out, false).unwrap();
        assert_eq!(clean.exit_code(), ExitCode::SUCCESS);

        let dirty = dump_tokens("let five = 5 @;", &mut out, false).unwrap();
        assert_eq!(dirty.exit_code(), ExitCode::FAILURE);

        let empty = dump_tokens("", &mut out, false).unwrap();
        assert_eq!(empty.exit_code(), ExitCode::SUCCESS);
    }
}
