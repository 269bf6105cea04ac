// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Lex-Print Loop) for the Monkey lexer.

use crate::dump::{self, kind_style};
use crate::error::{CliError, Result};
use monkey_lexer::{Scanner, TokenKind};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// REPL configuration constants
const HISTORY_FILE: &str = ".monkey_history";
const MAX_HISTORY_SIZE: usize = 1000;
const PROMPT: &str = ">> ";

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let command = input.trim().strip_prefix('.')?;

        let mut parts = command.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Print the tokens of a Monkey file"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
struct MonkeyHelper {
    /// Keywords and REPL commands for completion
    words: Vec<&'static str>,
    /// Whether to syntax-highlight the input line
    color: bool,
}

impl MonkeyHelper {
    fn new(color: bool) -> Self {
        let keywords = TokenKind::KEYWORDS.iter().filter_map(|kind| kind.symbol());
        let commands = [".help", ".exit", ".clear", ".version", ".load"];

        Self {
            words: keywords.chain(commands).collect(),
            color,
        }
    }

    fn candidates<'w>(&'w self, word: &'w str) -> impl Iterator<Item = &'static str> + 'w {
        self.words
            .iter()
            .copied()
            .filter(move |w| w.starts_with(word) && w.len() > word.len())
    }
}

/// Byte offset where the word ending at `pos` starts.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
        .map(|i| i + 1)
        .unwrap_or(0)
}

impl Completer for MonkeyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .candidates(word)
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for MonkeyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.candidates(word)
            .next()
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for MonkeyHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.color {
            return Cow::Borrowed(line);
        }
        if ReplCommand::parse(line).is_some() {
            return Cow::Owned(line.magenta().to_string());
        }
        Cow::Owned(highlight_source(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.color
    }
}

/// Color every token of `line`, keeping the whitespace between them.
fn highlight_source(line: &str) -> String {
    let mut result = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in Scanner::new(line) {
        result.push_str(&line[last..token.span.start]);
        result.push_str(&token.text.style(kind_style(token.kind)).to_string());
        last = token.span.end;
    }
    result.push_str(&line[last..]);

    result
}

impl Validator for MonkeyHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();

        if ReplCommand::parse(input).is_some() || !needs_more_input(input) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Check whether the input leaves a `(` or `{` unclosed.
fn needs_more_input(input: &str) -> bool {
    let mut depth: i32 = 0;

    for token in Scanner::new(input) {
        match token.kind {
            TokenKind::LeftParen | TokenKind::LeftBrace => depth += 1,
            TokenKind::RightParen | TokenKind::RightBrace => {
                depth -= 1;
                if depth < 0 {
                    // Let the downstream consumer report the stray closer
                    return false;
                }
            }
            _ => {}
        }
    }

    depth > 0
}

impl Helper for MonkeyHelper {}

/// The interactive REPL for the Monkey lexer
pub struct Repl {
    editor: Editor<MonkeyHelper, DefaultHistory>,
    history_path: PathBuf,
    color: bool,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(color: bool) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(MonkeyHelper::new(color)));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("monkey")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::debug!(path = %parent.display(), error = %e, "cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            tracing::debug!(path = %history_path.display(), error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            color,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.lex_and_print(trimmed);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::warn!(path = %self.history_path.display(), error = %e, "failed to save history");
        }

        Ok(())
    }

    fn print_banner(&self) {
        println!(
            "Hello {}! This is the {} programming language!",
            current_user().bright_green().bold(),
            "Monkey".bright_cyan().bold()
        );
        println!("Feel free to type in commands");
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                crate::print_version();
                CommandResult::Continue
            }
            ReplCommand::Load => {
                if let Some(path) = arg {
                    self.load_file(Path::new(path));
                } else {
                    eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    );
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:16} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Ctrl+L".yellow(), "Clear screen".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn load_file(&self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(source) => self.lex_and_print(&source),
            Err(e) => crate::print_error(&CliError::io(path, e)),
        }
    }

    fn lex_and_print(&self, source: &str) {
        let mut stdout = std::io::stdout().lock();
        match dump::dump_tokens(source, &mut stdout, self.color) {
            Ok(summary) => {
                for token in &summary.illegal {
                    tracing::warn!(offset = token.span.start, text = token.text, "illegal character");
                }
            }
            Err(e) => crate::print_error(&CliError::from(e)),
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

/// Name of the user running the REPL, for the greeting.
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}
