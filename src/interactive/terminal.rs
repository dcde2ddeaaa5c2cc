//! Terminal display and input tokenizing
//!
//! The terminal writes to an injected sink so the game never touches stdout directly.

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, Write};

/// Banner text shown when a session starts
pub const WELCOME_MESSAGE: &str = "Welcome to Terminal Hacking Game";

/// A raw input line split into its command and arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a raw input line on whitespace
///
/// The first token is the command and the rest are its arguments. Empty or
/// blank input yields an empty command with no arguments.
///
/// # Examples
/// ```
/// use terminal_hacking::interactive::parse_command;
///
/// let parsed = parse_command("hack 192.168.1.1");
/// assert_eq!(parsed.command, "hack");
/// assert_eq!(parsed.args, vec!["192.168.1.1"]);
/// ```
#[must_use]
pub fn parse_command(raw: &str) -> ParsedCommand {
    let mut tokens = raw.split_whitespace().map(str::to_string);
    let command = tokens.next().unwrap_or_default();

    ParsedCommand {
        command,
        args: tokens.collect(),
    }
}

/// Output side of the hacking terminal
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the startup banner
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn display_welcome_message(&mut self) -> io::Result<()> {
        let rule = "═".repeat(62);
        writeln!(self.out, "{}", rule.bright_green())?;
        writeln!(self.out, "  {}", WELCOME_MESSAGE.bright_green().bold())?;
        writeln!(self.out, "  {}", "ROBCO INDUSTRIES (TM) TERMLINK PROTOCOL".green())?;
        writeln!(self.out, "{}", rule.bright_green())?;
        writeln!(self.out, "Type 'help' for a list of commands.")?;
        writeln!(self.out)
    }

    /// Print one line of text
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn print_line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Print the input prompt without a newline
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the sink fails.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{} ", ">".bright_green())?;
        self.out.flush()
    }

    /// Clear the screen and move the cursor home
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Split a raw input line into command and arguments
    #[must_use]
    pub fn parse_command(&self, raw: &str) -> ParsedCommand {
        parse_command(raw)
    }

    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
