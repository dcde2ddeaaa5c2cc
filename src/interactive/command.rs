//! Session commands

use super::ParsedCommand;

/// A player command understood by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Connect to a target and open a password puzzle
    Hack { target: Option<String> },
    /// Give up on the current puzzle
    Abort,
    Words,
    Hint,
    Guess(String),
    Status,
    Clear,
    Quit,
    /// Blank input
    Empty,
    /// A known command called without its required argument
    Usage(&'static str),
    Unknown(String),
}

impl From<&ParsedCommand> for Command {
    fn from(parsed: &ParsedCommand) -> Self {
        let first_arg = parsed.args.first().cloned();

        match parsed.command.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "help" | "?" => Self::Help,
            "hack" | "ssh" | "connect" => Self::Hack { target: first_arg },
            "abort" | "disconnect" => Self::Abort,
            "words" | "ls" => Self::Words,
            "hint" => Self::Hint,
            "guess" | "enter" => match parsed.args.as_slice() {
                [word] => Self::Guess(word.clone()),
                _ => Self::Usage("guess <word>"),
            },
            "status" => Self::Status,
            "clear" | "cls" => Self::Clear,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(parsed.command.clone()),
        }
    }
}

/// One-line descriptions for the help listing
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("hack [target]", "Connect to a target and start a password puzzle"),
    ("words", "List candidate passwords (duds shown as dots)"),
    ("guess <word>", "Enter a password"),
    ("hint", "Reveal a hint about the password"),
    ("abort", "Disconnect from the current target"),
    ("status", "Show level, score and connection"),
    ("clear", "Clear the screen"),
    ("help", "Show this list"),
    ("quit", "Leave the game"),
];
