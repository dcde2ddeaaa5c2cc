//! Interactive terminal game
//!
//! The terminal display, command parsing and the session loop.

mod command;
mod session;
mod terminal;

pub use command::{Command, HELP_ENTRIES};
pub use session::{
    DEFAULT_ATTEMPTS, DEFAULT_TARGET, Flow, MAX_ATTEMPTS, Session, SessionConfig,
};
pub use terminal::{ParsedCommand, Terminal, WELCOME_MESSAGE, parse_command};
