pub mod commands;
pub mod forms;
pub mod output;
mod shell;

use thiserror::Error;

use crate::errors::ExpenseError;

pub use shell::run_cli;

/// Fatal shell failures that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] ExpenseError),
}

/// Recoverable per-command failure, reported and then ignored.
#[derive(Debug)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ExpenseError> for CommandError {
    fn from(err: ExpenseError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}
