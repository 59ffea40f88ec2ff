//! envlist - browse key/value pairs in the terminal
//!
//! This library provides an interactive list browser for environment
//! variables or the entries of a dotenv file, with substring search and
//! copy-to-clipboard.

use thiserror::Error;

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod session;
pub mod source;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum EnvlistError {
    /// Entries could not be loaded
    #[error(transparent)]
    LoadError(#[from] source::LoadError),
    /// The terminal UI failed
    #[error(transparent)]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
