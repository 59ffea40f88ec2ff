//! Entry loading errors
//!
//! Any of these aborts startup; a session is never built from a source
//! that failed to load.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading entries
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dotenv file could not be read or parsed
    #[error("Error reading env file {}: {source}", path.display())]
    Read {
        /// File that failed to load
        path: PathBuf,
        /// Underlying reader or parser error
        #[source]
        source: dotenvy::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
