//! Command-line interface definition
//!
//! envlist takes at most one positional argument: the path of a
//! dotenv-style file. Without it the process environment is browsed.
//!
//! # Examples
//!
//! ```
//! use envlist::cli::Cli;
//!
//! let cli = Cli::parse_from_args(["envlist", ".env"]);
//! assert_eq!(cli.file.as_deref(), Some(std::path::Path::new(".env")));
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Browse environment variables or a dotenv file
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "envlist", version, about, long_about = None)]
#[command(after_help = "KEYS:\n  j/k, ↑/↓  move\n  s         search (Enter keeps the filter, Esc drops it)\n  y         copy entry to clipboard\n  q, ctrl-c quit")]
pub struct Cli {
    /// Dotenv-style file to browse instead of the process environment
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments from the process
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }
}
