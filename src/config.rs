//! Runtime settings for envlist
//!
//! There is no configuration file. Settings come from the command line,
//! one optional environment variable for the log file, and defaults.

use crate::cli::Cli;
use crate::session::DEFAULT_STATUS_TTL;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming a file to write logs to
pub const LOG_FILE_VAR: &str = "ENVLIST_LOG";

/// How long the event loop waits for input before redrawing
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Settings for one run of the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dotenv file to browse; `None` browses the process environment
    pub file: Option<PathBuf>,
    /// Lifetime of status messages
    pub status_ttl: Duration,
    /// Input poll timeout of the event loop
    pub poll_interval: Duration,
    /// Where to write logs; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: None,
            status_ttl: DEFAULT_STATUS_TTL,
            poll_interval: DEFAULT_POLL_INTERVAL,
            log_file: None,
        }
    }
}

impl Settings {
    /// Build settings from parsed arguments and the process environment
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::from_parts(cli, std::env::var_os(LOG_FILE_VAR))
    }

    /// Build settings from parsed arguments and an explicit log variable value
    #[must_use]
    pub fn from_parts(cli: &Cli, log_var: Option<OsString>) -> Self {
        Self {
            file: cli.file.clone(),
            log_file: log_var.filter(|v| !v.is_empty()).map(PathBuf::from),
            ..Self::default()
        }
    }
}
