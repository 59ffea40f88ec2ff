//! envlist application entry point
//!
//! Loads entries from the process environment, or from the dotenv file
//! given as the only argument, and opens the interactive browser.
//!
//! # Usage
//!
//! ```bash
//! # Browse the current environment
//! envlist
//!
//! # Browse a dotenv file
//! envlist .env
//!
//! # Write debug logs to a file while browsing
//! ENVLIST_LOG=/tmp/envlist.log RUST_LOG=debug envlist
//! ```

use colored::Colorize;
use envlist::{
    EnvlistError,
    cli::Cli,
    clipboard::SystemClipboard,
    config::Settings,
    logging,
    session::Session,
    source,
    ui::{Frontend, RatatuiBrowser},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, EnvlistError>;

/// Load entries and run the browser until the user quits
///
/// # Errors
///
/// Returns `EnvlistError` if the log file cannot be opened, the entries
/// cannot be loaded, or the terminal fails.
fn run(settings: &Settings) -> Result<()> {
    let _log_guard = logging::init(settings.log_file.as_deref())?;

    let source = source::source_for(settings.file.as_deref());
    let mut session = Session::from_source(&*source)
        .inspect_err(|e| tracing::error!(error = %e, "failed to load entries"))?
        .with_status_ttl(settings.status_ttl);

    let browser = RatatuiBrowser::new().with_poll_interval(settings.poll_interval);
    let mut clipboard = SystemClipboard::new();
    browser.run(&mut session, &mut clipboard)?;

    tracing::info!("exiting");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let settings = Settings::from_cli(&cli);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
