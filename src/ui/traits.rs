//! Front-end trait

use super::error::Result;
use crate::clipboard::ClipboardSink;
use crate::session::Session;

/// Interactive surface that drives a `Session` until it quits
///
/// # Examples
///
/// ```
/// use envlist::clipboard::ClipboardSink;
/// use envlist::session::Session;
/// use envlist::ui::{Frontend, Result};
///
/// /// Front end that quits immediately
/// struct Headless;
///
/// impl Frontend for Headless {
///     fn run(&self, session: &mut Session, _clipboard: &mut dyn ClipboardSink) -> Result<()> {
///         session.quit();
///         Ok(())
///     }
/// }
/// ```
pub trait Frontend {
    /// Run the interaction loop
    ///
    /// Returns once the session's quit flag is set.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be driven.
    fn run(&self, session: &mut Session, clipboard: &mut dyn ClipboardSink) -> Result<()>;
}
