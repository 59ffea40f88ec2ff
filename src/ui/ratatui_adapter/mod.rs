//! Ratatui-based browser adapter
//!
//! Implements `Frontend` on top of ratatui (widgets) and crossterm
//! (terminal control and key events).
//!
//! - **Entry list** with the cursor row highlighted, scrolled to follow it
//! - **Search field** shown while searching
//! - **Footer** with the status message and key hints

mod browser;
mod state;
mod theme;

pub mod events;
pub mod widgets;

pub use browser::RatatuiBrowser;
pub use state::{SearchInput, ViewState, Viewport};
pub use theme::Theme;
