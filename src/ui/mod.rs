//! Terminal front end
//!
//! The session knows nothing about terminals. This module draws it with
//! ratatui, reads keys with crossterm and maps them onto session
//! operations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │           Session            │
//! │  (entries, view, cursor,     │
//! │   mode, status)              │
//! └──────────────┬───────────────┘
//!                │ driven by
//!                ▼
//! ┌──────────────────────────────┐
//! │      Frontend trait          │
//! └──────────────┬───────────────┘
//!                │ implemented by
//!                ▼
//! ┌──────────────────────────────┐
//! │  RatatuiBrowser              │
//! │  - events: keys → operations │
//! │  - widgets: list, search,    │
//! │    status, hints             │
//! └──────────────────────────────┘
//! ```

mod error;
mod traits;

pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::RatatuiBrowser;
pub use traits::Frontend;
