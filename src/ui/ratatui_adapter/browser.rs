//! Ratatui-based entry browser
//!
//! Implements the `Frontend` trait: owns the terminal, draws the session
//! every cycle and feeds key events back into it.

use super::events::{EventResult, poll_and_handle};
use super::state::ViewState;
use super::theme::Theme;
use super::widgets::{EntryList, HelpBar, SearchBar, StatusBar};
use crate::clipboard::ClipboardSink;
use crate::config::DEFAULT_POLL_INTERVAL;
use crate::session::{Mode, Session};
use crate::ui::error::Result;
use crate::ui::traits::Frontend;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Ratatui-based browser implementation
#[derive(Debug, Clone)]
pub struct RatatuiBrowser {
    theme: Theme,
    poll_interval: Duration,
}

impl RatatuiBrowser {
    /// Create a new ratatui browser
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set how long each cycle waits for input before redrawing
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Render the UI
    ///
    /// Also resizes the list viewport to the space it was given, so the
    /// cursor row is always on screen.
    pub fn render(&self, frame: &mut Frame, session: &Session, view: &mut ViewState) {
        let searching = session.mode() == Mode::Searching;

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if searching { 3 } else { 1 }), // Search bar
                Constraint::Min(3),                                // Entry list
                Constraint::Length(1),                             // Footer
            ])
            .split(frame.area());

        if searching {
            let search_bar = SearchBar::new(&view.search, &self.theme);
            frame.render_widget(search_bar, main_layout[0]);
        }

        // List block borders take one row each side
        let list_area = main_layout[1];
        view.viewport
            .set_height(list_area.height.saturating_sub(2) as usize);
        view.viewport
            .follow(session.cursor(), session.filtered_len());
        let entry_list = EntryList::new(session, &self.theme).offset(view.viewport.offset());
        frame.render_widget(entry_list, list_area);

        // Footer: status on the left, key hints on the right
        let hints = if searching {
            HelpBar::searching_hints()
        } else {
            HelpBar::browsing_hints()
        };
        let help_bar = HelpBar::new(&hints, &self.theme);
        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(help_bar.width() + 1)])
            .split(main_layout[2]);

        frame.render_widget(StatusBar::new(session.status(), &self.theme), footer[0]);
        frame.render_widget(help_bar, footer[1]);
    }

    /// Run the browser event loop until the session quits
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut Session,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<()> {
        let mut view = ViewState::default();

        while !session.should_quit() {
            terminal.draw(|frame| self.render(frame, session, &mut view))?;

            let result = poll_and_handle(session, &mut view, clipboard, self.poll_interval)?;
            if result == EventResult::Quit {
                break;
            }
        }

        tracing::debug!("event loop finished");
        Ok(())
    }
}

impl Default for RatatuiBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for RatatuiBrowser {
    fn run(&self, session: &mut Session, clipboard: &mut dyn ClipboardSink) -> Result<()> {
        // Setup terminal
        let mut terminal = Self::setup_terminal()?;
        tracing::debug!("terminal ready");

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, session, clipboard);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::error!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}
