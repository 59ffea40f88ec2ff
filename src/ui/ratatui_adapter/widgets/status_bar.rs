//! Status line widget

use crate::session::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// One-line status area showing the session's current message
pub struct StatusBar<'a> {
    /// Message to show, if any
    message: Option<&'a StatusMessage>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.message {
            Paragraph::new(Line::styled(msg.text.as_str(), self.theme.status_style()))
                .render(area, buf);
        }
    }
}
