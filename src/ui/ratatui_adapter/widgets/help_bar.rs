//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key (e.g., "y", "Enter")
    pub key: String,
    /// Action description (e.g., "yank")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

const SEPARATOR: &str = "  ";

/// Help bar widget that displays keybind hints in the footer
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints while browsing the list
    #[must_use]
    pub fn browsing_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("y", "yank"),
            KeyHint::new("s", "search"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints while editing the search query
    #[must_use]
    pub fn searching_hints() -> Vec<KeyHint> {
        vec![KeyHint::new("Enter", "keep"), KeyHint::new("Esc", "clear")]
    }

    /// Columns needed to draw all hints
    #[must_use]
    pub fn width(&self) -> u16 {
        let chars: usize = self
            .hints
            .iter()
            .map(|h| h.key.chars().count() + 1 + h.action.chars().count())
            .sum::<usize>()
            + SEPARATOR.len() * self.hints.len().saturating_sub(1);
        u16::try_from(chars).unwrap_or(u16::MAX)
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
