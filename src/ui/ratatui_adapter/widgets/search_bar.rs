//! Search bar widget for query input

use crate::ui::ratatui_adapter::state::SearchInput;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with its caret
pub struct SearchBar<'a> {
    /// Field being edited
    input: &'a SearchInput,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(input: &'a SearchInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let (before, after) = self.input.text().split_at(self.input.caret());

        let line = Line::from(vec![
            Span::styled("Search:", self.theme.dimmed_style()),
            Span::raw(" "),
            Span::raw(before),
            caret,
            Span::raw(after),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
