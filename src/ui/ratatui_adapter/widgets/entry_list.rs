//! Entry list widget for displaying the filtered view

use crate::session::Session;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Entry list widget that highlights the entry under the cursor
pub struct EntryList<'a> {
    /// Session being displayed
    session: &'a Session,
    /// Theme for styling
    theme: &'a Theme,
    /// First visible row
    offset: usize,
    /// Title for the list block
    title: String,
}

impl<'a> EntryList<'a> {
    /// Create a new entry list widget
    #[must_use]
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        let filtered = session.filtered_len();
        let total = session.entries().len();
        let title = format!(" {} ({filtered}/{total}) ", session.source());

        Self {
            session,
            theme,
            offset: 0,
            title,
        }
    }

    /// Start rendering at row `offset` of the filtered view
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Render a single entry
    fn render_entry(&self, text: &'a str, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(text, text_style),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.session.filtered_len() == 0 {
            Paragraph::new(Line::styled("No matching entries", self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let cursor = self.session.cursor();
        let items: Vec<ListItem> = self
            .session
            .filtered()
            .enumerate()
            .skip(self.offset)
            .take(inner.height as usize)
            .map(|(row, entry)| self.render_entry(entry.as_str(), row == cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
