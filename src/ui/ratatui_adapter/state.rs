//! Presentation state for the ratatui front end
//!
//! The `Session` owns the browser's logical state. What lives here is
//! purely about drawing it: the text field being edited while searching
//! and the scroll position of the entry list.

/// Single-line text field with an insertion caret
///
/// The caret is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    caret: usize,
}

impl SearchInput {
    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position as a byte offset into `text`
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Insert a character at the caret
    pub fn push(&mut self, c: char) {
        self.text.insert(self.caret, c);
        self.caret += c.len_utf8();
    }

    /// Remove the character before the caret
    ///
    /// Returns whether the text changed.
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let prev = self.text[..self.caret]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.text.remove(prev);
        self.caret = prev;
        true
    }

    /// Remove the character under the caret
    ///
    /// Returns whether the text changed.
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        self.text.remove(self.caret);
        true
    }

    /// Move the caret one character left
    pub fn left(&mut self) {
        if self.caret > 0 {
            self.caret = self.text[..self.caret]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the caret one character right
    pub fn right(&mut self) {
        if self.caret < self.text.len() {
            self.caret = self.text[self.caret..]
                .char_indices()
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.caret + i);
        }
    }

    /// Move the caret to the start
    pub const fn home(&mut self) {
        self.caret = 0;
    }

    /// Move the caret past the last character
    pub fn end(&mut self) {
        self.caret = self.text.len();
    }

    /// Empty the field
    ///
    /// Returns whether the text changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.caret = 0;
        changed
    }
}

/// Scroll window over the entry list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        // Real height is set on the first render
        Self {
            offset: 0,
            height: 20,
        }
    }
}

impl Viewport {
    /// First visible row
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Update the number of visible rows
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// Adjust the offset so `cursor` is visible in a list of `len` rows
    pub fn follow(&mut self, cursor: usize, len: usize) {
        self.offset = self.offset.min(len.saturating_sub(self.height));
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + self.height {
            self.offset = cursor + 1 - self.height;
        }
    }
}

/// Everything the renderer keeps between frames
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Search field contents
    pub search: SearchInput,
    /// Entry list scroll window
    pub viewport: Viewport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_input_editing() {
        let mut input = SearchInput::default();

        for c in "hello".chars() {
            input.push(c);
        }
        assert_eq!(input.text(), "hello");
        assert_eq!(input.caret(), 5);

        assert!(input.backspace());
        assert_eq!(input.text(), "hell");
        assert_eq!(input.caret(), 4);

        input.left();
        input.left();
        assert_eq!(input.caret(), 2);

        input.push('y');
        assert_eq!(input.text(), "heyll");

        assert!(input.delete());
        assert_eq!(input.text(), "heyl");

        input.end();
        assert!(!input.delete());

        input.home();
        assert!(!input.backspace());

        assert!(input.clear());
        assert!(input.text().is_empty());
        assert_eq!(input.caret(), 0);
        assert!(!input.clear());
    }

    #[test]
    fn test_search_input_multibyte() {
        let mut input = SearchInput::default();
        input.push('ä');
        input.push('b');
        assert_eq!(input.caret(), 3);

        input.left();
        input.left();
        assert_eq!(input.caret(), 0);

        input.right();
        assert_eq!(input.caret(), 2);

        input.end();
        assert!(input.backspace());
        assert!(input.backspace());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let mut viewport = Viewport::default();
        viewport.set_height(5);

        viewport.follow(0, 100);
        assert_eq!(viewport.offset(), 0);

        viewport.follow(4, 100);
        assert_eq!(viewport.offset(), 0);

        viewport.follow(5, 100);
        assert_eq!(viewport.offset(), 1);

        viewport.follow(50, 100);
        assert_eq!(viewport.offset(), 46);

        viewport.follow(10, 100);
        assert_eq!(viewport.offset(), 10);
    }

    #[test]
    fn test_viewport_clamps_after_shrink() {
        let mut viewport = Viewport::default();
        viewport.set_height(5);
        viewport.follow(50, 100);
        assert_eq!(viewport.offset(), 46);

        // Filter shrank the list to 3 rows
        viewport.follow(0, 3);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_viewport_height_never_zero() {
        let mut viewport = Viewport::default();
        viewport.set_height(0);

        // One row still scrolls with the cursor
        viewport.follow(3, 10);
        assert_eq!(viewport.offset(), 3);
    }
}
