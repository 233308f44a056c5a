//! UTF-8 safe single-line text input state with cursor management.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    /// Creates an input holding `value` with the cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = value.into();
        let cursor = input.len();
        Self { input, cursor }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Replaces the buffer and places the cursor at the end.
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    /// Terminal column of the cursor relative to the start of the input.
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.input[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            let end = self.cursor + next.len_utf8();
            self.input.drain(self.cursor..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::with_value("h단llo");
        st.move_home();
        st.move_right(); // between h and 단
        st.insert_char('e');
        assert_eq!(st.input(), "he단llo");
        st.move_right(); // step over 단
        st.backspace(); // delete 단
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut st = TextInputState::with_value("530");
        st.move_home();
        st.move_right();
        st.delete();
        assert_eq!(st.input(), "50");
        st.move_end();
        st.delete();
        assert_eq!(st.input(), "50");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut st = TextInputState::with_value("예50");
        assert_eq!(st.cursor_column(), 4);
        st.move_home();
        st.move_right();
        assert_eq!(st.cursor_column(), 2);
    }

    #[test]
    fn set_input_moves_cursor_to_end() {
        let mut st = TextInputState::with_value("");
        st.set_input("50");
        assert_eq!(st.cursor(), 2);
        st.backspace();
        assert_eq!(st.input(), "5");
    }
}
