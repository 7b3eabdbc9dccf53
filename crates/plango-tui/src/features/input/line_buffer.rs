//! Single-line text buffer for form fields.
//!
//! The cursor is a byte offset that always sits on a grapheme boundary, so
//! Backspace removes a whole user-perceived character ("é" typed as
//! `e` + combining accent goes away in one press).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// Number of chars before the cursor (used for masked rendering).
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Inserts text at the cursor. Line breaks and other control chars
    /// are dropped; fields are single-line.
    pub fn insert_str(&mut self, text: &str) {
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return;
        }
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Backspace semantics.
    pub fn delete_prev(&mut self) {
        let start = self.prev_boundary();
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Delete key semantics.
    pub fn delete_next(&mut self) {
        let end = self.next_boundary();
        self.text.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Deletes back to the start of the previous word. Whitespace before the
    /// cursor goes with it; punctuation runs count as their own word, so
    /// `user@example.com|` loses `com`, then `.`, then `example`.
    pub fn delete_word_left(&mut self) {
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end();
        let mut start = trimmed.len();
        if let Some(last) = trimmed.chars().next_back() {
            let class = char_class(last);
            for (idx, ch) in trimmed.char_indices().rev() {
                if char_class(ch) != class {
                    break;
                }
                start = idx;
            }
        }
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handles an editing key. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        let before = self.text.len();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Backspace if alt || ctrl => self.delete_word_left(),
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char(ch) if !ctrl && !alt => self.insert_char(ch),
            KeyCode::Backspace => self.delete_prev(),
            KeyCode::Delete => self.delete_next(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => {}
        }

        before != self.text.len()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map_or(0, |(idx, _)| idx)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map_or(self.cursor, |g| self.cursor + g.len())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> LineBuffer {
        let mut buf = LineBuffer::default();
        buf.insert_str(text);
        buf
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut buf = typed("ac");
        buf.move_left();
        assert!(buf.input(key(KeyCode::Char('b'))));
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor, 2);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buf = typed("cafe\u{301}");
        buf.delete_prev();
        assert_eq!(buf.text(), "caf");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut buf = typed("ab");
        buf.move_home();
        assert!(!buf.input(key(KeyCode::Backspace)));
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn delete_removes_next_char() {
        let mut buf = typed("añb");
        buf.move_home();
        buf.move_right();
        assert!(buf.input(key(KeyCode::Delete)));
        assert_eq!(buf.text(), "ab");
        assert!(!buf.input(key(KeyCode::End)));
        assert_eq!(buf.cursor, 2);
    }

    #[test]
    fn paste_strips_line_breaks() {
        let buf = typed("user@\nexample.com\r\n");
        assert_eq!(buf.text(), "user@example.com");
        assert_eq!(buf.cursor, buf.text().len());
    }

    #[test]
    fn delete_word_left_email_segments() {
        let mut buf = typed("user@example.com");
        buf.delete_word_left();
        assert_eq!(buf.text(), "user@example.");
        buf.delete_word_left();
        assert_eq!(buf.text(), "user@example");
        buf.delete_word_left();
        assert_eq!(buf.text(), "user@");
        buf.delete_word_left();
        assert_eq!(buf.text(), "user");
        buf.delete_word_left();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn delete_word_left_eats_trailing_space() {
        let mut buf = typed("hola mundo  ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "hola ");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut buf = typed("secret");
        assert!(buf.input(ctrl('u')));
        assert!(buf.text().is_empty());
        assert!(!buf.input(ctrl('u')));
    }

    #[test]
    fn ctrl_chars_are_not_inserted() {
        let mut buf = typed("ab");
        buf.input(ctrl('a'));
        assert_eq!(buf.cursor, 0);
        buf.input(ctrl('e'));
        assert_eq!(buf.cursor, 2);
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn cursor_metrics() {
        let mut buf = typed("ñb");
        buf.move_left();
        assert_eq!(buf.cursor_chars(), 1);
        assert_eq!(buf.cursor_width(), 1);
        assert_eq!(buf.cursor, 2);
    }
}
