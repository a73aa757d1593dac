//! The host editor as seen by the plugin.

use kana_session::Position;

/// Document and cursor access the host editor provides.
pub trait Editor {
    /// Full document text.
    fn value(&self) -> String;

    fn cursor(&self) -> Position;

    /// Text of one line, without its line break.
    fn line(&self, line: usize) -> Option<String>;

    /// Replace `from..to` with `text`. Both positions are on existing lines.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);
}

/// In-memory editor: a string plus a cursor.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: Position,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        let mut buf = Self {
            text: text.to_string(),
            cursor: Position::default(),
        };
        buf.cursor = buf.end();
        buf
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insert `s` at the cursor and move the cursor past it.
    pub fn insert(&mut self, s: &str) {
        let at = self.offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor = self.position_of(at + s.len());
    }

    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }

    /// Position just past the last character.
    pub fn end(&self) -> Position {
        self.position_of(self.text.len())
    }

    fn position_of(&self, byte: usize) -> Position {
        let before = &self.text[..byte];
        let line = before.matches('\n').count();
        let ch = before.rsplit('\n').next().unwrap_or("").chars().count();
        Position::new(line, ch)
    }

    /// Byte offset of `pos`, clamped to the end of its line.
    fn offset(&self, pos: Position) -> usize {
        let mut start = 0;
        for _ in 0..pos.line {
            match self.text[start..].find('\n') {
                Some(i) => start += i + 1,
                None => return self.text.len(),
            }
        }
        let line = self.text[start..].split('\n').next().unwrap_or("");
        start
            + line
                .char_indices()
                .nth(pos.ch)
                .map(|(i, _)| i)
                .unwrap_or(line.len())
    }
}

impl Editor for TextBuffer {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn line(&self, line: usize) -> Option<String> {
        self.text.split('\n').nth(line).map(str::to_string)
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let cursor = self.offset(self.cursor);
        let start = self.offset(from);
        let end = self.offset(to);
        self.text.replace_range(start..end, text);

        let moved = if cursor >= end {
            cursor - (end - start) + text.len()
        } else {
            cursor.min(start + text.len())
        };
        self.cursor = self.position_of(moved);
    }
}
