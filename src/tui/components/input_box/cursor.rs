//! Cursor position tracking for the single-line name field.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll (in
//! display columns). All methods accept `buffer: &str` explicitly; the text
//! is owned by `InputBox`, keeping the dependency visible.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column (0 when the text fits)
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Reset cursor to start (used after a successful add clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll = 0;
    }

    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Keep the cursor inside a window `width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, width: usize) {
        if width == 0 {
            self.scroll = 0;
            return;
        }
        let column = self.column(buffer);
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            self.scroll = column + 1 - width;
        }
    }

    /// The slice of `buffer` visible at the current scroll, at most `width` columns.
    pub fn visible<'a>(&self, buffer: &'a str, width: usize) -> &'a str {
        let mut column = 0;
        let mut start = buffer.len();
        let mut end = buffer.len();
        for (idx, c) in buffer.char_indices() {
            if column >= self.scroll && start == buffer.len() {
                start = idx;
            }
            let w = c.width().unwrap_or(0);
            if start != buffer.len() && column + w > self.scroll + width {
                end = idx;
                break;
            }
            column += w;
        }
        &buffer[start.min(end)..end]
    }
}

/// Byte offset of the char boundary before `pos`.
pub(super) fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

/// Byte offset of the char boundary after `pos`.
pub(super) fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}
