use ratatui::layout::Rect;
use std::cmp;

/// Minimal multi-line text editor backing the check-in note field.
/// Cursor positions are character offsets, not byte offsets.
#[derive(Debug, Clone)]
pub struct Editor {
    pub lines: Vec<String>,
    pub cursor_line: usize,
    pub cursor_col: usize,
    /// Vertical scroll (first visible line).
    pub scroll_offset: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
            scroll_offset: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.is_empty())
    }

    fn current_line_len(&self) -> usize {
        self.lines
            .get(self.cursor_line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }

        if self.lines.is_empty() {
            self.lines.push(String::new());
            self.cursor_line = 0;
        }
        if self.cursor_line >= self.lines.len() {
            self.cursor_line = self.lines.len() - 1;
        }

        let line = &mut self.lines[self.cursor_line];
        let col = cmp::min(self.cursor_col, line.chars().count());
        let mut chars: Vec<char> = line.chars().collect();
        chars.insert(col, ch);
        *line = chars.into_iter().collect();
        self.cursor_col = col + 1;
    }

    pub fn insert_newline(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
            self.cursor_line = 0;
        }

        let line = &mut self.lines[self.cursor_line];
        let col = cmp::min(self.cursor_col, line.chars().count());
        let chars: Vec<char> = line.chars().collect();
        let remainder: String = chars[col..].iter().collect();
        *line = chars[..col].iter().collect();
        self.lines.insert(self.cursor_line + 1, remainder);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    /// Insert a chunk of text (clipboard paste), honoring newlines.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\r' {
                continue;
            }
            self.insert_char(ch);
        }
    }

    /// Backspace: delete the character before the cursor, merging with
    /// the previous line at column zero.
    pub fn delete_char(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_line];
            let col = cmp::min(self.cursor_col, line.chars().count());
            if col > 0 {
                let mut chars: Vec<char> = line.chars().collect();
                chars.remove(col - 1);
                *line = chars.into_iter().collect();
                self.cursor_col = col - 1;
            }
        } else if self.cursor_line > 0 && self.cursor_line < self.lines.len() {
            let current = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            let prev = &mut self.lines[self.cursor_line];
            self.cursor_col = prev.chars().count();
            prev.push_str(&current);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.current_line_len();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_col < self.current_line_len() {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = cmp::min(self.cursor_col, self.current_line_len());
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = cmp::min(self.cursor_col, self.current_line_len());
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_col = self.current_line_len();
    }

    /// Keep the cursor line inside the viewport.
    pub fn update_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.cursor_line < self.scroll_offset {
            self.scroll_offset = self.cursor_line;
        } else if self.cursor_line >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor_line + 1 - viewport_height;
        }
    }

    /// Lines currently in the viewport, truncated to the content width.
    pub fn visible_lines(&self, viewport_height: usize, content_width: usize) -> Vec<String> {
        let start = cmp::min(self.scroll_offset, self.lines.len());
        let end = cmp::min(start + viewport_height, self.lines.len());
        self.lines[start..end]
            .iter()
            .map(|line| line.chars().take(content_width).collect())
            .collect()
    }

    /// Screen position for the cursor inside a bordered area, or `None`
    /// when the cursor is scrolled out of view.
    pub fn cursor_screen_pos(&self, area: Rect) -> Option<(u16, u16)> {
        let viewport_height = area.height.saturating_sub(2) as usize;
        if self.cursor_line < self.scroll_offset
            || self.cursor_line >= self.scroll_offset + viewport_height
        {
            return None;
        }

        let content_width = area.width.saturating_sub(2) as usize;
        let col = cmp::min(self.cursor_col, self.current_line_len());
        if col >= content_width {
            return None;
        }

        let x = area.x + 1 + col as u16;
        let y = area.y + 1 + (self.cursor_line - self.scroll_offset) as u16;
        Some((x, y))
    }

    pub fn to_string(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
