//! State of the text file viewer.
//!
//! Opening a text file replaces the browser with a [PreviewState] until the viewer is
//! closed. It holds the loaded lines and the index of the first visible line.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PreviewState {
    path: PathBuf,
    lines: Vec<String>,
    top_line: usize,
    rows: usize,
}

impl PreviewState {
    pub fn new(path: PathBuf, lines: Vec<String>, rows: usize) -> Self {
        Self {
            path,
            lines,
            top_line: 0,
            rows: rows.max(1),
        }
    }

    // Getters/ Accessors

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Resizes the viewer window. Growing it never leaves blank rows below the last page.
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows.max(1);
        self.top_line = self.top_line.min(self.last_page_top());
    }

    /// Lines inside the viewer window.
    pub fn visible_lines(&self) -> &[String] {
        let start = self.top_line.min(self.lines.len());
        let end = (start + self.rows).min(self.lines.len());
        &self.lines[start..end]
    }

    // Scrolling, each returns whether the view moved

    pub fn scroll_down(&mut self) -> bool {
        if self.top_line + self.rows < self.lines.len() {
            self.top_line += 1;
            return true;
        }
        false
    }

    pub fn scroll_up(&mut self) -> bool {
        if self.top_line > 0 {
            self.top_line -= 1;
            return true;
        }
        false
    }

    pub fn page_down(&mut self) -> bool {
        let before = self.top_line;
        self.top_line = (self.top_line + self.rows).min(self.last_page_top());
        self.top_line != before
    }

    pub fn page_up(&mut self) -> bool {
        let before = self.top_line;
        self.top_line = self.top_line.saturating_sub(self.rows);
        self.top_line != before
    }

    fn last_page_top(&self) -> usize {
        self.lines.len().saturating_sub(self.rows)
    }
}
