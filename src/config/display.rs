//! Display configuration options for dirnav
//!
//! This module defines the [Display] and [Theme] tables read from the dirnav.toml
//! configuration file.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Rows of the file list, matching a 600px window of 20px rows minus header and footer.
pub const DEFAULT_VIEWPORT_ROWS: usize = 25;
/// Rows of the text viewer window.
pub const DEFAULT_PREVIEW_ROWS: usize = 19;

/// Display configuration options
///
/// The list viewport is fixed in size: it does not follow the terminal height.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    viewport_rows: usize,
    preview_rows: usize,
    show_size: bool,
    theme: Theme,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            show_size: true,
            theme: Theme::default(),
        }
    }
}

impl Display {
    #[inline]
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows.max(1)
    }

    #[inline]
    pub fn preview_rows(&self) -> usize {
        self.preview_rows.max(1)
    }

    #[inline]
    pub fn show_size(&self) -> bool {
        self.show_size
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

/// Colors, given as names ("cyan") or hex codes ("#RRGGBB").
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    selection_fg: String,
    selection_bg: String,
    directory_fg: String,
    error_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            selection_fg: "default".into(),
            selection_bg: "default".into(),
            directory_fg: "blue".into(),
            error_fg: "red".into(),
        }
    }
}

impl Theme {
    /// Selected row. Falls back to reversed video when no colors are set.
    pub fn selection_style(&self) -> Style {
        let fg = parse_color(&self.selection_fg);
        let bg = parse_color(&self.selection_bg);
        if fg == Color::Reset && bg == Color::Reset {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(fg).bg(bg)
        }
    }

    pub fn directory_style(&self) -> Style {
        Style::default()
            .fg(parse_color(&self.directory_fg))
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(parse_color(&self.error_fg))
    }
}
