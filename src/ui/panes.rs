//! Pane drawing module for dirnav.
//!
//! Draws the file list, the footer line and the text viewer popup.
//!
//! Used internally by ui::render

use crate::app::{AppState, PreviewState};
use crate::core::{
    FileEntry, FileSystem, format_entry_details, format_file_size, sanitize_to_exact_width,
};
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of the `[DIR] ` marker column.
const MARKER_WIDTH: usize = 6;

/// Draws the rows of the list viewport.
pub fn draw_list<F: FileSystem>(frame: &mut Frame, app: &AppState<'_, F>, area: Rect) {
    let nav = app.nav();
    if nav.is_empty() {
        frame.render_widget(Paragraph::new("[Empty]"), area);
        return;
    }

    let theme = app.config().display().theme();
    let show_size = app.config().display().show_size();
    let width = area.width as usize;
    let selected = nav.selected_idx();

    let lines: Vec<Line> = nav
        .visible_range()
        .filter_map(|idx| nav.entries().get(idx).map(|e| (idx, e)))
        .map(|(idx, entry)| {
            let mut style = if entry.is_dir() {
                theme.directory_style()
            } else {
                Style::default()
            };
            if Some(idx) == selected {
                style = style.patch(theme.selection_style());
            }
            Line::from(Span::styled(format_row(entry, width, show_size), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// One list row of exactly `width` cells: marker, name, right aligned size.
pub fn format_row(entry: &FileEntry, width: usize, show_size: bool) -> String {
    let marker = if entry.is_dir() { "[DIR] " } else { "      " };
    let size = if show_size {
        format_file_size(entry.size(), entry.is_dir())
    } else {
        String::new()
    };

    let mut name = entry.name_str().into_owned();
    if entry.is_symlink() {
        name.push('@');
    }

    if width <= MARKER_WIDTH {
        return sanitize_to_exact_width(marker, width);
    }
    let rest = width - MARKER_WIDTH;
    let size_width = if size.is_empty() || size.len() + 1 >= rest {
        0
    } else {
        size.len() + 1
    };

    let mut row = String::with_capacity(width);
    row.push_str(marker);
    row.push_str(&sanitize_to_exact_width(&name, rest - size_width));
    if size_width > 0 {
        row.push(' ');
        row.push_str(&size);
    }
    row
}

/// Draws the status or selection details line.
pub fn draw_footer<F: FileSystem>(frame: &mut Frame, app: &AppState<'_, F>, area: Rect) {
    let nav = app.nav();
    let text = match (app.status(), nav.selected_entry()) {
        (Some(status), _) => status.to_string(),
        (None, Some(entry)) => format_entry_details(entry),
        (None, None) => format!("Entries: {}", nav.len()),
    };
    frame.render_widget(
        Paragraph::new(sanitize_to_exact_width(&text, area.width as usize))
            .style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}

/// Draws the text viewer as a bordered popup over the browser.
pub fn draw_viewer(frame: &mut Frame, preview: &PreviewState, screen: Rect) {
    let area = viewer_area(screen, preview.rows());
    frame.render_widget(Clear, area);

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = preview
        .visible_lines()
        .iter()
        .map(|l| Line::from(sanitize_to_exact_width(l, inner_width)))
        .collect();

    let title = format!(" {} ", shorten_home_path(preview.path()));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(" q/Esc: close ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Centered popup, three quarters of the screen wide and `rows` lines high plus borders.
pub fn viewer_area(screen: Rect, rows: usize) -> Rect {
    let width = (screen.width as u32 * 3 / 4) as u16;
    let height = (rows as u16).saturating_add(2).min(screen.height);
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryMeta;
    use std::ffi::OsString;
    use unicode_width::UnicodeWidthStr;

    fn entry(name: &str, is_dir: bool, size: u64) -> FileEntry {
        FileEntry::new(
            OsString::from(name),
            EntryMeta {
                is_dir,
                size,
                ..EntryMeta::placeholder()
            },
        )
    }

    #[test]
    fn rows_have_exact_width() {
        for width in [3usize, 6, 12, 40, 80] {
            for e in [
                entry("src", true, 0),
                entry("a_rather_long_file_name_for_a_small_pane.txt", false, 123_456),
            ] {
                let row = format_row(&e, width, true);
                assert_eq!(row.width(), width, "row {row:?} for width {width}");
            }
        }
    }

    #[test]
    fn dirs_are_marked_and_files_sized() {
        let dir = format_row(&entry("src", true, 4096), 30, true);
        assert!(dir.starts_with("[DIR] src"));
        assert!(dir.trim_end().ends_with("src"));

        let file = format_row(&entry("b.txt", false, 10), 30, true);
        assert!(file.starts_with("      b.txt"));
        assert!(file.ends_with("10 B"));

        let hidden = format_row(&entry("b.txt", false, 10), 30, false);
        assert!(!hidden.contains("10 B"));
    }

    #[test]
    fn viewer_is_centered_and_bounded() {
        let area = viewer_area(Rect::new(0, 0, 80, 30), 19);
        assert_eq!(area, Rect::new(10, 4, 60, 21));

        let small = viewer_area(Rect::new(0, 0, 40, 10), 19);
        assert_eq!(small.height, 10);
        assert_eq!(small.y, 0);
    }
}
