//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop. Besides drawing,
//! it records where the list rows and header buttons ended up so mouse clicks can be
//! mapped back to them (see [LayoutMetrics]).
//!
//! This module should stay “pure rendering”: it reads state + config and produces
//! widgets, without owning dirnav core logic.

use crate::app::{AppState, HeaderButton, LayoutMetrics, Mode};
use crate::core::{FileSystem, sanitize_to_exact_width};
use crate::ui::panes;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

/// Renders the whole screen for the current state.
pub fn render<F: FileSystem>(frame: &mut Frame, app: &mut AppState<'_, F>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
    let (header_area, body_area, footer_area) = (chunks[0], chunks[1], chunks[2]);

    // viewer popup borders take two rows
    let viewer_rows = frame.area().height.saturating_sub(2) as usize;
    app.fit_to_screen(body_area.height as usize, viewer_rows);
    app.nav_mut().clamp_scroll();

    let rows = app.nav().capacity().min(body_area.height as usize) as u16;
    let list_area = Rect { height: rows, ..body_area };
    let buttons = header_buttons(header_area);

    app.update_layout_metrics(LayoutMetrics { list_area, buttons });

    render_header(frame, app, header_area, &buttons);
    panes::draw_list(frame, app, list_area);
    panes::draw_footer(frame, app, footer_area);

    if let Mode::PreviewingFile(preview) = app.mode() {
        let screen = frame.area();
        panes::draw_viewer(frame, preview, screen);
    }
}

/// Places `[Up] [Refresh] [Exit]` right aligned in the header line.
///
/// Buttons that do not fit are left out (`None`). The result is in [HeaderButton::ALL] order.
pub fn header_buttons(area: Rect) -> [(Option<HeaderButton>, Rect); 3] {
    let mut out = [(None, Rect::default()); 3];
    let mut right = area.x.saturating_add(area.width);

    for (slot, button) in HeaderButton::ALL.iter().enumerate().rev() {
        let w = button.label().width() as u16;
        if right < area.x.saturating_add(w) {
            break;
        }
        let x = right - w;
        out[slot] = (Some(*button), Rect::new(x, area.y, w, 1));
        right = x.saturating_sub(1);
    }
    out
}

fn render_header<F: FileSystem>(
    frame: &mut Frame,
    app: &AppState<'_, F>,
    area: Rect,
    buttons: &[(Option<HeaderButton>, Rect); 3],
) {
    let title_end = buttons
        .iter()
        .filter_map(|(b, r)| b.map(|_| r.x))
        .min()
        .unwrap_or(area.x + area.width);
    let title_width = title_end.saturating_sub(area.x).saturating_sub(1) as usize;

    let theme = app.config().display().theme();
    let head = format!("dirnav: {}", shorten_home_path(app.nav().current_dir()));
    let head_width = head.width().min(title_width);
    let mut spans = vec![Span::styled(
        sanitize_to_exact_width(&head, head_width),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    // the error indicator gets whatever is left of the title space
    if let Some(err) = app.error() {
        let room = title_width.saturating_sub(head_width + 2);
        if room > 0 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                sanitize_to_exact_width(err, room.min(err.width())),
                theme.error_style(),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            width: title_width as u16,
            ..area
        },
    );

    for (button, rect) in buttons {
        if let Some(button) = button {
            frame.render_widget(
                Paragraph::new(button.label()).style(Style::default().add_modifier(Modifier::BOLD)),
                *rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_right_aligned_in_order() {
        let b = header_buttons(Rect::new(0, 0, 80, 1));
        assert_eq!(b[0].0, Some(HeaderButton::Up));
        assert_eq!(b[1].0, Some(HeaderButton::Refresh));
        assert_eq!(b[2].0, Some(HeaderButton::Exit));

        assert_eq!(b[2].1, Rect::new(74, 0, 6, 1));
        assert_eq!(b[1].1, Rect::new(64, 0, 9, 1));
        assert_eq!(b[0].1, Rect::new(59, 0, 4, 1));
    }

    #[test]
    fn narrow_header_drops_buttons() {
        let b = header_buttons(Rect::new(0, 0, 10, 1));
        assert_eq!(b[2].0, Some(HeaderButton::Exit));
        assert_eq!(b[1].0, None);
        assert_eq!(b[0].0, None);
    }
}
