//! Application State and main controller module for dirnav.
//!
//! [AppState] ties the pieces together: the [NavState] of the browser, the double click
//! [ClickTracker], the current [Mode] (browsing or viewing a text file) and the inline
//! error/status messages shown by the UI.
//!
//! Everything that touches the filesystem goes through the [FileSystem] the state was
//! built with, so tests can drive the whole controller against an in-memory fake.

use crate::app::click::{ClickOutcome, ClickTracker};
use crate::app::keymap::{Action, Keymap};
use crate::app::nav::{NavState, Step};
use crate::app::preview::PreviewState;
use crate::config::Config;
use crate::core::{ContentKind, FileSystem, FmError, RealFs, classify, load_dir, read_preview};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Shown when a NUL byte was found in the probe.
pub const BINARY_MESSAGE: &str = "Binary file cannot be previewed.";
/// Shown when an opened file cannot be read.
pub const UNREADABLE_MESSAGE: &str = "Cannot open file";

/// Result of a processed key press or click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
    /// The viewer was closed; the whole screen must be repainted.
    Recovered,
}

/// Top level state machine of the application.
#[derive(Debug, Clone)]
pub enum Mode {
    Browsing,
    PreviewingFile(PreviewState),
}

/// Clickable buttons in the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    Up,
    Refresh,
    Exit,
}

impl HeaderButton {
    pub const ALL: [HeaderButton; 3] = [HeaderButton::Up, HeaderButton::Refresh, HeaderButton::Exit];

    pub fn label(self) -> &'static str {
        match self {
            HeaderButton::Up => "[Up]",
            HeaderButton::Refresh => "[Refresh]",
            HeaderButton::Exit => "[Exit]",
        }
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Button(HeaderButton),
    /// Row of the list viewport, counted from the first visible entry.
    ListRow(usize),
    Nothing,
}

/// Screen geometry of the last rendered frame, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutMetrics {
    pub list_area: Rect,
    pub buttons: [(Option<HeaderButton>, Rect); 3],
}

impl LayoutMetrics {
    pub fn hit_test(&self, column: u16, row: u16) -> ClickTarget {
        for (button, area) in &self.buttons {
            if let Some(button) = button
                && contains(*area, column, row)
            {
                return ClickTarget::Button(*button);
            }
        }
        if contains(self.list_area, column, row) {
            return ClickTarget::ListRow((row - self.list_area.y) as usize);
        }
        ClickTarget::Nothing
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Main struct which holds the central Application state of dirnav
pub struct AppState<'a, F: FileSystem = RealFs> {
    config: &'a Config,
    fs: F,
    keymap: Keymap,
    nav: NavState,
    clicks: ClickTracker,
    mode: Mode,
    metrics: LayoutMetrics,
    error: Option<String>,
    status: Option<String>,
}

impl<'a> AppState<'a, RealFs> {
    /// Opens `initial_path` on the real filesystem.
    pub fn new(config: &'a Config, initial_path: &Path) -> Self {
        Self::with_fs(config, RealFs, initial_path)
    }
}

impl<'a, F: FileSystem> AppState<'a, F> {
    /// Builds the state and performs the first load.
    ///
    /// A failing first load is not fatal: the browser starts empty and shows the error.
    pub fn with_fs(config: &'a Config, fs: F, initial_path: &Path) -> Self {
        let mut app = Self {
            config,
            fs,
            keymap: Keymap::from_config(config),
            nav: NavState::new(
                initial_path.to_path_buf(),
                config.display().viewport_rows(),
            ),
            clicks: ClickTracker::new(config.general().double_click_ms()),
            mode: Mode::Browsing,
            metrics: LayoutMetrics::default(),
            error: None,
            status: None,
        };
        // a failed first load is already recorded in `error`
        app.load_path(initial_path).ok();
        app
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn nav_mut(&mut self) -> &mut NavState {
        &mut self.nav
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn is_previewing(&self) -> bool {
        matches!(self.mode, Mode::PreviewingFile(_))
    }

    /// Inline error of the last failed load, cleared by the next successful one.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transient status message, cleared by the next input.
    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[inline]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn update_layout_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = metrics;
    }

    /// Shrinks the list and viewer to what fits on screen, never past the configured sizes.
    pub fn fit_to_screen(&mut self, list_rows: usize, viewer_rows: usize) {
        let display = self.config.display();
        self.nav.set_capacity(display.viewport_rows().min(list_rows));
        if let Mode::PreviewingFile(preview) = &mut self.mode {
            preview.set_rows(display.preview_rows().min(viewer_rows));
        }
    }

    // Loading and opening

    /// Loads `target` and replaces the listing. On failure the previous listing, selection
    /// and viewport are kept and the error is recorded for display.
    pub fn load_path(&mut self, target: &Path) -> Result<(), FmError> {
        let result = self
            .fs
            .canonicalize(target)
            .map_err(|e| FmError::from_io(target, e))
            .and_then(|resolved| load_dir(&self.fs, &resolved));

        match result {
            Ok(listing) => {
                self.nav.reset(listing);
                self.clicks.reset();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %target.display(), error = %e, "directory load failed");
                self.error = Some(e.display_message());
                Err(e)
            }
        }
    }

    /// Reloads the current directory; the viewport returns to the top.
    pub fn refresh(&mut self) -> Result<(), FmError> {
        let current = self.nav.current_dir().to_path_buf();
        self.load_path(&current)
    }

    /// Enters the parent directory through the `..` reference of the current path.
    pub fn go_up(&mut self) -> Result<(), FmError> {
        self.open_named(OsStr::new(".."), true)
    }

    /// Opens the selected entry. Does nothing for an empty listing.
    pub fn open_selected(&mut self) -> Result<(), FmError> {
        let Some(entry) = self.nav.selected_entry() else {
            return Ok(());
        };
        let name = entry.name().to_os_string();
        let is_dir = entry.is_dir();
        self.open_named(&name, is_dir)
    }

    /// Directories are entered, text files open in the viewer, anything else only sets a
    /// status message.
    fn open_named(&mut self, name: &OsStr, is_dir: bool) -> Result<(), FmError> {
        let target = self.nav.current_dir().join(name);
        if is_dir {
            return self.load_path(&target);
        }

        match classify(&self.fs, &target) {
            ContentKind::Text => self.open_preview(target),
            ContentKind::Binary => {
                self.status = Some(BINARY_MESSAGE.to_string());
                Ok(())
            }
            ContentKind::Unreadable => {
                self.status = Some(UNREADABLE_MESSAGE.to_string());
                Err(FmError::Unreadable(target))
            }
        }
    }

    fn open_preview(&mut self, target: PathBuf) -> Result<(), FmError> {
        match read_preview(&self.fs, &target, self.config.general().preview_limit()) {
            Ok(lines) => {
                tracing::debug!(path = %target.display(), lines = lines.len(), "opening viewer");
                let rows = self.config.display().preview_rows();
                self.mode = Mode::PreviewingFile(PreviewState::new(target, lines, rows));
                Ok(())
            }
            Err(e) => {
                self.status = Some(UNREADABLE_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Leaves the viewer and returns to the browser.
    pub fn close_preview(&mut self) -> KeypressResult {
        if self.is_previewing() {
            self.mode = Mode::Browsing;
            return KeypressResult::Recovered;
        }
        KeypressResult::Continue
    }

    // Input handling

    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        self.status = None;
        let Some(action) = self.keymap.lookup(key) else {
            return KeypressResult::Continue;
        };

        if action == Action::Quit && self.is_previewing() {
            return self.close_preview();
        }

        if let Mode::PreviewingFile(preview) = &mut self.mode {
            match action {
                Action::GoDown => preview.scroll_down(),
                Action::GoUp => preview.scroll_up(),
                Action::PageDown => preview.page_down(),
                Action::PageUp => preview.page_up(),
                _ => return KeypressResult::Continue,
            };
            return KeypressResult::Consumed;
        }

        self.apply_action(action)
    }

    /// Runs a browser action. Failed loads are already recorded in `error`.
    pub fn apply_action(&mut self, action: Action) -> KeypressResult {
        match action {
            Action::Quit => return KeypressResult::Quit,
            Action::GoUp => {
                self.nav.move_selection(Step::Backward);
            }
            Action::GoDown => {
                self.nav.move_selection(Step::Forward);
            }
            Action::PageUp => {
                self.nav.page_scroll(Step::Backward);
            }
            Action::PageDown => {
                self.nav.page_scroll(Step::Forward);
            }
            Action::GoToTop => self.nav.jump_home(),
            Action::GoToBottom => self.nav.jump_end(),
            Action::Open => {
                self.open_selected().ok();
            }
            Action::Refresh => {
                self.refresh().ok();
            }
            Action::GoParent => {
                self.go_up().ok();
            }
        }
        KeypressResult::Consumed
    }

    /// Handles a left click at `at_ms` milliseconds on the event loop's monotonic clock.
    pub fn handle_click(&mut self, target: ClickTarget, at_ms: u64) -> KeypressResult {
        self.status = None;
        if self.is_previewing() {
            return self.close_preview();
        }

        match target {
            ClickTarget::Button(HeaderButton::Exit) => KeypressResult::Quit,
            ClickTarget::Button(HeaderButton::Refresh) => self.apply_action(Action::Refresh),
            ClickTarget::Button(HeaderButton::Up) => self.apply_action(Action::GoParent),
            ClickTarget::ListRow(row) => {
                let Some(idx) = self.nav.select_at_viewport_row(row) else {
                    return KeypressResult::Continue;
                };
                if let ClickOutcome::Activate(_) = self.clicks.register(idx, at_ms) {
                    self.open_selected().ok();
                }
                KeypressResult::Consumed
            }
            ClickTarget::Nothing => KeypressResult::Continue,
        }
    }
}
