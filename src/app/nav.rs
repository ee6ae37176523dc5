//! Navigation state and list cursor logic for dirnav.
//!
//! [NavState] owns the current [Listing] together with the selection and the viewport
//! (`scroll_top` plus a fixed row capacity). Every method is a synchronous state
//! transition; loading a directory happens elsewhere and is handed in through [NavState::reset].

use crate::core::{FileEntry, Listing};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Direction of a single navigation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Holds the listing, selection and viewport of the browser.
#[derive(Debug, Clone)]
pub struct NavState {
    listing: Listing,
    selected: Option<usize>,
    scroll_top: usize,
    capacity: usize,
}

impl NavState {
    /// Creates an empty state for `path` showing `capacity` rows at a time.
    pub fn new(path: PathBuf, capacity: usize) -> Self {
        Self {
            listing: Listing::empty(path),
            selected: None,
            scroll_top: 0,
            capacity: capacity.max(1),
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.listing.path()
    }

    #[inline]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        self.listing.entries()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.listing.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    #[inline]
    pub fn selected_idx(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected.and_then(|idx| self.listing.get(idx))
    }

    /// Replaces the listing wholesale. The selection goes to the first entry (if any) and
    /// the viewport back to the top.
    pub fn reset(&mut self, listing: Listing) {
        self.selected = if listing.is_empty() { None } else { Some(0) };
        self.scroll_top = 0;
        self.listing = listing;
    }

    /// Changes the number of rows the viewport shows, e.g. when the terminal is smaller
    /// than the configured list. The selection is pulled back into view.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        if let Some(sel) = self.selected
            && sel >= self.scroll_top + self.capacity
        {
            self.scroll_top = sel + 1 - self.capacity;
        }
    }

    // Navigation functions

    /// Moves the selection one entry in `step` direction without wrapping.
    ///
    /// When the new selection leaves the viewport, the viewport follows by exactly one row.
    /// Returns `false` at either end of the listing.
    pub fn move_selection(&mut self, step: Step) -> bool {
        let Some(sel) = self.selected else {
            return false;
        };

        match step {
            Step::Forward => {
                if sel + 1 >= self.len() {
                    return false;
                }
                let next = sel + 1;
                self.selected = Some(next);
                if next > self.scroll_top + self.capacity - 1 {
                    self.scroll_top += 1;
                }
            }
            Step::Backward => {
                if sel == 0 {
                    return false;
                }
                let next = sel - 1;
                self.selected = Some(next);
                if next < self.scroll_top {
                    self.scroll_top -= 1;
                }
            }
        }
        true
    }

    /// Moves the viewport a full page. The selection is left alone.
    ///
    /// `scroll_top` is clamped to `[0, len - 1]`, so the last page may show a single row.
    /// Returns `true` if the viewport moved.
    pub fn page_scroll(&mut self, step: Step) -> bool {
        let before = self.scroll_top;
        self.scroll_top = match step {
            Step::Forward => (self.scroll_top + self.capacity).min(self.max_scroll()),
            Step::Backward => self.scroll_top.saturating_sub(self.capacity),
        };
        self.scroll_top != before
    }

    /// Selects the first entry and scrolls to the top.
    pub fn jump_home(&mut self) {
        self.scroll_top = 0;
        self.selected = if self.is_empty() { None } else { Some(0) };
    }

    /// Selects the last entry and shows the last full page.
    pub fn jump_end(&mut self) {
        let len = self.len();
        if len == 0 {
            self.selected = None;
            self.scroll_top = 0;
            return;
        }
        self.selected = Some(len - 1);
        self.scroll_top = len.saturating_sub(self.capacity);
    }

    /// Selects the entry shown on viewport row `row` (clamped to the last entry).
    ///
    /// The viewport does not move. Returns the selected index, or `None` for an empty
    /// listing.
    pub fn select_at_viewport_row(&mut self, row: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let idx = self.scroll_top.saturating_add(row).min(len - 1);
        self.selected = Some(idx);
        Some(idx)
    }

    /// Pulls `scroll_top` back inside `[0, len - 1]`. Called before every render.
    pub fn clamp_scroll(&mut self) {
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Indices of the entries currently inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let top = self.scroll_top.min(self.max_scroll());
        top..(top + self.capacity).min(self.len())
    }

    #[inline]
    fn max_scroll(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
