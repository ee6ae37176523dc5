//! Double click detection for the file list.
//!
//! A click arms the tracker on the clicked row. A second click on the same row within the
//! threshold activates the entry and disarms the tracker; any other click re-arms it.

/// Default maximum gap between the two clicks of a double click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ClickState {
    Idle,
    Armed { index: usize, at_ms: u64 },
}

/// What a click on a list row means.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Select(usize),
    Activate(usize),
}

#[derive(Debug, Clone)]
pub struct ClickTracker {
    state: ClickState,
    threshold_ms: u64,
}

impl ClickTracker {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            state: ClickState::Idle,
            threshold_ms,
        }
    }

    #[inline]
    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, ClickState::Armed { .. })
    }

    /// Feeds a click on entry `index` at `at_ms` (monotonic milliseconds).
    pub fn register(&mut self, index: usize, at_ms: u64) -> ClickOutcome {
        match self.state {
            ClickState::Armed {
                index: prev_index,
                at_ms: prev_ms,
            } if detect_double_activation(index, at_ms, prev_ms, prev_index, self.threshold_ms) => {
                self.state = ClickState::Idle;
                ClickOutcome::Activate(index)
            }
            _ => {
                self.state = ClickState::Armed { index, at_ms };
                ClickOutcome::Select(index)
            }
        }
    }

    /// Forgets any pending first click, e.g. after the listing was replaced.
    pub fn reset(&mut self) {
        self.state = ClickState::Idle;
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_MS)
    }
}

/// `true` when a click on `index` at `event_ms` completes a double click started by the
/// click on `previous_index` at `previous_ms`.
pub fn detect_double_activation(
    index: usize,
    event_ms: u64,
    previous_ms: u64,
    previous_index: usize,
    threshold_ms: u64,
) -> bool {
    index == previous_index && event_ms.saturating_sub(previous_ms) < threshold_ms
}
