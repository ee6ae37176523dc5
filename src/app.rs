//! Application state and input handling for dirnav.
//!
//! - [state]: the top level [AppState] and its browsing/viewing [Mode].
//! - [nav]: listing, selection and viewport transitions.
//! - [click]: double click detection.
//! - [preview]: the text viewer state.
//! - [keymap]: key bindings to [Action]s.

pub mod click;
pub mod keymap;
pub mod nav;
pub mod preview;
pub mod state;

pub use click::{ClickOutcome, ClickTracker};
pub use keymap::{Action, Keymap};
pub use nav::{NavState, Step};
pub use preview::PreviewState;
pub use state::{AppState, ClickTarget, HeaderButton, KeypressResult, LayoutMetrics, Mode};
