//! Terminal UI for dirnav.
//!
//! - [render]: frame layout, header buttons and the hit-testing geometry.
//! - [panes]: the file list, the footer and the text viewer popup.

pub mod panes;
pub mod render;

pub use render::{header_buttons, render};
