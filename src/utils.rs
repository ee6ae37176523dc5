//! Miscellaneous utility functions for dirnav.
//!
//! - [cli]: command line argument handling.
//! - [helpers]: color parsing, home directory lookup and initial path resolution.

pub mod cli;
pub mod helpers;

pub use helpers::{expand_home_path, get_home, parse_color, resolve_initial_dir, shorten_home_path};
