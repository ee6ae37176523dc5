//! Core runtime logic for dirnav.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [fm]: directory listing and the [FileSystem] seam (see [load_dir], [FileEntry], [Listing]).
//! - [formatter]: listing order plus size, time and width formatting.
//! - [sniff]: text/binary classification of files before they are opened.
//! - [error]: the [FmError] taxonomy surfaced to the UI.
//! - [logging]: tracing subscriber setup.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod logging;
pub mod sniff;
pub mod terminal;

pub use error::FmError;
pub use fm::{EntryMeta, FileEntry, FileSystem, Listing, RealFs, load_dir};
pub use formatter::{
    compare_entries, format_entry_details, format_file_size, format_file_time,
    sanitize_to_exact_width, sort_entries,
};
pub use sniff::{ContentKind, classify, read_preview};
