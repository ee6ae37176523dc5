//! Content sniffing for files the user opens.
//!
//! [classify] decides from a short byte prefix whether a file can be shown in the text
//! viewer. It is a heuristic: a UTF-16 file is "binary", a NUL free blob is "text".

use crate::core::error::FmError;
use crate::core::fm::FileSystem;

use std::path::Path;

/// Bytes probed from the start of a file for NUL detection.
pub const PROBE_LEN: usize = 512;
/// Upper bound on lines kept by the text viewer.
pub const MAX_PREVIEW_LINES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Binary,
    Unreadable,
}

/// Classifies the file at `path` by probing its first [PROBE_LEN] bytes.
pub fn classify<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> ContentKind {
    match fs.read_prefix(path, PROBE_LEN) {
        Ok(probe) if probe.contains(&0) => ContentKind::Binary,
        Ok(_) => ContentKind::Text,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "probe failed");
            ContentKind::Unreadable
        }
    }
}

/// Reads up to `limit` bytes of a text file and splits them into display lines.
///
/// Invalid UTF-8 is replaced, not rejected. At most [MAX_PREVIEW_LINES] lines are kept.
pub fn read_preview<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    limit: usize,
) -> Result<Vec<String>, FmError> {
    let bytes = fs
        .read_prefix(path, limit)
        .map_err(|_| FmError::Unreadable(path.to_path_buf()))?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .take(MAX_PREVIEW_LINES)
        .map(str::to_owned)
        .collect())
}
