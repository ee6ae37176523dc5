//! Error taxonomy for dirnav.
//!
//! Every filesystem failure that reaches the UI is converted into an [FmError] at the
//! loader/sniffer boundary, so the app can show it inline instead of terminating.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FmError {
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: cannot read file", .0.display())]
    Unreadable(PathBuf),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FmError {
    /// Classifies an io::Error raised while working on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FmError::NotFound(path),
            io::ErrorKind::PermissionDenied => FmError::PermissionDenied(path),
            io::ErrorKind::NotADirectory => FmError::NotADirectory(path),
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidFilename => {
                FmError::MalformedInput(format!("{}: {}", path.display(), err))
            }
            _ => FmError::Io { path, source: err },
        }
    }

    /// Short, single line message for the header error indicator.
    pub fn display_message(&self) -> String {
        format!("[Error: {}]", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_io_error_kinds() {
        let p = Path::new("/nope");
        assert!(matches!(
            FmError::from_io(p, io::Error::from(io::ErrorKind::NotFound)),
            FmError::NotFound(_)
        ));
        assert!(matches!(
            FmError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied)),
            FmError::PermissionDenied(_)
        ));
        assert!(matches!(
            FmError::from_io(p, io::Error::from(io::ErrorKind::NotADirectory)),
            FmError::NotADirectory(_)
        ));
        assert!(matches!(
            FmError::from_io(p, io::Error::other("boom")),
            FmError::Io { .. }
        ));
    }

    #[test]
    fn message_names_the_path() {
        let err = FmError::PermissionDenied(PathBuf::from("/root/secret"));
        let msg = err.display_message();
        assert!(msg.contains("/root/secret"));
        assert!(msg.contains("permission denied"));
    }
}
