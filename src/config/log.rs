//! Logging configuration for dirnav.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct LogConfig {
    level: String,
    file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".into(),
            file: None,
        }
    }
}

impl LogConfig {
    /// An `EnvFilter` directive such as `"info"` or `"dirnav=debug"`.
    #[inline]
    pub fn level(&self) -> &str {
        let trimmed = self.level.trim();
        if trimmed.is_empty() { "warn" } else { trimmed }
    }

    #[inline]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}
