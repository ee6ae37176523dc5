//! Structured logging setup for dirnav.
//!
//! The terminal belongs to the UI, so events go to a log file. `DIRNAV_LOG` overrides the
//! configured level with any `EnvFilter` directive. If the file cannot be opened, logging
//! stays off.

use crate::config::LogConfig;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "DIRNAV_LOG";

/// Default log file: `<data_local_dir>/dirnav/dirnav.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("dirnav").join("dirnav.log"))
}

/// Installs the global tracing subscriber. Safe to call more than once.
pub fn init_logging(cfg: &LogConfig) {
    let Some(path) = cfg.file().map(PathBuf::from).or_else(default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[dirnav] Logging disabled: {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(cfg.level()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
