//! The main config loading module for dirnav.
//!
//! Handles loading and deserializing settings from `dirnav.toml`.
//!
//! Provides the main [Config] struct, the internal [RawConfig] used for parsing, and the
//! default config file written by `dn --init`.

use crate::config::{Display, General, Keys, LogConfig};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "DIRNAV_CONFIG";

/// Raw configuration as read from the toml file
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    log: LogConfig,
    keys: Keys,
}

/// Main configuration struct for dirnav
#[derive(Debug, Default)]
pub struct Config {
    general: General,
    display: Display,
    log: LogConfig,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            log: raw.log,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup, before logging is set up.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            eprintln!(
                "No dirnav.toml config file found. Using internal defaults. (Tip: run 'dn --init' to generate a config file.)"
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses config text.
    pub fn from_toml(content: &str) -> io::Result<Self> {
        toml::from_str::<RawConfig>(content)
            .map(Config::from)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the DIRNAV_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/dirnav/dirnav.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("dirnav/dirnav.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/dirnav/dirnav.toml");
        }
        PathBuf::from("dirnav.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

pub(crate) const DEFAULT_TOML: &str = r##"# dirnav.toml - default configuration for dirnav
# Commented values are the internal defaults.

[general]
# Two clicks on the same row within this many milliseconds open the entry
# double_click_ms = 400
# Bytes of a text file loaded into the viewer
# preview_limit = 200000

[display]
# Rows of the file list (fixed, independent of the terminal height)
# viewport_rows = 25
# Rows of the text viewer
# preview_rows = 19
# show_size = true

# [display.theme]
# selection_fg = "default"
# selection_bg = "default"
# directory_fg = "blue"
# error_fg = "red"

[log]
# Any tracing EnvFilter directive, DIRNAV_LOG overrides it
level = "warn"
# file = "/tmp/dirnav.log"

# [keys]
# quit = ["q", "Esc"]
# go_up = ["Up"]
# go_down = ["Down"]
# open = ["Enter"]
# refresh = ["r"]
# go_parent = ["Backspace"]
# page_up = ["PageUp"]
# page_down = ["PageDown"]
# go_to_top = ["Home"]
# go_to_bottom = ["End"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_toml_parses_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = Config::from_toml(DEFAULT_TOML)?;
        assert_eq!(cfg.general().double_click_ms(), 400);
        assert_eq!(cfg.general().preview_limit(), 200_000);
        assert_eq!(cfg.display().viewport_rows(), 25);
        assert_eq!(cfg.display().preview_rows(), 19);
        assert_eq!(cfg.log().level(), "warn");
        assert_eq!(cfg.keys().quit(), ["q", "Esc"]);
        Ok(())
    }

    #[test]
    fn partial_tables_keep_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = Config::from_toml(
            r#"
            [general]
            double_click_ms = 250

            [display]
            viewport_rows = 0

            [keys]
            quit = ["x"]
            "#,
        )?;
        assert_eq!(cfg.general().double_click_ms(), 250);
        assert_eq!(cfg.general().preview_limit(), 200_000);
        assert_eq!(cfg.display().viewport_rows(), 1, "zero rows is clamped");
        assert_eq!(cfg.keys().quit(), ["x"]);
        assert_eq!(cfg.keys().open(), ["Enter"]);
        Ok(())
    }

    #[test]
    fn out_of_range_values_are_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = Config::from_toml(
            r#"
            [general]
            double_click_ms = 1
            preview_limit = 3
            "#,
        )?;
        assert_eq!(cfg.general().double_click_ms(), 50);
        assert_eq!(cfg.general().preview_limit(), 512);
        Ok(())
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[general\nbroken").is_err());
    }

    #[test]
    fn generate_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/dirnav.toml");

        Config::generate_default(&path)?;
        assert!(path.exists());
        assert!(Config::from_file(&path).is_ok());

        let again = Config::generate_default(&path);
        assert!(again.is_err());
        Ok(())
    }
}
