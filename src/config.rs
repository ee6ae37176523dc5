//! Configuration module for dirnav.
//!
//! Settings are read from `dirnav.toml` (see [load::Config::default_path]) and split
//! into tables:
//! - [general]: double click timing and the viewer byte limit.
//! - [display]: viewport sizes and colors.
//! - [input]: key bindings.
//! - [log]: log level and log file.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod log;

pub use display::{Display, Theme};
pub use general::General;
pub use input::Keys;
pub use load::{Config, RawConfig};
pub use log::LogConfig;
