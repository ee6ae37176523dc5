//! Input configuration options for dirnav
//!
//! This module defines the key binding table read from the dirnav.toml configuration file.
//! Every action takes a list of keys; see the `--help` output for the key syntax.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    go_up: Vec<String>,
    go_down: Vec<String>,
    open: Vec<String>,
    refresh: Vec<String>,
    go_parent: Vec<String>,
    page_up: Vec<String>,
    page_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    quit,
    go_up,
    go_down,
    open,
    refresh,
    go_parent,
    page_up,
    page_down,
    go_to_top,
    go_to_bottom,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["q".into(), "Esc".into()],
            go_up: vec!["Up".into()],
            go_down: vec!["Down".into()],
            open: vec!["Enter".into()],
            refresh: vec!["r".into()],
            go_parent: vec!["Backspace".into()],
            page_up: vec!["PageUp".into()],
            page_down: vec!["PageDown".into()],
            go_to_top: vec!["Home".into()],
            go_to_bottom: vec!["End".into()],
        }
    }
}
