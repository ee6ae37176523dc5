//! The general configuration settings for dirnav.
//!
//! Defines the [General] table of `dirnav.toml`: how fast two clicks must follow each
//! other to count as a double click, and how many bytes the text viewer loads.

use crate::app::click::DEFAULT_DOUBLE_CLICK_MS;
use crate::core::sniff::PROBE_LEN;

use serde::Deserialize;

/// Default number of bytes loaded into the text viewer.
pub const DEFAULT_PREVIEW_LIMIT: usize = 200_000;
/// Hard upper bound for `preview_limit` (10mb).
pub const MAX_PREVIEW_LIMIT: usize = 10 * 1024 * 1024;
/// Bounds for `double_click_ms`.
pub const MIN_DOUBLE_CLICK_MS: u64 = 50;
pub const MAX_DOUBLE_CLICK_MS: u64 = 2_000;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    double_click_ms: u64,
    preview_limit: usize,
}

impl Default for General {
    fn default() -> Self {
        General {
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl General {
    #[inline]
    pub fn double_click_ms(&self) -> u64 {
        self.double_click_ms
            .clamp(MIN_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS)
    }

    #[inline]
    pub fn preview_limit(&self) -> usize {
        self.preview_limit.clamp(PROBE_LEN, MAX_PREVIEW_LIMIT)
    }
}
