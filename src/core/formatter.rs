//! Sort order and display formatting for file entries in dirnav.
//!
//! Listings are always ordered directories first, then by case-insensitive name. The raw
//! name is the final tie-break so the order is total: `README` and `readme` never
//! compare equal, and `..` sorts before any alphanumeric name because `.` precedes
//! digits and letters.

use crate::core::FileEntry;

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use unicode_width::UnicodeWidthChar;

use std::cmp::Ordering;
use std::time::SystemTime;

/// Strict total order used for every listing.
pub fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.lowercase_name().cmp(b.lowercase_name()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Sorts the given file entries in place.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(compare_entries);
}

/// Formats a file size for the list column.
/// # Returns
/// A human readable size, or an empty string for directories.
pub fn format_file_size(size: u64, is_dir: bool) -> String {
    if is_dir {
        String::new()
    } else {
        format_size(size, DECIMAL)
    }
}

/// Formats a modification time the way the footer shows it (`%Y-%m-%d %H:%M`).
pub fn format_file_time(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Footer line for the selected entry: name, modification time and exact byte count.
pub fn format_entry_details(entry: &FileEntry) -> String {
    format!(
        "{}  {}  {} bytes",
        entry.name_str(),
        format_file_time(entry.modified()),
        entry.size()
    )
}

/// Cleans `line` to fit exactly `width` terminal cells.
///
/// Control characters are dropped, tabs expand to the next multiple of 4 and the result
/// is truncated or space padded.
pub fn sanitize_to_exact_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let spaces = 4 - (used % 4);
            if used + spaces > width {
                break;
            }
            out.extend(std::iter::repeat_n(' ', spaces));
            used += spaces;
            continue;
        }
        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    if used < width {
        out.extend(std::iter::repeat_n(' ', width - used));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryMeta;

    use rand::rng;
    use rand::seq::SliceRandom;
    use std::ffi::OsString;

    fn entry(name: &str, is_dir: bool) -> FileEntry {
        FileEntry::new(
            OsString::from(name),
            EntryMeta {
                is_dir,
                ..EntryMeta::placeholder()
            },
        )
    }

    #[test]
    fn dirs_first_then_case_insensitive() {
        let mut entries = vec![
            entry("b.txt", false),
            entry("A", true),
            entry("..", true),
            entry("a.md", false),
            entry("Zeta", true),
            entry("beta", true),
        ];
        entries.shuffle(&mut rng());
        sort_entries(&mut entries);

        let order: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(order, vec!["..", "A", "beta", "Zeta", "a.md", "b.txt"]);
    }

    #[test]
    fn case_variants_have_a_fixed_order() {
        for _ in 0..50 {
            let mut entries = vec![
                entry("readme", false),
                entry("README", false),
                entry("ReadMe", false),
            ];
            entries.shuffle(&mut rng());
            sort_entries(&mut entries);

            let order: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
            assert_eq!(order, vec!["README", "ReadMe", "readme"]);
        }
    }

    #[test]
    fn punctuation_sorts_before_alphanumerics() {
        let mut entries = vec![entry("a", true), entry("_tmp", true), entry(".git", true)];
        sort_entries(&mut entries);
        let order: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(order, vec![".git", "_tmp", "a"]);
    }

    #[test]
    fn size_column_is_blank_for_dirs() {
        assert_eq!(format_file_size(4096, true), "");
        assert_eq!(format_file_size(10, false), "10 B");
    }

    #[test]
    fn sanitization_and_exact_width() {
        let width = 10;
        let cases = vec!["short.txt", "very_long_filename.txt", "🦀_crab.rs", "\t_tab"];

        for input in cases {
            let result = sanitize_to_exact_width(input, width);
            let actual = unicode_width::UnicodeWidthStr::width(result.as_str());
            assert_eq!(
                actual, width,
                "Failed to produce exact width for input: '{}'. Result was: '{}'",
                input, result
            );
            assert!(!result.chars().any(|c| c.is_control()));
        }
    }
}
