//! Helpers for dirnav.
//!
//! - Color parsing from names or hex codes for the theme table
//! - Home directory lookup and `~` expansion/shortening
//! - Resolving the directory given on the command line

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else maps to [Color::Reset].
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => s
            .strip_prefix('#')
            .and_then(parse_hex)
            .unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

#[inline]
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory.
pub fn expand_home_path(input: &str) -> PathBuf {
    if input == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(input));
    }
    if let Some(rest) = input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix(&format!("~{}", MAIN_SEPARATOR)))
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(input)
}

/// Resolves the directory given on the command line.
///
/// Returns `None` when the argument does not name a readable directory; the caller falls
/// back to the working directory without complaining.
pub fn resolve_initial_dir(arg: &str) -> Option<PathBuf> {
    let path = expand_home_path(arg.trim());
    let canonical = path.canonicalize().ok()?;
    if !canonical.is_dir() || std::fs::read_dir(&canonical).is_err() {
        return None;
    }
    Some(canonical)
}

/// Util function to shorten home directory to ~.
/// Used for the path in the header line.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(parse_color("Cyan"), Color::Cyan);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("chartreuse"), Color::Reset);
    }

    #[test]
    fn initial_dir_must_be_a_directory() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("file.txt");
        File::create(&file)?;

        let resolved = resolve_initial_dir(&dir.path().to_string_lossy())
            .ok_or("tempdir should resolve")?;
        assert_eq!(resolved, dir.path().canonicalize()?);

        assert_eq!(resolve_initial_dir(&file.to_string_lossy()), None);
        assert_eq!(resolve_initial_dir("/path/does/not/exist"), None);
        Ok(())
    }

    #[test]
    fn home_is_shortened() {
        if let Some(home) = get_home() {
            assert_eq!(shorten_home_path(&home), "~");
            let inner = home.join("projects");
            assert_eq!(
                shorten_home_path(&inner),
                format!("~{}projects", MAIN_SEPARATOR)
            );
            assert_eq!(expand_home_path("~/projects"), inner);
        }
        assert_eq!(shorten_home_path("/"), "/");
    }
}
