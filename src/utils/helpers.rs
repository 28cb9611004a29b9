//! Helpers for cdgrid.
//!
//! - Color parsing from names or hex codes for the theme
//! - Home directory lookup and `~` expansion
//! - Resolving the starting directory from the command line

use ratatui::style::Color;
use std::io;
use std::path::{Path, PathBuf};

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else falls back to the terminal default.
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
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect::<String>(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            Color::Reset
        }
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Turns the command line path argument into an absolute, canonical directory.
/// Fails when it does not exist or is not a directory.
pub fn resolve_initial_dir(arg: &str) -> io::Result<PathBuf> {
    let path = expand_home_path(arg.trim());
    let path = path.canonicalize()?;
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", path.display()),
        ));
    }
    Ok(path)
}

/// Absolute form of the working directory.
pub fn current_dir() -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(absolute_or_self(&cwd))
}

fn absolute_or_self(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn colors() {
        assert_eq!(parse_color("Cyan"), Color::Cyan);
        assert_eq!(parse_color("#55b1e5"), Color::Rgb(0x55, 0xb1, 0xe5));
        assert_eq!(parse_color("#fff"), Color::Rgb(255, 255, 255));
        assert_eq!(parse_color("#12"), Color::Reset);
        assert_eq!(parse_color("nope"), Color::Reset);
    }

    #[test]
    fn initial_dir_must_be_a_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("f.txt");
        File::create(&file)?;

        let resolved = resolve_initial_dir(&dir.path().display().to_string())?;
        assert!(resolved.is_absolute());
        assert!(resolve_initial_dir(&file.display().to_string()).is_err());
        assert!(resolve_initial_dir("/does/not/exist").is_err());
        Ok(())
    }

    #[test]
    fn tilde_expansion() {
        if let Some(home) = get_home() {
            assert_eq!(expand_home_path("~"), home);
            assert_eq!(expand_home_path("~/x"), home.join("x"));
        }
        assert_eq!(expand_home_path("/tmp"), PathBuf::from("/tmp"));
    }
}
