//! Theme configuration options for cdgrid
//!
//! Colors for the header bar and the entry grid, read from the `[theme]` table.
//! Colors are terminal names ("cyan") or hex codes ("#RRGGBB").
//!
//! ```toml
//! [theme.selection]
//! fg = "white"
//! bg = "#55b1e5"
//! ```

use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    path: ColorPair,
    selected_name: ColorPair,
    search: ColorPair,
    status: ColorPair,
    entry: ColorPair,
    directory: ColorPair,
    selection: ColorPair,
}

const ACCENT: Color = Color::Rgb(85, 177, 229);
const HEADER_BG: Color = Color::Rgb(100, 100, 100);

impl Default for Theme {
    fn default() -> Self {
        Theme {
            path: ColorPair {
                fg: Color::White,
                bg: HEADER_BG,
            },
            selected_name: ColorPair {
                fg: Color::Rgb(150, 150, 150),
                bg: HEADER_BG,
            },
            search: ColorPair {
                fg: Color::White,
                bg: HEADER_BG,
            },
            status: ColorPair {
                fg: Color::Yellow,
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            directory: ColorPair {
                fg: ACCENT,
                ..ColorPair::default()
            },
            selection: ColorPair {
                fg: Color::White,
                bg: ACCENT,
            },
        }
    }
}

impl Theme {
    pub fn path_style(&self) -> Style {
        self.path.style()
    }

    pub fn selected_name_style(&self) -> Style {
        self.selected_name.style()
    }

    pub fn search_style(&self) -> Style {
        self.search.style()
    }

    pub fn status_style(&self) -> Style {
        self.status.style()
    }

    pub fn entry_style(&self) -> Style {
        self.entry.style()
    }

    pub fn directory_style(&self) -> Style {
        self.directory.style()
    }

    pub fn selection_style(&self) -> Style {
        self.selection.style()
    }
}

/// Foreground and background color of one themed element.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
