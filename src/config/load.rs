//! The main config loading module for cdgrid.
//!
//! Handles loading and deserializing settings from `cdgrid.toml` into [Config],
//! and writing a default file for `cdg --init`.

use crate::config::{Display, General, Keys, Layout, Theme};
use crate::error::BrowseError;
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    layout: Layout,
    display: Display,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for cdgrid
#[derive(Debug, Default)]
pub struct Config {
    general: General,
    layout: Layout,
    display: Display,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            layout: raw.layout,
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// A missing or broken file falls back to the internal defaults.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::read(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                Self::default()
            }
        }
    }

    /// Reads and parses a config file.
    pub fn read(path: &Path) -> Result<Self, BrowseError> {
        let content = fs::read_to_string(path).map_err(|source| BrowseError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig =
            toml::from_str(&content).map_err(|source| BrowseError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(raw.into())
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the configuration file path.
    /// Checks the CDGRID_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/cdgrid/cdgrid.toml
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("CDGRID_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("cdgrid/cdgrid.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/cdgrid/cdgrid.toml");
        }
        PathBuf::from("cdgrid.toml")
    }

    /// Writes the default configuration file to `path`.
    /// Refuses to overwrite an existing file.
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
        fs::write(path, DEFAULT_TOML)
    }
}

pub const DEFAULT_TOML: &str = r##"# cdgrid.toml - default configuration for cdgrid
#
# Commented values are the internal defaults.
# Colors are terminal names ("cyan") or hex codes ("#RRGGBB").

[general]
# show_hidden = true
# dirs_first = false

[layout]
# Width of one grid cell
# column_width = 20
# Terminal rows reserved for the header
# header_rows = 3
# Taller grids fall back to a single-column list
# max_grid_rows = 4

[display]
# icons = true
# status_messages = true

# [theme.path]
# fg = "white"
# bg = "#646464"

# [theme.selected_name]
# fg = "#969696"
# bg = "#646464"

# [theme.search]
# fg = "white"
# bg = "#646464"

# [theme.status]
# fg = "yellow"

# [theme.entry]
# fg = "default"

# [theme.directory]
# fg = "#55b1e5"

# [theme.selection]
# fg = "white"
# bg = "#55b1e5"

[keys]
# move_up = ["Up"]
# move_down = ["Down"]
# move_left = ["Left"]
# move_right = ["Right"]
# toggle_mode = ["s"]
# search = ["/"]
# activate = ["Tab"]
# quit = ["q", "Esc", "Ctrl+c"]
# commit = ["Enter"]
# backspace = ["Backspace"]
"##;
