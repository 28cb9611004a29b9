//! Display and layout options for cdgrid
//!
//! `[display]` toggles what the renderer draws, `[layout]` holds the grid
//! constants the layout engine and the renderer share.

use crate::app::LayoutOptions;

use serde::Deserialize;

/// Narrowest column that still fits a truncated name plus `...`.
pub const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    icons: bool,
    status_messages: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            icons: true,
            status_messages: true,
        }
    }
}

impl Display {
    #[inline]
    pub fn icons(&self) -> bool {
        self.icons
    }

    #[inline]
    pub fn status_messages(&self) -> bool {
        self.status_messages
    }
}

/// Grid geometry
///
/// `column_width` is the width of one grid cell, `header_rows` the number of
/// terminal rows reserved above the entries, and `max_grid_rows` the tallest grid
/// shown before falling back to a single-column list.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct Layout {
    column_width: usize,
    header_rows: usize,
    max_grid_rows: usize,
}

impl Default for Layout {
    fn default() -> Self {
        let d = LayoutOptions::default();
        Layout {
            column_width: d.column_width,
            header_rows: d.header_rows,
            max_grid_rows: d.max_grid_rows,
        }
    }
}

impl Layout {
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            column_width: self.column_width.max(MIN_COLUMN_WIDTH),
            header_rows: self.header_rows,
            max_grid_rows: self.max_grid_rows.max(1),
        }
    }
}
