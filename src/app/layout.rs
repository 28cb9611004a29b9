//! Layout engine for cdgrid.
//!
//! Turns the flat entry list into the [Matrix] the cursor moves over, either as a
//! multi-column grid or as a single-column list. Only logical arrangement lives here;
//! fitting names into `column_width` cells is the renderer's job.

use crate::core::Entry;

/// Arrangement of the entries on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Grid,
    List,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Grid => Mode::List,
            Mode::List => Mode::Grid,
        }
    }
}

/// Position of the selection in the [Matrix].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const ORIGIN: Cursor = Cursor { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Cursor { row, col }
    }
}

/// Rows of entries. Concatenating the rows gives back the flat list, and every
/// row except the last holds exactly `width` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<Entry>>,
    width: usize,
}

impl Matrix {
    // Accessors

    #[inline]
    pub fn rows(&self) -> &[Vec<Entry>] {
        &self.rows
    }

    /// Number of rows. Never zero: an empty listing is one empty row.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the matrix holds no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }

    /// Entries per full row: the column count in grid mode, 1 in list mode.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Entry> {
        self.rows.get(cursor.row)?.get(cursor.col)
    }

    /// Index into the flat entry list of the cell under `cursor`.
    pub fn flat_index(&self, cursor: Cursor) -> usize {
        cursor.row * self.width + cursor.col
    }

    /// Cell holding the flat entry `index`, clamped to the last entry.
    pub fn position(&self, index: usize) -> Cursor {
        let total: usize = self.rows.iter().map(Vec::len).sum();
        if total == 0 {
            return Cursor::ORIGIN;
        }
        let index = index.min(total - 1);
        Cursor::new(index / self.width, index % self.width)
    }

    pub fn names(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Entry::name).collect())
            .collect()
    }
}

/// Number of `column_width` cells that fit in `viewport_width`, at least one.
pub fn columns(viewport_width: usize, column_width: usize) -> usize {
    (viewport_width / column_width.max(1)).max(1)
}

/// Grid when at least two columns fit, list otherwise.
pub fn default_mode(viewport_width: usize, column_width: usize) -> Mode {
    if viewport_width / column_width.max(1) >= 2 {
        Mode::Grid
    } else {
        Mode::List
    }
}

/// Arranges `entries` for `mode`.
pub fn layout(
    entries: &[Entry],
    column_width: usize,
    viewport_width: usize,
    mode: Mode,
) -> Matrix {
    let width = match mode {
        Mode::Grid => columns(viewport_width, column_width),
        Mode::List => 1,
    };

    let rows: Vec<Vec<Entry>> = if entries.is_empty() {
        vec![Vec::new()]
    } else {
        entries.chunks(width).map(<[Entry]>::to_vec).collect()
    };

    Matrix { rows, width }
}

/// Arranges `entries` for `mode`, falling back to list mode once when the grid
/// would need more than `max_grid_rows` rows. Returns the mode actually used.
pub fn arrange(
    entries: &[Entry],
    column_width: usize,
    viewport_width: usize,
    mode: Mode,
    max_grid_rows: usize,
) -> (Matrix, Mode) {
    let matrix = layout(entries, column_width, viewport_width, mode);
    if mode == Mode::Grid && matrix.len() > max_grid_rows {
        tracing::debug!(
            rows = matrix.len(),
            max_grid_rows,
            "grid too tall, falling back to list"
        );
        return (
            layout(entries, column_width, viewport_width, Mode::List),
            Mode::List,
        );
    }
    (matrix, mode)
}
