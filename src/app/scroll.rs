//! Scroll window over the matrix rows.
//!
//! The offset is the first rendered row. After every reconcile the cursor row is
//! inside `[offset, offset + viewport_height)` and the offset never runs past the
//! last full page.

/// How the cursor got to its new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// One-row moves, wraparounds and re-layouts: scroll only as far as needed.
    Step,
    /// Search hits: center the target row.
    Jump,
}

/// Largest valid offset for `matrix_len` rows shown `viewport_height` at a time.
#[inline]
pub fn max_offset(matrix_len: usize, viewport_height: usize) -> usize {
    matrix_len.saturating_sub(viewport_height.max(1))
}

/// Computes the new scroll offset after the cursor moved to `cursor_row`.
///
/// A step into the row just above the window scrolls up by one, a step just past
/// its bottom scrolls down by one. Wrapping to row 0 snaps to 0 and wrapping to
/// the last row snaps to the last page, both falling out of the same clamp.
pub fn reconcile(
    matrix_len: usize,
    cursor_row: usize,
    viewport_height: usize,
    previous_offset: usize,
    transition: Transition,
) -> usize {
    let height = viewport_height.max(1);
    let max = max_offset(matrix_len, height);

    let offset = match transition {
        Transition::Jump => cursor_row.saturating_sub(height / 2),
        Transition::Step => {
            if cursor_row < previous_offset {
                cursor_row
            } else if cursor_row >= previous_offset + height {
                cursor_row + 1 - height
            } else {
                previous_offset
            }
        }
    };
    offset.min(max)
}
