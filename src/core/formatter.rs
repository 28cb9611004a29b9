//! Fixed-width formatting helpers for the entry grid.
//!
//! Names are measured in terminal cells with `unicode-width`, so wide characters
//! never push a cell past its column.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Fits `line` into exactly `pane_width` cells: control characters are dropped,
/// tabs expand to 4-column stops, the rest is cut or padded with spaces.
pub fn sanitize_to_exact_width(line: &str, pane_width: usize) -> String {
    let (mut out, current_w) = sanitize_within(line, pane_width);
    if current_w < pane_width {
        out.push_str(&" ".repeat(pane_width - current_w));
    }
    out
}

/// Sanitized prefix of `line` no wider than `max_width`, with its width. Unpadded.
fn sanitize_within(line: &str, max_width: usize) -> (String, usize) {
    let mut out = String::with_capacity(max_width);
    let mut current_w = 0;

    for char in line.chars() {
        if char == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > max_width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if char.is_control() {
            continue;
        }

        let w = char.width().unwrap_or(0);
        if current_w + w > max_width {
            break;
        }

        out.push(char);
        current_w += w;
    }

    (out, current_w)
}

/// Fits an entry name into a `width`-cell slot, ending in `...` when it had to be cut.
pub fn fit_name(name: &str, width: usize) -> String {
    if name.width() <= width {
        return sanitize_to_exact_width(name, width);
    }
    if width <= ELLIPSIS.len() {
        return sanitize_to_exact_width(ELLIPSIS, width);
    }

    let (mut out, used) = sanitize_within(name, width - ELLIPSIS.len());
    out.push_str(ELLIPSIS);
    if used + ELLIPSIS.len() < width {
        out.push_str(&" ".repeat(width - used - ELLIPSIS.len()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_padded() {
        assert_eq!(fit_name("docs", 8), "docs    ");
    }

    #[test]
    fn long_names_are_cut_with_ellipsis() {
        let out = fit_name("a_very_long_filename.txt", 12);
        assert_eq!(out, "a_very_lo...");
        assert_eq!(out.width(), 12);
    }

    #[test]
    fn wide_chars_keep_exact_width() {
        let out = fit_name("🦀🦀🦀🦀🦀🦀", 8);
        assert_eq!(out.width(), 8);
        assert!(out.contains("..."));
    }

    #[test]
    fn cut_keeps_spaces_from_the_name() {
        assert_eq!(fit_name("my  notes.txt", 8), "my  n...");
        assert_eq!(fit_name("ab  cdefgh", 7), "ab  ...");
    }

    #[test]
    fn wide_char_at_the_cut_leaves_padding_after_ellipsis() {
        let out = fit_name("ab🦀🦀🦀", 6);
        assert_eq!(out, "ab... ");
    }

    #[test]
    fn tiny_slots() {
        assert_eq!(fit_name("abcdef", 2), "..");
        assert_eq!(fit_name("abcdef", 0), "");
    }

    #[test]
    fn sanitize_drops_controls() {
        let out = sanitize_to_exact_width("a\u{7}b", 4);
        assert_eq!(out, "ab  ");
    }
}
