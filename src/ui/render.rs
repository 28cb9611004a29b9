//! UI renderer implementation.
//!
//! Draws one frame from the navigation state: a header with the current path and
//! the selected name (or the search query), an optional status line, and the
//! visible slice of the entry matrix. Nothing here mutates state.

use crate::app::NavState;
use crate::config::Config;
use crate::core::{Entry, fit_name};
use crate::ui::icons::icon_for;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::path::{MAIN_SEPARATOR, Path};

/// Width taken by an icon and the space after it.
const ICON_WIDTH: usize = 2;

/// Renders the whole browser for one frame.
pub fn render(frame: &mut Frame, nav: &NavState, current_path: &Path, config: &Config) {
    let (header, status, grid) = layout_chunks(frame.area(), nav.options().header_rows);

    frame.render_widget(Paragraph::new(header_line(nav, current_path, config)), header);

    if config.display().status_messages()
        && let Some(msg) = nav.status()
        && let Some(area) = status
    {
        frame.render_widget(
            Paragraph::new(Span::styled(msg.to_string(), config.theme().status_style())),
            area,
        );
    }

    frame.render_widget(Paragraph::new(grid_lines(nav, config)), grid);
}

/// Splits the screen into header, optional status row and grid area.
///
/// The grid starts after `header_rows` lines so the number of rows drawn always
/// matches what the navigation state considers visible.
pub fn layout_chunks(area: Rect, header_rows: usize) -> (Rect, Option<Rect>, Rect) {
    let header_rows = u16::try_from(header_rows).unwrap_or(u16::MAX).max(1);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_rows), Constraint::Min(0)])
        .split(area);

    let top = chunks[0];
    let header = Rect { height: top.height.min(1), ..top };
    let status = (top.height > 1).then(|| Rect {
        y: top.y + 1,
        height: 1,
        ..top
    });
    (header, status, chunks[1])
}

fn header_line<'a>(nav: &'a NavState, current_path: &Path, config: &Config) -> Line<'a> {
    let theme = config.theme();
    let path = current_path.display().to_string();
    let separator = if path.ends_with(MAIN_SEPARATOR) {
        String::new()
    } else {
        MAIN_SEPARATOR.to_string()
    };

    let mut spans = vec![
        Span::styled(path, theme.path_style()),
        Span::styled(separator, theme.path_style()),
    ];

    if nav.is_searching() {
        spans.push(Span::styled(" : ", theme.search_style()));
        spans.push(Span::styled(nav.search().query(), theme.search_style()));
    } else if let Some(entry) = nav.selected_entry() {
        spans.push(Span::styled(entry.name(), theme.selected_name_style()));
    }

    Line::from(spans)
}

fn grid_lines(nav: &NavState, config: &Config) -> Vec<Line<'static>> {
    let column_width = nav.options().column_width;
    let icons = config.display().icons();
    let cursor = nav.cursor();
    let (first_row, rows) = nav.visible_window();

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let row_idx = first_row + i;
            let spans = row
                .iter()
                .enumerate()
                .flat_map(|(col, entry)| {
                    let selected = row_idx == cursor.row && col == cursor.col;
                    let style = cell_style(entry, selected, config);
                    [
                        Span::styled(cell_text(entry, column_width, icons), style),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

/// Cell content, exactly `column_width - 1` columns wide. The trailing gap is
/// drawn separately so the selection highlight does not bleed into it.
pub fn cell_text(entry: &Entry, column_width: usize, icons: bool) -> String {
    let inner = column_width.saturating_sub(1);
    if icons && inner > ICON_WIDTH {
        format!(
            "{} {}",
            icon_for(entry),
            fit_name(entry.name(), inner - ICON_WIDTH)
        )
    } else {
        fit_name(entry.name(), inner)
    }
}

fn cell_style(entry: &Entry, selected: bool, config: &Config) -> Style {
    let theme = config.theme();
    if selected {
        theme.selection_style()
    } else if entry.is_dir() {
        theme.directory_style()
    } else {
        theme.entry_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn cells_have_fixed_width() {
        for name in ["a", "readme.md", "a-very-long-directory-name-indeed"] {
            let with_icon = cell_text(&Entry::file(name), 20, true);
            let plain = cell_text(&Entry::file(name), 20, false);
            assert_eq!(with_icon.width(), 19, "{name}");
            assert_eq!(plain.width(), 19, "{name}");
        }
    }

    #[test]
    fn chunks_follow_header_rows() {
        let area = Rect::new(0, 0, 40, 10);
        let (header, status, grid) = layout_chunks(area, 3);
        assert_eq!(header.height, 1);
        assert_eq!(status.map(|s| s.y), Some(1));
        assert_eq!(grid.y, 3);
        assert_eq!(grid.height, 7);

        let (_, status, grid) = layout_chunks(area, 1);
        assert!(status.is_none());
        assert_eq!(grid.y, 1);
    }
}
