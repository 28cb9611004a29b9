//! Navigation state machine for cdgrid.
//!
//! [NavState] owns the cursor, mode, scroll offset and search state. Every input goes
//! through [NavState::apply], which updates the state and returns the [Effect]s the
//! caller has to carry out (clipboard, directory change, exit). Nothing in here
//! touches the terminal or writes anywhere.

use crate::app::dir::{DirectoryController, FileSystem};
use crate::app::layout::{self, Cursor, Matrix, Mode};
use crate::app::scroll::{self, Transition};
use crate::app::search::{self, SearchState};
use crate::core::Entry;

use std::path::PathBuf;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Viewport { width, height }
    }
}

/// Layout constants shared with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub column_width: usize,
    pub header_rows: usize,
    pub max_grid_rows: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            column_width: 20,
            header_rows: 3,
            max_grid_rows: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A single processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    ToggleMode,
    EnterSearch,
    Text(char),
    Backspace,
    Commit,
    Move(Direction),
    Activate,
    Exit,
    Resize(Viewport),
}

/// Side effects requested by [NavState::apply], in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteClipboard(String),
    EnterDirectory(PathBuf),
    EndSession,
}

/// Holds the navigation state of the browsing session.
#[derive(Debug, Clone)]
pub struct NavState {
    entries: Vec<Entry>,
    matrix: Matrix,
    mode: Mode,
    cursor: Cursor,
    scroll: usize,
    search: SearchState,
    viewport: Viewport,
    opts: LayoutOptions,
    status: Option<String>,
}

impl NavState {
    pub fn new(entries: Vec<Entry>, viewport: Viewport, opts: LayoutOptions) -> Self {
        let mode = layout::default_mode(viewport.width, opts.column_width);
        let (matrix, mode) = layout::arrange(
            &entries,
            opts.column_width,
            viewport.width,
            mode,
            opts.max_grid_rows,
        );
        Self {
            entries,
            matrix,
            mode,
            cursor: Cursor::ORIGIN,
            scroll: 0,
            search: SearchState::default(),
            viewport,
            opts,
            status: None,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    #[inline]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.search.is_active()
    }

    #[inline]
    pub fn options(&self) -> &LayoutOptions {
        &self.opts
    }

    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.matrix.get(self.cursor)
    }

    /// Number of matrix rows that fit under the header.
    pub fn visible_rows(&self) -> usize {
        self.viewport
            .height
            .saturating_sub(self.opts.header_rows)
            .max(1)
    }

    /// Rows currently on screen, with the matrix row index of the first one.
    pub fn visible_window(&self) -> (usize, &[Vec<Entry>]) {
        let rows = self.matrix.rows();
        let start = self.scroll.min(rows.len());
        let end = (start + self.visible_rows()).min(rows.len());
        (start, &rows[start..end])
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Installs a freshly read directory listing: the mode is re-fitted, the cursor
    /// goes back to the first entry and the view to the top.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.mode = layout::default_mode(self.viewport.width, self.opts.column_width);
        self.cursor = Cursor::ORIGIN;
        self.scroll = 0;
        self.relayout();
    }

    /// Processes one input and returns the effects to run.
    pub fn apply<F: FileSystem>(
        &mut self,
        input: Input,
        dirs: &DirectoryController<F>,
    ) -> Vec<Effect> {
        self.status = None;

        match input {
            Input::Exit => return vec![Effect::EndSession],
            Input::Resize(viewport) => self.resize(viewport),
            Input::ToggleMode => self.toggle_mode(),
            Input::EnterSearch if !self.is_searching() && self.mode == Mode::List => {
                self.search.begin();
            }
            Input::Text(c) if self.is_searching() => self.search.push(c),
            Input::Backspace if self.is_searching() => self.search.pop(),
            Input::Commit if self.is_searching() => self.commit_search(),
            Input::Move(direction) if !self.is_searching() => self.move_cursor(direction),
            Input::Activate if !self.is_searching() => return self.activate(dirs),
            other => {
                tracing::trace!(?other, searching = self.is_searching(), "input ignored");
            }
        }
        Vec::new()
    }

    // Transitions

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // a resize discards a manual toggle
        self.mode = layout::default_mode(viewport.width, self.opts.column_width);
        self.relayout();
    }

    fn toggle_mode(&mut self) {
        let requested = self.mode.toggled();
        self.mode = requested;
        self.relayout();
        tracing::debug!(?requested, mode = ?self.mode, "toggled mode");
    }

    fn commit_search(&mut self) {
        let visible = self.visible_rows();
        let query = self.search.finish();
        match search::find_entry(&self.entries, query) {
            Some(index) => {
                self.cursor = self.matrix.position(index);
                self.scroll = scroll::reconcile(
                    self.matrix.len(),
                    self.cursor.row,
                    visible,
                    self.scroll,
                    Transition::Jump,
                );
            }
            None if !query.is_empty() => {
                self.status = Some(format!("no match for \"{query}\""));
            }
            None => {}
        }
    }

    /// Moves the cursor one cell, wrapping across rows and around the ends.
    fn move_cursor(&mut self, direction: Direction) {
        let Cursor { row, col } = self.cursor;
        if self.matrix.is_empty() {
            return;
        }

        let rows = self.matrix.len();
        let prev_row = if row == 0 { rows - 1 } else { row - 1 };
        let next_row = if row + 1 == rows { 0 } else { row + 1 };
        let last_col = |r: usize| self.matrix.row_len(r).saturating_sub(1);

        let next = match direction {
            Direction::Up => Cursor::new(prev_row, col.min(last_col(prev_row))),
            Direction::Down => Cursor::new(next_row, col.min(last_col(next_row))),
            Direction::Left | Direction::Right if self.mode == Mode::List => return,
            Direction::Left if col > 0 => Cursor::new(row, col - 1),
            Direction::Left => Cursor::new(prev_row, last_col(prev_row)),
            Direction::Right if col < last_col(row) => Cursor::new(row, col + 1),
            Direction::Right => Cursor::new(next_row, 0),
        };

        self.cursor = next;
        self.scroll = scroll::reconcile(
            rows,
            next.row,
            self.visible_rows(),
            self.scroll,
            Transition::Step,
        );
    }

    fn activate<F: FileSystem>(&mut self, dirs: &DirectoryController<F>) -> Vec<Effect> {
        let Some(entry) = self.matrix.get(self.cursor) else {
            return Vec::new();
        };

        if entry.is_current() {
            let command = format!("cd {}", dirs.current_path().display());
            return vec![Effect::WriteClipboard(command), Effect::EndSession];
        }

        let target = dirs.resolve(entry);
        match dirs.is_directory(&target) {
            Ok(true) => vec![Effect::EnterDirectory(target)],
            Ok(false) => {
                tracing::debug!(path = %target.display(), "not a directory, ignoring");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "activate failed");
                self.status = Some(e.status_message());
                Vec::new()
            }
        }
    }

    /// Re-derives the matrix for the current mode and viewport, keeping the
    /// selected entry under the cursor.
    fn relayout(&mut self) {
        let selected = self.matrix.flat_index(self.cursor);
        let (matrix, mode) = layout::arrange(
            &self.entries,
            self.opts.column_width,
            self.viewport.width,
            self.mode,
            self.opts.max_grid_rows,
        );
        self.matrix = matrix;
        self.mode = mode;
        self.cursor = self.matrix.position(selected);
        self.scroll = scroll::reconcile(
            self.matrix.len(),
            self.cursor.row,
            self.visible_rows(),
            self.scroll,
            Transition::Step,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryKind;
    use std::collections::HashMap;
    use std::io;
    use std::path::Path;

    /// In-memory filesystem: directory path -> entries.
    #[derive(Default)]
    struct FakeFs {
        dirs: HashMap<PathBuf, Vec<Entry>>,
    }

    impl FakeFs {
        fn with_dir(mut self, path: &str, entries: Vec<Entry>) -> Self {
            self.dirs.insert(PathBuf::from(path), entries);
            self
        }
    }

    impl FileSystem for FakeFs {
        fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn is_directory(&self, path: &Path) -> io::Result<bool> {
            if self.dirs.contains_key(path) {
                return Ok(true);
            }
            let parent = path.parent().ok_or(io::ErrorKind::NotFound)?;
            let name = path.file_name().ok_or(io::ErrorKind::NotFound)?;
            self.dirs
                .get(parent)
                .and_then(|es| es.iter().find(|e| e.os_name() == name))
                .map(|e| e.kind() == EntryKind::Directory)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn fake() -> FakeFs {
        FakeFs::default()
            .with_dir("/", vec![Entry::dir("home")])
            .with_dir("/home", vec![Entry::dir("docs"), Entry::file("readme.md")])
            .with_dir("/home/docs", vec![])
    }

    type Session<'a> = (DirectoryController<&'a FakeFs>, NavState);

    fn session(fs: &FakeFs, width: usize) -> Result<Session<'_>, Box<dyn std::error::Error>> {
        let dirs = DirectoryController::open(fs, "/home")?;
        let nav = NavState::new(
            dirs.entries().to_vec(),
            Viewport::new(width, 24),
            LayoutOptions::default(),
        );
        Ok((dirs, nav))
    }

    fn many(n: usize) -> Vec<Entry> {
        (0..n).map(|i| Entry::file(format!("file_{i:02}"))).collect()
    }

    #[test]
    fn grid_scenario_row_wrap() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;

        assert_eq!(nav.mode(), Mode::Grid);
        assert_eq!(
            nav.matrix().names(),
            vec![vec!["..", "."], vec!["docs", "readme.md"]]
        );
        assert_eq!(nav.cursor(), Cursor::ORIGIN);

        nav.apply(Input::Move(Direction::Right), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(0, 1));
        nav.apply(Input::Move(Direction::Right), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(1, 0));
        Ok(())
    }

    #[test]
    fn grid_wraparound_edges() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let dirs = DirectoryController::open(&fs, "/home")?;
        // 3 columns, rows: [0 1 2] [3 4 5] [6]
        let mut nav = NavState::new(
            many(7),
            Viewport::new(60, 24),
            LayoutOptions::default(),
        );
        assert_eq!(nav.matrix().width(), 3);

        nav.apply(Input::Move(Direction::Left), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(2, 0), "left from origin wraps to last row");

        nav.apply(Input::Move(Direction::Right), &dirs);
        assert_eq!(nav.cursor(), Cursor::ORIGIN, "right past the last cell wraps to origin");

        nav.apply(Input::Move(Direction::Right), &dirs);
        nav.apply(Input::Move(Direction::Right), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(0, 2));
        nav.apply(Input::Move(Direction::Up), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(2, 0), "column clamps into the short last row");
        nav.apply(Input::Move(Direction::Down), &dirs);
        assert_eq!(nav.cursor(), Cursor::ORIGIN);

        nav.apply(Input::Move(Direction::Down), &dirs);
        nav.apply(Input::Move(Direction::Left), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(0, 2), "left from column 0 goes to previous row end");
        Ok(())
    }

    #[test]
    fn list_mode_ignores_horizontal_moves() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 30)?;
        assert_eq!(nav.mode(), Mode::List);

        nav.apply(Input::Move(Direction::Down), &dirs);
        nav.apply(Input::Move(Direction::Left), &dirs);
        nav.apply(Input::Move(Direction::Right), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(1, 0));

        nav.apply(Input::Move(Direction::Up), &dirs);
        nav.apply(Input::Move(Direction::Up), &dirs);
        assert_eq!(nav.cursor(), Cursor::new(3, 0));
        Ok(())
    }

    #[test]
    fn list_scrolling_follows_cursor() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let dirs = DirectoryController::open(&fs, "/home")?;
        // 8 rows tall terminal leaves 5 visible rows
        let mut nav = NavState::new(
            many(20),
            Viewport::new(10, 8),
            LayoutOptions::default(),
        );
        assert_eq!(nav.visible_rows(), 5);

        for _ in 0..5 {
            nav.apply(Input::Move(Direction::Down), &dirs);
        }
        assert_eq!(nav.cursor().row, 5);
        assert_eq!(nav.scroll_offset(), 1);

        let (start, rows) = nav.visible_window();
        assert_eq!(start, 1);
        assert_eq!(rows.len(), 5);

        nav.apply(Input::Move(Direction::Up), &dirs);
        nav.apply(Input::Move(Direction::Up), &dirs);
        nav.apply(Input::Move(Direction::Up), &dirs);
        nav.apply(Input::Move(Direction::Up), &dirs);
        nav.apply(Input::Move(Direction::Up), &dirs);
        assert_eq!(nav.cursor().row, 0);
        assert_eq!(nav.scroll_offset(), 0);

        nav.apply(Input::Move(Direction::Up), &dirs);
        assert_eq!(nav.cursor().row, 19);
        assert_eq!(nav.scroll_offset(), 15);

        nav.apply(Input::Move(Direction::Down), &dirs);
        assert_eq!(nav.cursor().row, 0);
        assert_eq!(nav.scroll_offset(), 0);
        Ok(())
    }

    #[test]
    fn toggle_keeps_selected_entry() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;

        nav.apply(Input::Move(Direction::Down), &dirs);
        nav.apply(Input::Move(Direction::Right), &dirs);
        assert_eq!(nav.selected_entry().map(Entry::name), Some("readme.md"));

        nav.apply(Input::ToggleMode, &dirs);
        assert_eq!(nav.mode(), Mode::List);
        assert_eq!(nav.cursor(), Cursor::new(3, 0));
        assert_eq!(nav.selected_entry().map(Entry::name), Some("readme.md"));

        nav.apply(Input::ToggleMode, &dirs);
        assert_eq!(nav.mode(), Mode::Grid);
        assert_eq!(nav.cursor(), Cursor::new(1, 1));
        Ok(())
    }

    #[test]
    fn toggle_to_tall_grid_falls_back_immediately() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let dirs = DirectoryController::open(&fs, "/home")?;
        let mut nav = NavState::new(
            many(12),
            Viewport::new(40, 24),
            LayoutOptions::default(),
        );
        // 12 entries in 2 columns would need 6 rows
        assert_eq!(nav.mode(), Mode::List);

        nav.apply(Input::ToggleMode, &dirs);
        assert_eq!(nav.mode(), Mode::List);
        assert_eq!(nav.matrix().len(), 12);
        Ok(())
    }

    #[test]
    fn search_only_from_list_mode() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;
        assert_eq!(nav.mode(), Mode::Grid);

        nav.apply(Input::EnterSearch, &dirs);
        assert!(!nav.is_searching());

        nav.apply(Input::ToggleMode, &dirs);
        nav.apply(Input::EnterSearch, &dirs);
        assert!(nav.is_searching());
        Ok(())
    }

    #[test]
    fn search_commit_moves_cursor() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 30)?;

        nav.apply(Input::EnterSearch, &dirs);
        for c in "READx".chars() {
            nav.apply(Input::Text(c), &dirs);
        }
        nav.apply(Input::Backspace, &dirs);
        assert_eq!(nav.search().query(), "READ");

        // moves are suppressed while typing
        nav.apply(Input::Move(Direction::Down), &dirs);
        assert_eq!(nav.cursor(), Cursor::ORIGIN);

        nav.apply(Input::Commit, &dirs);
        assert!(!nav.is_searching());
        assert_eq!(nav.cursor(), Cursor::new(3, 0));
        assert_eq!(nav.selected_entry().map(Entry::name), Some("readme.md"));
        Ok(())
    }

    #[test]
    fn search_miss_keeps_cursor_and_reports() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 30)?;
        nav.apply(Input::Move(Direction::Down), &dirs);

        nav.apply(Input::EnterSearch, &dirs);
        nav.apply(Input::Text('z'), &dirs);
        nav.apply(Input::Commit, &dirs);
        assert_eq!(nav.cursor(), Cursor::new(1, 0));
        assert!(nav.status().is_some());

        nav.apply(Input::Move(Direction::Down), &dirs);
        assert_eq!(nav.status(), None, "status lasts a single event");
        Ok(())
    }

    #[test]
    fn search_jump_centers_view() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let dirs = DirectoryController::open(&fs, "/home")?;
        let mut nav = NavState::new(
            many(50),
            Viewport::new(10, 13),
            LayoutOptions::default(),
        );
        assert_eq!(nav.visible_rows(), 10);

        nav.apply(Input::EnterSearch, &dirs);
        for c in "file_30".chars() {
            nav.apply(Input::Text(c), &dirs);
        }
        nav.apply(Input::Commit, &dirs);
        assert_eq!(nav.cursor(), Cursor::new(30, 0));
        assert_eq!(nav.scroll_offset(), 25);
        Ok(())
    }

    #[test]
    fn activate_current_copies_and_ends() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;

        nav.apply(Input::Move(Direction::Right), &dirs);
        let effects = nav.apply(Input::Activate, &dirs);
        assert_eq!(
            effects,
            vec![
                Effect::WriteClipboard("cd /home".to_string()),
                Effect::EndSession
            ]
        );
        Ok(())
    }

    #[test]
    fn activate_directory_and_parent() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;

        let effects = nav.apply(Input::Activate, &dirs);
        assert_eq!(effects, vec![Effect::EnterDirectory(PathBuf::from("/"))]);

        nav.apply(Input::Move(Direction::Down), &dirs);
        let effects = nav.apply(Input::Activate, &dirs);
        assert_eq!(
            effects,
            vec![Effect::EnterDirectory(PathBuf::from("/home/docs"))]
        );
        Ok(())
    }

    #[test]
    fn activate_file_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;
        nav.apply(Input::Move(Direction::Down), &dirs);
        nav.apply(Input::Move(Direction::Right), &dirs);

        let before_cursor = nav.cursor();
        let before_matrix = nav.matrix().clone();
        let effects = nav.apply(Input::Activate, &dirs);

        assert!(effects.is_empty());
        assert_eq!(nav.cursor(), before_cursor);
        assert_eq!(nav.matrix(), &before_matrix);
        assert_eq!(nav.status(), None);
        Ok(())
    }

    #[test]
    fn activate_vanished_entry_reports_status() -> Result<(), Box<dyn std::error::Error>> {
        let fs = FakeFs::default().with_dir("/tmp", vec![Entry::dir("ghost")]);
        let dirs = DirectoryController::open(&fs, "/tmp")?;
        let mut nav = NavState::new(
            vec![Entry::parent(), Entry::current(), Entry::dir("renamed")],
            Viewport::new(10, 24),
            LayoutOptions::default(),
        );
        nav.apply(Input::Move(Direction::Down), &dirs);
        nav.apply(Input::Move(Direction::Down), &dirs);

        let effects = nav.apply(Input::Activate, &dirs);
        assert!(effects.is_empty());
        assert_eq!(nav.cursor(), Cursor::new(2, 0));
        assert!(nav.status().is_some());
        Ok(())
    }

    #[test]
    fn exit_works_while_searching() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 30)?;
        nav.apply(Input::EnterSearch, &dirs);
        assert_eq!(nav.apply(Input::Exit, &dirs), vec![Effect::EndSession]);
        Ok(())
    }

    #[test]
    fn resize_recomputes_mode_and_discards_toggle() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let (dirs, mut nav) = session(&fs, 40)?;
        nav.apply(Input::ToggleMode, &dirs);
        assert_eq!(nav.mode(), Mode::List);

        nav.apply(Input::Resize(Viewport::new(80, 24)), &dirs);
        assert_eq!(nav.mode(), Mode::Grid);
        assert_eq!(nav.matrix().names(), vec![vec!["..", ".", "docs", "readme.md"]]);

        nav.apply(Input::Resize(Viewport::new(19, 24)), &dirs);
        assert_eq!(nav.mode(), Mode::List);
        Ok(())
    }

    #[test]
    fn replace_entries_resets_cursor_and_scroll() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let dirs = DirectoryController::open(&fs, "/home")?;
        let mut nav = NavState::new(
            many(30),
            Viewport::new(10, 8),
            LayoutOptions::default(),
        );
        for _ in 0..12 {
            nav.apply(Input::Move(Direction::Down), &dirs);
        }
        assert!(nav.scroll_offset() > 0);

        nav.replace_entries(vec![Entry::parent(), Entry::current()]);
        assert_eq!(nav.cursor(), Cursor::ORIGIN);
        assert_eq!(nav.scroll_offset(), 0);
        assert_eq!(nav.matrix().len(), 2);
        Ok(())
    }

    #[test]
    fn empty_matrix_is_safe() -> Result<(), Box<dyn std::error::Error>> {
        let fs = fake();
        let dirs = DirectoryController::open(&fs, "/home")?;
        let mut nav = NavState::new(
            Vec::new(),
            Viewport::new(40, 24),
            LayoutOptions::default(),
        );

        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            nav.apply(Input::Move(d), &dirs);
        }
        assert_eq!(nav.cursor(), Cursor::ORIGIN);
        assert!(nav.apply(Input::Activate, &dirs).is_empty());
        nav.apply(Input::ToggleMode, &dirs);
        assert_eq!(nav.cursor(), Cursor::ORIGIN);
        Ok(())
    }
}
