use cdgrid::app::{Browser, DirectoryController, Direction, Input, LayoutOptions, Viewport};
use cdgrid::config::Config;
use cdgrid::core::{Clipboard, ListOptions, LocalFs};
use cdgrid::error::BrowseError;
use cdgrid::ui;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::fs::{self, File};
use tempfile::tempdir;

struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write(&mut self, _text: &str) -> Result<(), BrowseError> {
        Ok(())
    }
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

#[test]
fn test_render_header_and_grid() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("docs"))?;
    File::create(dir.path().join("readme.md"))?;

    let (width, height) = (80, 10);
    let dirs = DirectoryController::open(LocalFs::new(ListOptions::default()), dir.path())?;
    let mut browser = Browser::new(
        dirs,
        NullClipboard,
        Viewport::new(width.into(), height.into()),
        LayoutOptions::default(),
    );
    browser.handle(Input::Move(Direction::Right));
    browser.handle(Input::Move(Direction::Right));

    let config = Config::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| ui::render(f, browser.nav(), browser.current_path(), &config))?;

    let buf = terminal.backend().buffer();
    let header = row_text(buf, 0);
    assert!(
        header.contains(&format!("{}/docs", dir.path().display())),
        "header was {header:?}"
    );

    let grid = row_text(buf, 3);
    for name in ["..", "docs", "readme.md"] {
        assert!(grid.contains(name), "{name} missing from {grid:?}");
    }
    Ok(())
}

#[test]
fn test_render_search_query() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("notes.txt"))?;

    let dirs = DirectoryController::open(LocalFs::new(ListOptions::default()), dir.path())?;
    let mut browser = Browser::new(
        dirs,
        NullClipboard,
        Viewport::new(30, 8),
        LayoutOptions::default(),
    );
    browser.handle(Input::EnterSearch);
    browser.handle(Input::Text('n'));
    browser.handle(Input::Text('o'));

    let config = Config::default();
    let mut terminal = Terminal::new(TestBackend::new(30, 8))?;
    terminal.draw(|f| ui::render(f, browser.nav(), browser.current_path(), &config))?;

    let header = row_text(terminal.backend().buffer(), 0);
    assert!(header.contains(" : no"), "header was {header:?}");
    Ok(())
}
