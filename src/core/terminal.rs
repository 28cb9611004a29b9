//! Terminal setup and event loop for cdgrid.
//!
//! Handles raw mode and the alternate screen, translates key and resize events
//! into browser inputs and redraws after each one.

use crate::app::{Browser, FileSystem, Input, KeypressResult, Keymap, Viewport};
use crate::config::Config;
use crate::core::Clipboard;
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Initializes the terminal in raw mode and alternate screen and runs the event loop.
///
/// Blocks until the browser asks to quit. Returns an error if terminal setup or
/// teardown fails.
pub fn run_terminal<F: FileSystem, C: Clipboard>(
    browser: &mut Browser<F, C>,
    keymap: &Keymap,
    config: &Config,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, browser, keymap, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Draws, waits for the next event and feeds it to the browser. Returns on quit.
fn event_loop<B: Backend, F: FileSystem, C: Clipboard>(
    terminal: &mut Terminal<B>,
    browser: &mut Browser<F, C>,
    keymap: &Keymap,
    config: &Config,
) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui::render(f, browser.nav(), browser.current_path(), config))?;

        let input = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                keymap.translate(key, browser.nav().is_searching())
            }
            Event::Resize(w, h) => Some(Input::Resize(Viewport::new(w.into(), h.into()))),
            _ => None,
        };

        if let Some(input) = input
            && browser.handle(input) == KeypressResult::Quit
        {
            break;
        }
    }
    Ok(())
}
