//! Browsing session and effect interpreter for cdgrid.
//!
//! [Browser] ties the [NavState] reducer to its collaborators: the
//! [DirectoryController] for directory changes and a [Clipboard] for the final
//! `cd` command. Inputs go in through [Browser::handle]; the effects the reducer
//! returns are executed here, in order.

use crate::app::dir::{DirectoryController, FileSystem};
use crate::app::nav::{Effect, Input, LayoutOptions, NavState, Viewport};
use crate::core::Clipboard;

use std::path::Path;

/// Result of one processed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
}

pub struct Browser<F, C> {
    nav: NavState,
    dirs: DirectoryController<F>,
    clipboard: C,
    command: Option<String>,
}

impl<F: FileSystem, C: Clipboard> Browser<F, C> {
    pub fn new(
        dirs: DirectoryController<F>,
        clipboard: C,
        viewport: Viewport,
        opts: LayoutOptions,
    ) -> Self {
        let nav = NavState::new(dirs.entries().to_vec(), viewport, opts);
        Self {
            nav,
            dirs,
            clipboard,
            command: None,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn current_path(&self) -> &Path {
        self.dirs.current_path()
    }

    #[inline]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// The `cd` command produced by activating `.`, set whether or not the clipboard
    /// write succeeded. The caller prints it once the terminal is restored.
    pub fn take_command(&mut self) -> Option<String> {
        self.command.take()
    }

    /// Processes one input to completion.
    pub fn handle(&mut self, input: Input) -> KeypressResult {
        let effects = self.nav.apply(input, &self.dirs);
        let mut result = KeypressResult::Continue;

        for effect in effects {
            match effect {
                Effect::WriteClipboard(text) => self.copy(text),
                Effect::EnterDirectory(path) => self.enter_directory(&path),
                Effect::EndSession => {
                    tracing::info!(path = %self.dirs.current_path().display(), "session ended");
                    result = KeypressResult::Quit;
                }
            }
        }
        result
    }

    fn copy(&mut self, text: String) {
        match self.clipboard.write(&text) {
            Ok(()) => tracing::info!(command = %text, "copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.nav.set_status(e.status_message());
            }
        }
        self.command = Some(text);
    }

    fn enter_directory(&mut self, path: &Path) {
        match self.dirs.enter(path) {
            Ok(entries) => self.nav.replace_entries(entries.to_vec()),
            Err(e) => {
                tracing::warn!(error = %e, "directory change failed");
                self.nav.set_status(e.status_message());
            }
        }
    }
}
