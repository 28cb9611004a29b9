//! Core runtime pieces for cdgrid.
//!
//! - [fm]: directory listing and the [Entry] type (see [browse_dir], [LocalFs]).
//! - [clipboard]: the [Clipboard] seam and the system clipboard.
//! - [formatter]: fixed-width cell formatting for entry names.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod clipboard;
pub mod fm;
pub mod formatter;
pub mod terminal;

pub use clipboard::{Clipboard, SystemClipboard};
pub use fm::{CURRENT, Entry, EntryKind, ListOptions, LocalFs, PARENT, browse_dir};
pub use formatter::{fit_name, sanitize_to_exact_width};
