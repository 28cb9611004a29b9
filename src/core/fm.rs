//! Directory listing for cdgrid.
//!
//! Provides the [Entry] type used throughout the engine and [LocalFs], the real
//! filesystem collaborator behind the [FileSystem] seam.

use crate::app::dir::FileSystem;

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Name of the synthetic parent entry.
pub const PARENT: &str = "..";
/// Name of the synthetic self entry, activated to copy the current path.
pub const CURRENT: &str = ".";

/// What an entry was when the directory was listed.
///
/// Only used for coloring and icons. Activation re-checks the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Current,
    Directory,
    File,
}

/// A single item in the current directory listing.
///
/// The raw OS name is what gets joined onto paths. `display` is its lossy UTF-8
/// form, used for rendering and search only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Box<OsStr>,
    display: String,
    kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        let name = name.into().into_boxed_os_str();
        let display = name.to_string_lossy().into_owned();
        Entry {
            name,
            display,
            kind,
        }
    }

    pub fn parent() -> Self {
        Entry::new(PARENT, EntryKind::Parent)
    }

    pub fn current() -> Self {
        Entry::new(CURRENT, EntryKind::Current)
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Entry::new(name, EntryKind::File)
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Entry::new(name, EntryKind::Directory)
    }

    // Accessors

    /// Display name, lossily converted to UTF-8.
    #[inline]
    pub fn name(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn os_name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        !matches!(self.kind, EntryKind::File)
    }

    #[inline]
    pub fn is_current(&self) -> bool {
        self.kind == EntryKind::Current
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.display.starts_with('.')
            && !matches!(self.kind, EntryKind::Parent | EntryKind::Current)
    }
}

/// Listing options taken from the `[general]` config section.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub dirs_first: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            show_hidden: true,
            dirs_first: false,
        }
    }
}

/// Reads the contents of the provided directory, without the synthetic entries.
///
/// Entries are sorted by byte-wise name order (directories first when asked),
/// so two reads of an unchanged directory always produce the same listing.
pub fn browse_dir(path: &Path, opts: ListOptions) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        // follow symlinks so a link to a directory is shown as one
        let is_dir = if ft.is_symlink() {
            fs::metadata(entry.path()).map(|md| md.is_dir()).unwrap_or(false)
        } else {
            ft.is_dir()
        };

        let kind = if is_dir {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(Entry::new(name, kind));
    }

    if !opts.show_hidden {
        entries.retain(|e| !e.is_hidden());
    }

    if opts.dirs_first {
        entries.sort_unstable_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.os_name().cmp(b.os_name()),
        });
    } else {
        entries.sort_unstable_by(|a, b| a.os_name().cmp(b.os_name()));
    }
    Ok(entries)
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs {
    opts: ListOptions,
}

impl LocalFs {
    pub fn new(opts: ListOptions) -> Self {
        LocalFs { opts }
    }
}

impl FileSystem for LocalFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        browse_dir(path, self.opts)
    }

    fn is_directory(&self, path: &Path) -> io::Result<bool> {
        fs::metadata(path).map(|md| md.is_dir())
    }
}
