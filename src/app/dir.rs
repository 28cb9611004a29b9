//! Directory controller for cdgrid.
//!
//! Owns the current path and the entry list. Entering a directory reads it in full
//! first and only then replaces the state, so a failed read leaves everything as it was.

use crate::core::{Entry, EntryKind};
use crate::error::BrowseError;

use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to the filesystem.
///
/// Both calls are single attempts. Failures are expected and reported, never retried.
pub trait FileSystem {
    /// Lists `path` without the synthetic `..` and `.` entries.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>>;

    fn is_directory(&self, path: &Path) -> io::Result<bool>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        (**self).list_entries(path)
    }

    fn is_directory(&self, path: &Path) -> io::Result<bool> {
        (**self).is_directory(path)
    }
}

pub struct DirectoryController<F> {
    fs: F,
    current: PathBuf,
    entries: Vec<Entry>,
}

impl<F: FileSystem> DirectoryController<F> {
    /// Reads the starting directory. Failing here is fatal for the session.
    pub fn open(fs: F, path: impl Into<PathBuf>) -> Result<Self, BrowseError> {
        let current = path.into();
        let entries = read_listing(&fs, &current)?;
        tracing::info!(path = %current.display(), entries = entries.len(), "opened directory");
        Ok(Self {
            fs,
            current,
            entries,
        })
    }

    // Getters / Accessors

    #[inline]
    pub fn current_path(&self) -> &Path {
        &self.current
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Path an entry points at. `..` is the parent (the root is its own parent).
    ///
    /// Joins the raw OS name, so names that are not valid UTF-8 still resolve.
    pub fn resolve(&self, entry: &Entry) -> PathBuf {
        match entry.kind() {
            EntryKind::Parent => self
                .current
                .parent()
                .map_or_else(|| self.current.clone(), Path::to_path_buf),
            EntryKind::Current => self.current.clone(),
            EntryKind::Directory | EntryKind::File => self.current.join(entry.os_name()),
        }
    }

    pub fn is_directory(&self, path: &Path) -> Result<bool, BrowseError> {
        self.fs
            .is_directory(path)
            .map_err(|source| BrowseError::Stat {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Replaces the current path and entries with the contents of `path`.
    ///
    /// On error nothing changes.
    pub fn enter(&mut self, path: &Path) -> Result<&[Entry], BrowseError> {
        let entries = read_listing(&self.fs, path)?;
        tracing::info!(path = %path.display(), entries = entries.len(), "entered directory");
        self.current = path.to_path_buf();
        self.entries = entries;
        Ok(&self.entries)
    }
}

/// Lists `path` with `..` and `.` prepended.
fn read_listing<F: FileSystem>(fs: &F, path: &Path) -> Result<Vec<Entry>, BrowseError> {
    let listed = fs
        .list_entries(path)
        .map_err(|source| BrowseError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = Vec::with_capacity(listed.len() + 2);
    entries.push(Entry::parent());
    entries.push(Entry::current());
    entries.extend(listed);
    Ok(entries)
}
