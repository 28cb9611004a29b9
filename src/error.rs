//! Error type shared by the cdgrid engine and its collaborators.
//!
//! Every failure that can happen while browsing is recoverable: the session keeps
//! its previous state and the error is surfaced as a transient status message.
//! Only terminal setup and the initial directory read are fatal, and those are
//! handled by the binary.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseError {
    /// Listing a directory failed (permission denied, not found, removed mid-flight).
    #[error("cannot read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The selected entry vanished or became inaccessible between listing and activation.
    #[error("cannot stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to read config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl BrowseError {
    /// Short form for the header status line.
    pub fn status_message(&self) -> String {
        match self {
            BrowseError::DirectoryRead { path, source } => {
                format!("cannot open {}: {}", path.display(), source.kind())
            }
            BrowseError::Stat { path, source } => {
                format!("cannot access {}: {}", path.display(), source.kind())
            }
            other => other.to_string(),
        }
    }
}
