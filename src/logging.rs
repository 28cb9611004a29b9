//! Tracing setup for cdgrid.
//!
//! The TUI owns the terminal, so logs go to a daily rolling file in the user cache
//! directory (`~/.cache/cdgrid/cdgrid.log.YYYY-MM-DD` on Linux). The filter comes
//! from `CDGRID_LOG` and defaults to `info`.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::ChronoLocal, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CDGRID_LOG";

pub struct Logger;

impl Logger {
    /// Call once near the start of `main` and keep the guard alive until exit.
    ///
    /// Returns `None` when logging could not be set up; the app runs without it.
    pub fn init_tracing() -> Option<WorkerGuard> {
        let dir = Self::log_dir();
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("[cdgrid] logging disabled, cannot create {:?}: {}", dir, e);
            return None;
        }

        let (writer, guard) = tracing_appender::non_blocking(daily(&dir, "cdgrid.log"));

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .try_init()
            .ok()?;

        Some(guard)
    }

    pub fn log_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("cdgrid")
    }
}
