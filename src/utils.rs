//! Miscellaneous utility functions for cdgrid.
//!
//! - [cli]: argument parsing and help text
//! - [helpers]: color parsing, home directory handling, start directory resolution

pub mod cli;
pub mod helpers;

pub use helpers::{current_dir, expand_home_path, get_home, parse_color, resolve_initial_dir};
