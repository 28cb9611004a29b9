//! Configuration for cdgrid.
//!
//! Settings are read from `cdgrid.toml` (see [load::Config::default_path]):
//! - [general]: listing contents and order
//! - [display]: layout geometry and renderer toggles
//! - [theme]: colors
//! - [input]: key bindings
//!
//! Every table is optional; missing values use the internal defaults.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::{Display, Layout};
pub use general::General;
pub use input::Keys;
pub use load::Config;
pub use theme::Theme;
