//! Terminal UI for cdgrid.
//!
//! - [render]: draws the header, status line and entry grid from the navigation state
//! - [icons]: Nerd Font icons for entries

pub mod icons;
pub mod render;

pub use render::render;
