//! Application layer for cdgrid.
//!
//! - [layout]: arranges entries into a grid or list [Matrix].
//! - [scroll]: keeps the cursor row inside the visible window.
//! - [search]: incremental first-match search.
//! - [nav]: the [NavState] state machine and its [Input]s and [Effect]s.
//! - [dir]: the [DirectoryController] and the [FileSystem] seam.
//! - [state]: [Browser], which runs effects against the collaborators.
//! - [keymap]: key events to inputs.

pub mod dir;
pub mod keymap;
pub mod layout;
pub mod nav;
pub mod scroll;
pub mod search;
pub mod state;

pub use dir::{DirectoryController, FileSystem};
pub use keymap::Keymap;
pub use layout::{Cursor, Matrix, Mode};
pub use nav::{Direction, Effect, Input, LayoutOptions, NavState, Viewport};
pub use state::{Browser, KeypressResult};
