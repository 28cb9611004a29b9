//! General listing settings for cdgrid.
//!
//! The `[general]` table controls what the directory listing contains and in
//! which order.

use crate::core::ListOptions;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    dirs_first: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: true,
            dirs_first: false,
        }
    }
}

impl General {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.show_hidden,
            dirs_first: self.dirs_first,
        }
    }
}
