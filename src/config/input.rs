//! Key binding options for cdgrid
//!
//! Read from the `[keys]` table of cdgrid.toml. Every action takes a list of keys in
//! the `"k"`, `"Up"`, `"ctrl+c"` or `"<c-c>"` forms.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    move_up: Vec<String>,
    move_down: Vec<String>,
    move_left: Vec<String>,
    move_right: Vec<String>,
    toggle_mode: Vec<String>,
    search: Vec<String>,
    activate: Vec<String>,
    quit: Vec<String>,
    commit: Vec<String>,
    backspace: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    move_up,
    move_down,
    move_left,
    move_right,
    toggle_mode,
    search,
    activate,
    quit,
    commit,
    backspace,
);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            move_up: vec!["Up".into()],
            move_down: vec!["Down".into()],
            move_left: vec!["Left".into()],
            move_right: vec!["Right".into()],

            toggle_mode: vec!["s".into()],
            search: vec!["/".into()],
            activate: vec!["Tab".into()],

            quit: vec!["q".into(), "Esc".into(), "Ctrl+c".into()],

            commit: vec!["Enter".into()],
            backspace: vec!["Backspace".into()],
        }
    }
}
