//! Key mapping for cdgrid
//!
//! Parses the `[keys]` config into a lookup table and translates crossterm key
//! events into [Input]s for the navigation state machine.

use crate::app::nav::{Direction, Input};
use crate::config::Keys;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Bindable actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Action {
    Move(Direction),
    ToggleMode,
    Search,
    Activate,
    Quit,
    Commit,
    Backspace,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Key {
    pub(crate) code: KeyCode,
    pub(crate) modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built from the config
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    #[rustfmt::skip]
    pub fn from_keys(keys: &Keys) -> Self {
        let mut map = HashMap::new();

        use Direction as D;

        bind(keys.move_up(),     Action::Move(D::Up),    &mut map);
        bind(keys.move_down(),   Action::Move(D::Down),  &mut map);
        bind(keys.move_left(),   Action::Move(D::Left),  &mut map);
        bind(keys.move_right(),  Action::Move(D::Right), &mut map);
        bind(keys.toggle_mode(), Action::ToggleMode,     &mut map);
        bind(keys.search(),      Action::Search,         &mut map);
        bind(keys.activate(),    Action::Activate,       &mut map);
        bind(keys.commit(),      Action::Commit,         &mut map);
        bind(keys.backspace(),   Action::Backspace,      &mut map);
        bind(keys.quit(),        Action::Quit,           &mut map);

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub(crate) fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }

    /// Translates a key event for the current state.
    ///
    /// While searching, plain characters are query text even if they are bound to
    /// something else; only the commit, backspace and non-character quit keys act.
    pub fn translate(&self, key: KeyEvent, searching: bool) -> Option<Input> {
        let action = self.lookup(key);

        if searching {
            return match action {
                Some(Action::Commit) => Some(Input::Commit),
                Some(Action::Backspace) => Some(Input::Backspace),
                _ if is_text(&key) => match key.code {
                    KeyCode::Char(c) => Some(Input::Text(c)),
                    _ => None,
                },
                Some(Action::Quit) => Some(Input::Exit),
                _ => None,
            };
        }

        match action? {
            Action::Move(d) => Some(Input::Move(d)),
            Action::ToggleMode => Some(Input::ToggleMode),
            Action::Search => Some(Input::EnterSearch),
            Action::Activate => Some(Input::Activate),
            Action::Quit => Some(Input::Exit),
            Action::Commit | Action::Backspace => None,
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap::from_keys(&Keys::default())
    }
}

/// A printable character without control or alt.
fn is_text(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    // a lone "+" or "-" is the key itself
    if input == "+" || input == "-" {
        return Some(Key {
            code: KeyCode::Char(input.chars().next()?),
            modifiers,
        });
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => tracing::warn!(key = %k, ?action, "ignoring unparsable key binding"),
        }
    }
}
