//! Nerd Font icons for entries, picked by kind and file extension.

use crate::core::{Entry, EntryKind};

use phf::phf_map;

const DIR_ICON: &str = "\u{f07b}";
const PARENT_ICON: &str = "\u{f062}";
const CURRENT_ICON: &str = "\u{f0c5}";
const FILE_ICON: &str = "\u{f15b}";

/// Lowercase file extension to icon.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "js" => "\u{e74e}",
    "ts" => "\u{e628}",
    "jsx" => "\u{e7ba}",
    "tsx" => "\u{e7ba}",
    "json" => "\u{e60b}",
    "md" => "\u{f48a}",
    "html" => "\u{e736}",
    "htm" => "\u{e736}",
    "css" => "\u{e749}",
    "scss" => "\u{e749}",
    "sass" => "\u{e749}",
    "png" => "\u{f03e}",
    "jpg" => "\u{f03e}",
    "jpeg" => "\u{f03e}",
    "gif" => "\u{f03e}",
    "svg" => "\u{f03e}",
    "mp3" => "\u{f001}",
    "wav" => "\u{f001}",
    "ogg" => "\u{f001}",
    "mp4" => "\u{f008}",
    "avi" => "\u{f008}",
    "mov" => "\u{f008}",
    "zip" => "\u{f410}",
    "rar" => "\u{f410}",
    "7z" => "\u{f410}",
    "tar" => "\u{f410}",
    "gz" => "\u{f410}",
    "pdf" => "\u{f1c1}",
    "rs" => "\u{e7a8}",
    "toml" => "\u{e615}",
    "txt" => "\u{f15c}",
};

pub fn icon_for(entry: &Entry) -> &'static str {
    match entry.kind() {
        EntryKind::Parent => PARENT_ICON,
        EntryKind::Current => CURRENT_ICON,
        EntryKind::Directory => DIR_ICON,
        EntryKind::File => extension_icon(entry.name()),
    }
}

fn extension_icon(name: &str) -> &'static str {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return FILE_ICON;
    };
    if stem.is_empty() {
        return FILE_ICON;
    }
    EXT_ICON_MAP
        .get(ext.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(FILE_ICON)
}
