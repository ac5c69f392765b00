//! Identifier recovery from file and directory names.
//!
//! Used when no header is readable. Every function here only returns
//! identifiers that already have the target platform's shape.

use std::path::{Component, Path};

use crate::Platform;
use crate::platform::is_disc_game_id;
use crate::util::is_hex_digits;

/// Extract a Wii/GameCube game ID from a file stem.
///
/// Recognizes the `Title [RMCP01]` convention first, then a stem that is
/// itself an ID (`RMCP01.wbfs`).
pub fn disc_id_from_name(stem: &str) -> Option<String> {
    if let Some(inner) = bracket_token(stem) {
        if is_disc_game_id(inner) {
            return Some(inner.to_string());
        }
    }
    let trimmed = stem.trim();
    is_disc_game_id(trimmed).then(|| trimmed.to_string())
}

/// Contents of a trailing `[...]` group, trimmed.
pub fn bracket_token(stem: &str) -> Option<&str> {
    let stem = stem.trim_end();
    let body = stem.strip_suffix(']')?;
    let open = body.rfind('[')?;
    Some(body[open + 1..].trim())
}

/// First token of exactly `len` hex digits in `name`, uppercased.
///
/// Tokens are separated by anything that is not an ASCII letter or digit,
/// so `Game [0005000010101A00] (USA)` yields `0005000010101A00` for 16.
pub fn hex_token(name: &str, len: usize) -> Option<String> {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .find(|t| t.len() == len && is_hex_digits(t))
        .map(|t| t.to_ascii_uppercase())
}

/// First path component that is exactly an 8-hex-digit title ID, uppercased.
pub fn title_id_from_path(path: &Path) -> Option<String> {
    path.components().find_map(|c| match c {
        Component::Normal(part) => {
            let part = part.to_string_lossy();
            let part = part.trim();
            (part.len() == 8 && is_hex_digits(part)).then(|| part.to_ascii_uppercase())
        }
        _ => None,
    })
}

/// Filename-derived identifier for a platform, if the name carries one.
pub fn identifier_from_name(platform: Platform, stem: &str) -> Option<String> {
    match platform {
        Platform::Wii | Platform::GameCube => disc_id_from_name(stem),
        Platform::WiiU => hex_token(stem, 16),
        Platform::Xbox360 => hex_token(stem, 8),
    }
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod tests;
