//! Wii / GameCube disc header reading.
//!
//! Both consoles share the boot header layout at the start of a plain disc
//! image: a 6-character game ID at 0x000 and a NUL-padded title at 0x020.
//! Only the first 0x60 bytes are ever read.
//!
//! WBFS dumps are handled separately by [`read_split_archive_id`]. A WBFS
//! file starts with its own container header rather than the disc header,
//! and the game ID of the contained disc sits at 0x200. That offset belongs
//! to the WBFS layout only; nothing else in this module assumes it.

use std::path::Path;

use uwx_core::HeaderError;
use uwx_core::util::{read_header_ascii, read_window};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest file that can hold a usable disc header.
pub const DISC_HEADER_MIN_SIZE: u64 = 0x40;

/// Bytes read from the start of a disc image.
pub const DISC_HEADER_WINDOW: usize = 0x60;

/// Width of the game ID field.
pub const GAME_ID_LEN: usize = 6;

/// Title field offset and maximum width.
pub const TITLE_OFFSET: usize = 0x20;
pub const TITLE_MAX_LEN: usize = 0x40;

/// Offset of the contained disc's game ID inside a WBFS container.
pub const SPLIT_ARCHIVE_ID_OFFSET: u64 = 0x200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Console family signalled by the first character of a game ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscSystem {
    Wii,
    GameCube,
    Unknown,
}

impl DiscSystem {
    /// Classify a system code character. Case-insensitive.
    pub fn from_system_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'D' | 'G' => DiscSystem::GameCube,
            'H' | 'R' | 'S' | 'W' | 'X' => DiscSystem::Wii,
            _ => DiscSystem::Unknown,
        }
    }

    /// Classify from the first character of a game ID.
    pub fn from_game_id(id: &str) -> Self {
        id.chars()
            .next()
            .map(Self::from_system_code)
            .unwrap_or(DiscSystem::Unknown)
    }
}

/// Fields recovered from a disc boot header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscHeader {
    pub game_id: String,
    /// `None` when the title field is empty or whitespace.
    pub title: Option<String>,
    pub system: DiscSystem,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Validate a raw game ID field.
///
/// The field is trimmed of trailing padding. At least four characters must
/// remain and the first four must be uppercase ASCII letters or digits. The
/// region and maker characters after that are accepted as-is.
pub fn parse_game_id(field: &[u8]) -> Result<String, HeaderError> {
    let id = read_header_ascii(field);
    let valid = id.len() >= 4
        && id
            .bytes()
            .take(4)
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if valid {
        Ok(id)
    } else {
        Err(HeaderError::invalid_identifier(id))
    }
}

/// Parse a disc header from the first bytes of an image.
pub fn parse_disc_header(buf: &[u8]) -> Result<DiscHeader, HeaderError> {
    if (buf.len() as u64) < DISC_HEADER_MIN_SIZE {
        return Err(HeaderError::too_small(DISC_HEADER_MIN_SIZE, buf.len() as u64));
    }

    let game_id = parse_game_id(&buf[..GAME_ID_LEN])?;

    let title_end = buf.len().min(TITLE_OFFSET + TITLE_MAX_LEN);
    let title = read_header_ascii(&buf[TITLE_OFFSET..title_end]);
    let title = if title.trim().is_empty() {
        None
    } else {
        Some(title)
    };

    let system = DiscSystem::from_game_id(&game_id);
    Ok(DiscHeader {
        game_id,
        title,
        system,
    })
}

/// Read and parse the disc header of the image at `path`.
pub fn read_disc_header(path: &Path) -> Result<DiscHeader, HeaderError> {
    let buf = read_window(path, 0, DISC_HEADER_WINDOW)?;
    parse_disc_header(&buf)
}

/// Read the game ID stored inside a WBFS container.
pub fn read_split_archive_id(path: &Path) -> Result<String, HeaderError> {
    let buf = read_window(path, SPLIT_ARCHIVE_ID_OFFSET, GAME_ID_LEN)?;
    if buf.len() < GAME_ID_LEN {
        return Err(HeaderError::too_small(
            SPLIT_ARCHIVE_ID_OFFSET + GAME_ID_LEN as u64,
            SPLIT_ARCHIVE_ID_OFFSET + buf.len() as u64,
        ));
    }
    parse_game_id(&buf)
}

#[cfg(test)]
#[path = "tests/disc_header_tests.rs"]
mod tests;
