//! Wii U title metadata (TMD) reading.
//!
//! Installed and extracted Wii U titles carry a `title.tmd` file whose
//! 64-bit title ID identifies the package. The ID is stored big-endian at
//! 0x18C in the signed TMD layout; some tools write a stripped TMD where the
//! same field sits at 0x18, which is tried as a fallback.
//!
//! Title ID layout (as 16 hex digits):
//!
//! ```text
//! 0005 000E 101A C700
//! ^^^^                  platform prefix, always 0005 for Wii U
//!        ^^             content type: 00 base, 0C DLC, 0E update
//!           ^^^^ ^^^^   grouping key, shared by base/DLC/update
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use uwx_core::HeaderError;
use uwx_core::util::{is_hex_digits, read_u64_be, read_window};

/// Offset of the title ID in a signed TMD.
pub const TITLE_ID_OFFSET: u64 = 0x18C;

/// Offset of the title ID in a stripped TMD.
pub const LEGACY_TITLE_ID_OFFSET: u64 = 0x18;

/// Hex prefix every Wii U title ID starts with.
pub const WIIU_TITLE_PREFIX: &str = "0005";

/// High half of a base-game title ID.
const BASE_TITLE_HIGH: &str = "00050000";

/// A 64-bit Wii U title ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TitleId(pub u64);

/// What kind of package a title ID names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Base,
    Dlc,
    Update,
    Unknown,
}

impl ContentType {
    /// Map the content-type byte of a title ID.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00 => ContentType::Base,
            0x0C => ContentType::Dlc,
            0x0E => ContentType::Update,
            _ => ContentType::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Base => "Base",
            ContentType::Dlc => "DLC",
            ContentType::Update => "Update",
            ContentType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TitleId {
    /// True if the ID carries the Wii U platform prefix.
    pub fn has_wiiu_prefix(&self) -> bool {
        self.to_string().starts_with(WIIU_TITLE_PREFIX)
    }

    /// Content type from the fourth byte of the ID.
    pub fn content_type(&self) -> ContentType {
        ContentType::from_byte(self.0.to_be_bytes()[3])
    }

    /// The trailing 8 hex digits; equal across a title's base, DLC and update.
    pub fn group_key(&self) -> String {
        format!("{:08X}", self.0 as u32)
    }

    /// The ID of the base game this package belongs to.
    pub fn base_title_id(&self) -> String {
        format!("{BASE_TITLE_HIGH}{}", self.group_key())
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl FromStr for TitleId {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 16 || !is_hex_digits(s) {
            return Err(HeaderError::invalid_identifier(s));
        }
        u64::from_str_radix(s, 16)
            .map(TitleId)
            .map_err(|_| HeaderError::invalid_identifier(s))
    }
}

/// Title ID at `offset`, if present and carrying the Wii U prefix.
fn title_id_at(buf: &[u8], offset: u64) -> Option<TitleId> {
    let id = TitleId(read_u64_be(buf, usize::try_from(offset).ok()?)?);
    id.has_wiiu_prefix().then_some(id)
}

/// Parse a title ID from a TMD buffer, trying the signed layout first.
pub fn parse_title_id(buf: &[u8]) -> Result<TitleId, HeaderError> {
    if let Some(id) = title_id_at(buf, TITLE_ID_OFFSET) {
        return Ok(id);
    }
    if let Some(id) = title_id_at(buf, LEGACY_TITLE_ID_OFFSET) {
        log::debug!("Title ID found at legacy offset 0x{:X}", LEGACY_TITLE_ID_OFFSET);
        return Ok(id);
    }
    if (buf.len() as u64) < LEGACY_TITLE_ID_OFFSET + 8 {
        return Err(HeaderError::too_small(
            LEGACY_TITLE_ID_OFFSET + 8,
            buf.len() as u64,
        ));
    }
    Err(HeaderError::not_found(format!(
        "no title ID with prefix {WIIU_TITLE_PREFIX}"
    )))
}

/// Read the title ID from a TMD file.
pub fn read_title_id(path: &Path) -> Result<TitleId, HeaderError> {
    let buf = read_window(path, 0, (TITLE_ID_OFFSET + 8) as usize)?;
    parse_title_id(&buf)
}

/// Everything a consumer needs to know about one TMD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleDescriptor {
    pub title_id: TitleId,
    pub content_type: ContentType,
    pub group_key: String,
    pub base_title_id: String,
}

impl From<TitleId> for TitleDescriptor {
    fn from(title_id: TitleId) -> Self {
        Self {
            title_id,
            content_type: title_id.content_type(),
            group_key: title_id.group_key(),
            base_title_id: title_id.base_title_id(),
        }
    }
}

/// Read a TMD and derive its content type and grouping keys.
pub fn describe_title(path: &Path) -> Result<TitleDescriptor, HeaderError> {
    read_title_id(path).map(TitleDescriptor::from)
}

#[cfg(test)]
#[path = "tests/title_metadata_tests.rs"]
mod tests;
