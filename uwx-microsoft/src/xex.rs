//! Xbox 360 XEX2 executable header reading.
//!
//! A XEX2 file starts with the `XEX2` magic. The optional-header count is a
//! 32-bit little-endian value at 0x14, and the optional-header table follows
//! at 0x18 as (key, size) pairs. The alternate title IDs header (key
//! 0x000407FF) embeds the title ID as a 32-bit big-endian value after its
//! own key and size.
//!
//! Only the first 0x100 bytes are read, so a table that runs past that
//! window is treated as not containing the key.

use std::path::Path;

use uwx_core::HeaderError;
use uwx_core::util::{read_u32_be, read_u32_le, read_window};

/// Magic signature at offset 0.
pub const XEX_MAGIC: &[u8; 4] = b"XEX2";

/// Optional-header key carrying the title ID.
pub const ALTERNATE_TITLE_IDS_KEY: u32 = 0x0004_07FF;

/// Smallest declared size for the alternate title IDs header.
const MIN_TITLE_HEADER_SIZE: u32 = 0x0C;

const HEADER_COUNT_OFFSET: usize = 0x14;
const HEADER_TABLE_OFFSET: usize = 0x18;

/// Bytes read from the start of a XEX file.
pub const XEX_WINDOW: usize = 0x100;

/// Walk the optional-header table and return the title ID as 8 hex digits.
pub fn parse_xex_title_id(buf: &[u8]) -> Result<String, HeaderError> {
    if buf.len() < HEADER_TABLE_OFFSET {
        return Err(HeaderError::too_small(
            HEADER_TABLE_OFFSET as u64,
            buf.len() as u64,
        ));
    }
    if &buf[..4] != XEX_MAGIC {
        return Err(HeaderError::bad_magic(XEX_MAGIC, &buf[..4]));
    }

    let count = read_u32_le(buf, HEADER_COUNT_OFFSET).unwrap_or(0);
    let mut offset = HEADER_TABLE_OFFSET;
    for _ in 0..count {
        let (Some(key), Some(size)) = (read_u32_le(buf, offset), read_u32_le(buf, offset + 4))
        else {
            break;
        };
        if key == ALTERNATE_TITLE_IDS_KEY && size >= MIN_TITLE_HEADER_SIZE {
            return read_u32_be(buf, offset + 8)
                .map(|id| format!("{id:08X}"))
                .ok_or_else(|| HeaderError::invalid_format("title ID past end of header window"));
        }
        offset = match offset
            .checked_add(8)
            .and_then(|o| o.checked_add(size as usize))
        {
            Some(next) if next < buf.len() => next,
            _ => break,
        };
    }

    Err(HeaderError::not_found("alternate title IDs header"))
}

/// Read the title ID from a XEX file.
pub fn read_xex_title_id(path: &Path) -> Result<String, HeaderError> {
    let buf = read_window(path, 0, XEX_WINDOW)?;
    parse_xex_title_id(&buf)
}

#[cfg(test)]
#[path = "tests/xex_tests.rs"]
mod tests;
