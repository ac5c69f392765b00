//! Nintendo Wii U identifier.
//!
//! Supports:
//! - WUD images (.wud)
//! - WUX compressed images (.wux)
//! - RPX executables (.rpx)
//!
//! Package internals are not parsed; entries are named from the file. A
//! 16-digit title ID in the file name (`Game [0005000010101A00].wux`) is
//! picked up as the identifier. Extracted titles are described separately
//! from their `title.tmd` by [`describe_title`](crate::describe_title).

use std::path::Path;

use uwx_core::util::file_size;
use uwx_core::{CatalogEntry, Platform, PlatformIdentifier};

use crate::title_metadata::WIIU_TITLE_PREFIX;
use crate::wii::with_filename_identifier;

/// Identifier for Nintendo Wii U images.
#[derive(Debug, Default)]
pub struct WiiUIdentifier;

impl WiiUIdentifier {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformIdentifier for WiiUIdentifier {
    fn platform(&self) -> Platform {
        Platform::WiiU
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["wud", "wux", "rpx"]
    }

    fn identify(&self, path: &Path) -> Option<CatalogEntry> {
        if !self.accepts(path) {
            return None;
        }
        let mut entry = with_filename_identifier(CatalogEntry::new(Platform::WiiU, path));
        if entry
            .identifier
            .as_deref()
            .is_some_and(|id| !id.starts_with(WIIU_TITLE_PREFIX))
        {
            entry.identifier = None;
        }
        Some(entry.with_size(file_size(path)))
    }
}

#[cfg(test)]
#[path = "tests/wiiu_tests.rs"]
mod tests;
