//! Nintendo Wii identifier.
//!
//! Supports:
//! - ISO images (.iso), read through the shared disc header
//! - WBFS images (.wbfs), read through the WBFS game ID field
//! - WAD packages (.wad), named from the file only

use std::path::Path;

use uwx_core::naming::identifier_from_name;
use uwx_core::util::{extension_lower, file_size, file_stem_string};
use uwx_core::{CatalogEntry, Platform, PlatformIdentifier, RecognitionMethod};

use crate::disc_header::{DiscSystem, read_disc_header, read_split_archive_id};

/// Subtype tag for GameCube discs.
pub const GAMECUBE_SUBTYPE: &str = "NGC";

/// Identifier for Nintendo Wii images.
#[derive(Debug, Default)]
pub struct WiiIdentifier;

impl WiiIdentifier {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformIdentifier for WiiIdentifier {
    fn platform(&self) -> Platform {
        Platform::Wii
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["iso", "wbfs", "wad"]
    }

    fn identify(&self, path: &Path) -> Option<CatalogEntry> {
        if !self.accepts(path) {
            return None;
        }
        let entry = match extension_lower(path).as_str() {
            "iso" => identify_disc_image(path, Platform::Wii),
            "wbfs" => identify_wbfs(path),
            _ => with_filename_identifier(CatalogEntry::new(Platform::Wii, path)),
        };
        Some(entry.with_size(file_size(path)))
    }
}

/// Build an entry from a plain disc image.
///
/// The header's system code decides between Wii and GameCube; an unknown
/// code keeps `default`. Without a usable header the entry is named from
/// the file.
pub(crate) fn identify_disc_image(path: &Path, default: Platform) -> CatalogEntry {
    let entry = CatalogEntry::new(default, path);
    let entry = match read_disc_header(path) {
        Ok(header) => {
            let platform = match header.system {
                DiscSystem::Wii => Platform::Wii,
                DiscSystem::GameCube => Platform::GameCube,
                DiscSystem::Unknown => default,
            };
            let entry = entry
                .with_identifier(header.game_id, RecognitionMethod::HeaderRead)
                .with_platform(platform);
            match header.title {
                Some(title) => entry.with_title(title),
                None => entry,
            }
        }
        Err(e) => {
            log::debug!("Disc header not usable for '{}': {}", path.display(), e);
            with_filename_identifier(entry)
        }
    };
    if entry.platform == Platform::GameCube {
        entry.with_subtype(GAMECUBE_SUBTYPE)
    } else {
        entry
    }
}

/// WBFS containers carry an ID but no title at a known offset.
fn identify_wbfs(path: &Path) -> CatalogEntry {
    let entry = CatalogEntry::new(Platform::Wii, path);
    match read_split_archive_id(path) {
        Ok(id) => entry.with_identifier(id, RecognitionMethod::HeaderRead),
        Err(e) => {
            log::debug!("WBFS game ID not usable for '{}': {}", path.display(), e);
            with_filename_identifier(entry)
        }
    }
}

/// Attach an identifier derived from the file stem, if it has the
/// platform's shape.
pub(crate) fn with_filename_identifier(entry: CatalogEntry) -> CatalogEntry {
    let stem = file_stem_string(&entry.path);
    match identifier_from_name(entry.platform, &stem) {
        Some(id) => entry.with_identifier(id, RecognitionMethod::FilenameFallback),
        None => entry,
    }
}

#[cfg(test)]
#[path = "tests/wii_tests.rs"]
mod tests;
