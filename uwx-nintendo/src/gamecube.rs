//! Nintendo GameCube identifier.
//!
//! Supports:
//! - GCM images (.gcm)
//!
//! GameCube `.iso` dumps share their extension with Wii and are handled by
//! [`WiiIdentifier`](crate::WiiIdentifier), which reclassifies them from
//! the header.

use std::path::Path;

use uwx_core::util::file_size;
use uwx_core::{CatalogEntry, Platform, PlatformIdentifier};

use crate::wii::identify_disc_image;

/// Identifier for Nintendo GameCube disc images.
#[derive(Debug, Default)]
pub struct GameCubeIdentifier;

impl GameCubeIdentifier {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformIdentifier for GameCubeIdentifier {
    fn platform(&self) -> Platform {
        Platform::GameCube
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["gcm"]
    }

    fn identify(&self, path: &Path) -> Option<CatalogEntry> {
        if !self.accepts(path) {
            return None;
        }
        Some(identify_disc_image(path, Platform::GameCube).with_size(file_size(path)))
    }
}

#[cfg(test)]
#[path = "tests/gamecube_tests.rs"]
mod tests;
