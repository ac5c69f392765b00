//! Xbox 360 identifier.
//!
//! Supports:
//! - ISO images (.iso)
//! - XEX executables (.xex)
//! - Game folders: GOD (Games on Demand) containers and extracted XEX titles
//!
//! A game folder is recognized by any of:
//! - its own name being an 8-digit hex title ID
//! - a `default.xex` inside it
//! - a `$C` or `$T` container marker file inside it
//! - a `Content` sub-folder
//! - an immediate sub-folder named as a title ID

use std::path::Path;

use uwx_core::naming::title_id_from_path;
use uwx_core::util::{
    directory_size, file_name_string, file_size, file_stem_string, find_child_ignore_case,
    is_hex_digits, sorted_subdirs,
};
use uwx_core::{CatalogEntry, Platform, PlatformIdentifier, RecognitionMethod};

use crate::xex::read_xex_title_id;

/// Executable that holds the title ID of an extracted game.
pub const DEFAULT_XEX: &str = "default.xex";

/// Marker files written by GOD containers.
pub const CONTAINER_MARKERS: &[&str] = &["$C", "$T"];

/// Sub-folder of a GOD container.
pub const CONTENT_DIR: &str = "Content";

/// Format label for game folders.
pub const FOLDER_FORMAT: &str = "GOD";

/// Identifier for Xbox 360 images, executables and game folders.
#[derive(Debug, Default)]
pub struct Xbox360Identifier;

impl Xbox360Identifier {
    pub fn new() -> Self {
        Self
    }

    /// Check whether `dir` looks like an Xbox 360 game folder.
    pub fn is_game_folder(dir: &Path) -> bool {
        if !dir.is_dir() {
            return false;
        }
        if is_title_id(&file_name_string(dir)) {
            return true;
        }
        if find_child_ignore_case(dir, DEFAULT_XEX).is_some_and(|p| p.is_file()) {
            return true;
        }
        if CONTAINER_MARKERS
            .iter()
            .any(|m| find_child_ignore_case(dir, m).is_some_and(|p| p.is_file()))
        {
            return true;
        }
        if find_child_ignore_case(dir, CONTENT_DIR).is_some_and(|p| p.is_dir()) {
            return true;
        }
        sorted_subdirs(dir)
            .iter()
            .any(|sub| is_title_id(&file_name_string(sub)))
    }

    fn identify_folder(&self, dir: &Path) -> CatalogEntry {
        let folder_name = file_name_string(dir).trim().to_string();
        let entry = CatalogEntry::new(Platform::Xbox360, dir)
            .with_title(folder_name.clone())
            .with_format(FOLDER_FORMAT)
            .with_size(directory_size(dir));

        // Folder names carry the title ID by convention only.
        if is_title_id(&folder_name) {
            return entry.with_identifier(
                folder_name.to_ascii_uppercase(),
                RecognitionMethod::FilenameFallback,
            );
        }

        let resolved = match find_child_ignore_case(dir, DEFAULT_XEX).filter(|p| p.is_file()) {
            Some(xex) => xex_title_id(&xex).or_else(|| path_title_id(dir)),
            None => find_title_id_in_folder(dir)
                .map(|id| (id, RecognitionMethod::FilenameFallback))
                .or_else(|| path_title_id(dir)),
        };
        match resolved {
            Some((id, method)) => entry.with_identifier(id, method),
            None => {
                log::debug!(
                    "No title ID for '{}', using the folder name",
                    dir.display()
                );
                entry.with_identifier(
                    folder_name.to_ascii_uppercase(),
                    RecognitionMethod::FilenameFallback,
                )
            }
        }
    }

    fn identify_file(&self, path: &Path) -> CatalogEntry {
        let stem = file_stem_string(path);
        let mut entry = CatalogEntry::new(Platform::Xbox360, path).with_size(file_size(path));

        let resolved = if entry.format == "xex" {
            let parent = path.parent().unwrap_or(Path::new(""));
            if stem.eq_ignore_ascii_case("default") {
                if let Some(name) = parent.file_name() {
                    entry.title = name.to_string_lossy().into_owned();
                }
            }
            let xex = find_child_ignore_case(parent, DEFAULT_XEX)
                .filter(|p| p.is_file())
                .unwrap_or_else(|| path.to_path_buf());
            xex_title_id(&xex).or_else(|| path_title_id(path))
        } else {
            path_title_id(path)
        };

        let (id, method) =
            resolved.unwrap_or((stem.to_ascii_uppercase(), RecognitionMethod::FilenameFallback));
        entry.with_identifier(id, method)
    }
}

impl PlatformIdentifier for Xbox360Identifier {
    fn platform(&self) -> Platform {
        Platform::Xbox360
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["iso", "xex"]
    }

    fn accepts(&self, path: &Path) -> bool {
        if path.is_dir() {
            Self::is_game_folder(path)
        } else {
            uwx_core::util::has_extension(path, self.file_extensions())
        }
    }

    fn identify(&self, path: &Path) -> Option<CatalogEntry> {
        if path.is_dir() {
            Self::is_game_folder(path).then(|| self.identify_folder(path))
        } else if self.accepts(path) {
            Some(self.identify_file(path))
        } else {
            None
        }
    }
}

fn is_title_id(name: &str) -> bool {
    let name = name.trim();
    name.len() == 8 && is_hex_digits(name)
}

fn xex_title_id(xex: &Path) -> Option<(String, RecognitionMethod)> {
    match read_xex_title_id(xex) {
        Ok(id) => Some((id, RecognitionMethod::HeaderRead)),
        Err(e) => {
            log::debug!("XEX header not usable for '{}': {}", xex.display(), e);
            None
        }
    }
}

fn path_title_id(path: &Path) -> Option<(String, RecognitionMethod)> {
    title_id_from_path(path).map(|id| (id, RecognitionMethod::FilenameFallback))
}

/// Depth-first search for a sub-folder named as a title ID.
///
/// GOD containers nest the title as `<name>/<title id>/<content type>/...`.
fn find_title_id_in_folder(dir: &Path) -> Option<String> {
    sorted_subdirs(dir).into_iter().find_map(|sub| {
        let name = file_name_string(&sub);
        if is_title_id(&name) {
            Some(name.trim().to_ascii_uppercase())
        } else {
            find_title_id_in_folder(&sub)
        }
    })
}

#[cfg(test)]
#[path = "tests/xbox360_tests.rs"]
mod tests;
