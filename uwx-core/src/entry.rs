//! Catalog entries produced by identification and consumed by grouping.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Platform;
use crate::util::{extension_lower, file_stem_string};

/// How an entry's identifier was obtained.
///
/// Downstream consumers should only trust `HeaderRead` identifiers for
/// automated file operations such as renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecognitionMethod {
    /// Recovered from bytes inside the image or from the container layout.
    HeaderRead,
    /// Derived from file or directory names only.
    FilenameFallback,
}

impl RecognitionMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HeaderRead => "header",
            Self::FilenameFallback => "filename",
        }
    }
}

/// An additional physical file or folder attributed to an entry by grouping
/// (split-archive parts, a second disc, an auxiliary metadata folder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl PartFile {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }
}

/// One logical game in a scanned location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical identifier (Wii/GameCube game ID, Wii U title ID, Xbox 360 title ID)
    pub identifier: Option<String>,

    /// Best-effort display title; the file stem when nothing better is known
    pub title: String,

    pub platform: Platform,

    /// Secondary classification, e.g. "NGC" for a GameCube disc found by a Wii strategy
    pub platform_subtype: Option<String>,

    /// Normalized lowercase extension, or a container kind such as "GOD"
    pub format: String,

    /// Primary file or folder
    pub path: PathBuf,

    /// Aggregate size: the primary plus every entry in `parts`
    pub size_bytes: u64,

    pub recognition: RecognitionMethod,

    /// Physical members other than `path`, filled in by grouping
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<PartFile>,

    /// Opaque enrichment data (region, publisher, ...) carried through untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl CatalogEntry {
    /// A filename-derived entry: title from the stem, format from the extension.
    pub fn new(platform: Platform, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            identifier: None,
            title: file_stem_string(&path),
            platform,
            platform_subtype: None,
            format: extension_lower(&path),
            path,
            size_bytes: 0,
            recognition: RecognitionMethod::FilenameFallback,
            parts: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_identifier(mut self, id: impl Into<String>, method: RecognitionMethod) -> Self {
        self.identifier = Some(id.into());
        self.recognition = method;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.platform_subtype = Some(subtype.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    /// Sum of the sizes recorded in `parts`.
    pub fn parts_size(&self) -> u64 {
        self.parts.iter().map(|p| p.size_bytes).sum()
    }

    /// Size of the primary path alone.
    pub fn own_size(&self) -> u64 {
        self.size_bytes.saturating_sub(self.parts_size())
    }

    /// Every physical path this entry claims, primary first.
    pub fn all_paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.path.as_path()).chain(self.parts.iter().map(|p| p.path.as_path()))
    }

    /// True if the identifier is present and has the platform's shape.
    pub fn has_conforming_identifier(&self) -> bool {
        self.identifier
            .as_deref()
            .is_some_and(|id| self.platform.is_valid_identifier(id))
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
