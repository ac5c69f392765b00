//! Scan configuration and the settings file.
//!
//! Settings live in `<config dir>/uwx/settings.toml` under a `[scan]`
//! table. The configuration is loaded once by the frontend and passed
//! into [`IdentifierDispatcher::from_config`](crate::IdentifierDispatcher::from_config)
//! and [`scan_directory`](crate::scan_directory); nothing reads it behind
//! the caller's back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uwx_core::Platform;

use crate::ScanError;

/// Options for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Enabled platforms, in dispatch order.
    pub platforms: Vec<Platform>,
    /// Descend into sub-directories.
    pub recursive: bool,
    /// Identify paths on the rayon thread pool.
    pub parallel: bool,
    /// Remembered scan root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_root: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            platforms: Platform::all().to_vec(),
            recursive: true,
            parallel: true,
            library_root: None,
        }
    }
}

/// On-disk layout of `settings.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    scan: ScanConfig,
}

impl ScanConfig {
    /// Restrict the enabled platforms, keeping the given order.
    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load from the default settings file. A missing file yields defaults.
    pub fn load() -> Result<Self, ScanError> {
        Self::load_from(&settings_path())
    }

    /// Load from a specific settings file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ScanError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let file: SettingsFile = toml::from_str(&contents)?;
        file.scan.validate()?;
        Ok(file.scan)
    }

    /// Save to the default settings file.
    pub fn save(&self) -> Result<(), ScanError> {
        self.save_to(&settings_path())
    }

    /// Save to a specific settings file, atomically.
    pub fn save_to(&self, path: &Path) -> Result<(), ScanError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(&SettingsFile { scan: self.clone() })?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, &serialized)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Resolve the scan root:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. Saved `library_root`
    /// 3. Current working directory
    pub fn resolve_root(&self, cli_override: Option<PathBuf>) -> PathBuf {
        if let Some(p) = cli_override {
            return p;
        }
        if let Some(p) = &self.library_root {
            return p.clone();
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Reject an empty or repeating platform list.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.platforms.is_empty() {
            return Err(ScanError::config("at least one platform must be enabled"));
        }
        let mut seen = Vec::with_capacity(self.platforms.len());
        for p in &self.platforms {
            if seen.contains(p) {
                return Err(ScanError::config(format!(
                    "platform '{}' listed more than once",
                    p.short_name()
                )));
            }
            seen.push(*p);
        }
        Ok(())
    }
}

/// Canonical path to the settings file: `<config dir>/uwx/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("uwx").join("settings.toml")
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
