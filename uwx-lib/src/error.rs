use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the scan entry point and the settings file.
///
/// Per-path identification failures never appear here; they degrade to
/// filename-derived entries or to the unrecognized list.
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error on the scan root or the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file holds a value that cannot be used
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The settings file could not be parsed
    #[error("Cannot parse settings: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// The settings could not be serialized
    #[error("Cannot write settings: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The scan root exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ScanError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
