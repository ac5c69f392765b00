use thiserror::Error;

use uwx_core::HeaderError;
use uwx_lib::ScanError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Scan or settings failure
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// A header or title descriptor could not be read
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A path no enabled strategy accepts
    #[error("Unsupported path: {0}")]
    Unsupported(String),
}

impl CliError {
    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}
