use thiserror::Error;

/// Errors that can occur while reading a header or metadata window.
///
/// Parsers return these so callers can log the reason, but every variant
/// means the same thing to a strategy: the header is not usable and the
/// entry falls back to filename-derived values.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// I/O error while opening or reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is too small to contain the expected structure
    #[error("File too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    /// The identifier field failed validation
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The magic signature did not match
    #[error("Bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: String, found: String },

    /// The bytes are present but do not form a plausible structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The structure is well-formed but the requested field is absent
    #[error("Not found: {0}")]
    NotFound(String),
}

impl HeaderError {
    pub fn too_small(expected: u64, actual: u64) -> Self {
        Self::TooSmall { expected, actual }
    }

    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier(id.into())
    }

    pub fn bad_magic(expected: &[u8], found: &[u8]) -> Self {
        Self::BadMagic {
            expected: String::from_utf8_lossy(expected).into_owned(),
            found: String::from_utf8_lossy(found).into_owned(),
        }
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
