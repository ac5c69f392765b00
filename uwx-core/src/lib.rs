use std::path::Path;

pub mod entry;
pub mod error;
pub mod naming;
pub mod platform;
pub mod util;

pub use entry::{CatalogEntry, PartFile, RecognitionMethod};
pub use error::HeaderError;
pub use platform::{Platform, PlatformParseError};

/// Trait for recognizing a game on one platform from a path on disk.
///
/// Implementors read whatever header bytes their format carries and fall
/// back to file and folder names when the header is missing or unreadable.
/// Identification never fails loudly: a path that cannot be recognized
/// yields `None` and the caller moves on to the next identifier.
pub trait PlatformIdentifier: Send + Sync {
    /// Returns the platform this identifier handles.
    fn platform(&self) -> Platform;

    /// Returns the full name of the platform this identifier handles.
    fn platform_name(&self) -> &'static str {
        self.platform().display_name()
    }

    /// Returns the short name used for CLI and config matching.
    fn short_name(&self) -> &'static str {
        self.platform().short_name()
    }

    /// Returns the manufacturer of this console.
    fn manufacturer(&self) -> &'static str {
        self.platform().manufacturer()
    }

    /// Returns file extensions (lowercase, no dot) this identifier accepts.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Quick check on the path alone, without opening it.
    ///
    /// The default accepts regular paths with one of
    /// [`file_extensions`](PlatformIdentifier::file_extensions).
    /// Identifiers that understand folder layouts override this.
    fn accepts(&self, path: &Path) -> bool {
        !path.is_dir() && util::has_extension(path, self.file_extensions())
    }

    /// Build a catalog entry for `path`, or `None` if it is not a game
    /// this identifier can describe.
    ///
    /// Only called for paths where [`accepts`](PlatformIdentifier::accepts)
    /// returned true.
    fn identify(&self, path: &Path) -> Option<CatalogEntry>;
}
