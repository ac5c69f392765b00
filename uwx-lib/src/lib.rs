//! Library scanning for Wii, GameCube, Wii U and Xbox 360 collections.
//!
//! The platform crates identify single paths; this crate walks folders,
//! routes candidates through an [`IdentifierDispatcher`] and merges the
//! results into logical games with [`group_batch`].

pub mod dispatcher;
pub mod error;
pub mod grouping;
pub mod progress;
pub mod scanner;
pub mod settings;

pub use dispatcher::{Dispatch, IdentifierDispatcher, IdentifierInfo};
pub use error::ScanError;
pub use grouping::group_batch;
pub use progress::ScanProgress;
pub use scanner::{ScanReport, scan_directory, scan_directory_with_progress};
pub use settings::{ScanConfig, settings_path};

pub use uwx_core::{CatalogEntry, PartFile, Platform, RecognitionMethod};
