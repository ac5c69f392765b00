//! Nintendo disc and package identifiers.
//!
//! This crate provides identification for Nintendo consoles:
//!
//! - Wii (.iso, .wbfs, .wad)
//! - GameCube (.gcm, and .iso via header reclassification)
//! - Wii U (.wud, .wux, .rpx, plus `title.tmd` descriptors)

pub mod disc_header;
pub mod gamecube;
pub mod title_metadata;
pub mod wii;
pub mod wiiu;

pub use disc_header::{DiscHeader, DiscSystem, read_disc_header, read_split_archive_id};
pub use gamecube::GameCubeIdentifier;
pub use title_metadata::{ContentType, TitleDescriptor, TitleId, describe_title, read_title_id};
pub use wii::WiiIdentifier;
pub use wiiu::WiiUIdentifier;
