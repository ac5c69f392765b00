//! Microsoft console identifiers.
//!
//! This crate provides identification for Microsoft consoles:
//!
//! - Xbox 360 (ISO images, XEX executables, GOD and extracted game folders)

pub mod xbox360;
pub mod xex;

pub use xbox360::Xbox360Identifier;
pub use xex::{parse_xex_title_id, read_xex_title_id};
