use serde::{Deserialize, Serialize};

use crate::util::is_hex_digits;

/// Console platforms recognized by the identification engine.
///
/// Every catalog entry belongs to exactly one platform. The enum also
/// carries the per-platform identifier shape, so validation lives next to
/// the names instead of being re-implemented by each strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    // Nintendo
    Wii,
    GameCube,
    WiiU,

    // Microsoft
    Xbox360,
}

/// All platform variants in default dispatch order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Wii,
    Platform::GameCube,
    Platform::WiiU,
    Platform::Xbox360,
];

impl Platform {
    /// Canonical short name used for CLI arguments and settings files.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Wii => "wii",
            Self::GameCube => "gamecube",
            Self::WiiU => "wiiu",
            Self::Xbox360 => "xbox360",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wii => "Nintendo Wii",
            Self::GameCube => "Nintendo GameCube",
            Self::WiiU => "Nintendo Wii U",
            Self::Xbox360 => "Microsoft Xbox 360",
        }
    }

    /// Console manufacturer.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::Wii | Self::GameCube | Self::WiiU => "Nintendo",
            Self::Xbox360 => "Microsoft",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    ///
    /// The canonical short name is always the first alias.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Wii => &["wii", "rvl"],
            Self::GameCube => &["gamecube", "gcn", "gc", "ngc"],
            Self::WiiU => &["wiiu", "wii u", "wup"],
            Self::Xbox360 => &["xbox360", "xbox 360", "x360"],
        }
    }

    /// Human-readable description of the identifier shape for this platform.
    pub fn identifier_shape(&self) -> &'static str {
        match self {
            Self::Wii | Self::GameCube => "4-6 characters, first 4 in [A-Z0-9]",
            Self::WiiU => "16 hex digits",
            Self::Xbox360 => "8 hex digits",
        }
    }

    /// Check whether `id` has the syntactic shape of an identifier for this platform.
    ///
    /// Wii and GameCube identifiers only have their first four characters
    /// checked; the region/maker suffix is accepted as-is.
    pub fn is_valid_identifier(&self, id: &str) -> bool {
        match self {
            Self::Wii | Self::GameCube => is_disc_game_id(id),
            Self::WiiU => id.len() == 16 && is_hex_digits(id),
            Self::Xbox360 => id.len() == 8 && is_hex_digits(id),
        }
    }

    /// All 4 platform variants.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

/// Wii/GameCube game ID shape: 4 to 6 ASCII characters, the first four
/// uppercase letters or digits.
pub fn is_disc_game_id(id: &str) -> bool {
    if !(4..=6).contains(&id.len()) || !id.is_ascii() {
        return false;
    }
    id.bytes()
        .take(4)
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.aliases().contains(&lower.as_str()))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
