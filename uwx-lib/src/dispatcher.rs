//! Ordered dispatch of paths to platform identifiers.

use std::path::Path;

use uwx_core::{CatalogEntry, Platform, PlatformIdentifier};
use uwx_microsoft::Xbox360Identifier;
use uwx_nintendo::{GameCubeIdentifier, WiiIdentifier, WiiUIdentifier};

use crate::ScanConfig;

/// Metadata about a registered identifier.
#[derive(Debug, Clone)]
pub struct IdentifierInfo {
    pub platform: Platform,
    pub short_name: &'static str,
    pub platform_name: &'static str,
    pub manufacturer: &'static str,
    pub extensions: &'static [&'static str],
}

impl IdentifierInfo {
    pub fn from_identifier(identifier: &dyn PlatformIdentifier) -> Self {
        Self {
            platform: identifier.platform(),
            short_name: identifier.short_name(),
            platform_name: identifier.platform_name(),
            manufacturer: identifier.manufacturer(),
            extensions: identifier.file_extensions(),
        }
    }
}

/// Outcome of routing one path.
#[derive(Debug)]
pub enum Dispatch {
    /// A strategy accepted the path and produced an entry.
    Identified(CatalogEntry),
    /// No registered strategy accepts paths of this shape.
    Unsupported,
}

/// Ordered list of platform identifiers.
///
/// The first identifier whose `accepts` returns true handles the path.
/// The dispatcher holds no state between calls and is shared freely
/// across threads during a scan.
pub struct IdentifierDispatcher {
    identifiers: Vec<Box<dyn PlatformIdentifier>>,
}

impl Default for IdentifierDispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl IdentifierDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            identifiers: Vec::new(),
        }
    }

    /// Dispatcher with every built-in identifier in default order.
    pub fn standard() -> Self {
        Self::for_platforms(Platform::all())
    }

    /// Dispatcher with the platforms enabled in `config`, in its order.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::for_platforms(&config.platforms)
    }

    fn for_platforms(platforms: &[Platform]) -> Self {
        let mut dispatcher = Self::new();
        for platform in platforms {
            match platform {
                Platform::Wii => dispatcher.register(WiiIdentifier::new()),
                Platform::GameCube => dispatcher.register(GameCubeIdentifier::new()),
                Platform::WiiU => dispatcher.register(WiiUIdentifier::new()),
                Platform::Xbox360 => dispatcher.register(Xbox360Identifier::new()),
            };
        }
        dispatcher
    }

    /// Register an identifier at the end of the dispatch order.
    pub fn register<I: PlatformIdentifier + 'static>(&mut self, identifier: I) -> &mut Self {
        self.identifiers.push(Box::new(identifier));
        self
    }

    /// Registered identifiers, in dispatch order.
    pub fn identifiers(&self) -> impl Iterator<Item = &dyn PlatformIdentifier> {
        self.identifiers.iter().map(|i| i.as_ref() as &dyn PlatformIdentifier)
    }

    /// Metadata for every registered identifier, in dispatch order.
    pub fn infos(&self) -> Vec<IdentifierInfo> {
        self.identifiers()
            .map(IdentifierInfo::from_identifier)
            .collect()
    }

    /// Get the identifier for a platform.
    pub fn get_by_platform(&self, platform: Platform) -> Option<&dyn PlatformIdentifier> {
        self.identifiers().find(|i| i.platform() == platform)
    }

    /// The identifier that would handle `path`, if any.
    pub fn find_identifier(&self, path: &Path) -> Option<&dyn PlatformIdentifier> {
        self.identifiers().find(|i| i.accepts(path))
    }

    /// Whether any directory-shaped identifier claims `dir` as one game.
    pub fn claims_directory(&self, dir: &Path) -> bool {
        self.find_identifier(dir).is_some()
    }

    /// Route a path to the first accepting identifier.
    pub fn dispatch(&self, path: &Path) -> Dispatch {
        let Some(identifier) = self.find_identifier(path) else {
            log::debug!("No identifier accepts '{}'", path.display());
            return Dispatch::Unsupported;
        };
        match identifier.identify(path) {
            Some(entry) => Dispatch::Identified(entry),
            None => {
                log::debug!(
                    "{} identifier accepted '{}' but produced no entry",
                    identifier.short_name(),
                    path.display()
                );
                Dispatch::Unsupported
            }
        }
    }

    /// Identify a single path.
    pub fn identify_path(&self, path: &Path) -> Option<CatalogEntry> {
        match self.dispatch(path) {
            Dispatch::Identified(entry) => Some(entry),
            Dispatch::Unsupported => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
