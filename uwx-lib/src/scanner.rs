//! Directory scanner for game collections.
//!
//! Walks a library folder, routes every candidate through the
//! [`IdentifierDispatcher`], then merges the batch with [`group_batch`].
//! Identification runs on the rayon pool when enabled; grouping always
//! waits for the complete batch.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use uwx_core::util::file_size;
use uwx_core::{CatalogEntry, Platform, RecognitionMethod};

use crate::dispatcher::{Dispatch, IdentifierDispatcher};
use crate::grouping::{group_batch, is_multi_disc_metadata_dir, is_split_part};
use crate::{ScanConfig, ScanError, ScanProgress};

/// Result of scanning one library folder.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Logical games after grouping, in walk order.
    pub entries: Vec<CatalogEntry>,
    /// Paths no enabled strategy accepts.
    pub unrecognized: Vec<PathBuf>,
}

impl ScanReport {
    /// Number of entries per platform.
    pub fn counts_by_platform(&self) -> BTreeMap<Platform, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.platform).or_insert(0) += 1;
        }
        counts
    }

    /// Sum of every entry's aggregate size.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size_bytes).sum()
    }

    /// Entries whose identifier came from the image itself.
    pub fn header_confirmed(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.recognition == RecognitionMethod::HeaderRead)
    }
}

/// A path found by the walk.
#[derive(Debug)]
enum Candidate {
    /// Routed through the dispatcher.
    Path(PathBuf),
    /// Split-archive continuation; accounted for by grouping only.
    SplitPart(PathBuf),
}

/// Scan `root` and return grouped catalog entries.
pub fn scan_directory(
    root: &Path,
    config: &ScanConfig,
    dispatcher: &IdentifierDispatcher,
) -> Result<ScanReport, ScanError> {
    scan_directory_with_progress(root, config, dispatcher, &|_| {})
}

/// Scan `root`, reporting progress through `progress`.
pub fn scan_directory_with_progress(
    root: &Path,
    config: &ScanConfig,
    dispatcher: &IdentifierDispatcher,
    progress: &(dyn Fn(ScanProgress) + Sync),
) -> Result<ScanReport, ScanError> {
    if !fs::metadata(root)?.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let track_parts = dispatcher.get_by_platform(Platform::Wii).is_some();
    let mut candidates = Vec::new();
    let entries = fs::read_dir(root)?;
    walk(
        root,
        entries,
        config.recursive,
        track_parts,
        dispatcher,
        &mut candidates,
    );
    progress(ScanProgress::started(candidates.len()));

    let classify = |candidate: &Candidate| -> Result<CatalogEntry, PathBuf> {
        match candidate {
            Candidate::SplitPart(path) => {
                progress(ScanProgress::identified(path, true));
                Ok(CatalogEntry::new(Platform::Wii, path).with_size(file_size(path)))
            }
            Candidate::Path(path) => {
                let outcome = dispatcher.dispatch(path);
                let recognized = matches!(outcome, Dispatch::Identified(_));
                progress(ScanProgress::identified(path, recognized));
                match outcome {
                    Dispatch::Identified(entry) => Ok(entry),
                    Dispatch::Unsupported => Err(path.clone()),
                }
            }
        }
    };

    let results: Vec<Result<CatalogEntry, PathBuf>> = if config.parallel {
        candidates.par_iter().map(classify).collect()
    } else {
        candidates.iter().map(classify).collect()
    };

    let mut batch = Vec::with_capacity(results.len());
    let mut unrecognized = Vec::new();
    for result in results {
        match result {
            Ok(entry) => batch.push(entry),
            Err(path) => unrecognized.push(path),
        }
    }

    progress(ScanProgress::Grouping);
    let entries = group_batch(batch);
    progress(ScanProgress::Completed {
        entries: entries.len(),
        unrecognized: unrecognized.len(),
    });
    log::info!(
        "Scanned {}: {} entries, {} unrecognized",
        root.display(),
        entries.len(),
        unrecognized.len()
    );

    Ok(ScanReport {
        entries,
        unrecognized,
    })
}

/// Collect candidates under one directory, sorted by path.
///
/// Symlinks and hidden entries are skipped. A directory a strategy claims
/// as a game folder is one candidate and is not descended into.
fn walk(
    dir: &Path,
    entries: fs::ReadDir,
    recursive: bool,
    track_parts: bool,
    dispatcher: &IdentifierDispatcher,
    out: &mut Vec<Candidate>,
) {
    let mut children: Vec<fs::DirEntry> = entries.flatten().collect();
    children.sort_by_key(|e| e.path());

    for child in children {
        let path = child.path();
        let file_type = match child.file_type() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_symlink() {
            log::debug!("Skipping symlink {}", path.display());
        } else if child.file_name().to_string_lossy().starts_with('.') {
            log::debug!("Skipping hidden {}", path.display());
        } else if file_type.is_dir() {
            if dispatcher.claims_directory(&path) {
                out.push(Candidate::Path(path));
            } else if is_multi_disc_metadata_dir(&path) {
                log::debug!("Skipping disc metadata folder {}", path.display());
            } else if recursive {
                match fs::read_dir(&path) {
                    Ok(sub) => walk(&path, sub, recursive, track_parts, dispatcher, out),
                    Err(e) => log::warn!("Cannot read directory {}: {}", path.display(), e),
                }
            }
        } else if track_parts && is_split_part(&path) {
            out.push(Candidate::SplitPart(path));
        } else {
            out.push(Candidate::Path(path));
        }
    }
    log::debug!("Walked {}", dir.display());
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
