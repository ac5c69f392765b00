//! Batch post-processing: merging physical files into logical games.
//!
//! Two rules run over one freshly identified batch:
//!
//! 1. **Split archives.** `game.wbfs` plus `game.wbf1`..`game.wbf4` in the
//!    same directory form one entry keyed by the `.wbfs` file. A group with
//!    no `.wbfs` is dropped.
//! 2. **Multi-disc sets.** A `game.iso` absorbs a sibling `disc2.iso` and
//!    the `sys/` folder next to it; the `disc2.iso` entry is removed. This
//!    rule looks only at file names, never at platform tags, so a disc that
//!    was tagged with the wrong platform upstream is still merged. A
//!    non-GameCube `game.iso` next to a `disc2.iso` is merged the same way.
//!
//! Directories are compared exactly; only file names are matched without
//! regard to case.
//!
//! Members are recorded in [`CatalogEntry::parts`] and the entry's size is
//! always recomputed as its own size plus the parts, so feeding the output
//! back in changes nothing.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use uwx_core::util::{
    extension_lower, file_name_string, file_size, file_stem_string, find_child_ignore_case,
    path_key, path_size,
};
use uwx_core::{CatalogEntry, PartFile};

/// Extension of a split archive's primary file.
pub const SPLIT_PRIMARY_EXT: &str = "wbfs";

/// Extensions of a split archive's continuation files, in order.
pub const SPLIT_PART_EXTS: &[&str] = &["wbf1", "wbf2", "wbf3", "wbf4"];

/// File name of the first disc of a multi-disc set.
pub const PRIMARY_DISC_NAME: &str = "game.iso";

/// File name of the second disc of a multi-disc set.
pub const SECOND_DISC_NAME: &str = "disc2.iso";

/// Auxiliary metadata folder stored next to a multi-disc set.
pub const AUX_METADATA_DIR: &str = "sys";

/// True if `path` is a split-archive continuation file.
pub fn is_split_part(path: &Path) -> bool {
    let ext = extension_lower(path);
    SPLIT_PART_EXTS.contains(&ext.as_str())
}

/// True if `dir` is the metadata folder of a multi-disc set, whose size is
/// already attributed to the set's first disc.
pub fn is_multi_disc_metadata_dir(dir: &Path) -> bool {
    is_named(dir, AUX_METADATA_DIR)
        && dir
            .parent()
            .and_then(|parent| find_child_ignore_case(parent, PRIMARY_DISC_NAME))
            .is_some_and(|p| p.is_file())
}

/// Merge split archives and multi-disc sets in one batch.
///
/// Returns a new list in input order. Entries that repeat a primary path
/// are collapsed to the first one.
pub fn group_batch(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let entries = dedup_by_path(entries);
    let entries = merge_split_archives(entries);
    merge_multi_disc(entries)
}

fn dedup_by_path(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| {
            let fresh = seen.insert(e.path.clone());
            if !fresh {
                log::debug!("Dropping duplicate entry for '{}'", e.path.display());
            }
            fresh
        })
        .collect()
}

/// Containing directory, compared exactly.
fn parent_key(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Directory + lowercase stem, shared by every member of a split archive.
fn split_group_key(path: &Path) -> (PathBuf, String) {
    (parent_key(path), file_stem_string(path).to_lowercase())
}

/// Add a part unless the entry already claims that path, then recompute
/// the aggregate size.
fn absorb(entry: &mut CatalogEntry, part: PartFile) {
    let own = entry.own_size();
    let key = path_key(&part.path);
    if path_key(&entry.path) != key && !entry.parts.iter().any(|p| path_key(&p.path) == key) {
        entry.parts.push(part);
    }
    entry.size_bytes = own.saturating_add(entry.parts_size());
}

// ---------------------------------------------------------------------------
// Split archives
// ---------------------------------------------------------------------------

fn merge_split_archives(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut has_primary = HashSet::new();
    let mut batch_parts: HashMap<(PathBuf, String), Vec<PartFile>> = HashMap::new();

    for entry in &entries {
        let ext = extension_lower(&entry.path);
        if ext == SPLIT_PRIMARY_EXT {
            has_primary.insert(split_group_key(&entry.path));
        } else if SPLIT_PART_EXTS.contains(&ext.as_str()) {
            batch_parts
                .entry(split_group_key(&entry.path))
                .or_default()
                .push(PartFile::new(entry.path.clone(), entry.own_size()));
        }
    }

    let mut out = Vec::with_capacity(entries.len());
    for mut entry in entries {
        let ext = extension_lower(&entry.path);
        let key = split_group_key(&entry.path);

        if SPLIT_PART_EXTS.contains(&ext.as_str()) {
            if !has_primary.contains(&key) {
                log::debug!(
                    "Dropping split part '{}' with no .{} primary",
                    entry.path.display(),
                    SPLIT_PRIMARY_EXT
                );
            }
            continue;
        }

        if ext == SPLIT_PRIMARY_EXT {
            for part in batch_parts.remove(&key).unwrap_or_default() {
                absorb(&mut entry, part);
            }
            for part in probe_split_parts(&entry.path) {
                absorb(&mut entry, part);
            }
        }
        out.push(entry);
    }
    out
}

/// Continuation files of `primary` that exist on disk.
fn probe_split_parts(primary: &Path) -> Vec<PartFile> {
    let Some(dir) = primary.parent() else {
        return Vec::new();
    };
    let stem = file_stem_string(primary);
    SPLIT_PART_EXTS
        .iter()
        .filter_map(|ext| find_child_ignore_case(dir, &format!("{stem}.{ext}")))
        .filter(|p| p.is_file())
        .map(|p| {
            let size = file_size(&p);
            PartFile::new(p, size)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Multi-disc sets
// ---------------------------------------------------------------------------

fn is_named(path: &Path, name: &str) -> bool {
    file_name_string(path).eq_ignore_ascii_case(name)
}

fn merge_multi_disc(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let primary_dirs: HashSet<PathBuf> = entries
        .iter()
        .filter(|e| is_named(&e.path, PRIMARY_DISC_NAME))
        .map(|e| parent_key(&e.path))
        .collect();

    let mut second_discs: HashMap<PathBuf, PartFile> = HashMap::new();
    for entry in &entries {
        if is_named(&entry.path, SECOND_DISC_NAME) {
            second_discs
                .entry(parent_key(&entry.path))
                .or_insert_with(|| PartFile::new(entry.path.clone(), entry.own_size()));
        }
    }

    let mut out = Vec::with_capacity(entries.len());
    for mut entry in entries {
        let dir_key = parent_key(&entry.path);

        if is_named(&entry.path, SECOND_DISC_NAME) && primary_dirs.contains(&dir_key) {
            continue;
        }

        if is_named(&entry.path, PRIMARY_DISC_NAME) {
            let second = second_discs
                .remove(&dir_key)
                .or_else(|| probe_child(&dir_key, SECOND_DISC_NAME, false));
            if let Some(part) = second {
                absorb(&mut entry, part);
            }
            if let Some(part) = probe_child(&dir_key, AUX_METADATA_DIR, true) {
                absorb(&mut entry, part);
            }
        }
        out.push(entry);
    }
    out
}

/// A file (or, with `want_dir`, a folder) named `name` inside `dir`.
fn probe_child(dir: &Path, name: &str, want_dir: bool) -> Option<PartFile> {
    let path = find_child_ignore_case(dir, name)?;
    if path.is_dir() != want_dir {
        return None;
    }
    let size = path_size(&path);
    Some(PartFile::new(path, size))
}

#[cfg(test)]
#[path = "tests/grouping_tests.rs"]
mod tests;
