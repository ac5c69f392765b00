//! Byte, ASCII and filesystem helpers shared by the platform crates.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::HeaderError;

/// Characters stripped from the end of fixed-width header fields.
const HEADER_TRIM: &[char] = &['\0', ' ', '\r', '\n', '\t'];

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format a byte count with fractional KB/MB/GB (e.g., "1.5 KB", "4.3 GB").
pub fn format_bytes_approx(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

// ---------------------------------------------------------------------------
// Header fields
// ---------------------------------------------------------------------------

/// Decode a fixed-width ASCII header field.
///
/// Bytes outside 7-bit ASCII become `?`. Trailing NUL, space, CR, LF and
/// TAB are trimmed; leading bytes and interior NULs are kept as-is.
pub fn read_header_ascii(buf: &[u8]) -> String {
    let s: String = buf
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect();
    s.trim_end_matches(HEADER_TRIM).to_string()
}

/// True if every character of `s` is an ASCII hex digit and `s` is non-empty.
pub fn is_hex_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn read_u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub fn read_u32_be(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub fn read_u64_be(buf: &[u8], offset: usize) -> Option<u64> {
    let bytes = buf.get(offset..offset.checked_add(8)?)?;
    let mut arr = [0u8; 8];
    arr.copy_from_slice(bytes);
    Some(u64::from_be_bytes(arr))
}

/// Read at most `len` bytes starting at `offset`.
///
/// The file is opened read-only and closed before returning, on success
/// and on every error path. The returned buffer may be shorter than `len`
/// if the file ends early.
pub fn read_window(path: &Path, offset: u64, len: usize) -> Result<Vec<u8>, HeaderError> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut buf = Vec::with_capacity(len);
    file.take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Lowercase extension of a path without the dot, or an empty string.
pub fn extension_lower(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Check if a path has an extension in the allowed list (case-insensitive).
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    let ext = extension_lower(path);
    !ext.is_empty() && extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
}

/// File stem as an owned string, or an empty string for odd paths.
pub fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name as an owned string, or an empty string for odd paths.
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Comparison key for a path: the parent directory compared exactly, the
/// file name case-insensitively.
///
/// `dir/Game.WBFS` and `dir/game.wbfs` compare equal; `Games/x.iso` and
/// `games/x.iso` do not.
pub fn path_key(path: &Path) -> (PathBuf, String) {
    let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
    (parent, file_name_string(path).to_lowercase())
}

/// Find a direct child of `dir` whose name matches `name` case-insensitively.
///
/// An exact-case hit is returned without listing the directory.
pub fn find_child_ignore_case(dir: &Path, name: &str) -> Option<PathBuf> {
    let exact = dir.join(name);
    if fs::symlink_metadata(&exact).is_ok() {
        return Some(exact);
    }
    let entries = fs::read_dir(dir).ok()?;
    entries
        .flatten()
        .find(|e| e.file_name().to_string_lossy().eq_ignore_ascii_case(name))
        .map(|e| e.path())
}

/// Sorted list of the immediate sub-directories of `dir`.
///
/// Symlinks are not followed. Unreadable directories yield an empty list.
pub fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            log::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    dirs.sort();
    dirs
}

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

/// Size of a single file in bytes, or 0 if it cannot be read.
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Total size of every file under `dir`, recursively.
///
/// Symlinks are neither followed nor counted, so link cycles cannot
/// recurse. A directory that cannot be listed contributes 0, and the
/// failure never aborts the rest of the walk.
pub fn directory_size(dir: &Path) -> u64 {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            log::debug!("Cannot size {}: {}", dir.display(), e);
            return 0;
        }
    };
    let mut total = 0u64;
    for entry in entries.flatten() {
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        if file_type.is_dir() {
            total = total.saturating_add(directory_size(&entry.path()));
        } else if file_type.is_file() {
            let len = entry.metadata().map(|m| m.len()).unwrap_or(0);
            total = total.saturating_add(len);
        }
    }
    total
}

/// Size of a path that may be a file or a directory.
pub fn path_size(path: &Path) -> u64 {
    if path.is_dir() {
        directory_size(path)
    } else {
        file_size(path)
    }
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
