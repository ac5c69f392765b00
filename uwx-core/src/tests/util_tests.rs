use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_header_ascii_trims_padding() {
    assert_eq!(read_header_ascii(b"RMCP01"), "RMCP01");
    assert_eq!(read_header_ascii(b"Mario Kart\0\0\0\0"), "Mario Kart");
    assert_eq!(read_header_ascii(b"GALE\r\n\t  "), "GALE");
    assert_eq!(read_header_ascii(b"\0\0\0\0"), "");
    assert_eq!(read_header_ascii(b""), "");
}

#[test]
fn test_read_header_ascii_keeps_leading_and_interior_bytes() {
    assert_eq!(read_header_ascii(b"  AB"), "  AB");
    assert_eq!(read_header_ascii(b"A\0B\0"), "A\0B");
    assert_eq!(read_header_ascii(&[0x41, 0xFF, 0x42]), "A?B");
}

#[test]
fn test_read_integers_bounds_checked() {
    let buf = [0x78, 0x56, 0x34, 0x12, 0x00];
    assert_eq!(read_u32_le(&buf, 0), Some(0x12345678));
    assert_eq!(read_u32_be(&buf, 0), Some(0x78563412));
    assert_eq!(read_u32_le(&buf, 2), None);
    assert_eq!(read_u32_le(&buf, usize::MAX), None);
    assert_eq!(read_u64_be(&buf, 0), None);
}

#[test]
fn test_is_hex_digits() {
    assert!(is_hex_digits("4D5307e6"));
    assert!(!is_hex_digits(""));
    assert!(!is_hex_digits("XYZ"));
}

#[test]
fn test_format_bytes_approx() {
    assert_eq!(format_bytes_approx(0), "0 B");
    assert_eq!(format_bytes_approx(512), "512 B");
    assert_eq!(format_bytes_approx(1536), "1.5 KB");
    assert_eq!(format_bytes_approx(1048576), "1.0 MB");
    assert_eq!(format_bytes_approx(4 * 1024 * 1024 * 1024), "4.00 GB");
}

#[test]
fn test_read_window_is_bounded() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.bin");
    fs::write(&path, (0u8..=255).collect::<Vec<u8>>()).unwrap();

    let head = read_window(&path, 0, 4).unwrap();
    assert_eq!(head, vec![0, 1, 2, 3]);

    let tail = read_window(&path, 0xFE, 16).unwrap();
    assert_eq!(tail, vec![0xFE, 0xFF]);

    let past_end = read_window(&path, 0x1000, 16).unwrap();
    assert!(past_end.is_empty());
}

#[test]
fn test_read_window_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_window(&tmp.path().join("nope.iso"), 0, 16).unwrap_err();
    assert!(matches!(err, HeaderError::Io(_)));
}

#[test]
fn test_extension_helpers() {
    let p = Path::new("/games/Mario Kart.WBFS");
    assert_eq!(extension_lower(p), "wbfs");
    assert!(has_extension(p, &["iso", "wbfs"]));
    assert!(!has_extension(p, &["iso"]));
    assert!(!has_extension(Path::new("/games/README"), &["iso"]));
    assert_eq!(file_stem_string(p), "Mario Kart");
    assert_eq!(file_name_string(p), "Mario Kart.WBFS");
}

#[test]
fn test_find_child_ignore_case() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Default.XEX"), b"x").unwrap();
    let found = find_child_ignore_case(tmp.path(), "default.xex").unwrap();
    assert_eq!(found.file_name().unwrap(), "Default.XEX");
    assert!(find_child_ignore_case(tmp.path(), "other.xex").is_none());
}

#[test]
fn test_directory_size_recurses() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("a").join("b");
    fs::create_dir_all(&sub).unwrap();
    fs::write(tmp.path().join("one.bin"), vec![0u8; 10]).unwrap();
    fs::write(sub.join("two.bin"), vec![0u8; 32]).unwrap();
    assert_eq!(directory_size(tmp.path()), 42);
    assert_eq!(path_size(&tmp.path().join("one.bin")), 10);
}

#[test]
fn test_directory_size_missing_is_zero() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(directory_size(&tmp.path().join("missing")), 0);
    assert_eq!(file_size(&tmp.path().join("missing.iso")), 0);
}

#[test]
fn test_sorted_subdirs() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("b")).unwrap();
    fs::create_dir(tmp.path().join("a")).unwrap();
    fs::write(tmp.path().join("c.txt"), b"").unwrap();
    let names: Vec<_> = sorted_subdirs(tmp.path())
        .iter()
        .map(|p| file_name_string(p))
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_path_key_ignores_case_of_file_name_only() {
    assert_eq!(
        path_key(Path::new("/lib/Game.WBFS")),
        path_key(Path::new("/lib/game.wbfs"))
    );
    assert_ne!(
        path_key(Path::new("/Games/mk.iso")),
        path_key(Path::new("/games/mk.iso"))
    );
}
