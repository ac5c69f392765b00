use super::*;
use std::fs;
use tempfile::TempDir;
use uwx_core::RecognitionMethod;

use crate::wii::GAMECUBE_SUBTYPE;

#[test]
fn test_accepts_gcm_only() {
    let id = GameCubeIdentifier::new();
    assert!(id.accepts(Path::new("/games/Melee.gcm")));
    assert!(id.accepts(Path::new("/games/Melee.GCM")));
    assert!(!id.accepts(Path::new("/games/Melee.iso")));
}

#[test]
fn test_gcm_header() {
    let tmp = TempDir::new().unwrap();
    let mut data = vec![0u8; 0x80];
    data[..6].copy_from_slice(b"GZLE01");
    data[0x20..0x20 + 12].copy_from_slice(b"Wind Waker\0\0");
    let path = tmp.path().join("zelda.gcm");
    fs::write(&path, &data).unwrap();

    let entry = GameCubeIdentifier::new().identify(&path).unwrap();
    assert_eq!(entry.identifier.as_deref(), Some("GZLE01"));
    assert_eq!(entry.title, "Wind Waker");
    assert_eq!(entry.platform, Platform::GameCube);
    assert_eq!(entry.platform_subtype.as_deref(), Some(GAMECUBE_SUBTYPE));
    assert_eq!(entry.size_bytes, 0x80);
    assert_eq!(entry.recognition, RecognitionMethod::HeaderRead);
}

#[test]
fn test_gcm_with_wii_header_is_reclassified() {
    let tmp = TempDir::new().unwrap();
    let mut data = vec![0u8; 0x80];
    data[..6].copy_from_slice(b"RMCP01");
    let path = tmp.path().join("odd.gcm");
    fs::write(&path, &data).unwrap();

    let entry = GameCubeIdentifier::new().identify(&path).unwrap();
    assert_eq!(entry.platform, Platform::Wii);
    assert_eq!(entry.platform_subtype, None);
}

#[test]
fn test_gcm_without_header_keeps_gamecube() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("GALE01.gcm");
    fs::write(&path, b"short").unwrap();

    let entry = GameCubeIdentifier::new().identify(&path).unwrap();
    assert_eq!(entry.platform, Platform::GameCube);
    assert_eq!(entry.identifier.as_deref(), Some("GALE01"));
    assert_eq!(entry.recognition, RecognitionMethod::FilenameFallback);
}
