use std::fs;
use std::path::Path;

use tempfile::TempDir;
use uwx_lib::*;
use uwx_microsoft::read_xex_title_id;
use uwx_nintendo::{ContentType, describe_title};

fn write(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, data).unwrap();
}

fn disc_header(id: &[u8; 6], title: &str) -> Vec<u8> {
    let mut data = vec![0u8; 0x400];
    data[..6].copy_from_slice(id);
    data[0x20..0x20 + title.len()].copy_from_slice(title.as_bytes());
    data
}

fn scan(root: &Path) -> ScanReport {
    let config = ScanConfig::default();
    scan_directory(root, &config, &IdentifierDispatcher::from_config(&config)).unwrap()
}

#[test]
fn wii_disc_header_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("mk.iso");
    write(&path, &disc_header(b"RMCP01", "Mario Kart"));

    let entry = IdentifierDispatcher::standard().identify_path(&path).unwrap();
    assert_eq!(entry.identifier.as_deref(), Some("RMCP01"));
    assert_eq!(entry.title, "Mario Kart");
    assert_eq!(entry.platform, Platform::Wii);
    assert_eq!(entry.recognition, RecognitionMethod::HeaderRead);
}

#[test]
fn gamecube_disc_with_iso_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("melee.iso");
    write(&path, &disc_header(b"GALE01", "Super Smash Bros Melee"));

    let entry = IdentifierDispatcher::standard().identify_path(&path).unwrap();
    assert_eq!(entry.platform, Platform::GameCube);
    assert_eq!(entry.platform_subtype.as_deref(), Some("NGC"));
    assert_eq!(entry.identifier.as_deref(), Some("GALE01"));
}

#[test]
fn fuzzed_buffers_never_panic() {
    let tmp = TempDir::new().unwrap();
    let dispatcher = IdentifierDispatcher::standard();
    let mut seed: u32 = 0x1234_5678;
    for (i, len) in [0usize, 1, 0x3F, 0x40, 0x60, 0x205, 0x206, 0x4000]
        .into_iter()
        .enumerate()
    {
        let data: Vec<u8> = (0..len)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (seed >> 16) as u8
            })
            .collect();
        for ext in ["iso", "wbfs", "gcm", "wad", "wud", "xex", "tmd"] {
            let path = tmp.path().join(format!("f{i}.{ext}"));
            write(&path, &data);
            let _ = dispatcher.identify_path(&path);
        }
    }
}

#[test]
fn split_archive_scan() {
    let tmp = TempDir::new().unwrap();
    let mut primary = vec![0u8; 100];
    primary[..4].copy_from_slice(b"WBFS");
    write(&tmp.path().join("wii").join("game.wbfs"), &primary);
    write(&tmp.path().join("wii").join("game.wbf1"), &[0u8; 50]);
    write(&tmp.path().join("orphan").join("lost.wbf1"), &[0u8; 50]);

    let report = scan(tmp.path());
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].size_bytes, 150);
    assert_eq!(report.entries[0].format, "wbfs");
    assert!(report.unrecognized.is_empty());
}

#[test]
fn multi_disc_scan() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("Tales of Symphonia");
    let mut disc1 = disc_header(b"GQSE01", "Tales of Symphonia");
    disc1.truncate(100);
    write(&dir.join("game.iso"), &disc1);
    write(&dir.join("disc2.iso"), &[0u8; 80]);
    write(&dir.join("sys").join("boot.bin"), &[0u8; 12]);
    write(&dir.join("sys").join("bi2.bin"), &[0u8; 8]);

    let report = scan(tmp.path());
    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.path, dir.join("game.iso"));
    assert_eq!(entry.size_bytes, 200);
    assert_eq!(entry.platform, Platform::GameCube);
    assert!(report.unrecognized.is_empty());

    let regrouped = group_batch(report.entries.clone());
    assert_eq!(regrouped, report.entries);
}

#[test]
fn wiiu_title_descriptor() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("title.tmd");
    let mut data = vec![0u8; 0x200];
    data[0x18C..0x194].copy_from_slice(&0x0005_000C_101A_C700u64.to_be_bytes());
    write(&path, &data);

    let descriptor = describe_title(&path).unwrap();
    assert_eq!(descriptor.title_id.to_string(), "0005000C101AC700");
    assert_eq!(descriptor.content_type, ContentType::Dlc);
    assert_eq!(descriptor.group_key, "101AC700");
    assert_eq!(descriptor.base_title_id, "00050000101AC700");
}

#[test]
fn xbox360_executable_title_id() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("Some Game");
    let mut data = vec![0u8; 0x100];
    data[..4].copy_from_slice(b"XEX2");
    data[0x14..0x18].copy_from_slice(&1u32.to_le_bytes());
    data[0x18..0x1C].copy_from_slice(&0x0004_07FFu32.to_le_bytes());
    data[0x1C..0x20].copy_from_slice(&0x0Cu32.to_le_bytes());
    data[0x20..0x24].copy_from_slice(&0x1234_5678u32.to_be_bytes());
    write(&dir.join("default.xex"), &data);

    assert_eq!(read_xex_title_id(&dir.join("default.xex")).unwrap(), "12345678");

    let report = scan(tmp.path());
    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.platform, Platform::Xbox360);
    assert_eq!(entry.identifier.as_deref(), Some("12345678"));
    assert_eq!(entry.recognition, RecognitionMethod::HeaderRead);
    assert_eq!(entry.path, dir);
}

#[test]
fn disabled_platforms_leave_paths_unrecognized() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("mk.iso"), &disc_header(b"RMCP01", "Mario Kart"));
    write(&tmp.path().join("title.wud"), &[0u8; 16]);

    let config = ScanConfig::default().with_platforms(vec![Platform::WiiU]);
    let report =
        scan_directory(tmp.path(), &config, &IdentifierDispatcher::from_config(&config)).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].platform, Platform::WiiU);
    assert_eq!(report.unrecognized, vec![tmp.path().join("mk.iso")]);
}
