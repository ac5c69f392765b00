use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_standard_order() {
    let dispatcher = IdentifierDispatcher::standard();
    let platforms: Vec<_> = dispatcher.identifiers().map(|i| i.platform()).collect();
    assert_eq!(
        platforms,
        vec![Platform::Wii, Platform::GameCube, Platform::WiiU, Platform::Xbox360]
    );
}

#[test]
fn test_from_config_respects_selection() {
    let config = ScanConfig::default().with_platforms(vec![Platform::Xbox360]);
    let dispatcher = IdentifierDispatcher::from_config(&config);
    assert_eq!(dispatcher.infos().len(), 1);
    assert!(dispatcher.get_by_platform(Platform::Wii).is_none());
    assert!(dispatcher.get_by_platform(Platform::Xbox360).is_some());
}

#[test]
fn test_iso_goes_to_first_accepting_strategy() {
    let dispatcher = IdentifierDispatcher::standard();
    let found = dispatcher.find_identifier(Path::new("/games/x.iso")).unwrap();
    assert_eq!(found.platform(), Platform::Wii);

    let xbox_only = IdentifierDispatcher::from_config(
        &ScanConfig::default().with_platforms(vec![Platform::Xbox360, Platform::Wii]),
    );
    let found = xbox_only.find_identifier(Path::new("/games/x.iso")).unwrap();
    assert_eq!(found.platform(), Platform::Xbox360);
}

#[test]
fn test_unsupported_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("notes.txt");
    fs::write(&path, b"hello").unwrap();

    let dispatcher = IdentifierDispatcher::standard();
    assert!(matches!(dispatcher.dispatch(&path), Dispatch::Unsupported));
    assert!(dispatcher.identify_path(&path).is_none());
}

#[test]
fn test_identify_path_round_trip() {
    let tmp = TempDir::new().unwrap();
    let mut data = vec![0u8; 0x60];
    data[..6].copy_from_slice(b"RMCP01");
    data[0x20..0x2A].copy_from_slice(b"Mario Kart");
    let path = tmp.path().join("disc.iso");
    fs::write(&path, &data).unwrap();

    let entry = IdentifierDispatcher::standard().identify_path(&path).unwrap();
    assert_eq!(entry.identifier.as_deref(), Some("RMCP01"));
    assert_eq!(entry.title, "Mario Kart");
    assert_eq!(entry.platform, Platform::Wii);

    data[0] = b'G';
    fs::write(&path, &data).unwrap();
    let entry = IdentifierDispatcher::standard().identify_path(&path).unwrap();
    assert_eq!(entry.platform, Platform::GameCube);
}

#[test]
fn test_directory_dispatch() {
    let tmp = TempDir::new().unwrap();
    let god = tmp.path().join("4D5307E6");
    let plain = tmp.path().join("Screenshots");
    fs::create_dir(&god).unwrap();
    fs::create_dir(&plain).unwrap();

    let dispatcher = IdentifierDispatcher::standard();
    assert!(dispatcher.claims_directory(&god));
    assert!(!dispatcher.claims_directory(&plain));
    let entry = dispatcher.identify_path(&god).unwrap();
    assert_eq!(entry.platform, Platform::Xbox360);
}

#[test]
fn test_registered_infos() {
    let infos = IdentifierDispatcher::standard().infos();
    let wii = &infos[0];
    assert_eq!(wii.short_name, "wii");
    assert_eq!(wii.manufacturer, "Nintendo");
    assert!(wii.extensions.contains(&"wbfs"));
}
