use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = ScanConfig::default();
    assert_eq!(
        config.platforms,
        vec![Platform::Wii, Platform::GameCube, Platform::WiiU, Platform::Xbox360]
    );
    assert!(config.recursive);
    assert!(config.parallel);
    assert_eq!(config.library_root, None);
}

#[test]
fn test_missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = ScanConfig::load_from(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(config, ScanConfig::default());
}

#[test]
fn test_save_and_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("settings.toml");
    let mut config = ScanConfig::default()
        .with_platforms(vec![Platform::Xbox360, Platform::Wii])
        .with_recursive(false);
    config.library_root = Some(PathBuf::from("/mnt/games"));
    config.save_to(&path).unwrap();

    assert!(!path.with_extension("toml.tmp").exists());
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[scan]"));
    assert!(contents.contains("\"xbox360\""));

    let loaded = ScanConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[scan]\nparallel = false\n").unwrap();

    let config = ScanConfig::load_from(&path).unwrap();
    assert!(!config.parallel);
    assert!(config.recursive);
    assert_eq!(config.platforms.len(), 4);
}

#[test]
fn test_unknown_platform_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[scan]\nplatforms = [\"dreamcast\"]\n").unwrap();

    assert!(matches!(
        ScanConfig::load_from(&path).unwrap_err(),
        ScanError::TomlDe(_)
    ));
}

#[test]
fn test_empty_or_duplicate_platforms_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");

    let empty = ScanConfig::default().with_platforms(Vec::new());
    assert!(matches!(empty.save_to(&path).unwrap_err(), ScanError::Config(_)));

    fs::write(&path, "[scan]\nplatforms = [\"wii\", \"wii\"]\n").unwrap();
    assert!(matches!(
        ScanConfig::load_from(&path).unwrap_err(),
        ScanError::Config(_)
    ));
}

#[test]
fn test_resolve_root_priority() {
    let mut config = ScanConfig::default();
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(config.resolve_root(None), cwd);

    config.library_root = Some(PathBuf::from("/saved"));
    assert_eq!(config.resolve_root(None), PathBuf::from("/saved"));
    assert_eq!(
        config.resolve_root(Some(PathBuf::from("/cli"))),
        PathBuf::from("/cli")
    );
}
