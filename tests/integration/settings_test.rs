use pdfout::core::settings::{Settings, SettingsPatch};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings::load(&tmp.path().join("no_such_config.json"));

    assert_eq!(settings.auto_cleanup_days, 30);
    assert!(settings.create_subdirectories);
    assert!(settings.add_timestamp);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("output_config.json");
    fs::write(&config, "{ this is not json").unwrap();

    let settings = Settings::load(&config);
    assert_eq!(settings.auto_cleanup_days, 30);
    assert_eq!(settings.max_files_per_directory, 1000);
}

#[test]
fn test_save_load_round_trip() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("output_config.json");

    let mut settings = Settings::default();
    settings.base_output_dir = PathBuf::from("/srv/pdf/output");
    settings.auto_cleanup_days = 7;
    settings.add_timestamp = false;

    settings.save(&config).unwrap();
    let loaded = Settings::load(&config);

    assert_eq!(loaded.base_output_dir, PathBuf::from("/srv/pdf/output"));
    assert_eq!(loaded.auto_cleanup_days, 7);
    assert!(!loaded.add_timestamp);
    // Fields that were never touched keep their defaults
    assert!(loaded.create_subdirectories);
    assert!(loaded.preserve_original_names);
}

#[test]
fn test_partial_file_backfills_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("output_config.json");
    fs::write(&config, r#"{"auto_cleanup_days": 5}"#).unwrap();

    let loaded = Settings::load(&config);
    assert_eq!(loaded.auto_cleanup_days, 5);
    assert!(loaded.create_subdirectories);
    assert!(loaded.add_timestamp);
    assert_eq!(loaded.max_files_per_directory, 1000);
}

#[test]
fn test_unknown_keys_ignored() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("output_config.json");
    fs::write(
        &config,
        r#"{"auto_cleanup_days": 9, "theme": "dark", "language": "it"}"#,
    )
    .unwrap();

    let loaded = Settings::load(&config);
    assert_eq!(loaded.auto_cleanup_days, 9);
}

#[test]
fn test_save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("nested").join("dir").join("config.json");

    Settings::default().save(&config).unwrap();
    assert!(config.is_file());
}

#[test]
fn test_patch_then_reload() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("output_config.json");

    let mut settings = Settings::default();
    settings.apply(&SettingsPatch {
        auto_cleanup_days: Some(0),
        preserve_original_names: Some(false),
        ..SettingsPatch::default()
    });
    settings.save(&config).unwrap();

    let loaded = Settings::load(&config);
    assert_eq!(loaded.auto_cleanup_days, 0);
    assert!(!loaded.preserve_original_names);
    assert!(loaded.add_timestamp);
}
