use chrono::{Datelike, Local};
use pdfout::core::output_type::OutputType;
use pdfout::core::settings::Settings;
use pdfout::core::structure::{batch_directory, ensure_structure};
use std::fs;
use tempfile::TempDir;

fn month_segments() -> (String, String) {
    let today = Local::now();
    (today.year().to_string(), format!("{:02}", today.month()))
}

#[test]
fn test_creates_type_trees() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("output");
    let settings = Settings::default();

    ensure_structure(&base, &settings).unwrap();

    let (year, month) = month_segments();
    for ty in OutputType::ALL {
        let month_dir = base.join(ty.as_str()).join(&year).join(&month);
        assert!(month_dir.is_dir(), "missing {:?}", month_dir);
    }
}

#[test]
fn test_idempotent() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("output");
    let settings = Settings::default();

    ensure_structure(&base, &settings).unwrap();
    let first: Vec<_> = fs::read_dir(&base)
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();

    // A second pass neither errors nor changes the layout
    ensure_structure(&base, &settings).unwrap();
    let second: Vec<_> = fs::read_dir(&base)
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();

    assert_eq!(first.len(), second.len());
}

#[test]
fn test_subdirectories_disabled_creates_only_base() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("output");
    let settings = Settings {
        create_subdirectories: false,
        ..Settings::default()
    };

    ensure_structure(&base, &settings).unwrap();

    assert!(base.is_dir());
    assert_eq!(fs::read_dir(&base).unwrap().count(), 0);
}

#[test]
fn test_batch_directory_under_type_tree() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("output");
    let settings = Settings::default();

    let batch = batch_directory(&base, &settings, OutputType::Merged).unwrap();

    assert!(batch.is_dir());

    let (year, month) = month_segments();
    assert_eq!(
        batch.parent().unwrap(),
        base.join("merged").join(&year).join(&month)
    );

    let name = batch.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("batch_"), "unexpected name {}", name);
}

#[test]
fn test_batch_directory_flat_when_subdirectories_disabled() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("output");
    let settings = Settings {
        create_subdirectories: false,
        ..Settings::default()
    };

    let batch = batch_directory(&base, &settings, OutputType::Merged).unwrap();

    assert!(batch.is_dir());
    assert_eq!(batch.parent().unwrap(), base);
}
