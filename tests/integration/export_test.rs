use pdfout::core::statistics::export_file_list;
use pdfout::error::OutputError;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const MIB: usize = 1024 * 1024;

fn write_file(path: &Path, size: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![0u8; size]).unwrap();
}

#[test]
fn test_export_default_destination() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("merged/2025/07/a.pdf"), MIB);

    let written = export_file_list(tmp.path(), None).unwrap();

    assert_eq!(written, tmp.path().join("file_list.json"));
    assert!(written.is_file());
}

#[test]
fn test_export_document_shape() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("merged/2025/07/older.pdf"), MIB);
    thread::sleep(Duration::from_millis(25));
    write_file(&tmp.path().join("compressed/2025/07/newer.pdf"), MIB / 2);

    let written = export_file_list(tmp.path(), None).unwrap();
    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();

    assert_eq!(document["total_files"], 2);
    assert_eq!(document["total_size_mb"], 1.5);
    assert_eq!(
        document["base_directory"],
        tmp.path().display().to_string()
    );
    assert!(!document["export_date"].as_str().unwrap().is_empty());

    let files = document["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);

    // Newest modification first
    assert_eq!(files[0]["filename"], "newer.pdf");
    assert_eq!(files[1]["filename"], "older.pdf");

    assert_eq!(files[0]["operation_type"], "compressed");
    assert_eq!(files[0]["size_bytes"], (MIB / 2) as u64);
    assert_eq!(files[0]["size_mb"], 0.5);
    assert!(files[0]["relative_path"]
        .as_str()
        .unwrap()
        .ends_with("newer.pdf"));
    assert!(!files[0]["modified_date"].as_str().unwrap().is_empty());
    assert!(!files[0]["created_date"].as_str().unwrap().is_empty());
}

#[test]
fn test_export_explicit_destination() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("split/2025/07/a.pdf"), MIB);

    let destination = tmp.path().join("listing.json");
    let written = export_file_list(tmp.path(), Some(&destination)).unwrap();

    assert_eq!(written, destination);
    assert!(destination.is_file());
}

#[test]
fn test_export_empty_tree() {
    let tmp = TempDir::new().unwrap();

    let written = export_file_list(tmp.path(), None).unwrap();
    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();

    assert_eq!(document["total_files"], 0);
    assert_eq!(document["files"].as_array().unwrap().len(), 0);
}

#[test]
fn test_export_write_failure_is_loud() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("merged/2025/07/a.pdf"), MIB);

    // Destination parent does not exist, so the write must fail
    let destination = tmp.path().join("missing_dir").join("out.json");
    let result = export_file_list(tmp.path(), Some(&destination));

    match result {
        Err(OutputError::Export { path, .. }) => assert_eq!(path, destination),
        other => panic!("expected an export error, got {:?}", other),
    }
}
