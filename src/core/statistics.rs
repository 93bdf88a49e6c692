//! Statistics and file-list export over the output tree
//!
//! Every pass re-walks the filesystem; there is no cached index, so the
//! numbers are always fresh. Entries that vanish or turn unreadable
//! mid-walk are skipped, never fatal.
//!
//! # Examples
//!
//! ```no_run
//! use pdfout::core::statistics::compute_statistics;
//! use std::path::Path;
//!
//! let stats = compute_statistics(Path::new("output"));
//! println!("{} files ({} MB)", stats.total_files, stats.total_size_mb);
//! ```

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{OutputError, Result};

/// Aggregate counts and sizes for one statistics bucket
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BucketStats {
    pub count: usize,
    pub size_mb: f64,
}

/// Statistics over every managed output file
#[derive(Debug, Default)]
pub struct OutputStatistics {
    pub total_files: usize,
    pub total_size_mb: f64,
    pub by_type: BTreeMap<String, BucketStats>,
    pub by_date: BTreeMap<String, BucketStats>,
}

/// One output file, as listed in the exported file list
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub filename: String,
    pub relative_path: String,
    pub full_path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
    pub created_date: String,
    pub modified_date: String,
    pub operation_type: String,
}

#[derive(Debug, Serialize)]
struct FileListExport<'a> {
    export_date: String,
    base_directory: String,
    total_files: usize,
    total_size_mb: f64,
    files: &'a [FileRecord],
}

/// Whether a path is a managed output file (by extension)
pub(crate) fn is_output_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / (1024.0 * 1024.0))
}

/// Walk every output file under a directory, skipping unreadable entries
pub(crate) fn visit_output_files(dir: &Path, on_file: &mut dyn FnMut(&Path, &fs::Metadata)) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            if let Ok(metadata) = entry.metadata() {
                let path = entry.path();
                if metadata.is_file() {
                    if is_output_file(&path) {
                        on_file(&path, &metadata);
                    }
                } else if metadata.is_dir() {
                    visit_output_files(&path, on_file);
                }
            }
        }
    }
}

/// Operation type of an output file, inferred from its location
///
/// The type is the first path component under the base directory; files
/// sitting directly under the base have no type and report `unknown`.
fn classify_operation_type(base_dir: &Path, path: &Path) -> String {
    let rel = match path.strip_prefix(base_dir) {
        Ok(rel) => rel,
        Err(_) => return "unknown".to_string(),
    };

    let mut components = rel.components();
    match (components.next(), components.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().into_owned(),
        _ => "unknown".to_string(),
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    bytes: u64,
}

impl Accumulator {
    fn add(&mut self, bytes: u64) {
        self.count += 1;
        self.bytes += bytes;
    }
}

/// Compute statistics over every output file under `base_dir`
///
/// Returns a zeroed structure when the directory does not exist; this
/// never fails.
pub fn compute_statistics(base_dir: &Path) -> OutputStatistics {
    let mut total = Accumulator::default();
    let mut by_type: BTreeMap<String, Accumulator> = BTreeMap::new();
    let mut by_date: BTreeMap<String, Accumulator> = BTreeMap::new();

    if !base_dir.exists() {
        return OutputStatistics::default();
    }

    visit_output_files(base_dir, &mut |path, metadata| {
        let size = metadata.len();
        total.add(size);

        by_type
            .entry(classify_operation_type(base_dir, path))
            .or_default()
            .add(size);

        if let Ok(modified) = metadata.modified() {
            let month = DateTime::<Local>::from(modified).format("%Y-%m").to_string();
            by_date.entry(month).or_default().add(size);
        }
    });

    OutputStatistics {
        total_files: total.count,
        total_size_mb: bytes_to_mb(total.bytes),
        by_type: finish_buckets(by_type),
        by_date: finish_buckets(by_date),
    }
}

fn finish_buckets(buckets: BTreeMap<String, Accumulator>) -> BTreeMap<String, BucketStats> {
    buckets
        .into_iter()
        .map(|(key, acc)| {
            (
                key,
                BucketStats {
                    count: acc.count,
                    size_mb: bytes_to_mb(acc.bytes),
                },
            )
        })
        .collect()
}

/// Collect a record per output file, newest modification first
pub fn collect_file_records(base_dir: &Path) -> Vec<FileRecord> {
    let mut records: Vec<(SystemTime, FileRecord)> = Vec::new();

    if !base_dir.exists() {
        return Vec::new();
    }

    visit_output_files(base_dir, &mut |path, metadata| {
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        // Not every filesystem reports a birth time
        let created = metadata.created().unwrap_or(modified);

        let relative_path = path
            .strip_prefix(base_dir)
            .map(|rel| rel.display().to_string())
            .unwrap_or_else(|_| path.display().to_string());

        records.push((
            modified,
            FileRecord {
                filename: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                relative_path,
                full_path: path.display().to_string(),
                size_bytes: metadata.len(),
                size_mb: bytes_to_mb(metadata.len()),
                created_date: DateTime::<Local>::from(created).to_rfc3339(),
                modified_date: DateTime::<Local>::from(modified).to_rfc3339(),
                operation_type: classify_operation_type(base_dir, path),
            },
        ));
    });

    records.sort_by(|a, b| b.0.cmp(&a.0));
    records.into_iter().map(|(_, record)| record).collect()
}

/// Export the full file list as a JSON document
///
/// Writes to `destination`, or `base_dir/file_list.json` by default, and
/// returns the path written. Unlike the rest of this module a write
/// failure is surfaced to the caller: the artifact is the whole point.
pub fn export_file_list(base_dir: &Path, destination: Option<&Path>) -> Result<PathBuf> {
    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join("file_list.json"));

    let files = collect_file_records(base_dir);

    let export = FileListExport {
        export_date: Local::now().to_rfc3339(),
        base_directory: base_dir.display().to_string(),
        total_files: files.len(),
        total_size_mb: round2(files.iter().map(|file| file.size_mb).sum()),
        files: &files,
    };

    let content = serde_json::to_string_pretty(&export)?;
    fs::write(&destination, content)
        .map_err(|source| OutputError::export(destination.clone(), source))?;

    Ok(destination)
}
