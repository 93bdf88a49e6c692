//! Retention cleanup for old output files
//!
//! Deletes output files older than a cutoff and prunes the directories
//! the deletions leave empty. Per-file errors are skipped: a file
//! vanishing mid-walk is expected under concurrent use, not fatal.
//!
//! # Examples
//!
//! ```no_run
//! use pdfout::core::cleaner::cleanup;
//! use std::path::Path;
//!
//! let stats = cleanup(Path::new("output"), 30, None);
//! println!("Removed {} files ({} MB)", stats.deleted_files, stats.deleted_size_mb());
//! ```

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::core::output_type::OutputType;
use crate::core::statistics::{bytes_to_mb, visit_output_files};

const SECONDS_PER_DAY: u64 = 86_400;

/// Statistics from a cleanup pass
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanupStats {
    pub deleted_files: usize,
    pub deleted_size: u64,
}

impl CleanupStats {
    /// Deleted bytes in MiB, rounded to 2 decimals
    pub fn deleted_size_mb(&self) -> f64 {
        bytes_to_mb(self.deleted_size)
    }
}

/// Delete output files older than a retention window
///
/// A window of 0 days disables cleanup and returns zero counts. When
/// `types` is given, only those type subdirectories are visited.
pub fn cleanup(
    base_dir: &Path,
    days_older_than: u32,
    types: Option<&[OutputType]>,
) -> CleanupStats {
    if days_older_than == 0 {
        return CleanupStats::default();
    }

    let retention = Duration::from_secs(u64::from(days_older_than) * SECONDS_PER_DAY);
    match SystemTime::now().checked_sub(retention) {
        Some(cutoff) => cleanup_before(base_dir, cutoff, types),
        None => CleanupStats::default(),
    }
}

/// Delete output files modified strictly before `cutoff`
///
/// A file whose modification time equals the cutoff is kept. Empty
/// directories left behind are pruned afterwards.
pub fn cleanup_before(
    base_dir: &Path,
    cutoff: SystemTime,
    types: Option<&[OutputType]>,
) -> CleanupStats {
    let mut stats = CleanupStats::default();

    if !base_dir.exists() {
        return stats;
    }

    let targets: Vec<PathBuf> = match types {
        Some(types) => types
            .iter()
            .map(|output_type| base_dir.join(output_type.as_str()))
            .collect(),
        None => vec![base_dir.to_path_buf()],
    };

    for target in targets {
        if !target.is_dir() {
            continue;
        }

        visit_output_files(&target, &mut |path, metadata| {
            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(_) => return,
            };

            if modified < cutoff && fs::remove_file(path).is_ok() {
                stats.deleted_files += 1;
                stats.deleted_size += metadata.len();
            }
        });
    }

    remove_empty_directories(base_dir);

    stats
}

/// Prune every empty directory under `base_dir`
///
/// Directories are processed deepest-first so that removing a child can
/// make its parent eligible in the same pass. The base directory itself
/// is never removed, and removal errors are ignored.
pub fn remove_empty_directories(base_dir: &Path) {
    let mut directories = Vec::new();
    collect_directories(base_dir, &mut directories);

    directories.sort_by_key(|dir| Reverse(dir.components().count()));

    for dir in directories {
        let is_empty = fs::read_dir(&dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);

        if is_empty {
            let _ = fs::remove_dir(&dir);
        }
    }
}

fn collect_directories(dir: &Path, out: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let path = entry.path();
                collect_directories(&path, out);
                out.push(path);
            }
        }
    }
}
