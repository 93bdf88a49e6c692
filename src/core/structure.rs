//! Directory structure for managed output files
//!
//! The on-disk hierarchy is `base/<type>/<year>/<month>`, with an optional
//! `batch_<timestamp>` folder grouping the results of one multi-file
//! operation. All creation here is idempotent.

use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::output_type::OutputType;
use crate::core::settings::Settings;
use crate::error::Result;

/// Dated directory for an output type: `base/<type>/<year>/<month>`
pub fn type_month_dir(base_dir: &Path, output_type: OutputType) -> PathBuf {
    let today = Local::now();
    base_dir
        .join(output_type.as_str())
        .join(today.year().to_string())
        .join(format!("{:02}", today.month()))
}

/// Ensure the output hierarchy exists
///
/// Creates the base directory, and one `<type>/<year>/<month>` tree per
/// output type when subdirectories are enabled. Safe to call repeatedly.
pub fn ensure_structure(base_dir: &Path, settings: &Settings) -> Result<()> {
    fs::create_dir_all(base_dir)?;

    if settings.create_subdirectories {
        for output_type in OutputType::ALL {
            fs::create_dir_all(type_month_dir(base_dir, output_type))?;
        }
    }

    Ok(())
}

/// Create and return a timestamped directory for a batch operation
///
/// The folder lands inside the type's dated directory, or directly under
/// the base when subdirectories are disabled.
pub fn batch_directory(
    base_dir: &Path,
    settings: &Settings,
    output_type: OutputType,
) -> Result<PathBuf> {
    let batch_name = format!("batch_{}", Local::now().format("%Y%m%d_%H%M%S"));

    let batch_dir = if settings.create_subdirectories {
        type_month_dir(base_dir, output_type).join(batch_name)
    } else {
        base_dir.join(batch_name)
    };

    fs::create_dir_all(&batch_dir)?;
    Ok(batch_dir)
}
