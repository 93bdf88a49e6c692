//! Canonical output path computation
//!
//! Builds a collision-free output path for a processed file from its
//! original name, the operation type and the active settings. Only the
//! target directory is created here; the file itself is never touched.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::output_type::OutputType;
use crate::core::settings::Settings;
use crate::core::structure::type_month_dir;
use crate::error::Result;

/// Ceiling for the collision-retry loop. The numeric disambiguator is not
/// expected to get anywhere near this in practice.
const MAX_COLLISION_ATTEMPTS: u32 = 1000;

/// Compute the output path for a processed file
///
/// The filename is assembled from the original file's stem (when
/// `preserve_original_names` is set), the custom or default operation
/// suffix, and a `YYYYMMDD_HHMMSS` timestamp (when `add_timestamp` is
/// set), joined with `_`. If the resulting path already exists a `(n)`
/// part is appended, counting up until a free name is found.
///
/// # Arguments
/// * `original_filename` - Name of the source file; it does not need to exist
/// * `custom_suffix` - Overrides the operation type's default suffix
/// * `extension` - Overrides the original extension (default: `.pdf`)
pub fn compute_output_path(
    settings: &Settings,
    base_dir: &Path,
    original_filename: &str,
    output_type: OutputType,
    custom_suffix: Option<&str>,
    extension: Option<&str>,
) -> Result<PathBuf> {
    let original = Path::new(original_filename);
    let extension = resolve_extension(original, extension);

    let output_dir = if settings.create_subdirectories {
        type_month_dir(base_dir, output_type)
    } else {
        base_dir.to_path_buf()
    };
    fs::create_dir_all(&output_dir)?;

    let mut parts: Vec<String> = Vec::new();

    if settings.preserve_original_names {
        if let Some(stem) = original.file_stem() {
            parts.push(stem.to_string_lossy().into_owned());
        }
    }

    match custom_suffix {
        Some(suffix) => parts.push(suffix.to_string()),
        None => parts.push(output_type.default_suffix().to_string()),
    }

    if settings.add_timestamp {
        parts.push(Local::now().format("%Y%m%d_%H%M%S").to_string());
    }

    let mut output_path = output_dir.join(format!("{}{}", parts.join("_"), extension));

    // Disambiguate against files already on disk
    let mut counter = 1;
    while output_path.exists() {
        let mut numbered = parts.clone();
        numbered.push(format!("({})", counter));
        output_path = output_dir.join(format!("{}{}", numbered.join("_"), extension));
        counter += 1;

        if counter > MAX_COLLISION_ATTEMPTS {
            log::warn!(
                "Gave up disambiguating {:?} after {} attempts",
                output_path,
                MAX_COLLISION_ATTEMPTS
            );
            break;
        }
    }

    Ok(output_path)
}

/// Resolve the output extension: explicit argument, then the original
/// file's extension, then `.pdf`. The leading dot is normalized on.
fn resolve_extension(original: &Path, extension: Option<&str>) -> String {
    if let Some(ext) = extension {
        if let Some(stripped) = ext.strip_prefix('.') {
            return format!(".{}", stripped);
        }
        return format!(".{}", ext);
    }

    match original.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => ".pdf".to_string(),
    }
}
