//! Persisted configuration for the output manager
//!
//! Settings live in a small JSON file. A missing, unreadable or corrupted
//! file falls back to defaults; keys absent from the file are backfilled
//! from defaults and unknown keys are ignored, so upgrades in either
//! direction never lose the record.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default settings file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "output_config.json";

/// Persisted output manager settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_output_dir: PathBuf,
    pub auto_cleanup_days: u32,
    pub create_subdirectories: bool,
    pub add_timestamp: bool,
    pub preserve_original_names: bool,
    /// Advisory limit, not enforced
    pub max_files_per_directory: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_output_dir: PathBuf::from("output"),
            auto_cleanup_days: 30,
            create_subdirectories: true,
            add_timestamp: true,
            preserve_original_names: true,
            max_files_per_directory: 1000,
        }
    }
}

/// Partial settings update covering the configurable keys
///
/// `base_output_dir` is deliberately not here; it is changed through
/// `OutputManager::set_base_dir` so the directory structure can follow.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub auto_cleanup_days: Option<u32>,
    pub create_subdirectories: Option<bool>,
    pub add_timestamp: Option<bool>,
    pub preserve_original_names: Option<bool>,
    pub max_files_per_directory: Option<u32>,
}

impl Settings {
    /// Load settings from disk, merged over defaults
    ///
    /// A missing or malformed file is treated as absent: settings are a
    /// convenience cache, so this never fails.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Settings::default(),
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            log::debug!("Ignoring malformed settings file {:?}: {}", path, err);
            Settings::default()
        })
    }

    /// Save the full settings record to disk
    ///
    /// Callers that treat persistence as best-effort discard the returned
    /// error explicitly.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Apply the fields present in a patch
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(days) = patch.auto_cleanup_days {
            self.auto_cleanup_days = days;
        }
        if let Some(subdirs) = patch.create_subdirectories {
            self.create_subdirectories = subdirs;
        }
        if let Some(timestamp) = patch.add_timestamp {
            self.add_timestamp = timestamp;
        }
        if let Some(preserve) = patch.preserve_original_names {
            self.preserve_original_names = preserve;
        }
        if let Some(max_files) = patch.max_files_per_directory {
            self.max_files_per_directory = max_files;
        }
    }
}

impl SettingsPatch {
    /// Build a patch from a key/value pair as typed on the command line
    ///
    /// Returns `Ok(None)` for keys outside the configurable set, which are
    /// ignored rather than rejected.
    pub fn from_key_value(key: &str, value: &str) -> anyhow::Result<Option<Self>> {
        let mut patch = SettingsPatch::default();

        match key {
            "auto_cleanup_days" => {
                patch.auto_cleanup_days = Some(
                    value
                        .parse()
                        .with_context(|| format!("'{}' is not a valid number of days", value))?,
                );
            }
            "create_subdirectories" => {
                patch.create_subdirectories = Some(parse_bool(value)?);
            }
            "add_timestamp" => {
                patch.add_timestamp = Some(parse_bool(value)?);
            }
            "preserve_original_names" => {
                patch.preserve_original_names = Some(parse_bool(value)?);
            }
            "max_files_per_directory" => {
                patch.max_files_per_directory = Some(
                    value
                        .parse()
                        .with_context(|| format!("'{}' is not a valid file count", value))?,
                );
            }
            _ => return Ok(None),
        }

        Ok(Some(patch))
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => anyhow::bail!("'{}' is not a valid boolean (use true/false)", value),
    }
}
