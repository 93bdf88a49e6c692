//! Facade over the output management subsystem
//!
//! `OutputManager` ties settings, directory structure, path naming,
//! statistics and retention cleanup together behind one handle. The
//! orchestration layer asks it for paths and guarantees; what gets
//! written at those paths is someone else's business.
//!
//! # Examples
//!
//! ```no_run
//! use pdfout::core::manager::OutputManager;
//! use pdfout::core::output_type::OutputType;
//!
//! let manager = OutputManager::new(None)?;
//! let path = manager.output_path("report.pdf", OutputType::Compressed, None, None)?;
//! // hand `path` to the PDF operation that produces the file
//! # Ok::<(), pdfout::error::OutputError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::core::cleaner::{self, CleanupStats};
use crate::core::naming;
use crate::core::output_type::OutputType;
use crate::core::settings::{Settings, SettingsPatch, DEFAULT_CONFIG_FILE};
use crate::core::statistics::{self, FileRecord, OutputStatistics};
use crate::core::structure;
use crate::error::Result;
use crate::platform;

/// Manages organization and configuration of output files
pub struct OutputManager {
    base_dir: PathBuf,
    config_path: PathBuf,
    settings: Settings,
}

impl OutputManager {
    /// Create a manager using the default settings file
    ///
    /// An explicit `base_dir` wins over the persisted one. Construction
    /// guarantees the directory structure and runs auto-cleanup when a
    /// retention window is configured.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        Self::with_paths(base_dir, PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Create a manager with an explicit settings file location
    pub fn with_paths(base_dir: Option<PathBuf>, config_path: PathBuf) -> Result<Self> {
        let mut settings = Settings::load(&config_path);

        let base_dir = base_dir.unwrap_or_else(|| settings.base_output_dir.clone());
        settings.base_output_dir = base_dir.clone();

        let manager = Self {
            base_dir,
            config_path,
            settings,
        };

        structure::ensure_structure(&manager.base_dir, &manager.settings)?;

        if manager.settings.auto_cleanup_days > 0 {
            let stats = cleaner::cleanup(&manager.base_dir, manager.settings.auto_cleanup_days, None);
            if stats.deleted_files > 0 {
                log::info!(
                    "Auto-cleanup removed {} files ({} MB)",
                    stats.deleted_files,
                    stats.deleted_size_mb()
                );
            }
        }

        Ok(manager)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compute a collision-free output path for a processed file
    pub fn output_path(
        &self,
        original_filename: &str,
        output_type: OutputType,
        custom_suffix: Option<&str>,
        extension: Option<&str>,
    ) -> Result<PathBuf> {
        naming::compute_output_path(
            &self.settings,
            &self.base_dir,
            original_filename,
            output_type,
            custom_suffix,
            extension,
        )
    }

    /// Create and return a directory grouping one batch operation's outputs
    pub fn batch_directory(&self, output_type: OutputType) -> Result<PathBuf> {
        structure::batch_directory(&self.base_dir, &self.settings, output_type)
    }

    /// Move the output tree root
    ///
    /// Persists the new location and creates its structure. Contents of
    /// the previous base directory are left where they are.
    pub fn set_base_dir(&mut self, new_base_dir: PathBuf) -> Result<()> {
        self.base_dir = new_base_dir.clone();
        self.settings.base_output_dir = new_base_dir;

        if let Err(err) = self.settings.save(&self.config_path) {
            log::warn!("Failed to persist settings: {}", err);
        }

        structure::ensure_structure(&self.base_dir, &self.settings)
    }

    /// Apply a settings patch and persist the result
    ///
    /// Changing the subdirectory policy re-runs structure creation so the
    /// next path computation finds its directories in place.
    pub fn configure(&mut self, patch: &SettingsPatch) -> Result<()> {
        self.settings.apply(patch);

        if let Err(err) = self.settings.save(&self.config_path) {
            log::warn!("Failed to persist settings: {}", err);
        }

        if patch.create_subdirectories.is_some() {
            structure::ensure_structure(&self.base_dir, &self.settings)?;
        }

        Ok(())
    }

    /// Fresh statistics over the output tree
    pub fn statistics(&self) -> OutputStatistics {
        statistics::compute_statistics(&self.base_dir)
    }

    /// Records for every output file, newest first
    pub fn file_records(&self) -> Vec<FileRecord> {
        statistics::collect_file_records(&self.base_dir)
    }

    /// Export the file list as a JSON artifact
    pub fn export_file_list(&self, destination: Option<&Path>) -> Result<PathBuf> {
        statistics::export_file_list(&self.base_dir, destination)
    }

    /// Manual cleanup with an optional override of the retention window
    ///
    /// Without an override the configured `auto_cleanup_days` applies; a
    /// window of 0 means nothing is deleted.
    pub fn cleanup(&self, days_older_than: Option<u32>, types: Option<&[OutputType]>) -> CleanupStats {
        let days = days_older_than.unwrap_or(self.settings.auto_cleanup_days);
        cleaner::cleanup(&self.base_dir, days, types)
    }

    /// Open the output directory in the system file manager, best effort
    pub fn open_output_directory(&self) {
        platform::open_in_file_manager(&self.base_dir);
    }
}
