// pdfout Library - Public API

// Re-export error types
pub mod error;
pub use error::{OutputError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::manager::OutputManager;
pub use crate::core::output_type::OutputType;
pub use crate::core::settings::{Settings, SettingsPatch};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
