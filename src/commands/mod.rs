// Command handlers module
pub mod batch;
pub mod cleanup;
pub mod completions;
pub mod config;
pub mod export;
pub mod open;
pub mod path;
pub mod stats;

use anyhow::Result;
use clap::ArgMatches;
use std::path::PathBuf;

use crate::core::manager::OutputManager;

/// Build a manager from a subcommand's arguments, honoring `--dir`
pub(crate) fn manager_from(matches: &ArgMatches) -> Result<OutputManager> {
    let base_dir = matches.get_one::<String>("dir").map(PathBuf::from);
    Ok(OutputManager::new(base_dir)?)
}
