use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use super::manager_from;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let manager = manager_from(matches)?;

    println!(
        "{} {}",
        "Opening".white().bold(),
        manager.base_dir().display().to_string().cyan()
    );

    manager.open_output_directory();

    Ok(())
}
