use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::path::Path;

use super::manager_from;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let destination = matches.get_one::<String>("output").map(Path::new);

    let manager = manager_from(matches)?;

    // The one operation here that is allowed to fail the command: the
    // written artifact is its entire point.
    let written = manager.export_file_list(destination)?;

    println!(
        "{} {}",
        "File list exported to".green().bold(),
        written.display().to_string().cyan()
    );

    Ok(())
}
