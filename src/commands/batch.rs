use anyhow::Result;
use clap::ArgMatches;

use crate::core::output_type::OutputType;

use super::manager_from;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let output_type: OutputType = matches.get_one::<String>("type").unwrap().parse()?;

    let manager = manager_from(matches)?;
    let batch_dir = manager.batch_directory(output_type)?;

    println!("{}", batch_dir.display());

    Ok(())
}
