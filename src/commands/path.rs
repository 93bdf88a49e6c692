use anyhow::Result;
use clap::ArgMatches;

use crate::core::output_type::OutputType;

use super::manager_from;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let file = matches.get_one::<String>("file").unwrap();
    let output_type: OutputType = matches.get_one::<String>("type").unwrap().parse()?;
    let suffix = matches.get_one::<String>("suffix").map(String::as_str);
    let extension = matches.get_one::<String>("extension").map(String::as_str);

    let manager = manager_from(matches)?;
    let path = manager.output_path(file, output_type, suffix, extension)?;

    // Plain output so the path can be captured by scripts
    println!("{}", path.display());

    Ok(())
}
