use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use super::manager_from;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let manager = manager_from(matches)?;
    let stats = manager.statistics();

    println!(
        "{} {}",
        "Output directory:".white().bold(),
        manager.base_dir().display().to_string().cyan()
    );
    println!();

    if stats.total_files == 0 {
        println!("{}", "No output files found.".yellow());
        return Ok(());
    }

    println!(
        "{} {} files ({} MB)",
        "Total:".white().bold(),
        stats.total_files.to_string().yellow().bold(),
        stats.total_size_mb.to_string().yellow().bold()
    );

    println!();
    println!("{}", "By type:".white().bold());
    for (type_name, bucket) in &stats.by_type {
        println!(
            "  {:<14} {:>5} files  {:>10.2} MB",
            type_name.cyan(),
            bucket.count,
            bucket.size_mb
        );
    }

    println!();
    println!("{}", "By month:".white().bold());
    for (month, bucket) in &stats.by_date {
        println!(
            "  {:<14} {:>5} files  {:>10.2} MB",
            month.cyan(),
            bucket.count,
            bucket.size_mb
        );
    }

    Ok(())
}
