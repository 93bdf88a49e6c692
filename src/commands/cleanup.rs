use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use crate::core::output_type::OutputType;
use crate::ui::format_size;

use super::manager_from;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let days = matches.get_one::<u32>("days").copied();
    let skip_confirm = matches.get_flag("yes");

    let types: Option<Vec<OutputType>> = matches
        .get_many::<String>("type")
        .map(|values| values.map(|value| value.parse()).collect::<Result<Vec<_>, _>>())
        .transpose()?;

    let manager = manager_from(matches)?;
    let effective_days = days.unwrap_or(manager.settings().auto_cleanup_days);

    if effective_days == 0 {
        println!(
            "{}",
            "Cleanup is disabled (retention window is 0 days).".yellow()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "Output directory:".white().bold(),
        manager.base_dir().display().to_string().cyan()
    );
    match &types {
        Some(types) => {
            let names: Vec<&str> = types.iter().map(OutputType::as_str).collect();
            println!(
                "{} {}",
                "Scope:".white().bold(),
                names.join(", ").cyan()
            );
        }
        None => println!("{} {}", "Scope:".white().bold(), "all types".cyan()),
    }
    println!(
        "{} files older than {} days",
        "Target:".white().bold(),
        effective_days.to_string().yellow().bold()
    );
    println!();

    if !skip_confirm {
        print!(
            "{}",
            "Do you want to continue? (y/n): ".white().bold()
        );

        use std::io::Write;
        std::io::stdout().flush().ok();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();

        let response = input.trim().to_lowercase();
        if response != "y" && response != "yes" {
            println!();
            println!("{}", "Operation cancelled by user.".yellow());
            return Ok(());
        }

        println!();
    }

    let stats = manager.cleanup(Some(effective_days), types.as_deref());

    println!("{}", "─".repeat(50));
    println!("{}", "Cleanup Summary".white().bold());
    println!("{}", "─".repeat(50));
    println!(
        "{} {}",
        "Deleted:".green().bold(),
        format!("{} files", stats.deleted_files).yellow().bold()
    );
    println!(
        "{} {}",
        "Space recovered:".green().bold(),
        format_size(stats.deleted_size).yellow().bold()
    );

    Ok(())
}
