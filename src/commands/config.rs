use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::manager::OutputManager;
use crate::core::settings::{Settings, SettingsPatch, DEFAULT_CONFIG_FILE};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set", sub_matches)) => set(sub_matches),
        Some(("set-dir", sub_matches)) => set_dir(sub_matches),
        _ => unreachable!("subcommand required"),
    }
}

fn show() -> Result<()> {
    let settings = Settings::load(std::path::Path::new(DEFAULT_CONFIG_FILE));

    println!("{}", "Current settings".white().bold());
    println!(
        "  {:<26} {}",
        "base_output_dir".cyan(),
        settings.base_output_dir.display()
    );
    println!(
        "  {:<26} {}",
        "auto_cleanup_days".cyan(),
        settings.auto_cleanup_days
    );
    println!(
        "  {:<26} {}",
        "create_subdirectories".cyan(),
        settings.create_subdirectories
    );
    println!("  {:<26} {}", "add_timestamp".cyan(), settings.add_timestamp);
    println!(
        "  {:<26} {}",
        "preserve_original_names".cyan(),
        settings.preserve_original_names
    );
    println!(
        "  {:<26} {}",
        "max_files_per_directory".cyan(),
        settings.max_files_per_directory
    );

    Ok(())
}

fn set(matches: &ArgMatches) -> Result<()> {
    let key = matches.get_one::<String>("key").unwrap();
    let value = matches.get_one::<String>("value").unwrap();

    match SettingsPatch::from_key_value(key, value)? {
        Some(patch) => {
            let mut manager = OutputManager::new(None)?;
            manager.configure(&patch)?;
            println!("{} {} = {}", "Updated".green().bold(), key.cyan(), value);
        }
        None => {
            println!(
                "{}",
                format!("Unknown setting '{}' (ignored)", key).yellow()
            );
        }
    }

    Ok(())
}

fn set_dir(matches: &ArgMatches) -> Result<()> {
    let path = PathBuf::from(matches.get_one::<String>("path").unwrap());

    let mut manager = OutputManager::new(None)?;
    manager.set_base_dir(path)?;

    println!(
        "{} {}",
        "Output directory set to".green().bold(),
        manager.base_dir().display().to_string().cyan()
    );

    Ok(())
}
