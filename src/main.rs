use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use pdfout::commands;

fn build_cli() -> Command {
    Command::new("pdfout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Organize, track and clean the output files of PDF operations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("path")
                .about("Compute a collision-free output path for a processed file")
                .arg(
                    Arg::new("file")
                        .help("Original filename (does not need to exist)")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .value_name("TYPE")
                        .help("Operation type: compressed, merged, protected, unprotected, watermarked, converted, split")
                        .required(true)
                )
                .arg(
                    Arg::new("suffix")
                        .short('s')
                        .long("suffix")
                        .value_name("SUFFIX")
                        .help("Custom filename suffix (default: the operation type)")
                )
                .arg(
                    Arg::new("extension")
                        .short('e')
                        .long("extension")
                        .value_name("EXT")
                        .help("Output extension (default: the original's, then .pdf)")
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Base output directory override")
                )
        )
        .subcommand(
            Command::new("batch")
                .about("Allocate a timestamped directory for a batch operation")
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .value_name("TYPE")
                        .help("Operation type the batch belongs to")
                        .required(true)
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Base output directory override")
                )
        )
        .subcommand(
            Command::new("stats")
                .about("Show statistics for the output tree")
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Base output directory override")
                )
        )
        .subcommand(
            Command::new("export")
                .about("Export the output file list as a JSON document")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Destination file (default: <base>/file_list.json)")
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Base output directory override")
                )
        )
        .subcommand(
            Command::new("cleanup")
                .about("Delete output files older than the retention window")
                .arg(
                    Arg::new("days")
                        .short('d')
                        .long("days")
                        .value_name("DAYS")
                        .help("Override the retention window in days")
                        .value_parser(clap::value_parser!(u32))
                )
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .value_name("TYPE")
                        .help("Restrict cleanup to an operation type (repeatable)")
                        .action(ArgAction::Append)
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Base output directory override")
                )
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or change settings (use 'pdfout config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("show")
                        .about("Show the current settings")
                )
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(
                            Arg::new("key")
                                .help("Setting name (auto_cleanup_days, create_subdirectories, add_timestamp, preserve_original_names, max_files_per_directory)")
                                .required(true)
                                .index(1)
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value")
                                .required(true)
                                .index(2)
                        )
                )
                .subcommand(
                    Command::new("set-dir")
                        .about("Change the base output directory")
                        .arg(
                            Arg::new("path")
                                .help("New base output directory")
                                .required(true)
                                .index(1)
                        )
                )
        )
        .subcommand(
            Command::new("open")
                .about("Open the output directory in the system file manager")
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Base output directory override")
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1)
                )
        )
}

fn main() -> Result<()> {
    pdfout::init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("path", sub_matches)) => commands::path::execute(sub_matches),
        Some(("batch", sub_matches)) => commands::batch::execute(sub_matches),
        Some(("stats", sub_matches)) => commands::stats::execute(sub_matches),
        Some(("export", sub_matches)) => commands::export::execute(sub_matches),
        Some(("cleanup", sub_matches)) => commands::cleanup::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("open", sub_matches)) => commands::open::execute(sub_matches),
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut build_cli())
        }
        _ => unreachable!("subcommand required"),
    }
}
