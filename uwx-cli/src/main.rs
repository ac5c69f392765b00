//! uwx CLI
//!
//! Command-line interface for identifying and cataloguing Wii, GameCube,
//! Wii U and Xbox 360 game collections.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
use commands::scan::ScanArgs;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Install env_logger. `RUST_LOG` overrides the flag-derived level.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{} {}] {}", level, record.target(), record.args()),
        })
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Scan {
            path,
            consoles,
            no_recursive,
            sequential,
            json,
        } => commands::scan::run_scan(ScanArgs {
            root: path.or(cli.root),
            consoles,
            no_recursive,
            sequential,
            json,
            quiet: cli.quiet,
        }),
        Commands::Identify { paths, json } => commands::identify::run_identify(paths, json),
        Commands::Tmd { path } => commands::tmd::run_tmd(&path),
        Commands::List => {
            commands::list::run_list();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetRoot { dir } => commands::config::run_config_set_root(&dir),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(),
        },
    }
}
