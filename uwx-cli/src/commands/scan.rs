use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uwx_core::util::format_bytes_approx;
use uwx_lib::{IdentifierDispatcher, Platform, ScanConfig, scan_directory_with_progress};

use crate::CliError;
use crate::commands::{print_entry, print_json};
use crate::spinner::ScanSpinner;

pub(crate) struct ScanArgs {
    pub root: Option<PathBuf>,
    pub consoles: Option<Vec<Platform>>,
    pub no_recursive: bool,
    pub sequential: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Scan a library folder and print the grouped entries.
pub(crate) fn run_scan(args: ScanArgs) -> Result<(), CliError> {
    let mut config = ScanConfig::load()?;
    if let Some(consoles) = args.consoles {
        config = config.with_platforms(consoles);
    }
    if args.no_recursive {
        config = config.with_recursive(false);
    }
    if args.sequential {
        config = config.with_parallel(false);
    }
    config.validate()?;

    let root = config.resolve_root(args.root);
    let dispatcher = IdentifierDispatcher::from_config(&config);

    if !args.json {
        log::info!(
            "Scanning {}",
            root.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    let spinner = ScanSpinner::new(args.quiet || args.json);
    let result = scan_directory_with_progress(&root, &config, &dispatcher, &|event| {
        spinner.update(event)
    });
    spinner.clear();
    let report = result?;

    if args.json {
        return print_json(&report.entries);
    }

    log::info!("");
    if report.entries.is_empty() {
        log::info!(
            "  {}",
            "No games found".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    for entry in &report.entries {
        print_entry(entry);
    }

    log::info!("");
    log::info!(
        "{} {} games, {}",
        "Summary:".if_supports_color(Stdout, |t| t.bold()),
        report.entries.len(),
        format_bytes_approx(report.total_size()),
    );
    for (platform, count) in report.counts_by_platform() {
        log::info!("  {}: {}", platform.display_name(), count);
    }
    log::info!(
        "  Header-confirmed IDs: {}",
        report.header_confirmed().count()
    );
    if !report.unrecognized.is_empty() {
        log::info!(
            "  {} {} unrecognized paths",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.unrecognized.len(),
        );
        for path in &report.unrecognized {
            log::debug!("    {}", path.display());
        }
    }
    Ok(())
}
