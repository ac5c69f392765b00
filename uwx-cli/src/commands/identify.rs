use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uwx_lib::{CatalogEntry, Dispatch, IdentifierDispatcher, ScanConfig};

use crate::CliError;
use crate::commands::{print_entry, print_json};

/// Identify each path on its own, without grouping.
pub(crate) fn run_identify(paths: Vec<PathBuf>, json: bool) -> Result<(), CliError> {
    let config = ScanConfig::load()?;
    let dispatcher = IdentifierDispatcher::from_config(&config);

    let (entries, unsupported) = identify_paths(&dispatcher, &paths);

    if json {
        print_json(&entries)?;
    } else {
        for entry in &entries {
            print_entry(entry);
        }
    }

    if entries.is_empty() && unsupported > 0 {
        return Err(CliError::unsupported(format!(
            "{unsupported} path(s) not recognized"
        )));
    }
    Ok(())
}

/// Identify every path, counting the ones that are missing or unsupported.
fn identify_paths(
    dispatcher: &IdentifierDispatcher,
    paths: &[PathBuf],
) -> (Vec<CatalogEntry>, usize) {
    let mut entries = Vec::with_capacity(paths.len());
    let mut unsupported = 0usize;
    for path in paths {
        if !path.exists() {
            unsupported += 1;
            warn_skipped(path, "does not exist");
            continue;
        }
        match dispatcher.dispatch(path) {
            Dispatch::Identified(entry) => entries.push(entry),
            Dispatch::Unsupported => {
                unsupported += 1;
                warn_skipped(path, "no enabled platform accepts this path");
            }
        }
    }
    (entries, unsupported)
}

fn warn_skipped(path: &Path, reason: &str) {
    log::warn!(
        "{} {}: {}",
        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        path.display(),
        reason,
    );
}

#[cfg(test)]
#[path = "../tests/identify_tests.rs"]
mod tests;
