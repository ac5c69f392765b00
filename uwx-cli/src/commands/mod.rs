pub(crate) mod config;
pub(crate) mod identify;
pub(crate) mod list;
pub(crate) mod scan;
pub(crate) mod tmd;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uwx_core::util::{file_name_string, format_bytes_approx};
use uwx_lib::{CatalogEntry, RecognitionMethod};

use crate::CliError;

/// Print one catalog entry as a short block.
pub(crate) fn print_entry(entry: &CatalogEntry) {
    let id = entry.identifier.as_deref().unwrap_or("-");
    log::info!(
        "  {} {} [{}]",
        id.if_supports_color(Stdout, |t| t.bold()),
        entry.title,
        entry
            .platform
            .short_name()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let method = match entry.recognition {
        RecognitionMethod::HeaderRead => {
            format!("{}", "header".if_supports_color(Stdout, |t| t.green()))
        }
        RecognitionMethod::FilenameFallback => {
            format!("{}", "filename".if_supports_color(Stdout, |t| t.yellow()))
        }
    };
    let subtype = entry
        .platform_subtype
        .as_deref()
        .map(|s| format!(" ({s})"))
        .unwrap_or_default();
    log::info!(
        "    {} {}{}  {} {}  {} {}",
        "Format:".if_supports_color(Stdout, |t| t.dimmed()),
        entry.format,
        subtype,
        "Size:".if_supports_color(Stdout, |t| t.dimmed()),
        format_bytes_approx(entry.size_bytes),
        "ID from:".if_supports_color(Stdout, |t| t.dimmed()),
        method,
    );
    log::info!(
        "    {} {}",
        "Path:".if_supports_color(Stdout, |t| t.dimmed()),
        entry.path.display(),
    );
    for part in &entry.parts {
        log::info!(
            "      + {} ({})",
            file_name_string(&part.path),
            format_bytes_approx(part.size_bytes),
        );
    }
}

/// Write entries to stdout as pretty JSON.
pub(crate) fn print_json(entries: &[CatalogEntry]) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}
