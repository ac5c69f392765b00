use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uwx_nintendo::describe_title;

use crate::CliError;

/// Print the title ID, content type and grouping keys of a title.tmd.
pub(crate) fn run_tmd(path: &Path) -> Result<(), CliError> {
    let descriptor = describe_title(path)?;

    log::info!("  {}:", path.display().if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "    {} {}",
        "Title ID:".if_supports_color(Stdout, |t| t.cyan()),
        descriptor.title_id,
    );
    log::info!(
        "    {} {}",
        "Content:".if_supports_color(Stdout, |t| t.cyan()),
        descriptor.content_type,
    );
    log::info!(
        "    {} {}",
        "Group key:".if_supports_color(Stdout, |t| t.cyan()),
        descriptor.group_key,
    );
    log::info!(
        "    {} {}",
        "Base title:".if_supports_color(Stdout, |t| t.cyan()),
        descriptor.base_title_id,
    );
    Ok(())
}
