use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uwx_lib::settings::load_settings_string;
use uwx_lib::{ScanConfig, settings_path};

use crate::CliError;

/// Show the effective scan settings and where they come from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let config = ScanConfig::load()?;

    log::info!(
        "{}",
        "Scan Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let platforms: Vec<&str> = config.platforms.iter().map(|p| p.short_name()).collect();
    log::info!("  platforms:    {}", platforms.join(", "));
    log::info!("  recursive:    {}", config.recursive);
    log::info!("  parallel:     {}", config.parallel);
    match &config.library_root {
        Some(root) => log::info!("  library_root: {}", root.display()),
        None => log::info!(
            "  library_root: {}",
            "(not set)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    if let Some(raw) = load_settings_string() {
        log::debug!("Raw settings:\n{raw}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Remember `dir` as the library root.
pub(crate) fn run_config_set_root(dir: &Path) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(uwx_lib::ScanError::NotADirectory(dir.to_path_buf()).into());
    }
    let root = dir.canonicalize()?;
    let mut config = ScanConfig::load()?;
    config.library_root = Some(root.clone());
    config.save()?;
    log::info!(
        "{} Library root set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Forget the saved library root.
pub(crate) fn run_config_clear_root() -> Result<(), CliError> {
    let mut config = ScanConfig::load()?;
    if config.library_root.take().is_none() {
        log::info!("No library root was set");
        return Ok(());
    }
    config.save()?;
    log::info!(
        "{} Library root cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
