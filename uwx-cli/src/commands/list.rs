use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use uwx_lib::IdentifierDispatcher;

pub(crate) fn run_list() {
    log::info!("Supported platforms:");
    log::info!("");

    let dispatcher = IdentifierDispatcher::standard();
    let mut current_manufacturer = "";

    for info in dispatcher.infos() {
        if info.manufacturer != current_manufacturer {
            if !current_manufacturer.is_empty() {
                log::info!("");
            }
            current_manufacturer = info.manufacturer;
            log::info!(
                "{}:",
                current_manufacturer.if_supports_color(Stdout, |t| t.bold()),
            );
        }

        log::info!(
            "  {} [{}]",
            info.short_name.if_supports_color(Stdout, |t| t.bold()),
            info.platform_name.if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    Extensions: {}", info.extensions.join(", "));
        log::info!("    Aliases: {}", info.platform.aliases().join(", "));
        log::info!("    ID shape: {}", info.platform.identifier_shape());
    }
}
