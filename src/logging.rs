use colored::control::set_override;
use env_logger::Builder;
use log::LevelFilter;

pub fn init_logging(verbose: bool, no_color: bool) {
    // Disable colors globally if requested
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
