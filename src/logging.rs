use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize the terminal logger. Result lines go to stdout via
/// `println!`; the logger only carries diagnostics.
pub fn initialize() {
    let config = build_config();

    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Warn,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
